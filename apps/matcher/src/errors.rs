use serde_json::{json, Value};
use thiserror::Error;

/// Application-level error type.
///
/// The scoring engine itself never fails; these cover reading requests,
/// decoding them and driving the concurrent runner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scoring task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "INVALID_JSON",
            AppError::Join(_) => "TASK_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit status: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::Json(_) => 2,
            AppError::Io(_) | AppError::Join(_) | AppError::Internal(_) => 1,
        }
    }

    /// Logs the error and renders the JSON body written to stderr.
    pub fn to_body(&self) -> Value {
        match self {
            AppError::Join(e) => tracing::error!("Scoring task failed: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            other => tracing::warn!("{other}"),
        }

        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_bad_input() {
        let err: AppError = serde_json::from_str::<Value>("{not json").unwrap_err().into();
        assert_eq!(err.code(), "INVALID_JSON");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_body_shape() {
        let body = AppError::Validation("empty input".to_string()).to_body();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Validation error: empty input");
    }

    #[test]
    fn test_internal_wraps_anyhow() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("boom"));
    }
}
