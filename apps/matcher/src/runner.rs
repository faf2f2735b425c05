//! Command runners: read requests, drive the scorer, return serializable results.
//!
//! Batch scoring fans out onto tokio's blocking pool. The scorer is CPU-bound and
//! has no suspension points, so each request runs inside `spawn_blocking`, bounded
//! by a semaphore sized from `Config::max_concurrency`.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tokio::io::AsyncReadExt;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, Span};

use crate::errors::AppError;
use crate::matching::ranking::{rank_candidates, RankedCandidate};
use crate::models::report::MatchReport;
use crate::models::request::{MatchRequest, RankRequest};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub id: String,
    pub report: MatchReport,
}

/// Reads a whole request body from `path`, or from stdin when `path` is `None` or `-`.
pub async fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    let body = match path {
        Some(p) if p != Path::new("-") => tokio::fs::read_to_string(p).await?,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    if body.trim().is_empty() {
        return Err(AppError::Validation("input is empty".to_string()));
    }
    Ok(body)
}

pub fn score_one(state: &AppState, request: &MatchRequest) -> MatchReport {
    let options = state.options_for(request.options.as_ref());
    let report = state
        .scorer
        .score(&request.attributes, &request.requirements, &options);
    info!(
        percentage = report.percentage,
        exact = report.matches.exact.len(),
        partial = report.matches.partial.len(),
        missing = report.matches.missing.len(),
        "request scored"
    );
    report
}

pub fn rank(state: &AppState, request: &RankRequest) -> Vec<RankedCandidate> {
    let options = state.options_for(request.options.as_ref());
    rank_candidates(state.scorer.as_ref(), request, &options)
}

/// Scores independent requests concurrently. Results come back in input order;
/// requests without an `id` are labelled by their 1-based position.
pub async fn run_batch(
    state: &AppState,
    requests: Vec<MatchRequest>,
) -> Result<Vec<BatchOutcome>, AppError> {
    let total = requests.len();
    let semaphore = Arc::new(Semaphore::new(state.config.max_concurrency));
    let mut tasks = JoinSet::new();

    for (index, request) in requests.into_iter().enumerate() {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .map_err(|e| AppError::Internal(e.into()))?;
        let scorer = Arc::clone(&state.scorer);
        let options = state.options_for(request.options.as_ref());
        // Blocking-pool threads start outside the caller's span
        let span = Span::current();

        tasks.spawn_blocking(move || {
            span.in_scope(|| {
                let _permit = permit;
                let id = request.id.unwrap_or_else(|| (index + 1).to_string());
                debug!(%id, "batch request started");
                let report = scorer.score(&request.attributes, &request.requirements, &options);
                (index, BatchOutcome { id, report })
            })
        });
    }

    let mut slots: Vec<Option<BatchOutcome>> = vec![None; total];
    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = joined?;
        slots[index] = Some(outcome);
    }

    info!(requests = total, "batch scored");
    Ok(slots.into_iter().flatten().collect())
}
