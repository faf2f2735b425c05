use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::models::request::MatchOptions;

/// Runtime configuration loaded from environment variables (and `.env` if present).
/// Every variable is optional; malformed values are startup errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub minimum_score: f64,
    pub use_taxonomy: bool,
    pub include_partial_matches: bool,
    pub max_concurrency: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimum_score: 0.0,
            use_taxonomy: true,
            include_partial_matches: true,
            max_concurrency: 4,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let config = Config {
            minimum_score: parse_var(&lookup, "MATCHER_MINIMUM_SCORE", defaults.minimum_score)?,
            use_taxonomy: parse_bool(&lookup, "MATCHER_USE_TAXONOMY", defaults.use_taxonomy)?,
            include_partial_matches: parse_bool(
                &lookup,
                "MATCHER_INCLUDE_PARTIAL",
                defaults.include_partial_matches,
            )?,
            max_concurrency: parse_var(
                &lookup,
                "MATCHER_MAX_CONCURRENCY",
                defaults.max_concurrency,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        };

        if !config.minimum_score.is_finite() {
            bail!("MATCHER_MINIMUM_SCORE must be a finite number");
        }
        if config.max_concurrency == 0 {
            bail!("MATCHER_MAX_CONCURRENCY must be at least 1");
        }
        Ok(config)
    }

    /// Options applied to requests that do not carry their own.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            use_taxonomy: self.use_taxonomy,
            include_partial_matches: self.include_partial_matches,
            minimum_score: self.minimum_score,
            ..MatchOptions::default()
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> Result<bool> {
    match lookup(key) {
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => bail!("{key} must be a boolean, got '{raw}'"),
        },
        None => Ok(default),
    }
}
