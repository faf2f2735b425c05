//! Weighted multi-factor matching of candidate attributes against job requirements.
//!
//! The engine (`matching`) is a pure function of its inputs. Everything around it
//! (config, CLI, runner) only feeds requests in and serializes reports out.

pub mod cli;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod runner;
pub mod state;
pub mod taxonomy;

pub use matching::{FitScorer, WeightedFitScorer};
pub use models::report::MatchReport;
pub use models::request::MatchOptions;
pub use taxonomy::Taxonomy;
