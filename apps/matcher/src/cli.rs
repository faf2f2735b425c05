use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Command-line interface for the `matcher` binary.
#[derive(Debug, Parser)]
#[command(
    name = "matcher",
    version,
    about = "Weighted skill matching and ranking engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Percentage a report must reach to pass (overrides `MATCHER_MINIMUM_SCORE`).
    #[arg(long, global = true, value_name = "PERCENT")]
    pub minimum_score: Option<f64>,

    /// Ignore category and subcategory weights.
    #[arg(long, global = true, default_value_t = false)]
    pub no_taxonomy: bool,

    /// Only count exact matches.
    #[arg(long, global = true, default_value_t = false)]
    pub no_partial: bool,

    /// Upper bound on concurrently scored batch requests (overrides `MATCHER_MAX_CONCURRENCY`).
    #[arg(long, global = true, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Print single-line JSON instead of pretty-printed output.
    #[arg(long, global = true, default_value_t = false)]
    pub compact: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scores one candidate against one requirement set.
    Score {
        /// Request file (`{attributes, requirements, options?}`); stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Scores many candidates against one requirement set and ranks them.
    Rank {
        /// Request file (`{requirements, candidates, options?, only_passing?}`).
        /// Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Scores an array of independent requests concurrently.
    Batch {
        /// File holding a JSON array of score requests; stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Prints the inferred taxonomy category for each name.
    Categorize {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Prints the built-in taxonomy registry.
    Taxonomy,
}

impl Cli {
    /// Folds command-line overrides into the environment-derived config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(minimum_score) = self.minimum_score {
            config.minimum_score = minimum_score;
        }
        if self.no_taxonomy {
            config.use_taxonomy = false;
        }
        if self.no_partial {
            config.include_partial_matches = false;
        }
        if let Some(max_concurrency) = self.max_concurrency {
            config.max_concurrency = max_concurrency.max(1);
        }
    }
}
