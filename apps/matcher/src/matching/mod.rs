// Weighted matching engine.
// Pipeline: normalize -> match per requirement -> category breakdown + recommendations.
// Everything here is pure and synchronous; the registry and suggestion table are read-only.

pub mod breakdown;
pub mod complementary;
pub mod engine;
pub mod normalize;
pub mod ranking;
pub mod recommend;

pub use engine::{FitScorer, WeightedFitScorer};
