use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::profile::{AttributeInput, Category, RequirementInput};

/// Knobs for one scoring invocation.
///
/// Accepts both snake_case keys and the camelCase keys older form payloads use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// When false, category and subcategory weights collapse to 1.0.
    #[serde(alias = "useTaxonomy")]
    pub use_taxonomy: bool,
    #[serde(alias = "includePartialMatches")]
    pub include_partial_matches: bool,
    /// Replaces the registry's category weight. Ignored when `use_taxonomy` is false.
    #[serde(alias = "categoryWeightOverrides")]
    pub category_weight_overrides: BTreeMap<Category, f64>,
    /// Percentage a report must reach for `passes_minimum`.
    #[serde(alias = "minimumScore")]
    pub minimum_score: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            use_taxonomy: true,
            include_partial_matches: true,
            category_weight_overrides: BTreeMap::new(),
            minimum_score: 0.0,
        }
    }
}

/// One candidate scored against one requirement set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeInput>,
    #[serde(default)]
    pub requirements: Vec<RequirementInput>,
    #[serde(default)]
    pub options: Option<MatchOptions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub attributes: Vec<AttributeInput>,
}

/// Many candidates scored against one requirement set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub requirements: Vec<RequirementInput>,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default)]
    pub options: Option<MatchOptions>,
    #[serde(default, alias = "onlyPassing")]
    pub only_passing: bool,
}
