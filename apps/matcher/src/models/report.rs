use serde::{Deserialize, Serialize};

use crate::models::profile::{Attribute, Category, Impact, Priority, Requirement};

/// Outcome of matching one requirement against the candidate attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Partial,
    Missing,
}

/// One requirement tagged with its outcome.
///
/// `weight` is the base weight the requirement could contribute. `score` is
/// `None` for missing records; `impact` is only set for missing records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub requirement: Requirement,
    pub kind: MatchKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
}

impl MatchRecord {
    pub fn category(&self) -> &Category {
        &self.requirement.category
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBuckets {
    pub exact: Vec<MatchRecord>,
    pub partial: Vec<MatchRecord>,
    pub missing: Vec<MatchRecord>,
}

impl MatchBuckets {
    /// Matched records (exact then partial) followed by missing ones.
    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> {
        self.exact
            .iter()
            .chain(self.partial.iter())
            .chain(self.missing.iter())
    }
}

/// Per-category rollup of matched vs total requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub matched: usize,
    pub total: usize,
    pub percentage: u32, // round(matched / total * 100)
    pub score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    CriticalGap,
    HighPriorityGap,
    Enhancement,
    Complementary,
}

/// A single line inside a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum RecommendationItem {
    /// An uncovered requirement.
    Requirement {
        name: String,
        category: Category,
        priority: Priority,
    },
    /// A partially matched requirement and the attribute currently standing in for it.
    Upgrade {
        current: String,
        target: String,
        category: Category,
    },
    /// An attribute commonly paired with one the candidate already holds.
    Suggestion { name: String, because: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub items: Vec<RecommendationItem>,
    /// Sort key, 1 = most urgent.
    pub priority: u8,
}

/// Coarse label for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLevel {
    Strong,
    Moderate,
    Weak,
    None,
}

impl FitLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            FitLevel::Strong
        } else if percentage >= 60.0 {
            FitLevel::Moderate
        } else if percentage > 0.0 {
            FitLevel::Weak
        } else {
            FitLevel::None
        }
    }
}

/// Full result of one scoring invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: f64,
    pub max_score: f64,
    /// `raw_percentage` clamped to 0–100.
    pub percentage: f64,
    /// `score / max_score * 100` rounded to two decimals. Bonuses for level
    /// and verification can push this above 100.
    pub raw_percentage: f64,
    pub fit_level: FitLevel,
    pub matches: MatchBuckets,
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub recommendations: Vec<Recommendation>,
    pub passes_minimum: bool,
    pub scorer_backend: String, // "weighted"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_level_thresholds() {
        assert_eq!(FitLevel::from_percentage(100.0), FitLevel::Strong);
        assert_eq!(FitLevel::from_percentage(80.0), FitLevel::Strong);
        assert_eq!(FitLevel::from_percentage(79.99), FitLevel::Moderate);
        assert_eq!(FitLevel::from_percentage(60.0), FitLevel::Moderate);
        assert_eq!(FitLevel::from_percentage(12.5), FitLevel::Weak);
        assert_eq!(FitLevel::from_percentage(0.0), FitLevel::None);
    }

    #[test]
    fn test_recommendation_serializes_kind_as_type() {
        let rec = Recommendation {
            kind: RecommendationKind::CriticalGap,
            title: "t".to_string(),
            description: "d".to_string(),
            items: vec![RecommendationItem::Suggestion {
                name: "docker".to_string(),
                because: "aws".to_string(),
            }],
            priority: 1,
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "critical_gap");
        assert_eq!(value["items"][0]["item"], "suggestion");
        assert_eq!(value["items"][0]["name"], "docker");
    }
}
