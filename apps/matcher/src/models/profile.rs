use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Taxonomy category of an attribute or requirement.
///
/// Keys outside the built-in set are kept as `Other` so they round-trip and
/// fall back to a neutral weight instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Technical,
    Soft,
    Domain,
    Certification,
    Other(String),
}

impl Category {
    pub fn parse(raw: &str) -> Self {
        let key = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "technical" | "tech" => Category::Technical,
            "soft" | "soft_skills" | "soft_skill" => Category::Soft,
            "domain" | "industry" => Category::Domain,
            "certification" | "certifications" | "cert" => Category::Certification,
            _ => Category::Other(key),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Technical => "technical",
            Category::Soft => "soft",
            Category::Domain => "domain",
            Category::Certification => "certification",
            Category::Other(key) => key,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::parse(&raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proficiency level held by a candidate, lowest first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Basic,
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl Level {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "basic" => Some(Level::Basic),
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            "expert" => Some(Level::Expert),
            _ => None,
        }
    }

    /// Share of the base weight an exact match at this level earns.
    pub fn multiplier(self) -> f64 {
        match self {
            Level::Expert => 1.0,
            Level::Advanced => 0.9,
            Level::Intermediate => 0.8,
            Level::Beginner => 0.6,
            Level::Basic => 0.5,
        }
    }
}

/// How strongly a job expects a requirement, lowest first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    NiceToHave,
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "nice-to-have" | "nicetohave" | "optional" => Some(Priority::NiceToHave),
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Priority::Critical => 1.5,
            Priority::High => 1.2,
            Priority::Medium => 1.0,
            Priority::Low => 0.8,
            Priority::NiceToHave => 0.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::NiceToHave => "nice-to-have",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// Severity of a requirement nobody on the candidate side covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Critical,
    Moderate,
}

/// A capability the candidate holds, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub level: Level,
    pub verified: bool,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

/// A capability the job expects, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub priority: Priority,
    pub required: bool,
    pub weight: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Raw inputs, as collected from upstream forms
// ────────────────────────────────────────────────────────────────────────────

/// Partially specified attribute. Unset fields are filled by the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeRecord {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub level: Option<Level>,
    pub verified: Option<bool>,
    pub weight: Option<f64>,
    pub source: Option<String>,
    pub added_at: Option<DateTime<Utc>>,
}

/// Partially specified requirement. Unset fields are filled by the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementRecord {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub priority: Option<Priority>,
    pub required: Option<bool>,
    pub weight: Option<f64>,
}

/// Either a bare attribute name or a structured record.
///
/// Deserialization never fails: any JSON value is accepted and shapes that
/// make no sense degrade to an empty record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum AttributeInput {
    Name(String),
    Full(AttributeRecord),
}

/// Either a bare requirement name or a structured record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RequirementInput {
    Name(String),
    Full(RequirementRecord),
}

impl From<&str> for AttributeInput {
    fn from(name: &str) -> Self {
        AttributeInput::Name(name.to_string())
    }
}

impl From<AttributeRecord> for AttributeInput {
    fn from(record: AttributeRecord) -> Self {
        AttributeInput::Full(record)
    }
}

impl From<&str> for RequirementInput {
    fn from(name: &str) -> Self {
        RequirementInput::Name(name.to_string())
    }
}

impl From<RequirementRecord> for RequirementInput {
    fn from(record: RequirementRecord) -> Self {
        RequirementInput::Full(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_known_and_aliases() {
        assert_eq!(Category::parse("Technical"), Category::Technical);
        assert_eq!(Category::parse("soft skills"), Category::Soft);
        assert_eq!(Category::parse("certifications"), Category::Certification);
        assert_eq!(
            Category::parse("Language"),
            Category::Other("language".to_string())
        );
    }

    #[test]
    fn test_category_serde_is_plain_string() {
        let json = serde_json::to_string(&Category::Domain).unwrap();
        assert_eq!(json, r#""domain""#);
        let back: Category = serde_json::from_str(r#""SOFT""#).unwrap();
        assert_eq!(back, Category::Soft);
    }

    #[test]
    fn test_priority_multipliers_are_monotonic() {
        let ordered = [
            Priority::NiceToHave,
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_priority_parse_spellings() {
        assert_eq!(Priority::parse("nice-to-have"), Some(Priority::NiceToHave));
        assert_eq!(Priority::parse("Nice_To_Have"), Some(Priority::NiceToHave));
        assert_eq!(Priority::parse("nice to have"), Some(Priority::NiceToHave));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_priority_serde_kebab_case() {
        let json = serde_json::to_string(&Priority::NiceToHave).unwrap();
        assert_eq!(json, r#""nice-to-have""#);
    }

    #[test]
    fn test_level_multipliers() {
        assert_eq!(Level::Expert.multiplier(), 1.0);
        assert_eq!(Level::Advanced.multiplier(), 0.9);
        assert_eq!(Level::Intermediate.multiplier(), 0.8);
        assert_eq!(Level::Beginner.multiplier(), 0.6);
        assert_eq!(Level::Basic.multiplier(), 0.5);
        assert_eq!(Level::default(), Level::Intermediate);
    }

    #[test]
    fn test_level_parse_unknown_is_none() {
        assert_eq!(Level::parse(" EXPERT "), Some(Level::Expert));
        assert_eq!(Level::parse("guru"), None);
    }
}
