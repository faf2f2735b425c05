//! Auto-categorization rules for attribute names that arrive without a category.
//!
//! Rules are plain data: an ordered list of `(pattern, category)` pairs. The
//! first rule whose pattern matches wins. Built-in order is
//! technical → soft → domain → certification.

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::models::profile::Category;

const TECHNICAL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "go",
    "golang",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "c",
    "c++",
    "c#",
    "sql",
    "html",
    "css",
    "bash",
    "react",
    "angular",
    "vue",
    "svelte",
    "node.js",
    "node",
    "django",
    "flask",
    "spring",
    "rails",
    ".net",
    "docker",
    "kubernetes",
    "k8s",
    "terraform",
    "ansible",
    "aws",
    "azure",
    "gcp",
    "linux",
    "git",
    "postgresql",
    "postgres",
    "mysql",
    "mongodb",
    "redis",
    "kafka",
    "graphql",
    "api",
    "rest",
    "microservices",
    "devops",
    "ci/cd",
    "frontend",
    "backend",
    "full stack",
    "fullstack",
    "database",
    "cloud",
    "programming",
    "software",
    "machine learning",
    "data science",
    "tensorflow",
    "pytorch",
];

const SOFT_KEYWORDS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "team work",
    "collaboration",
    "problem solving",
    "problem-solving",
    "critical thinking",
    "time management",
    "mentoring",
    "mentorship",
    "adaptability",
    "creativity",
    "negotiation",
    "presentation",
    "public speaking",
    "empathy",
    "stakeholder management",
];

const DOMAIN_KEYWORDS: &[&str] = &[
    "finance",
    "fintech",
    "banking",
    "healthcare",
    "medical",
    "ecommerce",
    "e-commerce",
    "retail",
    "education",
    "edtech",
    "insurance",
    "logistics",
    "legal",
    "marketing",
    "accounting",
    "compliance",
    "real estate",
    "manufacturing",
];

const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "certificate",
    "pmp",
    "cissp",
    "cisa",
    "cism",
    "ccna",
    "ccnp",
    "comptia",
    "itil",
    "scrum master",
    "csm",
    "prince2",
    "oscp",
    "cka",
    "ckad",
];

/// One categorization rule.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRule {
    #[serde(serialize_with = "serialize_regex")]
    pub pattern: Regex,
    pub category: Category,
}

impl CategoryRule {
    pub fn new(pattern: &str, category: Category) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            category,
        })
    }

    /// Rule matching any of `keywords` as a whole token, case-insensitively.
    pub fn keywords(keywords: &[&str], category: Category) -> Result<Self, regex::Error> {
        Self::new(&keyword_pattern(keywords), category)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

fn serialize_regex<S: Serializer>(pattern: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(pattern.as_str())
}

/// Builds a case-insensitive alternation anchored on token edges.
///
/// `\b` does not fire next to `+`, `#` or `.`, so edges are spelled out as
/// start/end of input or a character that cannot be part of a skill token.
pub fn keyword_pattern(keywords: &[&str]) -> String {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)(?:^|[^a-z0-9+#.])(?:{alternation})(?:$|[^a-z0-9+#])")
}

/// Built-in rule list, in evaluation order.
pub fn builtin_rules() -> Result<Vec<CategoryRule>, regex::Error> {
    Ok(vec![
        CategoryRule::keywords(TECHNICAL_KEYWORDS, Category::Technical)?,
        CategoryRule::keywords(SOFT_KEYWORDS, Category::Soft)?,
        CategoryRule::keywords(DOMAIN_KEYWORDS, Category::Domain)?,
        CategoryRule::keywords(CERTIFICATION_KEYWORDS, Category::Certification)?,
    ])
}

/// First matching rule's category, or `Technical` when nothing matches.
pub fn categorize_with(rules: &[CategoryRule], name: &str) -> Category {
    rules
        .iter()
        .find(|rule| rule.matches(name))
        .map(|rule| rule.category.clone())
        .unwrap_or(Category::Technical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<CategoryRule> {
        builtin_rules().unwrap()
    }

    #[test]
    fn test_keyword_match_is_token_based() {
        let rule = CategoryRule::keywords(&["go"], Category::Technical).unwrap();
        assert!(rule.matches("Go"));
        assert!(rule.matches("golang and go"));
        assert!(!rule.matches("google"));
        assert!(!rule.matches("mongo"));
    }

    #[test]
    fn test_symbol_keywords_match() {
        let rule = CategoryRule::keywords(&["c++", "c#", "node.js"], Category::Technical).unwrap();
        assert!(rule.matches("C++"));
        assert!(rule.matches("modern c++ development"));
        assert!(rule.matches("C#"));
        assert!(rule.matches("Node.js"));
        assert!(!rule.matches("c"));
    }

    #[test]
    fn test_builtin_categories() {
        let rules = rules();
        assert_eq!(categorize_with(&rules, "Python"), Category::Technical);
        assert_eq!(categorize_with(&rules, "Public Speaking"), Category::Soft);
        assert_eq!(categorize_with(&rules, "Healthcare"), Category::Domain);
        assert_eq!(categorize_with(&rules, "PMP"), Category::Certification);
    }

    #[test]
    fn test_first_rule_wins() {
        // Technical rules run before certification rules.
        let rules = rules();
        assert_eq!(
            categorize_with(&rules, "AWS Certified Solutions Architect"),
            Category::Technical
        );
        assert_eq!(
            categorize_with(&rules, "Certified ScrumMaster"),
            Category::Certification
        );
    }

    #[test]
    fn test_unmatched_defaults_to_technical() {
        assert_eq!(categorize_with(&rules(), "Underwater basket weaving"), Category::Technical);
        assert_eq!(categorize_with(&[], "Leadership"), Category::Technical);
    }

    #[test]
    fn test_custom_rule_order_is_respected() {
        let custom = vec![
            CategoryRule::new(r"(?i)lead", Category::Soft).unwrap(),
            CategoryRule::new(r"(?i)lead", Category::Domain).unwrap(),
        ];
        assert_eq!(categorize_with(&custom, "Team Lead"), Category::Soft);
    }
}
