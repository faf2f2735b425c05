//! Recommendation generator — turns gaps and partial matches into ordered, actionable advice.

use crate::matching::complementary::suggest_complementary;
use crate::models::profile::{Attribute, Impact, Priority};
use crate::models::report::{
    MatchBuckets, MatchRecord, Recommendation, RecommendationItem, RecommendationKind,
};

pub const CRITICAL_GAP_PRIORITY: u8 = 1;
pub const HIGH_GAP_PRIORITY: u8 = 2;
pub const ENHANCEMENT_PRIORITY: u8 = 3;
pub const COMPLEMENTARY_PRIORITY: u8 = 4;

/// Builds recommendations for one scoring run, most urgent first.
///
/// A missing requirement that is both `high` priority and `required` shows up
/// under the critical gap and the high-priority gap.
pub fn generate_recommendations(
    matches: &MatchBuckets,
    attributes: &[Attribute],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let critical: Vec<&MatchRecord> = matches
        .missing
        .iter()
        .filter(|r| {
            r.requirement.priority == Priority::Critical || r.impact == Some(Impact::Critical)
        })
        .collect();
    if !critical.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::CriticalGap,
            title: "Critical requirements missing".to_string(),
            description: format!(
                "{} critical requirement(s) are not covered: {}. These are likely deal-breakers.",
                critical.len(),
                join_names(&critical)
            ),
            items: critical.iter().map(|r| requirement_item(r)).collect(),
            priority: CRITICAL_GAP_PRIORITY,
        });
    }

    let high: Vec<&MatchRecord> = matches
        .missing
        .iter()
        .filter(|r| r.requirement.priority == Priority::High)
        .collect();
    if !high.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::HighPriorityGap,
            title: "High-priority requirements missing".to_string(),
            description: format!(
                "Adding {} would noticeably improve the match.",
                join_names(&high)
            ),
            items: high.iter().map(|r| requirement_item(r)).collect(),
            priority: HIGH_GAP_PRIORITY,
        });
    }

    if !matches.partial.is_empty() {
        let items: Vec<RecommendationItem> = matches
            .partial
            .iter()
            .filter_map(|r| {
                r.matched.as_ref().map(|attr| RecommendationItem::Upgrade {
                    current: attr.name.clone(),
                    target: r.requirement.name.clone(),
                    category: r.requirement.category.clone(),
                })
            })
            .collect();
        recommendations.push(Recommendation {
            kind: RecommendationKind::Enhancement,
            title: "Strengthen related skills".to_string(),
            description: format!(
                "{} requirement(s) are only partially covered by related skills. \
                 Building the exact skill turns these into full matches.",
                items.len()
            ),
            items,
            priority: ENHANCEMENT_PRIORITY,
        });
    }

    let suggestions = suggest_complementary(attributes.iter().map(|a| a.name.as_str()));
    if !suggestions.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Complementary,
            title: "Complementary skills".to_string(),
            description: "Skills commonly paired with ones already held.".to_string(),
            items: suggestions
                .into_iter()
                .map(|s| RecommendationItem::Suggestion {
                    name: s.name.to_string(),
                    because: s.because.to_string(),
                })
                .collect(),
            priority: COMPLEMENTARY_PRIORITY,
        });
    }

    // Stable: buckets with equal priority keep insertion order.
    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

fn requirement_item(record: &MatchRecord) -> RecommendationItem {
    RecommendationItem::Requirement {
        name: record.requirement.name.clone(),
        category: record.requirement.category.clone(),
        priority: record.requirement.priority,
    }
}

fn join_names(records: &[&MatchRecord]) -> String {
    records
        .iter()
        .map(|r| r.requirement.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Category, Level, Requirement};
    use crate::models::report::MatchKind;

    fn make_requirement(name: &str, priority: Priority, required: bool) -> Requirement {
        Requirement {
            name: name.to_string(),
            category: Category::Technical,
            subcategory: "general".to_string(),
            priority,
            required,
            weight: 1.0,
        }
    }

    fn make_attribute(name: &str) -> Attribute {
        Attribute {
            name: name.to_string(),
            category: Category::Technical,
            subcategory: "programming".to_string(),
            level: Level::Intermediate,
            verified: false,
            weight: 1.0,
            source: None,
            added_at: None,
        }
    }

    fn make_missing(name: &str, priority: Priority, required: bool) -> MatchRecord {
        MatchRecord {
            requirement: make_requirement(name, priority, required),
            kind: MatchKind::Missing,
            matched: None,
            score: None,
            weight: priority.multiplier(),
            impact: Some(if required {
                Impact::Critical
            } else {
                Impact::Moderate
            }),
        }
    }

    fn make_partial(target: &str, current: &str) -> MatchRecord {
        MatchRecord {
            requirement: make_requirement(target, Priority::Medium, false),
            kind: MatchKind::Partial,
            matched: Some(make_attribute(current)),
            score: Some(0.6),
            weight: 1.0,
            impact: None,
        }
    }

    fn names(items: &[RecommendationItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                RecommendationItem::Requirement { name, .. } => name.clone(),
                RecommendationItem::Upgrade { target, .. } => target.clone(),
                RecommendationItem::Suggestion { name, .. } => name.clone(),
            })
            .collect()
    }

    #[test]
    fn test_no_gaps_no_recommendations() {
        assert!(generate_recommendations(&MatchBuckets::default(), &[]).is_empty());
    }

    #[test]
    fn test_critical_gap_from_priority_or_required() {
        let buckets = MatchBuckets {
            missing: vec![
                make_missing("Rust", Priority::Critical, false),
                make_missing("SQL", Priority::Low, true),
                make_missing("Kafka", Priority::Medium, false),
            ],
            ..MatchBuckets::default()
        };
        let recs = generate_recommendations(&buckets, &[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::CriticalGap);
        assert_eq!(recs[0].priority, 1);
        assert_eq!(names(&recs[0].items), vec!["Rust", "SQL"]);
        assert!(recs[0].description.contains("Rust, SQL"));
    }

    #[test]
    fn test_high_priority_gap() {
        let buckets = MatchBuckets {
            missing: vec![make_missing("Kubernetes", Priority::High, false)],
            ..MatchBuckets::default()
        };
        let recs = generate_recommendations(&buckets, &[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::HighPriorityGap);
        assert_eq!(recs[0].priority, 2);
        assert_eq!(names(&recs[0].items), vec!["Kubernetes"]);
    }

    #[test]
    fn test_required_high_gap_listed_in_both() {
        let buckets = MatchBuckets {
            missing: vec![make_missing("Kubernetes", Priority::High, true)],
            ..MatchBuckets::default()
        };
        let recs = generate_recommendations(&buckets, &[]);
        let kinds: Vec<_> = recs.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationKind::CriticalGap,
                RecommendationKind::HighPriorityGap
            ]
        );
    }

    #[test]
    fn test_enhancement_pairs_current_and_target() {
        let buckets = MatchBuckets {
            partial: vec![make_partial("Docker", "Docker Compose")],
            ..MatchBuckets::default()
        };
        let recs = generate_recommendations(&buckets, &[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::Enhancement);
        assert_eq!(recs[0].priority, 3);
        assert_eq!(
            recs[0].items[0],
            RecommendationItem::Upgrade {
                current: "Docker Compose".to_string(),
                target: "Docker".to_string(),
                category: Category::Technical,
            }
        );
    }

    #[test]
    fn test_complementary_suggestions_from_attributes() {
        let recs = generate_recommendations(&MatchBuckets::default(), &[make_attribute("AWS")]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::Complementary);
        assert_eq!(recs[0].priority, 4);
        assert_eq!(
            names(&recs[0].items),
            vec!["docker", "kubernetes", "terraform"]
        );
    }

    #[test]
    fn test_recommendations_sorted_by_priority() {
        let buckets = MatchBuckets {
            partial: vec![make_partial("Docker", "Docker Compose")],
            missing: vec![
                make_missing("Kubernetes", Priority::High, false),
                make_missing("Rust", Priority::Critical, false),
            ],
            ..MatchBuckets::default()
        };
        let recs = generate_recommendations(&buckets, &[make_attribute("aws")]);
        let priorities: Vec<u8> = recs.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4]);
    }
}
