//! Category aggregator — rolls match records up into per-category statistics.

use crate::models::report::{CategoryBreakdown, MatchBuckets, MatchKind};
use crate::taxonomy::Taxonomy;

/// One breakdown per registry category that has at least one requirement,
/// in registry order. Records in categories the registry does not know are skipped.
pub fn category_breakdown(matches: &MatchBuckets, taxonomy: &Taxonomy) -> Vec<CategoryBreakdown> {
    taxonomy
        .categories()
        .iter()
        .filter_map(|def| {
            let mut breakdown = CategoryBreakdown {
                category: def.category.clone(),
                matched: 0,
                total: 0,
                percentage: 0,
                score: 0.0,
                max_score: 0.0,
            };

            for record in matches.iter().filter(|r| r.category() == &def.category) {
                breakdown.total += 1;
                breakdown.max_score += record.weight;
                if record.kind != MatchKind::Missing {
                    breakdown.matched += 1;
                    breakdown.score += record.score.unwrap_or(0.0);
                }
            }

            if breakdown.total == 0 {
                return None;
            }
            breakdown.percentage =
                ((breakdown.matched as f64 / breakdown.total as f64) * 100.0).round() as u32;
            Some(breakdown)
        })
        .collect()
}
