//! Matching engine — pluggable, trait-based scorer that measures candidate attributes
//! against weighted job requirements.
//!
//! Default (and only) backend: `WeightedFitScorer`, a deterministic rule-based scorer.
//! Callers hold it as `Arc<dyn FitScorer>` so a different backend can be swapped in
//! without touching the runner or the CLI.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::matching::breakdown::category_breakdown;
use crate::matching::normalize::{normalize_attributes, normalize_requirements};
use crate::matching::recommend::generate_recommendations;
use crate::models::profile::{Attribute, AttributeInput, Impact, Requirement, RequirementInput};
use crate::models::report::{FitLevel, MatchBuckets, MatchKind, MatchRecord, MatchReport};
use crate::models::request::MatchOptions;
use crate::taxonomy::Taxonomy;

/// Share of the base weight a partial match earns.
pub const PARTIAL_MATCH_RATIO: f64 = 0.6;
/// Multiplier applied to exact matches on verified attributes.
pub const VERIFICATION_BONUS: f64 = 1.1;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Implementations must be pure: same input, same report.
pub trait FitScorer: Send + Sync {
    fn score(
        &self,
        attributes: &[AttributeInput],
        requirements: &[RequirementInput],
        options: &MatchOptions,
    ) -> MatchReport;

    /// Short label copied into `MatchReport::scorer_backend`.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedFitScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Rule-based scorer driven by a taxonomy registry.
///
/// Algorithm, per requirement in input order:
/// 1. base weight = weight × category weight × subcategory weight × priority multiplier
/// 2. exact name match (case-insensitive) → base × level multiplier × verification bonus
/// 3. otherwise substring or same (category, subcategory) → base × 0.6
/// 4. otherwise missing, impact by `required`
///
/// The first qualifying attribute in input order wins.
#[derive(Debug, Clone)]
pub struct WeightedFitScorer {
    taxonomy: Arc<Taxonomy>,
}

impl WeightedFitScorer {
    pub const BACKEND: &'static str = "weighted";

    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }
}

impl Default for WeightedFitScorer {
    fn default() -> Self {
        Self::new(Taxonomy::shared())
    }
}

impl FitScorer for WeightedFitScorer {
    fn score(
        &self,
        attributes: &[AttributeInput],
        requirements: &[RequirementInput],
        options: &MatchOptions,
    ) -> MatchReport {
        let attributes = normalize_attributes(attributes, &self.taxonomy);
        let requirements = normalize_requirements(requirements, &self.taxonomy);
        evaluate(&attributes, &requirements, options, &self.taxonomy)
    }

    fn backend(&self) -> &'static str {
        Self::BACKEND
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core weighted algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores already-normalized attributes against already-normalized requirements.
pub fn evaluate(
    attributes: &[Attribute],
    requirements: &[Requirement],
    options: &MatchOptions,
    taxonomy: &Taxonomy,
) -> MatchReport {
    // Lower-case once; order must match `attributes` for first-wins tie-breaking.
    let candidates: Vec<(String, &Attribute)> = attributes
        .iter()
        .map(|a| (a.name.to_lowercase(), a))
        .collect();

    let mut matches = MatchBuckets::default();
    let mut total_score = 0.0_f64;
    let mut max_score = 0.0_f64;

    for requirement in requirements {
        let weight = base_weight(requirement, options, taxonomy);
        max_score += weight;

        let record = match_requirement(requirement, weight, &candidates, options);
        total_score += record.score.unwrap_or(0.0);

        debug!(
            requirement = %requirement.name,
            kind = ?record.kind,
            score = record.score.unwrap_or(0.0),
            weight,
            "requirement evaluated"
        );

        match record.kind {
            MatchKind::Exact => matches.exact.push(record),
            MatchKind::Partial => matches.partial.push(record),
            MatchKind::Missing => matches.missing.push(record),
        }
    }

    let raw_percentage = if max_score > 0.0 {
        round2(total_score / max_score * 100.0)
    } else {
        0.0
    };
    let percentage = raw_percentage.clamp(0.0, 100.0);

    let category_breakdown = category_breakdown(&matches, taxonomy);
    let recommendations = generate_recommendations(&matches, attributes);

    debug!(
        exact = matches.exact.len(),
        partial = matches.partial.len(),
        missing = matches.missing.len(),
        percentage,
        "match evaluated"
    );

    MatchReport {
        score: total_score,
        max_score,
        percentage,
        raw_percentage,
        fit_level: FitLevel::from_percentage(percentage),
        passes_minimum: raw_percentage >= options.minimum_score,
        matches,
        category_breakdown,
        recommendations,
        scorer_backend: WeightedFitScorer::BACKEND.to_string(),
    }
}

/// The most a requirement can contribute before level and verification bonuses.
pub fn base_weight(requirement: &Requirement, options: &MatchOptions, taxonomy: &Taxonomy) -> f64 {
    let (category_weight, subcategory_weight) = if options.use_taxonomy {
        let category_weight = match options.category_weight_overrides.get(&requirement.category) {
            Some(w) if w.is_finite() && *w >= 0.0 => *w,
            invalid => {
                if let Some(w) = invalid {
                    warn!(
                        category = %requirement.category,
                        weight = *w,
                        "invalid category weight override, using taxonomy weight"
                    );
                }
                if taxonomy.category(&requirement.category).is_none() {
                    warn!(
                        category = %requirement.category,
                        "unknown category, using neutral weight"
                    );
                }
                taxonomy.category_weight(&requirement.category)
            }
        };
        (
            category_weight,
            taxonomy.subcategory_weight(&requirement.category, &requirement.subcategory),
        )
    } else {
        (1.0, 1.0)
    };

    requirement.weight * category_weight * subcategory_weight * requirement.priority.multiplier()
}

fn match_requirement(
    requirement: &Requirement,
    weight: f64,
    candidates: &[(String, &Attribute)],
    options: &MatchOptions,
) -> MatchRecord {
    let wanted = requirement.name.to_lowercase();

    if let Some((_, attr)) = candidates.iter().find(|(name, _)| *name == wanted) {
        let bonus = if attr.verified { VERIFICATION_BONUS } else { 1.0 };
        return MatchRecord {
            requirement: requirement.clone(),
            kind: MatchKind::Exact,
            matched: Some((*attr).clone()),
            score: Some(weight * attr.level.multiplier() * bonus),
            weight,
            impact: None,
        };
    }

    if options.include_partial_matches {
        let partial = candidates.iter().find(|(name, attr)| {
            name.contains(wanted.as_str())
                || wanted.contains(name.as_str())
                || (attr.category == requirement.category
                    && attr.subcategory == requirement.subcategory)
        });
        if let Some((_, attr)) = partial {
            return MatchRecord {
                requirement: requirement.clone(),
                kind: MatchKind::Partial,
                matched: Some((*attr).clone()),
                score: Some(weight * PARTIAL_MATCH_RATIO),
                weight,
                impact: None,
            };
        }
    }

    MatchRecord {
        requirement: requirement.clone(),
        kind: MatchKind::Missing,
        matched: None,
        score: None,
        weight,
        impact: Some(if requirement.required {
            Impact::Critical
        } else {
            Impact::Moderate
        }),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
