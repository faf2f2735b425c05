//! Candidate ranking: scores many candidates against one requirement set and orders them.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::info;

use crate::matching::engine::FitScorer;
use crate::models::report::MatchReport;
use crate::models::request::{MatchOptions, RankRequest};

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub rank: usize, // 1-based
    pub candidate_id: String,
    pub report: MatchReport,
}

/// Scores every candidate and sorts by raw percentage, best first.
///
/// The raw ratio keeps bonus-earned headroom above 100, so a verified expert
/// outranks an unverified one even when both clamp to 100. Ties keep the order
/// candidates were given in. With `only_passing` set, candidates below
/// `options.minimum_score` are dropped before ranks are assigned.
pub fn rank_candidates(
    scorer: &dyn FitScorer,
    request: &RankRequest,
    options: &MatchOptions,
) -> Vec<RankedCandidate> {
    let mut scored: Vec<(String, MatchReport)> = request
        .candidates
        .iter()
        .map(|candidate| {
            let report = scorer.score(&candidate.attributes, &request.requirements, options);
            (candidate.id.clone(), report)
        })
        .collect();

    // sort_by is stable, so equal percentages stay in input order
    scored.sort_by(|(_, a), (_, b)| {
        b.raw_percentage
            .partial_cmp(&a.raw_percentage)
            .unwrap_or(Ordering::Equal)
    });

    let total = scored.len();
    let ranked: Vec<RankedCandidate> = scored
        .into_iter()
        .filter(|(_, report)| !request.only_passing || report.passes_minimum)
        .enumerate()
        .map(|(i, (candidate_id, report))| RankedCandidate {
            rank: i + 1,
            candidate_id,
            report,
        })
        .collect();

    info!(
        candidates = total,
        ranked = ranked.len(),
        only_passing = request.only_passing,
        "candidates ranked"
    );
    ranked
}
