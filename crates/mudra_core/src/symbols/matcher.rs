use std::cmp::Ordering;

use mudra_utils::numerical::cosine_similarity;

use super::store::SymbolStore;
use crate::common::feature::FeatureVector;
use crate::common::symbol::MatchResult;
use crate::common::types::Handedness;

/// Rank every stored symbol of the given side by cosine similarity to the
/// query.
///
/// Returns the full ranking, best first. Exact score ties keep insertion
/// order (the sort is stable), so results are deterministic. No minimum
/// score is applied; callers truncate or threshold as they see fit. An empty
/// library for the queried side yields an empty ranking, not an error.
#[must_use]
pub fn match_symbols(
    query: &FeatureVector,
    handedness: Handedness,
    store: &SymbolStore,
) -> Vec<MatchResult> {
    let mut ranked: Vec<MatchResult> = store
        .all(handedness)
        .iter()
        .map(|symbol| MatchResult {
            name: symbol.name().to_owned(),
            score: cosine_similarity(query.view(), symbol.features().view()),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}
