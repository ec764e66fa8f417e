//! "Did you mean" correction by minimum Levenshtein distance.

use serde::Serialize;
use smol_str::SmolStr;

use crate::{
    normalize::{normalize, prepare_query},
    record::{DrugRecord, Field},
};

/// The closest corpus term to a query.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The term as it appears in the corpus.
    pub term: SmolStr,
    pub distance: u32,
    pub field: Field,
}

/// The largest edit distance accepted for a query of `query_chars` characters:
/// `max(2, floor(0.4 * query_chars))`.
pub fn correction_threshold(query_chars: usize) -> u32 {
    let proportional = query_chars.saturating_mul(2) / 5;
    (proportional as u32).max(2)
}

pub fn correct(query: &str, records: &[DrugRecord]) -> Option<SmolStr> {
    correct_detailed(query, records).map(|c| c.term)
}

/// Scan every name, generic name, brand and therapeutic class and return the one closest to
/// `query`. On a tie the earliest candidate in the scan wins.
pub fn correct_detailed(query: &str, records: &[DrugRecord]) -> Option<Correction> {
    let query = prepare_query(query)?;
    let threshold = correction_threshold(query.chars().count());

    let candidates = records.iter().flat_map(|r| r.correction_terms());
    let best = closest(&query, threshold, candidates);

    tracing::debug!(
        query = %query,
        threshold,
        correction = best.as_ref().map(|c| c.term.as_str()),
        "correct"
    );
    best
}

/// Pick the first candidate at the minimum distance, if it is within `threshold`. `query` must
/// already be normalized.
pub(crate) fn closest<'a>(
    query: &str,
    threshold: u32,
    candidates: impl Iterator<Item = (Field, &'a str)>,
) -> Option<Correction> {
    let mut best: Option<(u32, Field, &str)> = None;

    for (field, term) in candidates {
        let distance = edit_distance(query, &normalize(term));
        if distance > threshold {
            continue;
        }

        if best.map_or(true, |(best_distance, _, _)| distance < best_distance) {
            best = Some((distance, field, term));
            if distance == 0 {
                break;
            }
        }
    }

    best.map(|(distance, field, term)| Correction {
        term: term.into(),
        distance,
        field,
    })
}

/// Character-level Levenshtein distance.
pub(crate) fn edit_distance(a: &str, b: &str) -> u32 {
    strsim::levenshtein(a, b) as u32
}
