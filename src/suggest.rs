//! Prefix autocomplete over drug names, generic names and brands.

use ahash::{HashSet, HashSetExt};

use crate::{
    normalize::{normalize, prepare_query},
    record::DrugRecord,
};

/// Return up to `limit` distinct names that start with `query`, ignoring case. Suggestions keep
/// their original casing and come back in the order they are first seen in the corpus.
pub fn suggest(query: &str, records: &[DrugRecord], limit: usize) -> Vec<String> {
    let Some(query) = prepare_query(query) else {
        return Vec::new();
    };

    let candidates = records.iter().flat_map(|r| r.suggestion_terms());
    let found = collect_unique(
        candidates
            .map(|(_, term)| term)
            .filter(|term| normalize(term).starts_with(&query)),
        limit,
    );

    tracing::debug!(query = %query, suggestions = found.len(), "prefix suggest");
    found
}

/// Deduplicate on the exact string, keeping first-seen order, and stop after `limit` values.
pub(crate) fn collect_unique<'a>(
    terms: impl Iterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut output = Vec::new();

    for term in terms {
        if output.len() >= limit {
            break;
        }

        if seen.insert(term) {
            output.push(term.to_string());
        }
    }

    output
}
