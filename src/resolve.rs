use serde::Serialize;

use crate::{
    config::CorrectionPolicy,
    correct::Correction,
    corpus::DrugLookup,
    normalize::{normalize, prepare_query},
    record::DrugRecord,
};

/// Everything a search box needs for one query: matching records, autocomplete suggestions and
/// an optional "did you mean".
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub query: String,
    pub matches: Vec<&'a DrugRecord>,
    pub suggestions: Vec<String>,
    pub did_you_mean: Option<Correction>,
}

impl Resolution<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.suggestions.is_empty() && self.did_you_mean.is_none()
    }
}

/// Run search and suggest for `query`, then ask for a correction when `policy` calls for one.
/// A correction that only differs from the query by case is dropped, since re-submitting it
/// would give the same results.
pub fn resolve<'a, L: DrugLookup + ?Sized>(
    lookup: &'a L,
    query: &str,
    limit: usize,
    policy: CorrectionPolicy,
) -> Resolution<'a> {
    let query = query.trim().to_string();
    if prepare_query(&query).is_none() {
        return Resolution {
            query,
            matches: Vec::new(),
            suggestions: Vec::new(),
            did_you_mean: None,
        };
    }

    let matches = lookup.search(&query);
    let suggestions = lookup.suggest(&query, limit);

    let wants_correction = match policy {
        CorrectionPolicy::NoSuggestions => suggestions.is_empty(),
        CorrectionPolicy::NoMatches => matches.is_empty(),
        CorrectionPolicy::Either => suggestions.is_empty() || matches.is_empty(),
    };

    // The corrector only saw the clamped query, so compare against that.
    let did_you_mean = if wants_correction {
        let corrected_query = normalize(&lookup.clamp(&query));
        lookup
            .correct_detailed(&query)
            .filter(|c| normalize(&c.term) != corrected_query)
    } else {
        None
    };

    tracing::debug!(
        query = %query,
        matches = matches.len(),
        suggestions = suggestions.len(),
        corrected = did_you_mean.is_some(),
        "resolved"
    );

    Resolution {
        query,
        matches,
        suggestions,
        did_you_mean,
    }
}
