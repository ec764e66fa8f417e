//! A corpus backend that compiles the searchable terms into finite state transducers, so that
//! prefix, substring and fuzzy lookups walk an automaton over the distinct terms instead of
//! re-normalizing every record on every call.

use fst::{automaton::Levenshtein, Automaton, IntoStreamer, Streamer};
use regex_automata::dense;
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::{
    config::LookupConfig,
    correct::{self, correction_threshold, edit_distance, Correction},
    corpus::DrugLookup,
    error::Result,
    matcher,
    normalize::prepare_query,
    record::{validate_names, DrugRecord, Field},
    suggest::collect_unique,
};

pub mod build;

use build::{build_term_index, TermSet};

/// Levenshtein automata for long queries with a large edit budget can explode in size. Past this
/// many states we fall back to a linear scan.
const LEVENSHTEIN_STATE_LIMIT: usize = 10_000;

#[derive(Debug, Clone)]
pub(crate) struct Occurrence {
    /// Where this value would be visited in a linear scan of the corpus.
    pub position: u32,
    pub record: u32,
    pub field: Field,
    /// The value with its original casing.
    pub term: SmolStr,
}

pub struct TermIndex {
    map: fst::Map<Vec<u8>>,
    postings: Vec<SmallVec<[Occurrence; 2]>>,
    /// Every key is plain ASCII.
    ascii: bool,
}

impl TermIndex {
    /// The number of distinct normalized terms.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn is_ascii(&self) -> bool {
        self.ascii
    }

    /// Every occurrence of every key accepted by `automaton`.
    fn occurrences<A: Automaton>(&self, automaton: A) -> Vec<&Occurrence> {
        let mut stream = self.map.search(automaton).into_stream();
        let mut output = Vec::new();
        while let Some((_, value)) = stream.next() {
            output.extend(self.postings[value as usize].iter());
        }

        output
    }

    /// The keys accepted by `automaton` along with their occurrences.
    fn keys<A: Automaton>(&self, automaton: A) -> Vec<(String, &[Occurrence])> {
        let mut stream = self.map.search(automaton).into_stream();
        let mut output = Vec::new();
        while let Some((key, value)) = stream.next() {
            output.push((
                String::from_utf8_lossy(key).into_owned(),
                self.postings[value as usize].as_slice(),
            ));
        }

        output
    }
}

pub struct IndexedCorpus {
    records: Vec<DrugRecord>,
    config: LookupConfig,
    searchable: TermIndex,
    suggestion: TermIndex,
    correction: TermIndex,
}

impl IndexedCorpus {
    /// Fails with [`Error::EmptyName`](crate::Error::EmptyName) if any record has a blank name.
    pub fn new(records: Vec<DrugRecord>, config: LookupConfig) -> Result<IndexedCorpus> {
        validate_names(&records)?;
        let start_time = std::time::Instant::now();

        let (searchable, (suggestion, correction)) = rayon::join(
            || build_term_index(&records, TermSet::Searchable),
            || {
                rayon::join(
                    || build_term_index(&records, TermSet::Suggestion),
                    || build_term_index(&records, TermSet::Correction),
                )
            },
        );

        let index = IndexedCorpus {
            searchable: searchable?,
            suggestion: suggestion?,
            correction: correction?,
            records,
            config,
        };

        tracing::info!(
            records = index.records.len(),
            searchable_terms = index.searchable.len(),
            suggestion_terms = index.suggestion.len(),
            correction_terms = index.correction.len(),
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "Built term indexes"
        );

        Ok(index)
    }

    pub fn searchable_terms(&self) -> &TermIndex {
        &self.searchable
    }

    pub fn suggestion_terms(&self) -> &TermIndex {
        &self.suggestion
    }

    pub fn correction_terms(&self) -> &TermIndex {
        &self.correction
    }
}

impl DrugLookup for IndexedCorpus {
    fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Runs a `.*query.*` DFA over the normalized field values.
    fn search(&self, query: &str) -> Vec<&DrugRecord> {
        let Some(query) = prepare_query(query) else {
            return Vec::new();
        };

        let pattern = format!("(?s).*{}.*", escape_regex(&query));
        let dfa = match dense::Builder::new().anchored(true).build(&pattern) {
            Ok(dfa) => dfa,
            Err(e) => {
                tracing::warn!(error = %e, "Could not build substring automaton, scanning instead");
                return matcher::search(&query, &self.records);
            }
        };

        let mut record_ids = self
            .searchable
            .occurrences(&dfa)
            .into_iter()
            .map(|o| o.record)
            .collect::<Vec<_>>();
        record_ids.sort_unstable();
        record_ids.dedup();

        tracing::debug!(query = %query, matches = record_ids.len(), "indexed substring search");

        record_ids
            .into_iter()
            .map(|id| &self.records[id as usize])
            .collect()
    }

    fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let Some(query) = prepare_query(query) else {
            return Vec::new();
        };

        let automaton = fst::automaton::Str::new(&query).starts_with();
        let mut found = self.suggestion.occurrences(automaton);
        found.sort_unstable_by_key(|o| o.position);

        collect_unique(found.into_iter().map(|o| o.term.as_str()), limit)
    }

    fn correct_detailed(&self, query: &str) -> Option<Correction> {
        let clamped = self.clamp(query);
        let query = prepare_query(&clamped)?;
        let threshold = correction_threshold(query.chars().count());

        // The automaton's distances can disagree with the character-level ones on multi-byte
        // text, so only trust it when both sides are ASCII.
        if !query.is_ascii() || !self.correction.is_ascii() {
            return correct::correct_detailed(&query, &self.records);
        }

        let automaton =
            match Levenshtein::new_with_limit(&query, threshold, LEVENSHTEIN_STATE_LIMIT) {
                Ok(automaton) => automaton,
                Err(e) => {
                    tracing::warn!(error = %e, threshold, "Levenshtein automaton too large, scanning instead");
                    return correct::correct_detailed(&query, &self.records);
                }
            };

        // Rank by distance, then by scan position, to match the linear scan's tie-break.
        let best = self
            .correction
            .keys(automaton)
            .into_iter()
            .filter_map(|(key, occurrences)| {
                let distance = edit_distance(&query, &key);
                let first = occurrences.iter().min_by_key(|o| o.position)?;
                (distance <= threshold).then_some((distance, first))
            })
            .min_by_key(|(distance, o)| (*distance, o.position))
            .map(|(distance, o)| Correction {
                term: o.term.clone(),
                distance,
                field: o.field,
            });

        tracing::debug!(
            query = %query,
            threshold,
            correction = best.as_ref().map(|c| c.term.as_str()),
            "indexed correct"
        );
        best
    }
}

/// Escape characters that have a meaning in regex syntax.
fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '.'
                | '+'
                | '*'
                | '?'
                | '('
                | ')'
                | '|'
                | '['
                | ']'
                | '{'
                | '}'
                | '^'
                | '$'
                | '#'
                | '&'
                | '-'
                | '~'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
