use std::borrow::Cow;

use smol_str::SmolStr;

use crate::{
    config::LookupConfig,
    correct::{self, Correction},
    matcher,
    error::Result,
    normalize::clamp_query,
    record::{validate_names, DrugRecord},
    suggest,
};

/// The lookup operations a corpus backend provides. Implementations must return identical
/// results for the same records, so callers can pick a backend purely on performance.
pub trait DrugLookup: Send + Sync {
    fn records(&self) -> &[DrugRecord];

    fn config(&self) -> &LookupConfig;

    /// All records containing `query` in any searchable field, in corpus order.
    fn search(&self, query: &str) -> Vec<&DrugRecord>;

    /// Up to `limit` distinct names starting with `query`.
    fn suggest(&self, query: &str, limit: usize) -> Vec<String>;

    /// The closest name, generic name, brand or therapeutic class to `query`.
    fn correct_detailed(&self, query: &str) -> Option<Correction>;

    fn correct(&self, query: &str) -> Option<SmolStr> {
        self.correct_detailed(query).map(|c| c.term)
    }

    /// Suggest using the configured default limit.
    fn suggest_default(&self, query: &str) -> Vec<String> {
        self.suggest(query, self.config().suggestion_limit)
    }

    /// Truncate an overly long query before it reaches the corrector. Search and suggest always
    /// see the full query, since a shortened one would match records the full one does not.
    fn clamp<'q>(&self, query: &'q str) -> Cow<'q, str> {
        clamp_query(query.trim(), self.config().max_query_chars)
    }
}

/// A corpus held in memory and scanned directly on every call.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<DrugRecord>,
    config: LookupConfig,
}

impl Corpus {
    /// Fails with [`Error::EmptyName`](crate::Error::EmptyName) if any record has a blank name.
    pub fn new(records: Vec<DrugRecord>) -> Result<Corpus> {
        Self::with_config(records, LookupConfig::default())
    }

    pub fn with_config(records: Vec<DrugRecord>, config: LookupConfig) -> Result<Corpus> {
        validate_names(&records)?;
        Ok(Corpus { records, config })
    }

    pub fn into_records(self) -> Vec<DrugRecord> {
        self.records
    }
}

impl DrugLookup for Corpus {
    fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    fn config(&self) -> &LookupConfig {
        &self.config
    }

    fn search(&self, query: &str) -> Vec<&DrugRecord> {
        matcher::search(query, &self.records)
    }

    fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        suggest::suggest(query, &self.records, limit)
    }

    fn correct_detailed(&self, query: &str) -> Option<Correction> {
        correct::correct_detailed(&self.clamp(query), &self.records)
    }
}
