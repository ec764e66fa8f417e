//! Multi-field substring search over an in-memory corpus.

use crate::{
    normalize::{normalize, prepare_query},
    record::{DrugRecord, Field},
};

/// Return every record with a searchable field containing `query`, ignoring case. Records come
/// back in corpus order. An empty query matches nothing.
pub fn search<'a>(query: &str, records: &'a [DrugRecord]) -> Vec<&'a DrugRecord> {
    let Some(query) = prepare_query(query) else {
        return Vec::new();
    };

    let found = records
        .iter()
        .filter(|record| first_match(&query, record).is_some())
        .collect::<Vec<_>>();

    tracing::debug!(query = %query, matches = found.len(), "substring search");
    found
}

/// The highest priority field of `record` that contains `query`.
pub fn matched_field(query: &str, record: &DrugRecord) -> Option<Field> {
    let query = prepare_query(query)?;
    first_match(&query, record)
}

/// `query` must already be normalized.
fn first_match(query: &str, record: &DrugRecord) -> Option<Field> {
    record
        .searchable_fields()
        .find(|(_, value)| normalize(value).contains(query))
        .map(|(field, _)| field)
}
