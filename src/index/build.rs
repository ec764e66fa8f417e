use std::collections::BTreeMap;

use fst::{Map, MapBuilder};
use smallvec::SmallVec;

use crate::{
    error::Result,
    normalize::normalize,
    record::{DrugRecord, Field},
};

use super::{Occurrence, TermIndex};

/// Which record values a term index is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSet {
    /// Every field the substring search looks at.
    Searchable,
    /// Names, generic names and brands.
    Suggestion,
    /// Suggestion terms plus therapeutic classes.
    Correction,
}

impl TermSet {
    fn terms<'a>(&self, record: &'a DrugRecord) -> Box<dyn Iterator<Item = (Field, &'a str)> + 'a> {
        match self {
            TermSet::Searchable => Box::new(record.searchable_fields()),
            TermSet::Suggestion => Box::new(record.suggestion_terms()),
            TermSet::Correction => Box::new(record.correction_terms()),
        }
    }
}

/// Build an FST over the normalized terms of `records`. Each key maps to the list of places the
/// term occurs, tagged with the position it would have in a linear scan of the corpus.
pub fn build_term_index(records: &[DrugRecord], term_set: TermSet) -> Result<TermIndex> {
    // Gather everything in memory first. The BTreeMap gives us the sorted key order the FST
    // builder requires.
    let mut grouped: BTreeMap<String, SmallVec<[Occurrence; 2]>> = BTreeMap::new();
    let mut position = 0u32;

    for (record_idx, record) in records.iter().enumerate() {
        for (field, term) in term_set.terms(record) {
            grouped
                .entry(normalize(term))
                .or_default()
                .push(Occurrence {
                    position,
                    record: record_idx as u32,
                    field,
                    term: term.into(),
                });
            position += 1;
        }
    }

    let mut fst_builder = MapBuilder::memory();
    let mut postings = Vec::with_capacity(grouped.len());

    for (string, occurrences) in grouped {
        fst_builder.insert(string, postings.len() as u64)?;
        postings.push(occurrences);
    }

    let map = Map::new(fst_builder.into_inner()?)?;
    let ascii = postings
        .iter()
        .flat_map(|occurrences| occurrences.iter())
        .all(|o| o.term.is_ascii());

    tracing::debug!(
        ?term_set,
        keys = postings.len(),
        occurrences = position,
        "built term index"
    );

    Ok(TermIndex {
        map,
        postings,
        ascii,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn groups_terms_by_normalized_key() {
        let records = vec![
            DrugRecord::new("Tylenol Cold").with_brands(["Tylenol"]),
            DrugRecord::new("Paracetamol").with_brands(["TYLENOL", "Panadol"]),
        ];

        let index = build_term_index(&records, TermSet::Suggestion).unwrap();
        let value = index.map.get("tylenol").unwrap();
        let occurrences = &index.postings[value as usize];

        let found = occurrences
            .iter()
            .map(|o| (o.position, o.record, o.term.as_str()))
            .collect::<Vec<_>>();
        // Positions count the empty generic names too.
        assert_eq!(found, vec![(2, 0, "Tylenol"), (5, 1, "TYLENOL")]);
    }

    #[test]
    fn correction_terms_include_therapeutic_class() {
        let records = vec![DrugRecord::new("Amoxicillin").with_therapeutic_class("Antibiotic")];

        let suggestion = build_term_index(&records, TermSet::Suggestion).unwrap();
        let correction = build_term_index(&records, TermSet::Correction).unwrap();
        assert!(suggestion.map.get("antibiotic").is_none());
        assert!(correction.map.get("antibiotic").is_some());
        // Empty generic names are not correction candidates.
        assert!(correction.map.get("").is_none());
    }

    #[test]
    fn tracks_non_ascii_terms() {
        let ascii = build_term_index(&[DrugRecord::new("Aspirin")], TermSet::Correction).unwrap();
        assert!(ascii.is_ascii());

        let records = vec![DrugRecord::new("Aspirin").with_therapeutic_class("β-blocker")];
        let greek = build_term_index(&records, TermSet::Correction).unwrap();
        assert!(!greek.is_ascii());
        assert!(build_term_index(&records, TermSet::Suggestion).unwrap().is_ascii());
    }
}
