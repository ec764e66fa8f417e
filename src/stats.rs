use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use serde::Serialize;

use crate::{normalize::normalize, record::DrugRecord};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    pub records: usize,
    /// Distinct normalized names, generic names and brands.
    pub suggestion_terms: usize,
    /// Distinct normalized correction candidates.
    pub correction_terms: usize,
    /// Record counts per category, sorted by category. Uncategorized records are counted under
    /// an empty string.
    pub categories: Vec<(String, usize)>,
}

impl CorpusStats {
    pub fn new(records: &[DrugRecord]) -> CorpusStats {
        let suggestion_terms = count_distinct(
            records
                .iter()
                .flat_map(|r| r.suggestion_terms().map(|(_, t)| t)),
        );
        let correction_terms = count_distinct(
            records
                .iter()
                .flat_map(|r| r.correction_terms().map(|(_, t)| t)),
        );

        let categories = records
            .iter()
            .counts_by(|r| r.category.to_string())
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .collect();

        CorpusStats {
            records: records.len(),
            suggestion_terms,
            correction_terms,
            categories,
        }
    }
}

fn count_distinct<'a>(terms: impl Iterator<Item = &'a str>) -> usize {
    let mut seen = HashSet::new();
    for term in terms.filter(|t| !t.is_empty()) {
        seen.insert(normalize(term));
    }
    seen.len()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts() {
        let mut paracetamol = DrugRecord::new("Paracetamol")
            .with_generic_name("Acetaminophen")
            .with_brands(["Tylenol", "TYLENOL"])
            .with_therapeutic_class("Analgesic");
        paracetamol.category = "OTC".into();
        let mut ibuprofen = DrugRecord::new("Ibuprofen").with_therapeutic_class("Analgesic");
        ibuprofen.category = "OTC".into();
        let amoxicillin = DrugRecord::new("Amoxicillin");

        let stats = CorpusStats::new(&[paracetamol, ibuprofen, amoxicillin]);
        assert_eq!(stats.records, 3);
        assert_eq!(stats.suggestion_terms, 5);
        assert_eq!(stats.correction_terms, 6);
        assert_eq!(
            stats.categories,
            vec![(String::new(), 1), ("OTC".to_string(), 2)]
        );
    }
}
