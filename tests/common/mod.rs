#![allow(dead_code)]

use std::path::PathBuf;

use druglookup::{
    files::load_records, Corpus, DrugLookup, DrugRecord, IndexedCorpus, LookupConfig,
};

pub fn fixture_records() -> Vec<DrugRecord> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/drugs.json");
    load_records(&path).unwrap()
}

/// The same records behind every backend.
pub fn backends(records: Vec<DrugRecord>) -> Vec<(&'static str, Box<dyn DrugLookup>)> {
    vec![
        (
            "scan",
            Box::new(Corpus::with_config(records.clone(), LookupConfig::default()).unwrap())
                as Box<dyn DrugLookup>,
        ),
        (
            "indexed",
            Box::new(IndexedCorpus::new(records, LookupConfig::default()).unwrap()),
        ),
    ]
}

pub fn names(found: &[&DrugRecord]) -> Vec<String> {
    found.iter().map(|r| r.name.to_string()).collect()
}
