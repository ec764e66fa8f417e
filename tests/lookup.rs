mod common;

use common::{backends, fixture_records, names};
use druglookup::{resolve, CorrectionPolicy, DrugLookup, DrugRecord, Field};

fn scenario() -> Vec<DrugRecord> {
    vec![
        DrugRecord::new("Paracetamol")
            .with_generic_name("Acetaminophen")
            .with_brands(["Tylenol", "Panadol"]),
        DrugRecord::new("Amoxicillin"),
    ]
}

#[test]
fn paracetamol_amoxicillin_scenario() {
    for (backend, lookup) in backends(scenario()) {
        assert_eq!(names(&lookup.search("panad")), vec!["Paracetamol"], "{backend}");
        assert_eq!(lookup.suggest("Tyl", 10), vec!["Tylenol"], "{backend}");
        assert_eq!(
            lookup.correct("Amoxycillin").as_deref(),
            Some("Amoxicillin"),
            "{backend}"
        );
        assert!(lookup.search("zzz").is_empty(), "{backend}");
        assert_eq!(lookup.correct("zzz"), None, "{backend}");
    }
}

#[test]
fn empty_queries() {
    for (backend, lookup) in backends(fixture_records()) {
        assert!(lookup.search("").is_empty(), "{backend}");
        assert!(lookup.suggest("", 10).is_empty(), "{backend}");
        assert_eq!(lookup.correct(""), None, "{backend}");
        assert!(lookup.search("   ").is_empty(), "{backend}");
    }
}

#[test]
fn searches_every_field() {
    let cases = [
        ("atorva", vec!["Atorvastatin"]),
        ("glucoph", vec!["Metformin"]),
        ("trihydrate", vec!["Amoxicillin"]),
        ("hepatotox", vec!["Paracetamol", "Atorvastatin"]),
        ("ulcer", vec!["Ibuprofen"]),
        ("nsaid", vec!["Ibuprofen"]),
        ("biguan", vec!["Metformin"]),
        ("otitis", vec!["Amoxicillin"]),
        ("lipid reg", vec!["Atorvastatin"]),
        ("fever", vec!["Paracetamol", "Ibuprofen"]),
        ("coa", vec!["Atorvastatin"]),
    ];

    for (backend, lookup) in backends(fixture_records()) {
        for (query, expected) in &cases {
            assert_eq!(
                names(&lookup.search(query)),
                *expected,
                "{backend}: {query}"
            );
        }
    }
}

#[test]
fn opaque_fields_are_not_searched() {
    for (backend, lookup) in backends(fixture_records()) {
        // Only appears in dosage and warnings.
        assert!(lookup.search("every 4 to 6").is_empty(), "{backend}");
        assert!(lookup.search("exceed").is_empty(), "{backend}");
    }
}

#[test]
fn suggestions_are_prefix_only() {
    for (backend, lookup) in backends(fixture_records()) {
        assert_eq!(lookup.suggest("tyl", 10), vec!["Tylenol"], "{backend}");
        assert!(lookup.suggest("lenol", 10).is_empty(), "{backend}");
        // Amoxicillin is both name and generic name, but is only suggested once.
        assert_eq!(
            lookup.suggest("amox", 10),
            vec!["Amoxicillin", "Amoxil"],
            "{backend}"
        );
        assert_eq!(
            lookup.suggest("M", 10),
            vec!["Moxatag", "Motrin", "Metformin", "Metformin hydrochloride"],
            "{backend}"
        );
        assert_eq!(lookup.suggest("M", 2), vec!["Moxatag", "Motrin"], "{backend}");
    }
}

#[test]
fn corrections() {
    for (backend, lookup) in backends(fixture_records()) {
        assert_eq!(
            lookup.correct("parasetamol").as_deref(),
            Some("Paracetamol"),
            "{backend}"
        );
        assert_eq!(lookup.correct("xyz123"), None, "{backend}");
        assert_eq!(lookup.correct("lipitr").as_deref(), Some("Lipitor"), "{backend}");

        let statin = lookup.correct_detailed("stattin").unwrap();
        assert_eq!(statin.term, "Statin", "{backend}");
        assert_eq!(statin.field, Field::TherapeuticClass, "{backend}");
        assert_eq!(statin.distance, 1, "{backend}");
    }
}

#[test]
fn correction_tie_break_is_scan_order() {
    // All three are one substitution from "motrix". Motrin comes first in the corpus.
    let records = vec![
        DrugRecord::new("Motrin"),
        DrugRecord::new("Matrix"),
        DrugRecord::new("Metrix"),
    ];

    for (backend, lookup) in backends(records) {
        assert_eq!(lookup.correct("motrix").as_deref(), Some("Motrin"), "{backend}");
        // Determinism
        for _ in 0..5 {
            assert_eq!(lookup.correct("motrix").as_deref(), Some("Motrin"), "{backend}");
        }
    }
}

#[test]
fn long_queries_must_match_in_full() {
    let indication = "Relief of mild to moderate pain and fever in adults and children";
    assert_eq!(indication.chars().count(), 64);

    let mut record = DrugRecord::new("Paracetamol").with_brands(["Panadol"]);
    record.indications.push(indication.into());

    for (backend, lookup) in backends(vec![record]) {
        assert_eq!(names(&lookup.search(indication)), vec!["Paracetamol"], "{backend}");

        let query = format!("{indication} XYZ-not-in-any-field");
        assert!(lookup.search(&query).is_empty(), "{backend}");
    }
}

#[test]
fn non_ascii_corrections() {
    let records = vec![DrugRecord::new("ΟΔΟΣ"), DrugRecord::new("Paracétamöl")];

    for (backend, lookup) in backends(records) {
        let correction = lookup.correct_detailed("ος").unwrap();
        assert_eq!(correction.term, "ΟΔΟΣ", "{backend}");
        assert_eq!(correction.distance, 2, "{backend}");
        assert_eq!(
            lookup.correct("paracetamol").as_deref(),
            Some("Paracétamöl"),
            "{backend}"
        );
    }
}

#[test]
fn resolution_flow() {
    for (backend, lookup) in backends(fixture_records()) {
        let resolution = resolve(
            lookup.as_ref(),
            "ibuprofin",
            10,
            CorrectionPolicy::NoSuggestions,
        );
        assert!(resolution.matches.is_empty(), "{backend}");
        assert!(resolution.suggestions.is_empty(), "{backend}");
        assert_eq!(
            resolution.did_you_mean.map(|c| c.term.to_string()),
            Some("Ibuprofen".to_string()),
            "{backend}"
        );

        // Re-submitting the correction finds the record.
        assert_eq!(names(&lookup.search("Ibuprofen")), vec!["Ibuprofen"], "{backend}");

        let resolution = resolve(lookup.as_ref(), "advi", 10, CorrectionPolicy::NoSuggestions);
        assert_eq!(names(&resolution.matches), vec!["Ibuprofen"], "{backend}");
        assert_eq!(resolution.suggestions, vec!["Advil"], "{backend}");
        assert!(resolution.did_you_mean.is_none(), "{backend}");
    }
}
