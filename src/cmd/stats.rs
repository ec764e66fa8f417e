use druglookup::{stats::CorpusStats, DrugLookup};
use eyre::Result;

pub fn run(lookup: &dyn DrugLookup) -> Result<()> {
    let stats = CorpusStats::new(lookup.records());

    println!("Records: {}", stats.records);
    println!("Suggestion terms: {}", stats.suggestion_terms);
    println!("Correction terms: {}", stats.correction_terms);
    println!("Categories:");
    for (category, count) in stats.categories {
        let category = if category.is_empty() {
            "(none)"
        } else {
            category.as_str()
        };
        println!("  {category}: {count}");
    }

    Ok(())
}
