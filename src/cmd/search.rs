use clap::Args;
use druglookup::{matcher::matched_field, DrugLookup};
use eyre::Result;
use itertools::Itertools;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// The text to look for
    pub query: String,

    /// Show output in long format
    #[clap(short = 'l', long = "long")]
    pub long: bool,

    /// Print the matching records as JSON lines
    #[clap(long)]
    pub json: bool,
}

pub fn run(lookup: &dyn DrugLookup, args: SearchArgs) -> Result<()> {
    let start_time = std::time::Instant::now();
    let found = lookup.search(&args.query);
    let duration = start_time.elapsed();

    if args.json {
        for record in found {
            println!("{}", serde_json::to_string(record)?);
        }
        return Ok(());
    }

    if found.is_empty() {
        println!("No results found");
        return Ok(());
    }

    println!("{} results in {}us", found.len(), duration.as_micros());

    for record in found {
        if !args.long {
            println!("  {}", record.name);
            continue;
        }

        let field = matched_field(&args.query, record)
            .map(|f| f.to_string())
            .unwrap_or_default();
        println!("{} (matched {field})", record.name);
        if !record.generic_name.is_empty() {
            println!("  Generic: {}", record.generic_name);
        }
        if !record.brands.is_empty() {
            println!("  Brands: {}", record.brands.iter().join(", "));
        }
        if !record.therapeutic_class.is_empty() {
            println!("  Class: {}", record.therapeutic_class);
        }
        if !record.composition.is_empty() {
            println!(
                "  Composition: {}",
                record
                    .composition
                    .iter()
                    .map(|c| format!("{} {}", c.active_ingredient, c.strength))
                    .join(", ")
            );
        }
    }

    Ok(())
}
