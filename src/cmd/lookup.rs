use clap::Args;
use druglookup::{resolve, CorrectionPolicy, DrugLookup, Resolution};
use eyre::Result;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// The text typed into the search box
    pub query: String,

    /// The maximum number of suggestions. Defaults to the configured limit.
    #[clap(short = 'n', long)]
    pub limit: Option<usize>,

    /// When to offer a correction. Defaults to the configured policy.
    #[clap(short = 'p', long, value_enum)]
    pub policy: Option<CorrectionPolicy>,

    /// Print the resolution as JSON
    #[clap(long)]
    pub json: bool,
}

pub fn run(lookup: &dyn DrugLookup, args: LookupArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(lookup.config().suggestion_limit);
    let policy = args.policy.unwrap_or(lookup.config().correction_policy);

    let resolution = resolve(lookup, &args.query, limit, policy);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        print_resolution(&resolution);
    }

    Ok(())
}

pub fn print_resolution(resolution: &Resolution) {
    println!("{}:", resolution.query);
    if resolution.is_empty() {
        println!("  Nothing found");
        return;
    }

    for record in &resolution.matches {
        println!("  match: {}", record.name);
    }

    for suggestion in &resolution.suggestions {
        println!("  suggestion: {suggestion}");
    }

    if let Some(correction) = &resolution.did_you_mean {
        println!("  did you mean: {}", correction.term);
    }
}
