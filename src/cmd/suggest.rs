use clap::Args;
use druglookup::DrugLookup;
use eyre::Result;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// The partial name typed so far
    pub query: String,

    /// The maximum number of suggestions. Defaults to the configured limit.
    #[clap(short = 'n', long)]
    pub limit: Option<usize>,
}

pub fn run(lookup: &dyn DrugLookup, args: SuggestArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(lookup.config().suggestion_limit);

    for suggestion in lookup.suggest(&args.query, limit) {
        println!("{suggestion}");
    }

    Ok(())
}
