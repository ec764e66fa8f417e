use clap::Args;
use druglookup::DrugLookup;
use eyre::Result;

#[derive(Args, Debug)]
pub struct CorrectArgs {
    /// The possibly misspelled term
    pub query: String,
}

pub fn run(lookup: &dyn DrugLookup, args: CorrectArgs) -> Result<()> {
    match lookup.correct_detailed(&args.query) {
        Some(correction) => println!(
            "Did you mean: {} ({}, distance {})",
            correction.term, correction.field, correction.distance
        ),
        None => println!("No close match"),
    }

    Ok(())
}
