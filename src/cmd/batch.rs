use std::{io::BufRead, path::PathBuf};

use clap::Args;
use druglookup::{resolve, CorrectionPolicy, DrugLookup};
use eyre::{Result, WrapErr};
use rayon::prelude::*;

use super::lookup::print_resolution;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// A file with one query per line
    pub input: PathBuf,

    /// The maximum number of suggestions per query
    #[clap(short = 'n', long)]
    pub limit: Option<usize>,

    /// When to offer a correction
    #[clap(short = 'p', long, value_enum)]
    pub policy: Option<CorrectionPolicy>,

    /// Print one JSON resolution per line
    #[clap(long)]
    pub json: bool,
}

pub fn run(lookup: &dyn DrugLookup, args: BatchArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(lookup.config().suggestion_limit);
    let policy = args.policy.unwrap_or(lookup.config().correction_policy);

    let file = std::fs::File::open(&args.input)
        .wrap_err_with(|| format!("Opening {}", args.input.display()))?;
    let queries = std::io::BufReader::new(file)
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .collect::<Result<Vec<_>, _>>()?;

    let start_time = std::time::Instant::now();
    // par_iter keeps the input order when collecting.
    let resolutions = queries
        .par_iter()
        .map(|query| resolve(lookup, query, limit, policy))
        .collect::<Vec<_>>();

    tracing::info!(
        queries = resolutions.len(),
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "Batch resolved"
    );

    for resolution in &resolutions {
        if args.json {
            println!("{}", serde_json::to_string(resolution)?);
        } else {
            print_resolution(resolution);
        }
    }

    Ok(())
}
