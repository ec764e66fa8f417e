mod batch;
mod correct;
mod logging;
mod lookup;
mod search;
mod stats;
mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use druglookup::{files::load_records, Corpus, DrugLookup, IndexedCorpus, LookupConfig};
use eyre::{Result, WrapErr};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    #[arg(
        short,
        long,
        env = "DRUG_CORPUS",
        help = "The corpus file, as .json, .ndjson or .jsonl, optionally gzipped"
    )]
    pub corpus: PathBuf,

    #[arg(long, env = "DRUG_LOOKUP_CONFIG", help = "A JSON file of lookup settings")]
    pub config: Option<PathBuf>,

    /// Build FST term indexes instead of scanning the records on every query
    #[arg(short, long)]
    pub indexed: bool,

    /// Increase log verbosity. Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find all drugs with a field containing the query
    Search(search::SearchArgs),
    /// Autocomplete names starting with the query
    Suggest(suggest::SuggestArgs),
    /// Find the closest known name to a misspelled query
    Correct(correct::CorrectArgs),
    /// Search, suggest and correct in one pass
    Lookup(lookup::LookupArgs),
    /// Resolve every line of a file
    Batch(batch::BatchArgs),
    /// Show corpus statistics
    Stats,
}

pub fn run(args: Args) -> Result<()> {
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => LookupConfig::from_path(path)
            .wrap_err_with(|| format!("Reading config {}", path.display()))?,
        None => LookupConfig::default(),
    };

    let records = load_records(&args.corpus)
        .wrap_err_with(|| format!("Loading corpus {}", args.corpus.display()))?;

    let lookup: Box<dyn DrugLookup> = if args.indexed {
        Box::new(IndexedCorpus::new(records, config)?)
    } else {
        Box::new(Corpus::with_config(records, config)?)
    };

    match args.command {
        Command::Search(cmd_args) => search::run(lookup.as_ref(), cmd_args),
        Command::Suggest(cmd_args) => suggest::run(lookup.as_ref(), cmd_args),
        Command::Correct(cmd_args) => correct::run(lookup.as_ref(), cmd_args),
        Command::Lookup(cmd_args) => lookup::run(lookup.as_ref(), cmd_args),
        Command::Batch(cmd_args) => batch::run(lookup.as_ref(), cmd_args),
        Command::Stats => stats::run(lookup.as_ref()),
    }
}
