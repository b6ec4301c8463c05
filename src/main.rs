use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::{info, LevelFilter};
use structopt::StructOpt;

use word_lookup::{logging, run, Destination, ReportFormat, StoreKind};

/// Count matches of predefined words in a text file.
#[derive(StructOpt)]
#[structopt(name = "word-lookup")]
struct Cli {
    /// File path to the predefined words, one per line
    #[structopt(parse(from_os_str))]
    words: PathBuf,
    /// File path to the text file for analysis
    #[structopt(parse(from_os_str))]
    text: PathBuf,
    /// Optional output file to write the results to, instead of stdout
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// Vocabulary store: `trie` or `set`
    #[structopt(long, default_value = "trie")]
    store: StoreKind,
    /// Log progress to stderr
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::from_args();

    logging::initialize(if args.verbose { LevelFilter::Info } else { LevelFilter::Warn });

    let start = Instant::now();
    let destination = Destination::from(args.output);
    let tally = run(args.store, &args.words, &args.text, &destination, ReportFormat::default())
        .with_context(|| format!("counting {:?} in {:?}", args.words, args.text))?;

    info!("{} matches of {} words using the {} store in {:.3}s",
          tally.total(), tally.len(), args.store, start.elapsed().as_secs_f64());
    Ok(())
}
