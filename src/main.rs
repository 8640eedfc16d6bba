use clap::Parser;
use color_eyre::Result;

mod analyze;
mod config;
mod error;
mod fetch;
mod help;
mod prompt;
mod report;
mod stats;
mod strip;

use analyze::{Options, analyze};
use config::SortOrder;

/// Command-line text analyzer
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Text analyzer: word, letter, and space counts plus repeated words for a file or URL"
)]
struct Args {
    /// File path or http(s) URL to analyze (if not provided, starts the interactive prompt)
    source: Option<String>,

    /// Remove HTML tags before counting
    #[arg(short = 't', long)]
    strip_tags: bool,

    /// Sort repeated words alphabetically
    #[arg(short = 'a', long)]
    sort_alpha: bool,

    /// Sort repeated words from most to least frequent (wins over --sort-alpha)
    #[arg(short = 'n', long)]
    sort_freq: bool,

    /// Report words occurring strictly more than this many times
    #[arg(long)]
    threshold: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    color_eyre::install()?;

    // Load config early so flag defaults are settled before any work
    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {warning}");
    }
    let config = config_result.config;

    let args = Args::parse();

    let Some(source) = args.source else {
        prompt::run(&config)?;
        return Ok(());
    };

    let text = fetch::fetch(&source)?;

    let sort = if args.sort_freq {
        SortOrder::Frequency
    } else if args.sort_alpha {
        SortOrder::Alpha
    } else {
        config.output.sort
    };

    let stats = analyze(
        &text,
        Options {
            strip_tags: args.strip_tags || config.output.strip_tags,
            sort,
            threshold: args.threshold.unwrap_or(config.stats.threshold),
        },
    );

    print!("{}", report::render(&stats));

    Ok(())
}
