use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use hix::corpus;
use hix::index::stats;
use hix::index::types::{DEFAULT_BUCKET_CAPACITY, DEFAULT_LOAD_FACTOR, IndexConfig};
use hix::output;
use hix::query::executor::Executor;
use hix::repl;
use hix::session::Session;

#[derive(Parser)]
#[command(name = "hix")]
#[command(about = "Compare hash-index and table-scan lookup costs over a paged word store")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,
}

/// Build configuration shared by every subcommand
#[derive(Args, Clone)]
struct BuildArgs {
    /// Words per page
    #[arg(short, long, default_value_t = 10)]
    page_size: usize,

    /// Entries per bucket before a chain grows a new tail
    #[arg(long, default_value_t = DEFAULT_BUCKET_CAPACITY)]
    bucket_capacity: usize,

    /// Extra buckets allocated per word (0.05-0.2 is the useful range)
    #[arg(long, default_value_t = DEFAULT_LOAD_FACTOR)]
    load_factor: f64,

    /// Load the corpus from a file instead of the embedded word list
    #[arg(long)]
    corpus: Option<PathBuf>,
}

impl BuildArgs {
    fn config(&self) -> IndexConfig {
        IndexConfig {
            page_size: self.page_size,
            bucket_capacity: self.bucket_capacity,
            load_factor: self.load_factor,
        }
    }

    fn session(&self, silent: bool) -> Result<Session> {
        let words = corpus::load(self.corpus.as_deref())?;
        Session::build_with_progress(words, &self.config(), silent)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Line command loop (:N fetches a page, .word scans, word looks up)
    Repl {
        #[command(flatten)]
        build: BuildArgs,
    },
    /// Interactive terminal UI
    #[cfg(feature = "interactive")]
    Tui {
        #[command(flatten)]
        build: BuildArgs,
    },
    /// Look up one word and print the cost of each strategy
    Lookup {
        /// Word to look up
        word: String,

        /// Strategy to run
        #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
        strategy: StrategyArg,

        /// Machine-readable output
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        build: BuildArgs,
    },
    /// Fetch one page of the store
    Page {
        /// Page index
        number: u32,

        #[command(flatten)]
        build: BuildArgs,
    },
    /// Show build statistics
    Stats {
        /// Machine-readable output
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        build: BuildArgs,
    },
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq)]
enum StrategyArg {
    Hash,
    Scan,
    Both,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Repl { build }) => run_repl(&build),
        #[cfg(feature = "interactive")]
        Some(Commands::Tui { build }) => run_tui(&build),
        Some(Commands::Lookup {
            word,
            strategy,
            json,
            build,
        }) => run_lookup(&word, strategy, json, &build),
        Some(Commands::Page { number, build }) => run_page(number, &build),
        Some(Commands::Stats { json, build }) => run_stats(json, &build),
        None => {
            #[cfg(feature = "interactive")]
            {
                run_tui(&cli.build)
            }
            #[cfg(not(feature = "interactive"))]
            {
                run_repl(&cli.build)
            }
        }
    }
}

fn run_repl(build: &BuildArgs) -> Result<()> {
    let session = build.session(false)?;
    repl::run(&session, true)
}

#[cfg(feature = "interactive")]
fn run_tui(build: &BuildArgs) -> Result<()> {
    let words = corpus::load(build.corpus.as_deref())?;
    hix::tui::run(words, &build.config())
}

fn run_lookup(word: &str, strategy: StrategyArg, json: bool, build: &BuildArgs) -> Result<()> {
    // Spinner off when the output is meant for a machine
    let session = build.session(json)?;
    let executor = Executor::new(&session);

    let lookups = match strategy {
        StrategyArg::Hash => vec![executor.hash_lookup(word)],
        StrategyArg::Scan => vec![executor.table_scan(word)],
        StrategyArg::Both => executor.compare(word).to_vec(),
    };

    if json {
        let values: Vec<_> = lookups
            .iter()
            .map(|lookup| output::lookup_json(word, lookup))
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    for lookup in &lookups {
        let page_words = lookup.page.and_then(|id| executor.page(id));
        output::print_lookup(word, lookup, page_words, true)?;
    }
    Ok(())
}

fn run_page(number: u32, build: &BuildArgs) -> Result<()> {
    let session = build.session(false)?;
    let executor = Executor::new(&session);
    output::print_page(number, executor.page(number), true)?;
    Ok(())
}

fn run_stats(json: bool, build: &BuildArgs) -> Result<()> {
    let session = build.session(json)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats::stats_json(&session))?);
    } else {
        stats::show_stats(&session);
    }
    Ok(())
}
