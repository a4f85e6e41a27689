//! Quote Clash: guess who said it, a rapper or a writer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use qc_core::{Category, CategorySummary, QuizConfig, QuizError, QuoteBank};
use qc_data::{DataSource, Sources};

#[derive(Parser)]
#[command(
    name = "quote-clash",
    about = "Guess whether a quote comes from a rapper or a writer",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Rap quotes: a CSV file or an http(s) URL [default: bundled]
    #[arg(long, global = true)]
    rap: Option<String>,

    /// Author quotes: a CSV file or an http(s) URL [default: bundled]
    #[arg(long, global = true)]
    authors: Option<String>,

    /// RNG seed for question order and option placement
    #[arg(long)]
    seed: Option<u64>,

    /// How long the confetti stays up after a correct answer, in milliseconds
    #[arg(long, default_value = "3000")]
    celebration_ms: u64,

    /// Write logs to this file while the TUI is running
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the quiz (default)
    Play,
    /// Load both collections and print what was found
    Check {
        /// Print the counts and every loaded quote as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Machine-readable output of `check --json`.
#[derive(Serialize)]
struct CheckReport<'a> {
    rap_source: String,
    author_source: String,
    categories: Vec<CategorySummary>,
    quotes: &'a QuoteBank,
}

fn main() {
    let args = Args::parse();
    let sources = sources(&args);

    match args.command.unwrap_or(Command::Play) {
        Command::Check { json } => {
            init_stderr_logging();
            if let Err(e) = check(&sources, json) {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
        Command::Play => {
            if let Some(path) = &args.log_file {
                if let Err(e) = init_file_logging(path) {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }

            let mut config =
                QuizConfig::default().with_celebration(Duration::from_millis(args.celebration_ms));
            if let Some(seed) = args.seed {
                config = config.with_seed(seed);
            }

            let app = qc_tui::app::QuizApp::new(config);
            if let Err(e) = qc_tui::terminal::run(app, sources) {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }
}

/// Build the payload locations from the command line.
fn sources(args: &Args) -> Sources {
    let mut sources = Sources::default();
    if let Some(rap) = &args.rap {
        sources = sources.with_rap(DataSource::parse(rap));
    }
    if let Some(authors) = &args.authors {
        sources = sources.with_author(DataSource::parse(authors));
    }
    sources
}

/// Load both collections once and print a summary.
fn check(sources: &Sources, json: bool) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("runtime error: {e}"))?;
    let bank = runtime.block_on(sources.load()).map_err(|e| e.to_string())?;

    if json {
        let report = CheckReport {
            rap_source: sources.rap.to_string(),
            author_source: sources.author.to_string(),
            categories: Category::ALL.map(|c| bank.summary(c)).to_vec(),
            quotes: &bank,
        };
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("  {}", "Quote bank".bold());
        print_category(bank.summary(Category::Rap), &sources.rap);
        print_category(bank.summary(Category::Author), &sources.author);
    }

    match Category::ALL
        .into_iter()
        .find(|c| bank.quotes(*c).is_empty())
    {
        Some(empty) => Err(QuizError::NotReady(empty).to_string()),
        None => Ok(()),
    }
}

fn print_category(summary: CategorySummary, source: &DataSource) {
    let count = if summary.quotes == 0 {
        summary.quotes.to_string().red()
    } else {
        summary.quotes.to_string().green()
    };
    println!(
        "  {:<8} {count} quotes, {} authors  {}",
        summary.category.to_string(),
        summary.authors,
        format!("({source})").dimmed()
    );
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs only go to a file.
fn init_file_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("failed to create log file {}: {e}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
