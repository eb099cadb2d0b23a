//! CLI application for merging PDF invoices into a single CSV.

mod progress;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use invmerge_core::{BatchProcessor, DocumentParser, InvmergeConfig, PdfExtractor};

use progress::ProgressObserver;
use report::OutputFormat;

/// Parse invoice PDFs and merge them into one CSV
#[derive(Parser)]
#[command(name = "invmerge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated list of PDF files
    #[arg(long, required = true)]
    files: String,

    /// Output directory (created if missing)
    #[arg(long, required = true)]
    output: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {}", e);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", report::render_fatal(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    let files = parse_file_list(&cli.files);
    debug!("{} input files, output to {}", files.len(), cli.output.display());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let extractor = PdfExtractor::from_config(&config.pdf);
    let parser = DocumentParser::with_config(extractor, config.extraction.clone());
    let observer = ProgressObserver::new(files.len(), cli.json);

    let result = BatchProcessor::new(parser)
        .with_observer(&observer)
        .with_output_config(config.output.clone())
        .run(&files, &cli.output)?;
    observer.finish();

    print!("{}", report::render(&result, format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(ExitCode::from(report::exit_code(&result)))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<InvmergeConfig> {
    match path {
        Some(path) => InvmergeConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(InvmergeConfig::default()),
    }
}

/// Split `--files` on commas, trimming entries and dropping empty ones.
fn parse_file_list(files: &str) -> Vec<PathBuf> {
    files
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(PathBuf::from)
        .collect()
}
