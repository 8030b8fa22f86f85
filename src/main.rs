use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use textcompare::compare::{self, Comparison};
use textcompare::config::{Config, MissingPolicy, OutputFormat, MAX_PRECISION};
use textcompare::corpus::{DocumentLoader, FileLoader};
use textcompare::output;

/// textcompare: how far apart are two documents?
///
/// Reads two plain-text files, counts every word in each, and reports the
/// angle between the two word-frequency vectors. 0 radians means the same
/// words in the same proportions; pi/2 means no words in common.
#[derive(Parser)]
#[command(name = "textcompare", version, about)]
struct Cli {
    /// First document
    file_1: PathBuf,

    /// Second document
    file_2: PathBuf,

    /// Abort if either file cannot be read instead of treating it as empty
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Decimal places for the printed distance, 0 to 17 (default: 6)
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..=MAX_PRECISION as i64))]
    precision: Option<u16>,

    /// Load the documents one after the other instead of concurrently
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    /// Layer command-line flags over the environment config.
    fn apply(&self, mut config: Config) -> Config {
        if self.strict {
            config.missing = MissingPolicy::Fail;
        }
        if self.json {
            config.format = OutputFormat::Json;
        } else if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(precision) = self.precision {
            config.precision = usize::from(precision);
        }
        if self.sequential {
            config.parallel = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let stopwatch = Instant::now();

    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textcompare=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(Config::load()?);
    debug!(?config, "Resolved configuration");

    let loader: Arc<dyn DocumentLoader> = Arc::new(FileLoader);
    let (first, second) = compare::load_pair(
        loader,
        cli.file_1.clone(),
        cli.file_2.clone(),
        config.missing,
        config.parallel,
    )
    .await?;

    let comparison = Comparison::new(first, second);
    let elapsed = stopwatch.elapsed().as_secs_f64();
    info!(elapsed_seconds = elapsed, "Comparison finished");

    match config.format {
        OutputFormat::Text => {
            output::terminal::display_comparison(&comparison, config.precision, elapsed)
        }
        OutputFormat::Json => output::display_json(&comparison, elapsed)?,
    }

    Ok(if comparison.outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
