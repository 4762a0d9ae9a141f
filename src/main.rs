//! Fixed Set - Main entrypoint.
//!
//! Reads a data vector and a query vector, builds a perfect hash set over the
//! data and prints one answer per query. Logs go to stderr so stdout carries
//! only answers.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use fixed_set_lib::app::run_queries;
use fixed_set_lib::config::{
    ConfigLoader, FixedSetConfig, LogConfig, OutputFormat, Overrides, ENV_PREFIX,
};
use fixed_set_lib::error::{report_error, ErrorContext, FixedSetError, FixedSetResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "fixed_set", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Seed for the hash function factory
    #[clap(long)]
    seed: Option<u64>,

    /// Memory-repletion ratio: total bucket slots may not exceed this times the key count
    #[clap(long)]
    memory_ratio: Option<usize>,

    /// Answer format
    #[clap(long, value_enum)]
    format: Option<OutputFormat>,

    /// Read input from this file instead of stdin
    #[clap(short, long, value_parser)]
    input: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Answer membership queries (default)
    Query,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> FixedSetResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| FixedSetError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            seed: self.seed,
            memory_ratio: self.memory_ratio,
            format: self.format,
        }
    }
}

fn query(config: &FixedSetConfig, input: Option<&Path>) -> FixedSetResult<()> {
    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let stdout = io::stdout();
    let summary = run_queries(reader, BufWriter::new(stdout.lock()), config)?;
    info!(
        queries = summary.queries,
        hits = summary.hits,
        "queries answered"
    );
    Ok(())
}

fn gen_config(output: &Path) -> FixedSetResult<()> {
    info!("Generating default configuration");
    let default_config = FixedSetConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| FixedSetError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(args: Args) -> FixedSetResult<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();

    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log_config)?;
    fixed_set_lib::init();

    let mut config = loaded?;
    config.apply_overrides(&args.overrides())?;

    match &args.command {
        None | Some(Command::Query) => query(&config, args.input.as_deref()),
        Some(Command::Validate) => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Some(Command::GenConfig { output }) => gen_config(output),
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        report_error(ErrorContext::new(error, "fixed_set"));
        process::exit(1);
    }
}
