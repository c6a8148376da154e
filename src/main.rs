//! Cuckoo Table - command-line entrypoint.
//!
//! Builds a table from configuration, inserts the given entries in order,
//! looks up keys, and prints the table contents.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cuckoo_table_lib::config::{self, AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use cuckoo_table_lib::error::{AppError, AppResult};
use cuckoo_table_lib::table::{CuckooTable, Entry};

/// Command line arguments for the cuckoo table tool.
#[derive(Parser, Debug)]
#[clap(name = "cuckoo_table", version, author, about)]
struct Args {
    /// Path to configuration file (TOML or JSON)
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert entries into a fresh table and inspect it
    Run {
        /// Entry to insert, as KEY=VALUE; repeatable, inserted in order
        #[clap(short, long = "entry", value_parser = parse_entry)]
        entries: Vec<Entry>,

        /// Key to look up after inserting; repeatable
        #[clap(short, long = "lookup")]
        lookups: Vec<u64>,

        /// Print both tables slot by slot
        #[clap(long)]
        dump: bool,

        /// Print lookup results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Parses a `KEY=VALUE` command-line entry.
fn parse_entry(raw: &str) -> Result<Entry, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    let key = key
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid key {key:?}: {e}"))?;
    Ok(Entry::new(key, value))
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Inserts `entries` in order, then reports lookups and optionally the dump.
fn run(
    config: &AppConfig,
    entries: Vec<Entry>,
    lookups: &[u64],
    dump: bool,
    json: bool,
) -> AppResult<()> {
    let mut table = CuckooTable::with_config(&config.table)?;
    info!(
        size = table.size(),
        max_displacements = table.max_displacements(),
        "Table created"
    );

    let mut rejected = 0usize;
    for entry in entries {
        let (key, value) = entry.into_parts();
        match table.try_insert(key, value) {
            Ok(outcome) => info!(key, ?outcome, "Inserted"),
            Err(err) => {
                let err = AppError::from(err);
                if !err.is_table_full() {
                    return Err(err);
                }
                warn!(key, "{err}");
                rejected += 1;
            }
        }
    }
    info!(stored = table.len(), rejected, load_factor = table.load_factor(), "Inserts finished");

    if json {
        let found: Vec<Option<Entry>> = lookups.iter().map(|&key| table.lookup(key)).collect();
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for &key in lookups {
            match table.get(key) {
                Some(value) => println!("{key}: {value}"),
                None => println!("{key}: absent"),
            }
        }
    }

    if dump {
        print!("{}", table.dump());
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> AppResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command {
        Command::Run {
            entries,
            lookups,
            dump,
            json,
        } => {
            let config = match loader.load() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Configuration error: {e}");
                    process::exit(1);
                }
            };
            init_logging(&config.log)?;
            run(&config, entries, &lookups, dump, json)
        }
        Command::Validate => {
            init_logging(&LogConfig::default())?;
            info!("Validating configuration");
            match loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let text = config::to_toml(&AppConfig::default())?;
            std::fs::write(&output, text)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
