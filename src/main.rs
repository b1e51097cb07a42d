//! `csv-checker` binary.
//!
//! Usage:
//!   csv-checker [--conf filecheck.cfg] [--summary] [--echo]
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use csv_checker::config::{CheckerConfig, DEFAULT_CONFIG_PATH};
use csv_checker::run::{run_check, CheckOptions};

/// Split a CSV file into accepted and rejected rows using a per-column type schema
#[derive(Parser, Debug)]
#[command(name = "csv-checker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    conf: PathBuf,

    /// Print run counters as JSON on stdout when done
    #[arg(long)]
    summary: bool,

    /// Also write diagnostics to stderr
    #[arg(long)]
    echo: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match CheckerConfig::from_path(&args.conf) {
        Ok(c) => c,
        Err(e) => {
            println!("ERROR opening configuration file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = CheckOptions {
        echo_diagnostics: args.echo,
    };
    match run_check(&config, &options) {
        Ok(outcome) => {
            if args.summary {
                match serde_json::to_string_pretty(&outcome.stats) {
                    Ok(json) => println!("{json}"),
                    Err(e) => tracing::error!(error = %e, "failed to encode summary"),
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_discovery_failure() => {
            println!("{e}");
            std::thread::sleep(config.exit_pause());
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "check failed");
            ExitCode::FAILURE
        }
    }
}
