//! Duograph - directed and undirected graph toolkit
//!
//! Builds a graph from edge flags and runs one query against it: traversal,
//! path checks, cycle detection, component counts or shortest distances.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use duograph_core::config::GlobalConfig;
use duograph_core::error::{DuographError, ExitCode as DuographExitCode};
use duograph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap may fail before we can inspect it.
            // If JSON was requested, emit a structured error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    // Help and version are informational, not errors
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::MissingSubcommand
                    | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        DuographError::UsageError(err.to_string())
                    }
                    _ => DuographError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = match GlobalConfig::load() {
        Ok(config) => config,
        Err(e) => return report_error(&cli, &e, cli.format.unwrap_or_default()),
    };
    let format = cli.format.or(config.format).unwrap_or_default();

    // Initialize structured logging
    let log_level = cli.log_level.as_deref().or(config.log_level.as_deref());
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, config, format, start) {
        Ok(()) => ExitCode::from(DuographExitCode::Success as u8),
        Err(e) => report_error(&cli, &e, format),
    }
}

fn report_error(cli: &Cli, error: &DuographError, format: OutputFormat) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
