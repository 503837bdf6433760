//! Command dispatch logic for duograph

use std::time::Instant;

use crate::cli::Cli;
use duograph_core::config::GlobalConfig;
use duograph_core::error::Result;
use duograph_core::format::OutputFormat;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::Command;

pub fn run(cli: &Cli, config: GlobalConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, &config, format, start);

    let result = cli.command.execute(&ctx);
    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}
