//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use duograph_core::config::GlobalConfig;
use duograph_core::error::Result;
use duograph_core::format::OutputFormat;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a GlobalConfig,
    /// Resolved output format (flag, then config, then human)
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: &'a GlobalConfig,
        format: OutputFormat,
        start: Instant,
    ) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
