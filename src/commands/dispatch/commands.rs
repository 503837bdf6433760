//! Command implementations for all duograph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{config, demo, directed, undirected};
use duograph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Directed(args) => directed::execute(ctx, args),
            Commands::Undirected(args) => undirected::execute(ctx, args),
            Commands::Demo { graph } => demo::execute(ctx, *graph),
            Commands::Config => config::execute(ctx),
        }
    }
}
