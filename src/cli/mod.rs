//! CLI argument parsing for duograph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod directed;
pub mod parse;
pub mod undirected;

use clap::{Parser, Subcommand, ValueEnum};

pub use directed::{DirectedArgs, DirectedOp};
pub use duograph_core::format::OutputFormat;
use parse::parse_format;
pub use undirected::{UndirectedArgs, UndirectedOp};

/// Duograph - directed and undirected graph toolkit
#[derive(Parser, Debug)]
#[command(name = "duograph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json (falls back to the configured format)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `duograph_core=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a directed weighted graph (adjacency matrix) and query it
    Directed(DirectedArgs),

    /// Build an undirected graph (adjacency lists) and query it
    Undirected(UndirectedArgs),

    /// Replay the worked examples for one or both graph types
    Demo {
        /// Which graph type to demonstrate (default: both)
        #[arg(value_enum)]
        graph: Option<DemoGraph>,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoGraph {
    Directed,
    Undirected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_directed_invocation() {
        let cli = Cli::try_parse_from([
            "duograph", "--format", "json", "directed", "-e", "0:1:10", "-e", "1:2", "dijkstra",
            "0",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        let Commands::Directed(args) = cli.command else {
            panic!("expected directed command");
        };
        assert_eq!(args.edges.len(), 2);
        assert!(matches!(args.op, DirectedOp::Dijkstra { src: 0 }));
    }

    #[test]
    fn test_parse_undirected_invocation() {
        let cli = Cli::try_parse_from([
            "duograph",
            "undirected",
            "-e",
            "AB",
            "--edge",
            "B-C",
            "--remove-vertex",
            "C",
            "dfs",
            "A",
            "--end",
            "B",
        ])
        .unwrap();

        let Commands::Undirected(args) = cli.command else {
            panic!("expected undirected command");
        };
        assert_eq!(args.removed_vertices, vec!["C".to_string()]);
        assert!(matches!(
            args.op,
            UndirectedOp::Dfs { ref start, end: Some(ref end) } if start == "A" && end == "B"
        ));
    }

    #[test]
    fn test_malformed_edge_is_rejected() {
        let err = Cli::try_parse_from(["duograph", "directed", "-e", "0-1", "edges"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
