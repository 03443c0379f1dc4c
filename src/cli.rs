//! CLI argument parsing for gradus
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gradus_core::algos::Algorithm;
pub use gradus_core::format::OutputFormat;
use parse::{parse_algorithm, parse_format};

/// Gradus - step-traced graph algorithm CLI
#[derive(Parser, Debug)]
#[command(name = "gradus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an algorithm and print its step trace
    Run {
        /// Algorithm to run (bfs, dfs, dijkstra, astar, bellman-ford, kruskal, prim)
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,

        /// Load the graph from a JSON file
        #[arg(long, conflicts_with = "sample")]
        graph: Option<PathBuf>,

        /// Use a built-in sample graph
        #[arg(long)]
        sample: Option<String>,

        /// Start node, as a label or a numeric index
        #[arg(long, short)]
        start: Option<String>,

        /// Goal node, as a label or a numeric index
        #[arg(long, short)]
        goal: Option<String>,
    },

    /// Show a graph without running anything
    Show {
        /// Load the graph from a JSON file
        #[arg(long, conflicts_with = "sample")]
        graph: Option<PathBuf>,

        /// Use a built-in sample graph
        #[arg(long)]
        sample: Option<String>,
    },

    /// List built-in sample graphs
    Samples,
}
