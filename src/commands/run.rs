//! `gradus run` command - run one algorithm and print its step trace
//!
//! The dispatcher loads the graph; this module resolves the endpoint
//! references, invokes the algorithm, and hands the outcome to the
//! renderer for the selected output format.

mod human;
mod json;
mod records;

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use gradus_core::algos::{self, Algorithm};
use gradus_core::error::Result;
use gradus_core::graph::Graph;

/// Execute the run command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    algorithm: Algorithm,
    start_node: Option<&str>,
    goal_node: Option<&str>,
    start: Instant,
) -> Result<()> {
    let start_index = start_node.map(|s| graph.resolve_node(s)).transpose()?;
    let goal_index = goal_node.map(|s| graph.resolve_node(s)).transpose()?;

    let outcome = algos::run(graph, algorithm, start_index, goal_index)?;
    gradus_core::trace_time!(start, "run_algorithm", steps = outcome.step_count());
    if cli.verbose {
        eprintln!("run_algorithm: {:?}", start.elapsed());
    }

    match cli.format {
        OutputFormat::Human => human::output_human(cli, graph, algorithm, &outcome),
        OutputFormat::Json => {
            json::output_json(graph, algorithm, start_index, goal_index, &outcome)
        }
        OutputFormat::Records => {
            records::output_records(graph, algorithm, &outcome);
            Ok(())
        }
    }
}
