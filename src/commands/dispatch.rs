//! Command dispatch logic for gradus
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use gradus_core::algos::Algorithm;
use gradus_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Run {
            algorithm,
            graph,
            sample,
            start: start_node,
            goal,
        }) => handle_run(
            cli,
            *algorithm,
            graph.as_deref(),
            sample.as_deref(),
            start_node.as_deref(),
            goal.as_deref(),
            start,
        ),

        Some(Commands::Show { graph, sample }) => {
            handle_show(cli, graph.as_deref(), sample.as_deref(), start)
        }

        Some(Commands::Samples) => commands::samples::execute(cli),
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

fn handle_no_command() -> Result<()> {
    println!("gradus {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A step-traced graph algorithm CLI.");
    println!();
    println!("Run `gradus --help` for usage information, or try:");
    println!("  gradus run dijkstra --start S --goal W");
    Ok(())
}

fn handle_run(
    cli: &Cli,
    algorithm: Algorithm,
    graph_path: Option<&Path>,
    sample_name: Option<&str>,
    start_node: Option<&str>,
    goal: Option<&str>,
    start: Instant,
) -> Result<()> {
    let graph = commands::helpers::resolve_graph(graph_path, sample_name)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    commands::run::execute(cli, &graph, algorithm, start_node, goal, start)
}

fn handle_show(
    cli: &Cli,
    graph_path: Option<&Path>,
    sample_name: Option<&str>,
    start: Instant,
) -> Result<()> {
    let graph = commands::helpers::resolve_graph(graph_path, sample_name)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    commands::show::execute(cli, &graph)
}
