//! Human-readable output for the run command

use crate::cli::Cli;
use gradus_core::algos::{
    AStarRun, Algorithm, BellmanFordRun, BellmanFordStep, DijkstraRun, KruskalRun, PrimRun,
    RunOutcome, TraversalRun,
};
use gradus_core::error::Result;
use gradus_core::graph::{Edge, Graph};
use gradus_core::records::{fmt_cost, fmt_edges, fmt_nodes};

/// Output in human format
pub fn output_human(
    cli: &Cli,
    graph: &Graph,
    algorithm: Algorithm,
    outcome: &RunOutcome,
) -> Result<()> {
    if !cli.quiet {
        println!(
            "{} on {} ({} nodes, {} steps)",
            algorithm,
            graph.name(),
            graph.node_count(),
            outcome.step_count()
        );
        println!();
    }

    match outcome {
        RunOutcome::Traversal(run) => print_traversal(graph, run),
        RunOutcome::Dijkstra(run) => print_dijkstra(graph, run),
        RunOutcome::AStar(run) => print_astar(graph, run),
        RunOutcome::BellmanFord(run) => print_bellman_ford(graph, run),
        RunOutcome::Kruskal(run) => print_kruskal(cli, graph, run),
        RunOutcome::Prim(run) => print_prim(cli, graph, run),
    }

    Ok(())
}

fn print_traversal(graph: &Graph, run: &TraversalRun) {
    let labels = graph.labels();
    for (i, step) in run.steps.iter().enumerate() {
        println!(
            "{:>4}. visit {}  visited: {}",
            i + 1,
            labels[step.current],
            fmt_nodes(&step.visited, labels)
        );
    }
    println!();
    println!("tree: {}", fmt_edges(&run.tree, labels));
    println!(
        "visited {} of {} nodes: {}",
        run.visited.len(),
        graph.node_count(),
        fmt_nodes(&run.visited, labels)
    );
}

fn print_dijkstra(graph: &Graph, run: &DijkstraRun) {
    let labels = graph.labels();
    for (i, step) in run.steps.iter().enumerate() {
        println!(
            "{:>4}. finalize {}  dist={}  visited: {}",
            i + 1,
            labels[step.current],
            fmt_cost(step.dist[step.current]),
            fmt_nodes(&step.visited, labels)
        );
    }
    println!();
    print_path(graph, &run.path, run.cost());
}

fn print_astar(graph: &Graph, run: &AStarRun) {
    let labels = graph.labels();
    for (i, step) in run.steps.iter().enumerate() {
        let g = step
            .g_scores
            .get(&step.current)
            .copied()
            .unwrap_or(f64::INFINITY);
        println!(
            "{:>4}. expand {}  g={}  visited: {}",
            i + 1,
            labels[step.current],
            fmt_cost(g),
            fmt_nodes(&step.visited, labels)
        );
    }
    println!();
    print_path(graph, &run.path, run.cost());
}

fn print_bellman_ford(graph: &Graph, run: &BellmanFordRun) {
    let labels = graph.labels();
    for (i, step) in run.steps.iter().enumerate() {
        match step {
            BellmanFordStep::Relaxation {
                iteration,
                edge,
                weight,
                dist_before,
                dist_after,
                ..
            } => {
                println!(
                    "{:>4}. iter {}: relax {}-{} w={}  {} -> {}",
                    i + 1,
                    iteration,
                    labels[edge.0],
                    labels[edge.1],
                    fmt_cost(*weight),
                    fmt_cost(*dist_before),
                    fmt_cost(*dist_after)
                );
            }
            BellmanFordStep::Converged { iteration, .. } => {
                println!("{:>4}. iter {}: converged, stopping early", i + 1, iteration);
            }
        }
    }
    println!();
    print_path(graph, &run.path, run.cost());
}

fn print_kruskal(cli: &Cli, graph: &Graph, run: &KruskalRun) {
    let labels = graph.labels();
    for (i, step) in run.steps.iter().enumerate() {
        let verdict = if step.accepted { "accept" } else { "reject" };
        println!(
            "{:>4}. {} {}-{} w={}  tree: {}",
            i + 1,
            verdict,
            labels[step.edge.0],
            labels[step.edge.1],
            fmt_cost(step.weight),
            fmt_edges(&step.tree, labels)
        );
    }
    println!();
    print_tree(cli, graph, &run.tree, run.total_weight);
}

fn print_prim(cli: &Cli, graph: &Graph, run: &PrimRun) {
    let labels = graph.labels();
    for (i, step) in run.steps.iter().enumerate() {
        println!(
            "{:>4}. include {}  tree: {}",
            i + 1,
            labels[step.current],
            fmt_edges(&step.tree, labels)
        );
    }
    println!();
    print_tree(cli, graph, &run.tree, run.total_weight);
}

fn print_path(graph: &Graph, path: &[usize], cost: Option<f64>) {
    match cost {
        Some(cost) => println!(
            "path: {}  cost: {}",
            fmt_nodes(path, graph.labels()),
            fmt_cost(cost)
        ),
        None => println!("no path: goal unreachable from start"),
    }
}

fn print_tree(cli: &Cli, graph: &Graph, tree: &[Edge], total_weight: f64) {
    let pairs: Vec<(usize, usize)> = tree.iter().map(|e| (e.from, e.to)).collect();
    println!(
        "mst ({} edges): {}  total weight: {}",
        tree.len(),
        fmt_edges(&pairs, graph.labels()),
        fmt_cost(total_weight)
    );
    // A spanning tree of a connected graph has exactly n-1 edges
    if !cli.quiet && tree.len() + 1 < graph.node_count() {
        println!(
            "({} edges for {} nodes: graph is disconnected)",
            tree.len(),
            graph.node_count()
        );
    }
}
