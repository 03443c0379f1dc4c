//! Records output formatting for the run command
//!
//! One `S` line per step, then a `P` (path) or `T` (tree) result line.

use gradus_core::algos::{
    AStarRun, Algorithm, BellmanFordRun, BellmanFordStep, DijkstraRun, KruskalRun, PrimRun,
    RunOutcome, TraversalRun,
};
use gradus_core::graph::{Edge, Graph};
use gradus_core::records::{fmt_cost, fmt_edges, fmt_nodes};

/// Output in records format
pub fn output_records(graph: &Graph, algorithm: Algorithm, outcome: &RunOutcome) {
    println!(
        "H gradus=1 records=1 graph={} mode=run algorithm={} steps={}",
        graph.name(),
        algorithm,
        outcome.step_count()
    );

    let labels = graph.labels();

    match outcome {
        RunOutcome::Traversal(run) => traversal_records(run, labels),
        RunOutcome::Dijkstra(run) => dijkstra_records(run, labels),
        RunOutcome::AStar(run) => astar_records(run, labels),
        RunOutcome::BellmanFord(run) => bellman_ford_records(run, labels),
        RunOutcome::Kruskal(run) => kruskal_records(run, labels),
        RunOutcome::Prim(run) => prim_records(run, labels),
    }
}

fn traversal_records(run: &TraversalRun, labels: &[String]) {
    for (i, step) in run.steps.iter().enumerate() {
        println!(
            "S {} visit={} visited={}",
            i + 1,
            labels[step.current],
            fmt_nodes(&step.visited, labels)
        );
    }
    println!(
        "T {} visited={}",
        fmt_edges(&run.tree, labels),
        fmt_nodes(&run.visited, labels)
    );
}

fn dijkstra_records(run: &DijkstraRun, labels: &[String]) {
    for (i, step) in run.steps.iter().enumerate() {
        println!(
            "S {} finalize={} dist={} visited={}",
            i + 1,
            labels[step.current],
            fmt_cost(step.dist[step.current]),
            fmt_nodes(&step.visited, labels)
        );
    }
    output_path(&run.path, run.cost(), labels);
}

fn astar_records(run: &AStarRun, labels: &[String]) {
    for (i, step) in run.steps.iter().enumerate() {
        let g = step
            .g_scores
            .get(&step.current)
            .copied()
            .unwrap_or(f64::INFINITY);
        println!(
            "S {} expand={} g={} visited={}",
            i + 1,
            labels[step.current],
            fmt_cost(g),
            fmt_nodes(&step.visited, labels)
        );
    }
    output_path(&run.path, run.cost(), labels);
}

fn bellman_ford_records(run: &BellmanFordRun, labels: &[String]) {
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
                    "S {} iter={} relax={}-{} weight={} before={} after={}",
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
                println!("S {} iter={} converged=true", i + 1, iteration);
            }
        }
    }
    output_path(&run.path, run.cost(), labels);
}

fn kruskal_records(run: &KruskalRun, labels: &[String]) {
    for (i, step) in run.steps.iter().enumerate() {
        println!(
            "S {} edge={}-{} weight={} accepted={} tree={}",
            i + 1,
            labels[step.edge.0],
            labels[step.edge.1],
            fmt_cost(step.weight),
            step.accepted,
            fmt_edges(&step.tree, labels)
        );
    }
    output_tree(&run.tree, run.total_weight, labels);
}

fn prim_records(run: &PrimRun, labels: &[String]) {
    for (i, step) in run.steps.iter().enumerate() {
        println!(
            "S {} include={} tree={}",
            i + 1,
            labels[step.current],
            fmt_edges(&step.tree, labels)
        );
    }
    output_tree(&run.tree, run.total_weight, labels);
}

fn output_path(path: &[usize], cost: Option<f64>, labels: &[String]) {
    match cost {
        Some(cost) => println!("P {} cost={}", fmt_nodes(path, labels), fmt_cost(cost)),
        None => println!("P - cost=inf"),
    }
}

fn output_tree(tree: &[Edge], total_weight: f64, labels: &[String]) {
    let pairs: Vec<(usize, usize)> = tree.iter().map(|e| (e.from, e.to)).collect();
    println!(
        "T {} weight={}",
        fmt_edges(&pairs, labels),
        fmt_cost(total_weight)
    );
}
