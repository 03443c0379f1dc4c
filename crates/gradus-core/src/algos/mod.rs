//! Step-traced graph algorithms
//!
//! Each algorithm runs to completion in a single call and returns every
//! state snapshot it produced plus the final artifact derived from the
//! last one. Consumers replay the returned steps; there is no
//! incremental stepping API, no cancellation, and no shared state
//! between runs, so one graph can serve concurrent runs read-only.

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;
pub mod types;


use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{GradusError, Result};
use crate::graph::Graph;

pub use shared::{reconstruct_path, tree_edges, AStarEntry, MinHeapEntry, PrimEntry, UnionFind};
pub use types::{
    AStarRun, AStarStep, BellmanFordRun, BellmanFordStep, DijkstraRun, DijkstraStep, KruskalRun,
    KruskalStep, ParentMap, PrimRun, PrimStep, TraversalRun, TraversalStep,
};

/// The complete set of algorithms the engine ships.
///
/// Closed by construction: [`run`] matches it exhaustively, so a build
/// cannot quietly lose an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
    BellmanFord,
    Kruskal,
    Prim,
}

impl Algorithm {
    /// All algorithms, in the order they are documented.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
        Algorithm::BellmanFord,
        Algorithm::Kruskal,
        Algorithm::Prim,
    ];

    /// Whether the algorithm takes a start node.
    pub fn needs_start(self) -> bool {
        !matches!(self, Algorithm::Kruskal | Algorithm::Prim)
    }

    /// Whether the algorithm takes a goal node.
    pub fn needs_goal(self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra | Algorithm::Astar | Algorithm::BellmanFord
        )
    }
}

impl FromStr for Algorithm {
    type Err = GradusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::Astar),
            "bellman-ford" => Ok(Algorithm::BellmanFord),
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            other => Err(GradusError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Astar => write!(f, "astar"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
            Algorithm::Kruskal => write!(f, "kruskal"),
            Algorithm::Prim => write!(f, "prim"),
        }
    }
}

/// Outcome of [`run`]: one algorithm's full trace, by family.
///
/// Serializes untagged, so the JSON shape is the inner run struct's.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RunOutcome {
    Traversal(TraversalRun),
    Dijkstra(DijkstraRun),
    AStar(AStarRun),
    BellmanFord(BellmanFordRun),
    Kruskal(KruskalRun),
    Prim(PrimRun),
}

impl RunOutcome {
    /// Number of steps in the trace.
    pub fn step_count(&self) -> usize {
        match self {
            RunOutcome::Traversal(run) => run.steps.len(),
            RunOutcome::Dijkstra(run) => run.steps.len(),
            RunOutcome::AStar(run) => run.steps.len(),
            RunOutcome::BellmanFord(run) => run.steps.len(),
            RunOutcome::Kruskal(run) => run.steps.len(),
            RunOutcome::Prim(run) => run.steps.len(),
        }
    }
}

/// Run `algorithm` on `graph` with the given endpoints.
///
/// `start` is required for everything except Kruskal and Prim, `goal`
/// only for the three shortest-path algorithms; a node passed to an
/// algorithm that does not take it is ignored, not an error.
pub fn run(
    graph: &Graph,
    algorithm: Algorithm,
    start: Option<usize>,
    goal: Option<usize>,
) -> Result<RunOutcome> {
    let need_start =
        |start: Option<usize>| start.ok_or_else(|| missing_node(algorithm, "start"));
    let need_goal = |goal: Option<usize>| goal.ok_or_else(|| missing_node(algorithm, "goal"));

    match algorithm {
        Algorithm::Bfs => Ok(RunOutcome::Traversal(bfs::bfs(graph, need_start(start)?)?)),
        Algorithm::Dfs => Ok(RunOutcome::Traversal(dfs::dfs(graph, need_start(start)?)?)),
        Algorithm::Dijkstra => Ok(RunOutcome::Dijkstra(dijkstra::dijkstra(
            graph,
            need_start(start)?,
            need_goal(goal)?,
        )?)),
        Algorithm::Astar => Ok(RunOutcome::AStar(astar::astar(
            graph,
            need_start(start)?,
            need_goal(goal)?,
        )?)),
        Algorithm::BellmanFord => Ok(RunOutcome::BellmanFord(bellman_ford::bellman_ford(
            graph,
            need_start(start)?,
            need_goal(goal)?,
        )?)),
        Algorithm::Kruskal => Ok(RunOutcome::Kruskal(kruskal::kruskal(graph))),
        Algorithm::Prim => Ok(RunOutcome::Prim(prim::prim(graph))),
    }
}

fn missing_node(algorithm: Algorithm, which: &str) -> GradusError {
    GradusError::UsageError(format!("{} requires a {} node", algorithm, which))
}
