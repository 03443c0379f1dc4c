//! Step-trace and result types for the algorithm modules
//!
//! Every algorithm returns its complete trace as a vector of steps plus
//! the final artifact derived from the last snapshot. Each step owns
//! its data outright: the vectors and maps inside are copies taken at
//! emission time, never references into the run's working state, so a
//! consumer can replay the trace in any order long after the run ends.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::Edge;

/// Parent pointers for tree and path reconstruction.
///
/// A missing key means the node was never discovered; `None` marks the
/// search root; `Some(u)` means the node was reached via `u`.
pub type ParentMap = BTreeMap<usize, Option<usize>>;

/// One snapshot per visit event in BFS or DFS.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalStep {
    /// Node visited at this step
    pub current: usize,
    /// All nodes visited so far, in visit order
    pub visited: Vec<usize>,
    /// Parent pointers discovered so far
    pub parents: ParentMap,
}

/// One snapshot per node finalization in Dijkstra.
#[derive(Debug, Clone, Serialize)]
pub struct DijkstraStep {
    pub current: usize,
    pub visited: Vec<usize>,
    /// Best-known distance per node; unreached nodes carry infinity,
    /// which serializes as `null`
    pub dist: Vec<f64>,
    pub parents: ParentMap,
}

/// One snapshot per node expansion in A*.
#[derive(Debug, Clone, Serialize)]
pub struct AStarStep {
    pub current: usize,
    pub visited: Vec<usize>,
    /// True accumulated cost for every discovered node
    pub g_scores: BTreeMap<usize, f64>,
    pub parents: ParentMap,
}

/// One Bellman-Ford event: a successful relaxation, or the no-change
/// pass that ends the run early.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BellmanFordStep {
    Relaxation {
        /// 1-based outer pass this relaxation happened in
        iteration: usize,
        /// The directed edge that improved
        edge: (usize, usize),
        weight: f64,
        dist_before: f64,
        dist_after: f64,
        dist: Vec<f64>,
        parents: ParentMap,
    },
    Converged {
        iteration: usize,
        dist: Vec<f64>,
        parents: ParentMap,
    },
}

/// One snapshot per edge examined by Kruskal, accepted or not.
#[derive(Debug, Clone, Serialize)]
pub struct KruskalStep {
    pub edge: (usize, usize),
    pub weight: f64,
    /// False means the edge would have closed a cycle
    pub accepted: bool,
    /// Edges accepted so far
    pub tree: Vec<(usize, usize)>,
}

/// One snapshot per node included by Prim.
#[derive(Debug, Clone, Serialize)]
pub struct PrimStep {
    pub current: usize,
    /// Nodes in the tree so far, in inclusion order
    pub included: Vec<usize>,
    /// Tree edges so far, as (parent, child)
    pub tree: Vec<(usize, usize)>,
}

/// Full trace of a BFS or DFS run.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalRun {
    pub steps: Vec<TraversalStep>,
    /// Search-tree edges (parent, child) from the final parent map
    pub tree: Vec<(usize, usize)>,
    /// Every node reached, in visit order
    pub visited: Vec<usize>,
}

/// Full trace of a Dijkstra run.
#[derive(Debug, Clone, Serialize)]
pub struct DijkstraRun {
    pub steps: Vec<DijkstraStep>,
    /// Start-to-goal node sequence; empty when the goal is unreachable
    pub path: Vec<usize>,
    pub dist: Vec<f64>,
}

impl DijkstraRun {
    /// Cost of the returned path, if one was found.
    pub fn cost(&self) -> Option<f64> {
        self.path.last().map(|&goal| self.dist[goal])
    }
}

/// Full trace of an A* run.
#[derive(Debug, Clone, Serialize)]
pub struct AStarRun {
    pub steps: Vec<AStarStep>,
    pub path: Vec<usize>,
    pub g_scores: BTreeMap<usize, f64>,
}

impl AStarRun {
    /// Cost of the returned path, if one was found.
    pub fn cost(&self) -> Option<f64> {
        self.path.last().and_then(|goal| self.g_scores.get(goal)).copied()
    }
}

/// Full trace of a Bellman-Ford run.
#[derive(Debug, Clone, Serialize)]
pub struct BellmanFordRun {
    pub steps: Vec<BellmanFordStep>,
    pub path: Vec<usize>,
    pub dist: Vec<f64>,
}

impl BellmanFordRun {
    /// Cost of the returned path, if one was found.
    pub fn cost(&self) -> Option<f64> {
        self.path.last().map(|&goal| self.dist[goal])
    }
}

/// Full trace of a Kruskal run.
#[derive(Debug, Clone, Serialize)]
pub struct KruskalRun {
    pub steps: Vec<KruskalStep>,
    /// Accepted edges in acceptance order, with weights
    pub tree: Vec<Edge>,
    pub total_weight: f64,
}

/// Full trace of a Prim run.
#[derive(Debug, Clone, Serialize)]
pub struct PrimRun {
    pub steps: Vec<PrimStep>,
    /// Tree edges in inclusion order, with weights
    pub tree: Vec<Edge>,
    pub total_weight: f64,
}
