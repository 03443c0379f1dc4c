//! A* shortest path with a step trace

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::algos::shared::{reconstruct_path, AStarEntry};
use crate::algos::types::{AStarRun, AStarStep, ParentMap};
use crate::error::Result;
use crate::graph::{grid_coords, Graph};

/// Run A* from `start` to `goal`, recording one step per node
/// expansion.
///
/// The frontier is ordered by `f = g + h`, where `h` is the Euclidean
/// distance between synthetic grid coordinates and `g` is the true
/// accumulated cost; relaxation compares `g` alone, exactly as Dijkstra
/// compares `dist`. The heuristic is a known approximation: the grid
/// layout has no relation to the edge weights, so it is not admissible
/// for arbitrary inputs and the reported path can in principle be
/// suboptimal on adversarial graphs. Termination and reconstruction
/// match Dijkstra: stop at the goal's expansion, empty path when the
/// goal is never discovered.
#[tracing::instrument(skip(graph), fields(graph = %graph.name()))]
pub fn astar(graph: &Graph, start: usize, goal: usize) -> Result<AStarRun> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let coords = grid_coords(graph.node_count());
    let h = |node: usize| -> f64 {
        let (x, y) = coords[node];
        let (gx, gy) = coords[goal];
        (gx - x).hypot(gy - y)
    };

    let n = graph.node_count();
    let mut g_scores: BTreeMap<usize, f64> = BTreeMap::new();
    let mut parents = ParentMap::new();
    let mut visited = vec![false; n];
    let mut visit_order: Vec<usize> = Vec::new();
    let mut heap: BinaryHeap<Reverse<AStarEntry>> = BinaryHeap::new();
    let mut steps: Vec<AStarStep> = Vec::new();

    g_scores.insert(start, 0.0);
    parents.insert(start, None);
    heap.push(Reverse(AStarEntry {
        f_score: h(start),
        g_score: 0.0,
        node: start,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let u = entry.node;
        if visited[u] {
            continue;
        }
        visited[u] = true;
        visit_order.push(u);

        steps.push(AStarStep {
            current: u,
            visited: visit_order.clone(),
            g_scores: g_scores.clone(),
            parents: parents.clone(),
        });

        if u == goal {
            break;
        }

        for (v, w) in graph.neighbors(u) {
            let candidate = entry.g_score + w;
            if g_scores.get(&v).is_none_or(|&g| candidate < g) {
                g_scores.insert(v, candidate);
                parents.insert(v, Some(u));
                heap.push(Reverse(AStarEntry {
                    f_score: candidate + h(v),
                    g_score: candidate,
                    node: v,
                }));
            }
        }
    }

    let path = reconstruct_path(&parents, goal);
    tracing::debug!(steps = steps.len(), path_len = path.len(), "astar done");

    Ok(AStarRun {
        steps,
        path,
        g_scores,
    })
}
