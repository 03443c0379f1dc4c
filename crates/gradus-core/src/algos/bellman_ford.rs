//! Bellman-Ford shortest path with a step trace

use crate::algos::shared::reconstruct_path;
use crate::algos::types::{BellmanFordRun, BellmanFordStep, ParentMap};
use crate::error::Result;
use crate::graph::Graph;

/// Run Bellman-Ford from `start` to `goal`, recording one step per
/// successful relaxation.
///
/// Makes at most `N-1` passes over the full directed edge list (both
/// directions of every undirected edge, row-major), relaxing on strict
/// improvement. A pass that relaxes nothing emits a single `Converged`
/// step and ends the run early. Negative edge weights are tolerated;
/// negative cycles are not detected, and with one present the reported
/// distances are simply whatever the passes last wrote. That limitation
/// is deliberate, not an oversight.
#[tracing::instrument(skip(graph), fields(graph = %graph.name()))]
pub fn bellman_ford(graph: &Graph, start: usize, goal: usize) -> Result<BellmanFordRun> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let edges = graph.edge_list();
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut parents = ParentMap::new();
    let mut steps: Vec<BellmanFordStep> = Vec::new();

    dist[start] = 0.0;
    parents.insert(start, None);

    for iteration in 1..n {
        let mut changed = false;
        for edge in &edges {
            if !dist[edge.from].is_finite() {
                continue;
            }
            let candidate = dist[edge.from] + edge.weight;
            if candidate < dist[edge.to] {
                let dist_before = dist[edge.to];
                dist[edge.to] = candidate;
                parents.insert(edge.to, Some(edge.from));
                changed = true;

                steps.push(BellmanFordStep::Relaxation {
                    iteration,
                    edge: (edge.from, edge.to),
                    weight: edge.weight,
                    dist_before,
                    dist_after: candidate,
                    dist: dist.clone(),
                    parents: parents.clone(),
                });
            }
        }

        if !changed {
            steps.push(BellmanFordStep::Converged {
                iteration,
                dist: dist.clone(),
                parents: parents.clone(),
            });
            break;
        }
    }

    let path = reconstruct_path(&parents, goal);
    tracing::debug!(steps = steps.len(), path_len = path.len(), "bellman-ford done");

    Ok(BellmanFordRun { steps, path, dist })
}
