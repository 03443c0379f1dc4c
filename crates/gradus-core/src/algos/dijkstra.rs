//! Dijkstra shortest path with a step trace

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::algos::shared::{reconstruct_path, MinHeapEntry};
use crate::algos::types::{DijkstraRun, DijkstraStep, ParentMap};
use crate::error::Result;
use crate::graph::Graph;

/// Run Dijkstra from `start` to `goal`, recording one step per node
/// finalization.
///
/// Non-negative weights are a precondition, not a runtime check;
/// negative weights give wrong distances but nothing worse. The run
/// stops as soon as the goal is finalized, so the goal's step, when it
/// is reachable, is the last in the trace. An unreachable goal is not
/// an error: the path comes back empty and the distance vector still
/// holds correct values for every node that was reached.
#[tracing::instrument(skip(graph), fields(graph = %graph.name()))]
pub fn dijkstra(graph: &Graph, start: usize, goal: usize) -> Result<DijkstraRun> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut parents = ParentMap::new();
    let mut visited = vec![false; n];
    let mut visit_order: Vec<usize> = Vec::new();
    let mut heap: BinaryHeap<Reverse<MinHeapEntry>> = BinaryHeap::new();
    let mut steps: Vec<DijkstraStep> = Vec::new();

    dist[start] = 0.0;
    parents.insert(start, None);
    heap.push(Reverse(MinHeapEntry {
        priority: 0.0,
        node: start,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let u = entry.node;
        if visited[u] {
            continue;
        }
        visited[u] = true;
        visit_order.push(u);

        steps.push(DijkstraStep {
            current: u,
            visited: visit_order.clone(),
            dist: dist.clone(),
            parents: parents.clone(),
        });

        if u == goal {
            break;
        }

        for (v, w) in graph.neighbors(u) {
            let candidate = entry.priority + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                parents.insert(v, Some(u));
                heap.push(Reverse(MinHeapEntry {
                    priority: candidate,
                    node: v,
                }));
            }
        }
    }

    let path = reconstruct_path(&parents, goal);
    tracing::debug!(steps = steps.len(), path_len = path.len(), "dijkstra done");

    Ok(DijkstraRun { steps, path, dist })
}
