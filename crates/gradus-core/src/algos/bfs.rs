//! Breadth-first search with a step trace

use std::collections::VecDeque;

use crate::algos::shared::tree_edges;
use crate::algos::types::{ParentMap, TraversalRun, TraversalStep};
use crate::error::Result;
use crate::graph::Graph;

/// Run breadth-first search from `start`, recording one step per
/// dequeue-and-visit event.
///
/// Nodes come out in non-decreasing hop distance. A node's parent is
/// fixed the first time it is discovered (enqueued), so a node
/// reachable through several frontier nodes keeps its first-seen
/// parent. The queue may hold duplicates; a node already visited when
/// dequeued is skipped without a step.
#[tracing::instrument(skip(graph), fields(graph = %graph.name()))]
pub fn bfs(graph: &Graph, start: usize) -> Result<TraversalRun> {
    graph.check_node(start)?;

    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut visit_order: Vec<usize> = Vec::new();
    let mut parents = ParentMap::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut steps: Vec<TraversalStep> = Vec::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        visit_order.push(u);

        steps.push(TraversalStep {
            current: u,
            visited: visit_order.clone(),
            parents: parents.clone(),
        });

        for (v, _) in graph.neighbors(u) {
            if !visited[v] {
                parents.entry(v).or_insert(Some(u));
                queue.push_back(v);
            }
        }
    }

    tracing::debug!(steps = steps.len(), reached = visit_order.len(), "bfs done");

    Ok(TraversalRun {
        tree: tree_edges(&parents),
        steps,
        visited: visit_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::tests::square_graph;
    use crate::graph::samples::sample;

    /// Test that every reachable node is visited exactly once, in
    /// level order
    #[test]
    fn test_bfs_visit_order() {
        let g = square_graph();
        let run = bfs(&g, 0).unwrap();
        // A's neighbors B and C, then C's neighbor D
        assert_eq!(run.visited, vec![0, 1, 2, 3]);
        assert_eq!(run.steps.len(), 4);
        assert_eq!(run.steps[2].current, 2);
    }

    /// Test that a parent is fixed at first discovery, not at visit
    #[test]
    fn test_bfs_parent_first_discovery() {
        let g = square_graph();
        let run = bfs(&g, 0).unwrap();
        // D is discovered while expanding C
        assert_eq!(run.tree, vec![(0, 1), (0, 2), (2, 3)]);
    }

    #[test]
    fn test_bfs_unreachable_nodes_absent() {
        let weights = vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ];
        let labels = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let g = Graph::new(weights, labels, "split").unwrap();

        let run = bfs(&g, 0).unwrap();
        assert_eq!(run.visited, vec![0, 1]);
        assert!(!run.visited.contains(&2));
    }

    #[test]
    fn test_bfs_level_order_on_sample() {
        let g = sample("demo-7").unwrap();
        let run = bfs(&g, 0).unwrap();
        // S, then T (hop 1), then U and Y (hop 2), then V and X (hop 3)
        assert_eq!(run.visited, vec![0, 1, 2, 6, 3, 5, 4]);
    }

    #[test]
    fn test_bfs_rejects_bad_start() {
        let g = square_graph();
        assert!(bfs(&g, 99).is_err());
    }

    /// Test that early steps hold their own snapshots, not views of
    /// the final state
    #[test]
    fn test_bfs_snapshot_isolation() {
        let g = square_graph();
        let run = bfs(&g, 0).unwrap();
        assert_eq!(run.steps[0].visited, vec![0]);
        assert_eq!(run.steps[0].parents.len(), 1);
        assert_eq!(run.steps.last().unwrap().visited.len(), 4);
    }
}
