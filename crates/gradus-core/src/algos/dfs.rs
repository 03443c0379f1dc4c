//! Depth-first search with a step trace

use crate::algos::shared::tree_edges;
use crate::algos::types::{ParentMap, TraversalRun, TraversalStep};
use crate::error::Result;
use crate::graph::Graph;

/// Run depth-first search from `start`, visiting neighbors in ascending
/// index order and recording one step per visit, pre-order.
///
/// The descent uses an explicit stack of `(node, next_neighbor)` frames
/// instead of recursion, so graph size cannot exhaust the call stack.
/// When a frame resumes after its subtree finishes, it rescans from
/// `next_neighbor` against the visited set as it is *now*, which is
/// exactly what the recursive formulation does on return.
#[tracing::instrument(skip(graph), fields(graph = %graph.name()))]
pub fn dfs(graph: &Graph, start: usize) -> Result<TraversalRun> {
    graph.check_node(start)?;

    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut visit_order: Vec<usize> = Vec::new();
    let mut parents = ParentMap::new();
    let mut steps: Vec<TraversalStep> = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    parents.insert(start, None);
    visited[start] = true;
    visit_order.push(start);
    steps.push(TraversalStep {
        current: start,
        visited: visit_order.clone(),
        parents: parents.clone(),
    });
    stack.push((start, 0));

    while let Some((u, next)) = stack.pop() {
        for v in next..n {
            if graph.weight(u, v) > 0.0 && !visited[v] {
                // Park this frame one past v, then descend.
                stack.push((u, v + 1));

                parents.insert(v, Some(u));
                visited[v] = true;
                visit_order.push(v);
                steps.push(TraversalStep {
                    current: v,
                    visited: visit_order.clone(),
                    parents: parents.clone(),
                });
                stack.push((v, 0));
                break;
            }
        }
    }

    tracing::debug!(steps = steps.len(), reached = visit_order.len(), "dfs done");

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

    /// Test pre-order descent into the lowest-index unvisited neighbor
    #[test]
    fn test_dfs_visit_order() {
        let g = square_graph();
        let run = dfs(&g, 0).unwrap();
        // A -> B -> C -> D, all by first unvisited neighbor
        assert_eq!(run.visited, vec![0, 1, 2, 3]);
        assert_eq!(run.tree, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_dfs_backtracks() {
        // Star around node 0 plus a 1-2 shortcut: after finishing the
        // branch through 1, the root frame resumes and skips 2.
        let weights = vec![
            vec![0.0, 1.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0, 0.0],
            vec![1.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
        ];
        let labels = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let g = Graph::new(weights, labels, "star").unwrap();

        let run = dfs(&g, 0).unwrap();
        assert_eq!(run.visited, vec![0, 1, 2, 3]);
        // C was reached through B, D through the resumed root frame
        assert_eq!(run.tree, vec![(0, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn test_dfs_on_sample() {
        let g = sample("demo-7").unwrap();
        let run = dfs(&g, 0).unwrap();
        // S T U V W X Y: each step descends into the lowest neighbor
        assert_eq!(run.visited, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(run.steps.len(), 7);
    }

    #[test]
    fn test_dfs_rejects_bad_start() {
        let g = square_graph();
        assert!(dfs(&g, 7).is_err());
    }

    #[test]
    fn test_dfs_snapshot_isolation() {
        let g = square_graph();
        let run = dfs(&g, 0).unwrap();
        assert_eq!(run.steps[1].visited, vec![0, 1]);
        assert_eq!(run.steps.last().unwrap().visited.len(), 4);
    }
}
