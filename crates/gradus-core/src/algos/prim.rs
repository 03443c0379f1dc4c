//! Prim minimum spanning tree with a step trace

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::algos::shared::PrimEntry;
use crate::algos::types::{PrimRun, PrimStep};
use crate::graph::{Edge, Graph};

/// Run Prim from node 0, recording one step per node included in the
/// tree.
///
/// The frontier is a lazy-deletion min-heap of candidate edges. Each
/// entry carries the tree-side node that offered it, so the edge
/// recorded on inclusion is the one whose weight actually won the pop;
/// entries made stale by a cheaper route are skipped when they finally
/// surface. Nodes unreachable from node 0 are silently absent from the
/// result.
#[tracing::instrument(skip(graph), fields(graph = %graph.name()))]
pub fn prim(graph: &Graph) -> PrimRun {
    let n = graph.node_count();
    let adjacency = graph.adjacency_list();
    let mut included = vec![false; n];
    let mut include_order: Vec<usize> = Vec::new();
    let mut tree_pairs: Vec<(usize, usize)> = Vec::new();
    let mut heap: BinaryHeap<Reverse<PrimEntry>> = BinaryHeap::new();
    let mut steps: Vec<PrimStep> = Vec::new();

    heap.push(Reverse(PrimEntry {
        weight: 0.0,
        node: 0,
        parent: None,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        if included[entry.node] {
            continue;
        }
        included[entry.node] = true;
        include_order.push(entry.node);

        if let Some(parent) = entry.parent {
            tree_pairs.push((parent, entry.node));
        }

        steps.push(PrimStep {
            current: entry.node,
            included: include_order.clone(),
            tree: tree_pairs.clone(),
        });

        for &(v, w) in &adjacency[entry.node] {
            if !included[v] {
                heap.push(Reverse(PrimEntry {
                    weight: w,
                    node: v,
                    parent: Some(entry.node),
                }));
            }
        }
    }

    let tree: Vec<Edge> = tree_pairs
        .iter()
        .map(|&(u, v)| Edge {
            from: u,
            to: v,
            weight: graph.weight(u, v),
        })
        .collect();
    let total_weight = tree.iter().map(|e| e.weight).sum();

    tracing::debug!(
        steps = steps.len(),
        tree_edges = tree.len(),
        total_weight,
        "prim done"
    );

    PrimRun {
        steps,
        tree,
        total_weight,
    }
}
