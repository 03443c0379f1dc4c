//! Pieces shared by the algorithm modules: lazy-deletion heap entries,
//! union-find, and parent-map reconstruction helpers
//!
//! The heaps never prune stale entries. A node may sit in the frontier
//! several times with different priorities; whoever pops it first wins
//! and later duplicates are skipped by the caller's finalized check.

use std::cmp::Ordering;

use crate::algos::types::ParentMap;

/// Entry in the distance-ordered frontier used by Dijkstra.
///
/// Ordered by priority, then node index, so equal-priority pops come
/// out in a reproducible order. Wrap in `Reverse` for min-heap use.
#[derive(Debug, Clone, Copy)]
pub struct MinHeapEntry {
    pub priority: f64,
    pub node: usize,
}

impl PartialEq for MinHeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinHeapEntry {}

impl PartialOrd for MinHeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinHeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are validated finite at graph construction, so the
        // partial comparison cannot actually fail.
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Entry in the A* frontier.
///
/// Ordered by `f = g + h`, then node index. The true accumulated cost
/// rides along so relaxation never has to look it up again: at the
/// first non-stale pop of a node, `g_score` equals the node's best
/// known cost.
#[derive(Debug, Clone, Copy)]
pub struct AStarEntry {
    pub f_score: f64,
    pub g_score: f64,
    pub node: usize,
}

impl PartialEq for AStarEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AStarEntry {}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .partial_cmp(&other.f_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Entry in the Prim frontier: a candidate edge into the tree.
///
/// `parent` is the tree-side node that offered this edge (`None` seeds
/// the root), so the edge recorded on inclusion is exactly the one
/// whose weight won the pop.
#[derive(Debug, Clone, Copy)]
pub struct PrimEntry {
    pub weight: f64,
    pub node: usize,
    pub parent: Option<usize>,
}

impl PartialEq for PrimEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PrimEntry {}

impl PartialOrd for PrimEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PrimEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.parent.cmp(&other.parent))
    }
}

/// Disjoint-set forest used by Kruskal to detect would-be cycles.
///
/// `find` applies path compression. `union` always attaches `root(u)`
/// under `root(v)`, with no rank or size heuristic, so repeated runs
/// make identical root choices.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Representative of `x`'s component.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point every node on the walk directly at the root.
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the components of `u` and `v`. Returns false when they
    /// were already joined.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            return false;
        }
        self.parent[root_u] = root_v;
        true
    }
}

/// Walk parent pointers from `goal` back to the search root.
///
/// Returns the start-to-goal sequence, or an empty vector when `goal`
/// was never discovered. A parent map corrupted by a negative cycle
/// can contain a loop; the walk is capped at the map size so it always
/// terminates.
pub fn reconstruct_path(parents: &ParentMap, goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut node = Some(goal);
    while let Some(current) = node {
        if path.len() > parents.len() {
            break;
        }
        match parents.get(&current) {
            Some(&parent) => {
                path.push(current);
                node = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Extract the `(parent, child)` edges of a finished parent map,
/// children ascending.
pub fn tree_edges(parents: &ParentMap) -> Vec<(usize, usize)> {
    parents
        .iter()
        .filter_map(|(&child, &parent)| parent.map(|p| (p, child)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    /// Test that the min-heap pops by priority with index tie-break
    #[test]
    fn test_heap_entry_ordering() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(MinHeapEntry {
            priority: 5.0,
            node: 1,
        }));
        heap.push(Reverse(MinHeapEntry {
            priority: 2.0,
            node: 4,
        }));
        heap.push(Reverse(MinHeapEntry {
            priority: 5.0,
            node: 0,
        }));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
        assert_eq!(order, vec![4, 0, 1]);
    }

    #[test]
    fn test_prim_entry_ordering() {
        let cheap = PrimEntry {
            weight: 1.0,
            node: 3,
            parent: Some(0),
        };
        let costly = PrimEntry {
            weight: 7.0,
            node: 1,
            parent: Some(0),
        };
        assert!(cheap < costly);
    }

    #[test]
    fn test_union_find_compression_and_roots() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        // root(0) is attached under root(2): both walk to 3
        assert!(uf.union(0, 2));
        assert_eq!(uf.find(0), 3);
        assert_eq!(uf.find(1), 3);
        assert!(!uf.union(1, 3));
        assert_eq!(uf.find(4), 4);
    }

    #[test]
    fn test_reconstruct_path() {
        let mut parents = ParentMap::new();
        parents.insert(0, None);
        parents.insert(1, Some(0));
        parents.insert(2, Some(1));
        assert_eq!(reconstruct_path(&parents, 2), vec![0, 1, 2]);
        assert_eq!(reconstruct_path(&parents, 0), vec![0]);
        // Undiscovered goal
        assert_eq!(reconstruct_path(&parents, 7), Vec::<usize>::new());
    }

    #[test]
    fn test_tree_edges() {
        let mut parents = ParentMap::new();
        parents.insert(0, None);
        parents.insert(1, Some(0));
        parents.insert(2, Some(0));
        assert_eq!(tree_edges(&parents), vec![(0, 1), (0, 2)]);
    }
}
