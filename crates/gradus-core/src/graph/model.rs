//! Graph model: labeled adjacency matrix and its read-only views

use serde::Serialize;

use crate::error::{GradusError, Result};

/// One directed view of a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// A weighted graph over a dense N×N adjacency matrix, immutable after
/// construction.
///
/// `0.0` encodes "no edge". The JSON loader guarantees symmetry and a
/// zero diagonal; `Graph::new` itself only enforces shape, labels, and
/// finite weights, so a caller constructing a matrix directly may build
/// a directed graph if it wants one.
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    labels: Vec<String>,
    weights: Vec<Vec<f64>>,
}

impl Graph {
    /// Build a graph from an adjacency matrix and one label per node.
    ///
    /// Fails with a data error when the matrix is empty or ragged, the
    /// label count does not match, or any weight is non-finite.
    pub fn new(weights: Vec<Vec<f64>>, labels: Vec<String>, name: impl Into<String>) -> Result<Self> {
        let n = weights.len();
        if n == 0 {
            return Err(GradusError::EmptyGraph);
        }
        for (row, cells) in weights.iter().enumerate() {
            if cells.len() != n {
                return Err(GradusError::NonSquareMatrix {
                    rows: n,
                    row,
                    len: cells.len(),
                });
            }
            for (col, &w) in cells.iter().enumerate() {
                if !w.is_finite() {
                    return Err(GradusError::NonFiniteWeight { from: row, to: col });
                }
            }
        }
        if labels.len() != n {
            return Err(GradusError::LabelCountMismatch {
                labels: labels.len(),
                nodes: n,
            });
        }

        Ok(Self {
            name: name.into(),
            labels,
            weights,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of node `i`. Panics if `i` is out of range.
    pub fn label(&self, i: usize) -> &str {
        &self.labels[i]
    }

    /// Weight of the `u -> v` cell; `0.0` means no edge.
    pub fn weight(&self, u: usize, v: usize) -> f64 {
        self.weights[u][v]
    }

    /// Index of the node with the given label, if any.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Resolve a node reference given as a label or a numeric index.
    ///
    /// Labels win over digits, so a graph labeling a node `"7"` keeps
    /// that name addressable.
    pub fn resolve_node(&self, reference: &str) -> Result<usize> {
        if let Some(i) = self.index_of(reference) {
            return Ok(i);
        }
        if let Ok(i) = reference.parse::<usize>() {
            self.check_node(i)?;
            return Ok(i);
        }
        Err(GradusError::UnknownLabel(reference.to_string()))
    }

    /// Validate that `i` names a node of this graph.
    pub fn check_node(&self, i: usize) -> Result<()> {
        if i >= self.node_count() {
            return Err(GradusError::IndexOutOfRange {
                index: i,
                n: self.node_count(),
            });
        }
        Ok(())
    }

    /// Positive-weight neighbors of `u` in ascending index order.
    ///
    /// This is the traversal view: zero cells are absent edges and
    /// negative cells are excluded on purpose, since the algorithms
    /// that walk neighbors assume non-negative costs.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights[u]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0.0)
            .map(|(v, &w)| (v, w))
    }

    /// Every non-zero cell as a directed edge, row-major.
    ///
    /// Both directions of an undirected edge appear, and negative
    /// weights are kept. This is the relaxation view used by
    /// Bellman-Ford.
    pub fn edge_list(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (u, row) in self.weights.iter().enumerate() {
            for (v, &w) in row.iter().enumerate() {
                if w != 0.0 {
                    edges.push(Edge {
                        from: u,
                        to: v,
                        weight: w,
                    });
                }
            }
        }
        edges
    }

    /// Each positive-weight undirected edge once, upper triangle only
    /// (`from < to`), row-major.
    pub fn undirected_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for u in 0..self.node_count() {
            for v in (u + 1)..self.node_count() {
                let w = self.weights[u][v];
                if w > 0.0 {
                    edges.push(Edge {
                        from: u,
                        to: v,
                        weight: w,
                    });
                }
            }
        }
        edges
    }

    /// Per-node list of `(neighbor, weight)` pairs over non-zero cells,
    /// neighbors ascending. Negative weights are kept.
    pub fn adjacency_list(&self) -> Vec<Vec<(usize, f64)>> {
        self.weights
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w != 0.0)
                    .map(|(v, &w)| (v, w))
                    .collect()
            })
            .collect()
    }

    /// Number of positive-weight undirected edges.
    pub fn edge_count(&self) -> usize {
        self.undirected_edges().len()
    }
}

/// Synthetic 2D coordinates for heuristic distance estimates.
///
/// Nodes are laid out row-major on a near-square grid with
/// `ceil(sqrt(n))` columns; node `i` sits at `(i % cols, i / cols)`.
/// The layout is purely positional and knows nothing about edge
/// weights.
pub fn grid_coords(n: usize) -> Vec<(f64, f64)> {
    let cols = ((n as f64).sqrt().ceil() as usize).max(1);
    (0..n)
        .map(|i| ((i % cols) as f64, (i / cols) as f64))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Triangle with a pendant fourth node, shared across modules.
    pub(crate) fn square_graph() -> Graph {
        let weights = vec![
            vec![0.0, 1.0, 4.0, 0.0],
            vec![1.0, 0.0, 2.0, 0.0],
            vec![4.0, 2.0, 0.0, 1.0],
            vec![0.0, 0.0, 1.0, 0.0],
        ];
        let labels = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        Graph::new(weights, labels, "square").unwrap()
    }

    #[test]
    fn test_rejects_empty_matrix() {
        let err = Graph::new(vec![], vec![], "empty").unwrap_err();
        assert!(matches!(err, GradusError::EmptyGraph));
    }

    #[test]
    fn test_rejects_ragged_matrix() {
        let weights = vec![vec![0.0, 1.0], vec![1.0]];
        let labels = vec!["A".to_string(), "B".to_string()];
        let err = Graph::new(weights, labels, "ragged").unwrap_err();
        assert!(matches!(
            err,
            GradusError::NonSquareMatrix {
                rows: 2,
                row: 1,
                len: 1
            }
        ));
    }

    #[test]
    fn test_rejects_label_mismatch() {
        let weights = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let labels = vec!["A".to_string()];
        let err = Graph::new(weights, labels, "bad-labels").unwrap_err();
        assert!(matches!(
            err,
            GradusError::LabelCountMismatch { labels: 1, nodes: 2 }
        ));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let weights = vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]];
        let labels = vec!["A".to_string(), "B".to_string()];
        let err = Graph::new(weights, labels, "inf").unwrap_err();
        assert!(matches!(
            err,
            GradusError::NonFiniteWeight { from: 0, to: 1 }
        ));
    }

    #[test]
    fn test_neighbors_positive_ascending() {
        let g = square_graph();
        let neighbors: Vec<(usize, f64)> = g.neighbors(2).collect();
        assert_eq!(neighbors, vec![(0, 4.0), (1, 2.0), (3, 1.0)]);
    }

    /// Test that negative cells appear in the relaxation view but not
    /// in the traversal view
    #[test]
    fn test_negative_weight_views() {
        let weights = vec![vec![0.0, -2.0], vec![-2.0, 0.0]];
        let labels = vec!["A".to_string(), "B".to_string()];
        let g = Graph::new(weights, labels, "negative").unwrap();

        assert_eq!(g.neighbors(0).count(), 0);
        assert_eq!(g.undirected_edges().len(), 0);

        let edges = g.edge_list();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].weight, -2.0);
        assert_eq!(g.adjacency_list()[0], vec![(1, -2.0)]);
    }

    #[test]
    fn test_edge_list_both_directions_row_major() {
        let g = square_graph();
        let pairs: Vec<(usize, usize)> = g.edge_list().iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn test_undirected_edges_upper_triangle() {
        let g = square_graph();
        let pairs: Vec<(usize, usize)> = g
            .undirected_edges()
            .iter()
            .map(|e| (e.from, e.to))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_resolve_node() {
        let g = square_graph();
        assert_eq!(g.resolve_node("C").unwrap(), 2);
        assert_eq!(g.resolve_node("3").unwrap(), 3);
        assert!(matches!(
            g.resolve_node("9").unwrap_err(),
            GradusError::IndexOutOfRange { index: 9, n: 4 }
        ));
        assert!(matches!(
            g.resolve_node("Z").unwrap_err(),
            GradusError::UnknownLabel(_)
        ));
    }

    #[test]
    fn test_grid_coords_layout() {
        // 7 nodes, ceil(sqrt(7)) = 3 columns
        let coords = grid_coords(7);
        assert_eq!(coords.len(), 7);
        assert_eq!(coords[0], (0.0, 0.0));
        assert_eq!(coords[2], (2.0, 0.0));
        assert_eq!(coords[3], (0.0, 1.0));
        assert_eq!(coords[6], (0.0, 2.0));
    }
}
