//! Graph loading from JSON files
//!
//! Two input shapes are accepted:
//! - `{"matrix": [[...]], "labels": [...]}`: adjacency matrix with
//!   optional labels. Asymmetric cells are reconciled by keeping the
//!   larger of the two mirrored values; the diagonal is zeroed.
//! - `{"edges": [{"from": "A", "to": "B", "weight": 5}, ...]}`: edge
//!   list; the node set is the sorted union of all endpoints and
//!   `weight` defaults to 1.
//!
//! Labels that are missing or do not match the node count fall back to
//! `A`..`Z`, then `N26`, `N27`, ...

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GradusError, Result};
use crate::graph::model::Graph;

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    matrix: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    labels: Option<Vec<String>>,
    #[serde(default)]
    edges: Option<Vec<EdgeSpec>>,
}

#[derive(Debug, Deserialize)]
struct EdgeSpec {
    from: String,
    to: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Load a graph from a JSON file. The graph's display name is the file
/// stem.
pub fn load_path(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");
    load_json(&text, name)
}

/// Parse a graph from JSON text.
pub fn load_json(text: &str, name: &str) -> Result<Graph> {
    let file: GraphFile = serde_json::from_str(text)?;
    if let Some(matrix) = file.matrix {
        from_matrix(matrix, file.labels, name)
    } else if let Some(edges) = file.edges {
        from_edges(&edges, name)
    } else {
        Err(GradusError::MissingRequiredKey)
    }
}

/// Default node labels: `A`..`Z`, then `N26`, `N27`, ...
pub fn default_labels(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i < 26 {
                ((b'A' + i as u8) as char).to_string()
            } else {
                format!("N{}", i)
            }
        })
        .collect()
}

fn from_matrix(mut matrix: Vec<Vec<f64>>, labels: Option<Vec<String>>, name: &str) -> Result<Graph> {
    let n = matrix.len();
    for (row, cells) in matrix.iter().enumerate() {
        if cells.len() != n {
            return Err(GradusError::NonSquareMatrix {
                rows: n,
                row,
                len: cells.len(),
            });
        }
    }

    // Reconcile asymmetric cells by keeping the larger value, and drop
    // self-loops.
    for i in 0..n {
        for j in 0..n {
            if matrix[i][j] != matrix[j][i] {
                let w = matrix[i][j].max(matrix[j][i]);
                matrix[i][j] = w;
                matrix[j][i] = w;
            }
        }
        matrix[i][i] = 0.0;
    }

    let labels = match labels {
        Some(l) if l.len() == n => l,
        _ => default_labels(n),
    };

    Graph::new(matrix, labels, name)
}

fn from_edges(edges: &[EdgeSpec], name: &str) -> Result<Graph> {
    let mut labels: Vec<String> = edges
        .iter()
        .flat_map(|e| [e.from.clone(), e.to.clone()])
        .collect();
    labels.sort();
    labels.dedup();

    let index: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    let n = labels.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for e in edges {
        let u = index[e.from.as_str()];
        let v = index[e.to.as_str()];
        matrix[u][v] = e.weight;
        matrix[v][u] = e.weight;
    }

    Graph::new(matrix, labels, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_matrix_shape_with_labels() {
        let g = load_json(
            r#"{"matrix": [[0, 2], [2, 0]], "labels": ["X", "Y"]}"#,
            "pair",
        )
        .unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.labels(), ["X".to_string(), "Y".to_string()]);
        assert_eq!(g.weight(0, 1), 2.0);
        assert_eq!(g.name(), "pair");
    }

    /// Test that asymmetric cells are reconciled by keeping the max
    #[test]
    fn test_matrix_symmetry_forced() {
        let g = load_json(r#"{"matrix": [[0, 5], [3, 0]]}"#, "asym").unwrap();
        assert_eq!(g.weight(0, 1), 5.0);
        assert_eq!(g.weight(1, 0), 5.0);
    }

    #[test]
    fn test_matrix_diagonal_zeroed() {
        let g = load_json(r#"{"matrix": [[7, 1], [1, 7]]}"#, "loops").unwrap();
        assert_eq!(g.weight(0, 0), 0.0);
        assert_eq!(g.weight(1, 1), 0.0);
    }

    #[test]
    fn test_default_labels_applied_on_mismatch() {
        let g = load_json(
            r#"{"matrix": [[0, 1], [1, 0]], "labels": ["only-one"]}"#,
            "fallback",
        )
        .unwrap();
        assert_eq!(g.labels(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_default_labels_past_alphabet() {
        let labels = default_labels(28);
        assert_eq!(labels[0], "A");
        assert_eq!(labels[25], "Z");
        assert_eq!(labels[26], "N26");
        assert_eq!(labels[27], "N27");
    }

    #[test]
    fn test_edges_shape() {
        let g = load_json(
            r#"{"edges": [
                {"from": "b", "to": "a", "weight": 3},
                {"from": "c", "to": "a"}
            ]}"#,
            "edges",
        )
        .unwrap();
        // Sorted union of endpoints
        assert_eq!(
            g.labels(),
            ["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(g.weight(0, 1), 3.0);
        assert_eq!(g.weight(1, 0), 3.0);
        // Missing weight defaults to 1
        assert_eq!(g.weight(0, 2), 1.0);
    }

    #[test]
    fn test_missing_required_key() {
        let err = load_json(r#"{"nodes": 3}"#, "bad").unwrap_err();
        assert!(matches!(err, GradusError::MissingRequiredKey));
    }

    #[test]
    fn test_non_square_matrix() {
        let err = load_json(r#"{"matrix": [[0, 1], [1]]}"#, "ragged").unwrap_err();
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
    fn test_malformed_json() {
        let err = load_json("{not json", "junk").unwrap_err();
        assert!(matches!(err, GradusError::Json(_)));
    }

    #[test]
    fn test_load_path_uses_file_stem() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ring.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{"matrix": [[0, 1], [1, 0]]}"#).unwrap();

        let g = load_path(&path).unwrap();
        assert_eq!(g.name(), "ring");
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_load_path_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GradusError::Io(_)));
    }
}
