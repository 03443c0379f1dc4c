//! Built-in sample graphs
//!
//! Two small undirected graphs used by the CLI as default inputs and by
//! tests as known-answer fixtures. `demo-7` is the classic seven-node
//! shortest-path teaching graph.

use crate::error::{GradusError, Result};
use crate::graph::loader::default_labels;
use crate::graph::model::Graph;

/// Names of the built-in sample graphs.
pub const SAMPLE_NAMES: [&str; 2] = ["demo-11", "demo-7"];

/// Look up a built-in sample graph by name.
pub fn sample(name: &str) -> Result<Graph> {
    match name {
        "demo-11" => demo_11(),
        "demo-7" => demo_7(),
        other => Err(GradusError::SampleNotFound(other.to_string())),
    }
}

fn demo_11() -> Result<Graph> {
    let matrix = vec![
        vec![0.0, 8.0, 0.0, 0.0, 0.0, 0.0, 9.0, 10.0, 6.0, 12.0, 3.0],
        vec![8.0, 0.0, 10.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.0],
        vec![0.0, 10.0, 0.0, 9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0],
        vec![0.0, 0.0, 9.0, 0.0, 13.0, 12.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 2.0, 0.0, 13.0, 0.0, 10.0, 6.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 12.0, 10.0, 0.0, 8.0, 0.0, 0.0, 0.0, 0.0],
        vec![9.0, 0.0, 0.0, 0.0, 6.0, 8.0, 0.0, 7.0, 0.0, 0.0, 0.0],
        vec![10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.0, 0.0, 3.0, 0.0, 0.0],
        vec![6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 10.0, 0.0],
        vec![12.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 8.0],
        vec![3.0, 7.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 8.0, 0.0],
    ];
    Graph::new(matrix, default_labels(11), "demo-11")
}

fn demo_7() -> Result<Graph> {
    let matrix = vec![
        vec![0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![4.0, 0.0, 8.0, 0.0, 0.0, 0.0, 11.0],
        vec![0.0, 8.0, 0.0, 7.0, 0.0, 4.0, 0.0],
        vec![0.0, 0.0, 7.0, 0.0, 9.0, 14.0, 0.0],
        vec![0.0, 0.0, 0.0, 9.0, 0.0, 10.0, 0.0],
        vec![0.0, 0.0, 4.0, 14.0, 10.0, 0.0, 2.0],
        vec![0.0, 11.0, 0.0, 0.0, 0.0, 2.0, 0.0],
    ];
    let labels = ["S", "T", "U", "V", "W", "X", "Y"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Graph::new(matrix, labels, "demo-7")
}
