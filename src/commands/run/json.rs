//! JSON output formatting for the run command

use gradus_core::algos::{Algorithm, RunOutcome};
use gradus_core::error::Result;
use gradus_core::graph::Graph;

/// Output in JSON format
///
/// The run struct serializes as-is, wrapped with the graph and request
/// metadata so the output is self-describing.
pub fn output_json(
    graph: &Graph,
    algorithm: Algorithm,
    start: Option<usize>,
    goal: Option<usize>,
    outcome: &RunOutcome,
) -> Result<()> {
    let mut value = serde_json::to_value(outcome)?;

    if let Some(object) = value.as_object_mut() {
        object.insert(
            "graph".to_string(),
            serde_json::json!({
                "name": graph.name(),
                "nodes": graph.node_count(),
                "labels": graph.labels(),
            }),
        );
        object.insert("algorithm".to_string(), serde_json::json!(algorithm));
        object.insert("start".to_string(), serde_json::json!(start));
        object.insert("goal".to_string(), serde_json::json!(goal));
    }

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
