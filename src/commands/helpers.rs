//! Helper functions shared across commands

use std::path::Path;

use gradus_core::error::Result;
use gradus_core::graph::{load_path, sample, Graph};

/// Sample used when neither `--graph` nor `--sample` is given
pub const DEFAULT_SAMPLE: &str = "demo-7";

/// Resolve the graph to operate on from `--graph`/`--sample`
///
/// The two flags are mutually exclusive at the clap level; with neither
/// present the default sample is used.
pub fn resolve_graph(graph_path: Option<&Path>, sample_name: Option<&str>) -> Result<Graph> {
    match (graph_path, sample_name) {
        (Some(path), _) => load_path(path),
        (None, Some(name)) => sample(name),
        (None, None) => sample(DEFAULT_SAMPLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_graph_default() {
        let graph = resolve_graph(None, None).unwrap();
        assert_eq!(graph.name(), DEFAULT_SAMPLE);
        assert_eq!(graph.node_count(), 7);
    }

    #[test]
    fn test_resolve_graph_sample() {
        let graph = resolve_graph(None, Some("demo-11")).unwrap();
        assert_eq!(graph.node_count(), 11);
    }

    #[test]
    fn test_resolve_graph_unknown_sample() {
        assert!(resolve_graph(None, Some("demo-99")).is_err());
    }

    #[test]
    fn test_resolve_graph_missing_file() {
        let missing = Path::new("/nonexistent/graph.json");
        assert!(resolve_graph(Some(missing), None).is_err());
    }
}
