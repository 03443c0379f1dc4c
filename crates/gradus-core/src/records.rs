//! Utilities for records output format
//!
//! Small, pure formatting helpers shared by the records and human
//! renderers in the CLI. Empty collections render as `-` so every
//! field keeps its column.

/// Format a cost or weight for display.
///
/// Whole values drop the trailing `.0`; an unreachable distance
/// (positive infinity) renders as `inf`.
pub fn fmt_cost(value: f64) -> String {
    if value == f64::INFINITY {
        "inf".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format a node index list as comma-separated labels.
pub fn fmt_nodes(nodes: &[usize], labels: &[String]) -> String {
    if nodes.is_empty() {
        return "-".to_string();
    }
    nodes
        .iter()
        .map(|&i| labels[i].as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Format an edge list as comma-separated `from-to` label pairs.
pub fn fmt_edges(edges: &[(usize, usize)], labels: &[String]) -> String {
    if edges.is_empty() {
        return "-".to_string();
    }
    edges
        .iter()
        .map(|&(u, v)| format!("{}-{}", labels[u], labels[v]))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["S", "T", "U"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fmt_cost() {
        assert_eq!(fmt_cost(4.0), "4");
        assert_eq!(fmt_cost(2.5), "2.5");
        assert_eq!(fmt_cost(0.0), "0");
        assert_eq!(fmt_cost(-3.0), "-3");
        assert_eq!(fmt_cost(f64::INFINITY), "inf");
    }

    #[test]
    fn test_fmt_nodes() {
        assert_eq!(fmt_nodes(&[0, 1, 2], &labels()), "S,T,U");
        assert_eq!(fmt_nodes(&[2], &labels()), "U");
        assert_eq!(fmt_nodes(&[], &labels()), "-");
    }

    #[test]
    fn test_fmt_edges() {
        assert_eq!(fmt_edges(&[(0, 1), (1, 2)], &labels()), "S-T,T-U");
        assert_eq!(fmt_edges(&[], &labels()), "-");
    }
}
