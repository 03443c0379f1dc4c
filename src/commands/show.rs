//! `gradus show` command - display a graph without running anything

use crate::cli::{Cli, OutputFormat};
use gradus_core::error::Result;
use gradus_core::graph::Graph;
use gradus_core::records::fmt_cost;

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": graph.name(),
                "nodes": graph.node_count(),
                "labels": graph.labels(),
                "edges": graph.undirected_edges(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "{}: {} nodes, {} edges",
                graph.name(),
                graph.node_count(),
                graph.edge_count()
            );
            println!("labels: {}", graph.labels().join(","));

            let edges = graph.undirected_edges();
            if edges.is_empty() {
                if !cli.quiet {
                    println!("no edges");
                }
            } else {
                println!("edges:");
                for edge in &edges {
                    println!(
                        "  {}-{}  {}",
                        graph.label(edge.from),
                        graph.label(edge.to),
                        fmt_cost(edge.weight)
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H gradus=1 records=1 graph={} mode=show nodes={} edges={}",
                graph.name(),
                graph.node_count(),
                graph.edge_count()
            );
            println!("N {}", graph.labels().join(","));
            for edge in graph.undirected_edges() {
                println!(
                    "E {}-{} {}",
                    graph.label(edge.from),
                    graph.label(edge.to),
                    fmt_cost(edge.weight)
                );
            }
        }
    }

    Ok(())
}
