//! `gradus samples` command - list built-in sample graphs

use crate::cli::{Cli, OutputFormat};
use gradus_core::error::Result;
use gradus_core::graph::{sample, SAMPLE_NAMES};

/// Execute the samples command
pub fn execute(cli: &Cli) -> Result<()> {
    let mut entries = Vec::with_capacity(SAMPLE_NAMES.len());
    for name in SAMPLE_NAMES {
        let graph = sample(name)?;
        entries.push((name, graph.node_count(), graph.edge_count()));
    }

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = entries
                .iter()
                .map(|&(name, nodes, edges)| {
                    serde_json::json!({
                        "name": name,
                        "nodes": nodes,
                        "edges": edges,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (name, nodes, edges) in &entries {
                println!("{}: {} nodes, {} edges", name, nodes, edges);
            }
        }
        OutputFormat::Records => {
            println!(
                "H gradus=1 records=1 mode=samples count={}",
                entries.len()
            );
            for (name, nodes, edges) in &entries {
                println!("G {} nodes={} edges={}", name, nodes, edges);
            }
        }
    }

    Ok(())
}
