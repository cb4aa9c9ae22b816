//! `malha classify` command - DFS edge classification listing

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use malha_core::dataset::LoadedGraph;
use malha_core::error::Result;
use malha_core::graph::{classify_edges, EdgeKind};

#[derive(Serialize)]
struct ClassifiedEdge {
    source: String,
    target: String,
    kind: EdgeKind,
}

/// Execute the classify command
pub fn execute(cli: &Cli, data: &LoadedGraph) -> Result<()> {
    let classes = classify_edges(&data.graph);

    let mut rows: Vec<ClassifiedEdge> = classes
        .into_iter()
        .map(|((source, target), kind)| ClassifiedEdge {
            source,
            target,
            kind,
        })
        .collect();
    rows.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Human => {
            for row in &rows {
                println!("{} -- {}: {}", row.source, row.target, row.kind);
            }
        }
    }

    Ok(())
}
