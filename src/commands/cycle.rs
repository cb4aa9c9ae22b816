//! `malha cycle` command - whole-graph cycle detection

use crate::cli::{Cli, OutputFormat};
use malha_core::dataset::LoadedGraph;
use malha_core::error::Result;
use malha_core::graph::has_cycle;

/// Execute the cycle command
pub fn execute(cli: &Cli, data: &LoadedGraph) -> Result<()> {
    let found = has_cycle(&data.graph);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "cycle": found });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if found {
                println!("cycle detected");
            } else {
                println!("no cycle");
            }
        }
    }

    Ok(())
}
