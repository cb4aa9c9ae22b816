//! `malha tree` command - traversal tree from an origin node

use crate::cli::{Cli, OutputFormat, TreeAlgo};
use malha_core::dataset::LoadedGraph;
use malha_core::error::Result;
use malha_core::graph::{bfs_tree, dfs_tree};

/// Execute the tree command
pub fn execute(cli: &Cli, data: &LoadedGraph, origin: &str, algo: TreeAlgo) -> Result<()> {
    let origin = origin.to_string();

    match algo {
        TreeAlgo::Bfs => {
            let tree = bfs_tree(&data.graph, &origin)?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
                OutputFormat::Human => {
                    // Level order, names breaking ties, root first
                    let mut rows: Vec<(&String, u32)> =
                        tree.level.iter().map(|(node, level)| (node, *level)).collect();
                    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

                    for (node, level) in rows {
                        match &tree.parent[node] {
                            Some(parent) => println!("{node}: level {level}, parent {parent}"),
                            None => println!("{node}: level {level}, root"),
                        }
                    }
                }
            }
        }

        TreeAlgo::Dfs => {
            let tree = dfs_tree(&data.graph, &origin)?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
                OutputFormat::Human => {
                    // Discovery order
                    let mut rows: Vec<(&String, u32)> = tree
                        .discovery
                        .iter()
                        .map(|(node, number)| (node, *number))
                        .collect();
                    rows.sort_by_key(|(_, number)| *number);

                    for (node, number) in rows {
                        match &tree.parent[node] {
                            Some(parent) => println!("{node}: discovered {number}, parent {parent}"),
                            None => println!("{node}: discovered {number}, root"),
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
