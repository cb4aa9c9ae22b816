//! `malha rank` command - ranked node lists

use crate::cli::{Cli, OutputFormat, RankBy};
use malha_core::dataset::LoadedGraph;
use malha_core::error::{MalhaError, Result};
use malha_core::metrics::{rank_by_degree, rank_by_ego_density};

/// Execute the rank command
pub fn execute(cli: &Cli, data: &LoadedGraph, by: RankBy, top: Option<usize>) -> Result<()> {
    match by {
        RankBy::Degree => {
            let mut rows = rank_by_degree(&data.graph);
            truncate(&mut rows, top);

            match cli.format {
                OutputFormat::Json => {
                    let output: Vec<serde_json::Value> = rows
                        .iter()
                        .map(|(node, degree)| {
                            serde_json::json!({ "node": node, "degree": degree })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    for (position, (node, degree)) in rows.iter().enumerate() {
                        println!("{}. {} (degree {})", position + 1, node, degree);
                    }
                }
            }
        }

        RankBy::EgoDensity => {
            let mut rows = rank_by_ego_density(&data.graph);
            truncate(&mut rows, top);

            match cli.format {
                OutputFormat::Json => {
                    let output: Vec<serde_json::Value> = rows
                        .iter()
                        .map(|(node, density)| {
                            serde_json::json!({ "node": node, "ego_density": density })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    for (position, (node, density)) in rows.iter().enumerate() {
                        println!("{}. {} (ego density {:.4})", position + 1, node, density);
                    }
                }
            }
        }

        RankBy::Wins => {
            if data.wins.is_empty() {
                return Err(MalhaError::UsageError(
                    "--by wins requires a winner column in the edge list".to_string(),
                ));
            }

            let mut rows = data.wins.ranking();
            truncate(&mut rows, top);

            match cli.format {
                OutputFormat::Json => {
                    let output: Vec<serde_json::Value> = rows
                        .iter()
                        .map(|(node, wins)| serde_json::json!({ "node": node, "wins": wins }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    for (position, (node, wins)) in rows.iter().enumerate() {
                        println!("{}. {} ({} wins)", position + 1, node, wins);
                    }
                }
            }
        }
    }

    Ok(())
}

fn truncate<T>(rows: &mut Vec<T>, top: Option<usize>) {
    if let Some(n) = top {
        rows.truncate(n);
    }
}
