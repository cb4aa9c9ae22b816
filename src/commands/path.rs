//! `malha path` command - point-to-point path queries
//!
//! "No path" is a normal outcome, not an error: the human form says so and
//! exits 0, the JSON form reports `reachable: false`.

use crate::cli::{Cli, OutputFormat, PathAlgo};
use malha_core::dataset::LoadedGraph;
use malha_core::error::Result;
use malha_core::graph::{bellman_ford_path, bfs_path, dfs_path, dijkstra};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    data: &LoadedGraph,
    origin: &str,
    destination: &str,
    algo: PathAlgo,
) -> Result<()> {
    let origin = origin.to_string();
    let destination = destination.to_string();

    match algo {
        PathAlgo::Dijkstra => {
            let result = dijkstra(&data.graph, &origin, &destination)?;
            let cost = result.is_reachable().then_some(result.cost);
            print_weighted(cli, &origin, &destination, cost, &result.path)
        }

        PathAlgo::BellmanFord => {
            let result = bellman_ford_path(&data.graph, &origin, &destination)?;
            if result.negative_cycle {
                match cli.format {
                    OutputFormat::Json => {
                        let output = serde_json::json!({
                            "origin": origin,
                            "destination": destination,
                            "negative_cycle": true,
                            "reachable": false,
                            "path": [],
                        });
                        println!("{}", serde_json::to_string_pretty(&output)?);
                    }
                    OutputFormat::Human => {
                        println!("negative cycle detected: distances are undefined");
                    }
                }
                return Ok(());
            }
            let cost = (!result.path.is_empty()).then_some(result.cost);
            print_weighted(cli, &origin, &destination, cost, &result.path)
        }

        PathAlgo::Bfs => {
            let path = bfs_path(&data.graph, &origin, &destination);
            print_hops(cli, &origin, &destination, &path)
        }

        PathAlgo::Dfs => {
            let path = dfs_path(&data.graph, &origin, &destination);
            print_hops(cli, &origin, &destination, &path)
        }
    }
}

fn print_weighted(
    cli: &Cli,
    origin: &str,
    destination: &str,
    cost: Option<f64>,
    path: &[String],
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "origin": origin,
                "destination": destination,
                "reachable": cost.is_some(),
                "cost": cost,
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match cost {
            Some(cost) => println!("cost {}: {}", cost, path.join(" -> ")),
            None => println!("no path from {} to {}", origin, destination),
        },
    }

    Ok(())
}

fn print_hops(cli: &Cli, origin: &str, destination: &str, path: &[String]) -> Result<()> {
    let hops = (!path.is_empty()).then(|| path.len() - 1);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "origin": origin,
                "destination": destination,
                "reachable": !path.is_empty(),
                "hops": hops,
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if path.is_empty() {
                println!("no path from {} to {}", origin, destination);
            } else {
                println!("hops {}: {}", path.len() - 1, path.join(" -> "));
            }
        }
    }

    Ok(())
}
