//! `malha metrics` command - global, per-group, and ego-network metrics

use std::path::Path;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use malha_core::dataset::LoadedGraph;
use malha_core::error::{MalhaError, Result};
use malha_core::metrics::{self, EgoMetrics, GlobalMetrics, GroupMetrics};
use malha_core::report;

#[derive(Serialize)]
struct MetricsReport {
    global: GlobalMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<GroupMetrics>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ego: Option<Vec<EgoMetrics<String>>>,
}

/// Execute the metrics command
pub fn execute(
    cli: &Cli,
    data: &LoadedGraph,
    by_group: bool,
    ego: bool,
    out: Option<&Path>,
) -> Result<()> {
    if by_group && data.groups.is_empty() {
        return Err(MalhaError::UsageError(
            "--by-group requires a node list with a group column (see --nodes)".to_string(),
        ));
    }

    let report = MetricsReport {
        global: metrics::global_metrics(&data.graph),
        groups: by_group.then(|| metrics::group_metrics(&data.graph, &data.groups)),
        ego: ego.then(|| metrics::ego_metrics(&data.graph)),
    };

    if let Some(dir) = out {
        let path = dir.join("metrics.json");
        report::write_json(&path, &report)?;
        if !cli.quiet {
            eprintln!("wrote {}", path.display());
        }
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", report.global.order);
            println!("edges: {}", report.global.size);
            println!("density: {:.4}", report.global.density);

            if let Some(groups) = &report.groups {
                for g in groups {
                    println!(
                        "group {}: nodes {} edges {} density {:.4}",
                        g.group, g.order, g.size, g.density
                    );
                }
            }

            if let Some(rows) = &report.ego {
                for row in rows {
                    println!(
                        "ego {}: degree {} nodes {} edges {} density {:.4}",
                        row.node, row.degree, row.ego_order, row.ego_size, row.ego_density
                    );
                }
            }
        }
    }

    Ok(())
}
