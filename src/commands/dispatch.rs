//! Command dispatch logic for malha

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use malha_core::dataset::{self, LoadedGraph};
use malha_core::error::{MalhaError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let data = load_dataset(cli)?;

    if cli.verbose {
        eprintln!("load_dataset: {:?}", start.elapsed());
    }

    match &cli.command {
        Commands::Metrics { by_group, ego, out } => {
            commands::metrics::execute(cli, &data, *by_group, *ego, out.as_deref())
        }

        Commands::Tree { origin, algo } => commands::tree::execute(cli, &data, origin, *algo),

        Commands::Path {
            origin,
            destination,
            algo,
        } => commands::path::execute(cli, &data, origin, destination, *algo),

        Commands::Cycle => commands::cycle::execute(cli, &data),

        Commands::Classify => commands::classify::execute(cli, &data),

        Commands::Rank { by, top } => commands::rank::execute(cli, &data, *by, *top),
    }
}

fn load_dataset(cli: &Cli) -> Result<LoadedGraph> {
    let edges = cli
        .edges
        .as_deref()
        .ok_or_else(|| MalhaError::UsageError("--edges <csv> is required".to_string()))?;

    dataset::load_graph(cli.nodes.as_deref(), edges)
}
