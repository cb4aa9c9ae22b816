//! CLI argument parsing for malha
//!
//! Global flags select the dataset (`--edges`, `--nodes`), the output format,
//! and logging behavior; each subcommand maps to one analysis operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use malha_core::error::MalhaError;
pub use malha_core::format::OutputFormat;

/// Malha - neighborhood network analysis CLI
#[derive(Parser, Debug)]
#[command(name = "malha")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list CSV (`source,target[,weight][,winner]`)
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Node list CSV (`node,group`) declaring the full node set
    #[arg(long, global = true)]
    pub nodes: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Global metrics, optionally per group and per ego network
    Metrics {
        /// Break metrics down by node group (needs `--nodes`)
        #[arg(long)]
        by_group: bool,

        /// Include per-node ego-network metrics
        #[arg(long)]
        ego: bool,

        /// Write the JSON report into this directory
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Traversal tree from an origin node
    Tree {
        /// Origin node
        origin: String,

        /// Traversal algorithm
        #[arg(long, value_enum, default_value = "bfs")]
        algo: TreeAlgo,
    },

    /// Point-to-point path query
    Path {
        /// Origin node
        origin: String,

        /// Destination node
        destination: String,

        /// Path algorithm
        #[arg(long, value_enum, default_value = "dijkstra")]
        algo: PathAlgo,
    },

    /// Detect whether the graph contains any cycle
    Cycle,

    /// Classify every edge as tree, back, or cross
    Classify,

    /// Ranked node lists
    Rank {
        /// Ranking criterion
        #[arg(long, value_enum, default_value = "degree")]
        by: RankBy,

        /// Keep only the top N rows
        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAlgo {
    Bfs,
    Dfs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAlgo {
    Dijkstra,
    Bfs,
    Dfs,
    BellmanFord,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Degree,
    EgoDensity,
    Wins,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: MalhaError| e.to_string())
}
