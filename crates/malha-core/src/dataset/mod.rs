//! CSV dataset ingestion
//!
//! Two dataset shapes feed the graph:
//!
//! - an edge list (`source,target,weight[,winner]`) — the weight column is
//!   optional and defaults to 1.0; a `winner` column, when present, feeds the
//!   win ledger;
//! - an optional node list (`node,group`) that declares the full node set
//!   (isolated nodes included) and group membership. When a node list is
//!   given, edge rows naming an undeclared node are dropped.
//!
//! Node names are normalized (trimmed, internal whitespace collapsed) before
//! they enter the graph, so the same entity spelled with stray spaces maps to
//! one node.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{MalhaError, Result};
use crate::graph::Graph;

/// Trim and collapse internal whitespace.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Win counts tracked beside the graph, keyed by the same node identifiers.
///
/// Deliberately not part of [`Graph`]: wins are dataset-specific decorator
/// state, not graph structure.
#[derive(Debug, Clone, Default)]
pub struct WinLedger {
    wins: HashMap<String, u32>,
}

impl WinLedger {
    pub fn record_win(&mut self, node: String) {
        *self.wins.entry(node).or_insert(0) += 1;
    }

    pub fn wins(&self, node: &str) -> u32 {
        self.wins.get(node).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Nodes ranked by win count, descending, ties broken by name.
    pub fn ranking(&self) -> Vec<(String, u32)> {
        let mut rows: Vec<(String, u32)> = self
            .wins
            .iter()
            .map(|(node, wins)| (node.clone(), *wins))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

/// A graph plus the decorator state loaded alongside it.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph<String>,
    /// node -> group membership, empty without a node list
    pub groups: HashMap<String, String>,
    pub wins: WinLedger,
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| MalhaError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

/// Load a node list CSV with `node,group` columns.
///
/// Returns the nodes in file order (first occurrence wins) and the
/// node -> group map.
pub fn load_node_list(path: &Path) -> Result<(Vec<String>, HashMap<String, String>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let node_col = column_index(&headers, "node", path)?;
    let group_col = column_index(&headers, "group", path)?;

    let mut nodes = Vec::new();
    let mut groups = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let node = normalize_name(record.get(node_col).unwrap_or(""));
        if node.is_empty() {
            continue;
        }
        let group = normalize_name(record.get(group_col).unwrap_or(""));
        if !groups.contains_key(&node) {
            nodes.push(node.clone());
        }
        groups.insert(node, group);
    }

    tracing::debug!(nodes = nodes.len(), path = %path.display(), "loaded node list");
    Ok((nodes, groups))
}

/// Load a full dataset: optional node list plus an edge list.
///
/// Without a node list the edge rows define the node set. With one, every
/// declared node is added up front (isolated nodes are legal graph members)
/// and edge rows naming undeclared nodes are skipped.
#[tracing::instrument(skip_all, fields(edges = %edges_path.display()))]
pub fn load_graph(nodes_path: Option<&Path>, edges_path: &Path) -> Result<LoadedGraph> {
    let mut graph = Graph::new();
    let mut groups = HashMap::new();
    let mut declared: Option<HashSet<String>> = None;

    if let Some(path) = nodes_path {
        let (nodes, map) = load_node_list(path)?;
        for node in &nodes {
            graph.add_node(node.clone());
        }
        declared = Some(nodes.into_iter().collect());
        groups = map;
    }

    let mut wins = WinLedger::default();
    let mut reader = csv::Reader::from_path(edges_path)?;
    let headers = reader.headers()?.clone();
    let source_col = column_index(&headers, "source", edges_path)?;
    let target_col = column_index(&headers, "target", edges_path)?;
    let weight_col = headers.iter().position(|h| h.trim() == "weight");
    let winner_col = headers.iter().position(|h| h.trim() == "winner");

    for record in reader.records() {
        let record = record?;
        let source = normalize_name(record.get(source_col).unwrap_or(""));
        let target = normalize_name(record.get(target_col).unwrap_or(""));
        if source.is_empty() || target.is_empty() {
            continue;
        }
        if let Some(known) = &declared {
            if !known.contains(&source) || !known.contains(&target) {
                tracing::debug!(%source, %target, "skipping edge with undeclared endpoint");
                continue;
            }
        }

        let weight = match weight_col {
            Some(col) => {
                let raw = record.get(col).unwrap_or("").trim();
                raw.parse::<f64>().map_err(|_| MalhaError::InvalidWeight {
                    path: edges_path.to_path_buf(),
                    value: raw.to_string(),
                })?
            }
            None => 1.0,
        };
        graph.add_edge(source, target, weight);

        if let Some(col) = winner_col {
            let winner = normalize_name(record.get(col).unwrap_or(""));
            if !winner.is_empty() {
                wins.record_win(winner);
            }
        }
    }

    tracing::debug!(order = graph.order(), size = graph.size(), "loaded graph");
    Ok(LoadedGraph {
        graph,
        groups,
        wins,
    })
}

#[cfg(test)]
mod tests;
