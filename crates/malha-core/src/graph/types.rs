//! Result structures returned by the algorithm suite
//!
//! All results are freshly allocated per call and owned by the caller; none
//! of them borrow the graph. Everything serializes so the reporting layer can
//! emit it as JSON directly.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// BFS traversal tree: first-discovered parent and hop-count level per node.
///
/// Covers exactly the connected component reachable from the origin. The
/// origin maps to parent `None` and level `0`.
#[derive(Debug, Clone, Serialize)]
pub struct BfsTree<N: Eq + std::hash::Hash> {
    pub parent: HashMap<N, Option<N>>,
    pub level: HashMap<N, u32>,
}

/// DFS traversal tree: parent and 0-based discovery order per reachable node.
#[derive(Debug, Clone, Serialize)]
pub struct DfsTree<N: Eq + std::hash::Hash> {
    pub parent: HashMap<N, Option<N>>,
    pub discovery: HashMap<N, u32>,
}

/// DFS edge classification relative to the traversal forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// First discovery of the far endpoint
    Tree,
    /// Far endpoint is an ancestor still on the DFS stack
    Back,
    /// Far endpoint already fully processed, not an ancestor
    Cross,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Tree => write!(f, "tree"),
            EdgeKind::Back => write!(f, "back"),
            EdgeKind::Cross => write!(f, "cross"),
        }
    }
}

/// Dijkstra result: total cost plus the node sequence origin -> destination.
///
/// An unreachable or absent destination yields infinite cost and an empty
/// path; that is a normal query outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPath<N> {
    pub cost: f64,
    pub path: Vec<N>,
}

impl<N> ShortestPath<N> {
    /// The sentinel "no path" result.
    pub fn unreachable() -> Self {
        ShortestPath {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Bellman-Ford single-source result.
///
/// Callers must check `negative_cycle` before trusting the distances; in the
/// presence of a reachable negative cycle they are not bounded below.
#[derive(Debug, Clone, Serialize)]
pub struct BellmanFord<N: Eq + std::hash::Hash> {
    pub dist: HashMap<N, f64>,
    pub predecessor: HashMap<N, Option<N>>,
    pub negative_cycle: bool,
}

/// Bellman-Ford point-to-point result.
#[derive(Debug, Clone, Serialize)]
pub struct BellmanFordPath<N> {
    pub cost: f64,
    pub path: Vec<N>,
    pub negative_cycle: bool,
}

impl<N> BellmanFordPath<N> {
    pub fn unreachable() -> Self {
        BellmanFordPath {
            cost: f64::INFINITY,
            path: Vec::new(),
            negative_cycle: false,
        }
    }
}
