use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::graph::canonical_pair;

/// Undirected, weighted, multigraph-capable adjacency-list graph.
///
/// Generic over the node identifier so neighborhood names, fighter names, or
/// any other comparable token can serve as nodes. Adjacency is symmetric:
/// every `add_edge(u, v, w)` records `(v, w)` under `u` and `(u, w)` under
/// `v`. Neighbor lists keep insertion order, which fixes traversal order for
/// every algorithm downstream.
///
/// Parallel edges are preserved: the fight-history dataset records rematches
/// as distinct edges, each contributing to degree and size. Self-loops are
/// rejected as a no-op.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<(N, f64)>>,
    insertion: Vec<N>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Graph {
            adjacency: HashMap::new(),
            insertion: Vec::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + Ord,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
            insertion: Vec::new(),
        }
    }

    /// Insert a node with an empty neighbor list. No-op on duplicates.
    pub fn add_node(&mut self, node: N) {
        if !self.adjacency.contains_key(&node) {
            self.adjacency.insert(node.clone(), Vec::new());
            self.insertion.push(node);
        }
    }

    /// Insert an undirected edge, creating both endpoints if absent.
    ///
    /// Repeated calls for the same pair create parallel edges. A self-loop
    /// (`u == v`) is rejected as a no-op and `false` is returned.
    pub fn add_edge(&mut self, u: N, v: N, weight: f64) -> bool {
        if u == v {
            return false;
        }
        self.add_node(u.clone());
        self.add_node(v.clone());
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push((v.clone(), weight));
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.push((u, weight));
        }
        true
    }

    /// Whether `node` is a member of the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbor list of `node` in insertion order, with edge weights.
    ///
    /// Unknown nodes degrade to an empty slice rather than failing, to keep
    /// algorithm code simple.
    pub fn neighbors(&self, node: &N) -> &[(N, f64)] {
        self.adjacency.get(node).map_or(&[], |list| list.as_slice())
    }

    /// All node identifiers, in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.insertion
    }

    /// Number of edges incident to `node`, counting parallel edges.
    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    /// Total node count.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Total edge count. Each undirected edge appears in both endpoint lists,
    /// so the adjacency total is halved.
    pub fn size(&self) -> usize {
        let total: usize = self.adjacency.values().map(Vec::len).sum();
        total / 2
    }

    /// Ratio of actual to possible edges, in `[0, 1]`. Zero for graphs with
    /// fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.order();
        if n < 2 {
            return 0.0;
        }
        let e = self.size();
        (2 * e) as f64 / (n * (n - 1)) as f64
    }

    /// Build the subgraph induced by `keep`: only the listed nodes that exist
    /// in this graph, and only edges with both endpoints in the list.
    ///
    /// Edges are deduplicated by canonical unordered pair while iterating
    /// from both endpoints, so each surviving edge is added exactly once.
    pub fn induced_subgraph(&self, keep: &[N]) -> Graph<N> {
        let wanted: HashSet<&N> = keep.iter().collect();
        let mut sub = Graph::new();

        for node in keep {
            if self.contains(node) && !sub.contains(node) {
                sub.add_node(node.clone());
            }
        }

        let mut added: HashSet<(N, N)> = HashSet::new();
        for node in sub.nodes().to_vec() {
            for (neighbor, weight) in self.neighbors(&node) {
                if !wanted.contains(neighbor) {
                    continue;
                }
                let pair = canonical_pair(&node, neighbor);
                if added.insert(pair) {
                    sub.add_edge(node.clone(), neighbor.clone(), *weight);
                }
            }
        }

        sub
    }

    /// Ego network of `center`: the subgraph induced by the node plus its
    /// direct neighbors. An unknown center yields an empty graph.
    pub fn ego_subgraph(&self, center: &N) -> Graph<N> {
        let mut members = vec![center.clone()];
        for (neighbor, _) in self.neighbors(center) {
            members.push(neighbor.clone());
        }
        self.induced_subgraph(&members)
    }
}
