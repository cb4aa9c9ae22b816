//! Undirected weighted graph and algorithm suite
//!
//! [`Graph`] is the adjacency-list container; `algos` hosts the traversal and
//! shortest-path functions that read it. Algorithms never mutate the graph.

pub mod adjacency;
pub mod algos;
pub mod types;

pub use adjacency::Graph;
pub use algos::bellman_ford::{bellman_ford, bellman_ford_path};
pub use algos::bfs::{bfs_path, bfs_tree};
pub use algos::dfs::{classify_edges, dfs_path, dfs_tree, has_cycle};
pub use algos::dijkstra::dijkstra;
pub use types::{BellmanFord, BellmanFordPath, BfsTree, DfsTree, EdgeKind, ShortestPath};

/// Canonical unordered pair, used to identify an undirected edge regardless
/// of traversal direction.
pub(crate) fn canonical_pair<N: Clone + Ord>(a: &N, b: &N) -> (N, N) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
