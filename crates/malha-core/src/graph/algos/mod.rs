//! Traversal and shortest-path algorithms over [`Graph`](crate::graph::Graph)
//!
//! Two error postures coexist here and both are deliberate:
//!
//! - tree builders and the Bellman-Ford core treat a missing origin as a
//!   programmer error and fail with [`MalhaError::OriginNotFound`](crate::error::MalhaError);
//! - point-to-point path queries treat missing endpoints and absent paths as
//!   ordinary outcomes and return a sentinel "no path" result instead.

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
