use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{MalhaError, Result};
use crate::graph::types::BfsTree;
use crate::graph::Graph;

/// Build the BFS tree rooted at `origin`.
///
/// Level-order traversal in adjacency order: when multiple equal-length paths
/// reach a node, the first-discovered parent wins and is never overwritten.
/// The maps cover exactly the connected component of `origin`; an isolated
/// origin yields `{origin: None}` / `{origin: 0}`.
///
/// Fails with `OriginNotFound` when `origin` is not a node of the graph.
#[tracing::instrument(skip_all, fields(origin = %origin))]
pub fn bfs_tree<N>(graph: &Graph<N>, origin: &N) -> Result<BfsTree<N>>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    if !graph.contains(origin) {
        return Err(MalhaError::OriginNotFound {
            node: origin.to_string(),
        });
    }

    let mut visited: HashSet<N> = HashSet::new();
    let mut parent: HashMap<N, Option<N>> = HashMap::new();
    let mut level: HashMap<N, u32> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    visited.insert(origin.clone());
    parent.insert(origin.clone(), None);
    level.insert(origin.clone(), 0);
    queue.push_back(origin.clone());

    while let Some(current) = queue.pop_front() {
        let current_level = level[&current];
        for (neighbor, _weight) in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                parent.insert(neighbor.clone(), Some(current.clone()));
                level.insert(neighbor.clone(), current_level + 1);
                queue.push_back(neighbor.clone());
            }
        }
    }

    tracing::debug!(reached = parent.len(), "bfs_tree");
    Ok(BfsTree { parent, level })
}

/// Find the shortest path by hop count between `origin` and `destination`.
///
/// Lenient contract: absent endpoints or no path yield an empty sequence.
/// `origin == destination` trivially returns `[origin]`. The traversal exits
/// early the moment the destination is first discovered.
#[tracing::instrument(skip_all, fields(origin = %origin, destination = %destination))]
pub fn bfs_path<N>(graph: &Graph<N>, origin: &N, destination: &N) -> Vec<N>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    if !graph.contains(origin) || !graph.contains(destination) {
        return Vec::new();
    }
    if origin == destination {
        return vec![origin.clone()];
    }

    let mut visited: HashSet<N> = HashSet::new();
    let mut predecessor: HashMap<N, N> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    visited.insert(origin.clone());
    queue.push_back(origin.clone());

    let mut found = false;
    'search: while let Some(current) = queue.pop_front() {
        for (neighbor, _weight) in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                predecessor.insert(neighbor.clone(), current.clone());
                if neighbor == destination {
                    found = true;
                    break 'search;
                }
                queue.push_back(neighbor.clone());
            }
        }
    }

    if !found {
        return Vec::new();
    }

    // Walk predecessors destination -> origin, then reverse.
    let mut path = vec![destination.clone()];
    let mut current = destination.clone();
    while current != *origin {
        match predecessor.get(&current) {
            Some(prev) => {
                current = prev.clone();
                path.push(current.clone());
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
