use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{MalhaError, Result};
use crate::graph::types::{DfsTree, EdgeKind};
use crate::graph::{canonical_pair, Graph};

/// Build the DFS tree rooted at `origin`.
///
/// Iterative with an explicit stack, so large graphs cannot blow the call
/// stack. Neighbors are pushed in reverse adjacency order so pop order
/// matches forward adjacency order. Discovery numbers are 0-based, strictly
/// increasing in visitation order, starting at the origin.
///
/// Fails with `OriginNotFound` when `origin` is not a node of the graph.
#[tracing::instrument(skip_all, fields(origin = %origin))]
pub fn dfs_tree<N>(graph: &Graph<N>, origin: &N) -> Result<DfsTree<N>>
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
    let mut discovery: HashMap<N, u32> = HashMap::new();
    let mut counter: u32 = 0;

    visited.insert(origin.clone());
    parent.insert(origin.clone(), None);
    discovery.insert(origin.clone(), counter);
    counter += 1;

    let mut stack = vec![origin.clone()];
    while let Some(current) = stack.pop() {
        for (neighbor, _weight) in graph.neighbors(&current).iter().rev() {
            if visited.insert(neighbor.clone()) {
                parent.insert(neighbor.clone(), Some(current.clone()));
                discovery.insert(neighbor.clone(), counter);
                counter += 1;
                stack.push(neighbor.clone());
            }
        }
    }

    tracing::debug!(reached = parent.len(), "dfs_tree");
    Ok(DfsTree { parent, discovery })
}

/// Find *some* path between `origin` and `destination` via depth-first
/// search, terminating on first discovery of the destination. The result is
/// not necessarily the shortest path.
///
/// Lenient contract: absent endpoints or no path yield an empty sequence;
/// `origin == destination` returns `[origin]`.
#[tracing::instrument(skip_all, fields(origin = %origin, destination = %destination))]
pub fn dfs_path<N>(graph: &Graph<N>, origin: &N, destination: &N) -> Vec<N>
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

    visited.insert(origin.clone());
    let mut stack = vec![origin.clone()];

    let mut found = false;
    'search: while let Some(current) = stack.pop() {
        for (neighbor, _weight) in graph.neighbors(&current).iter().rev() {
            if visited.insert(neighbor.clone()) {
                predecessor.insert(neighbor.clone(), current.clone());
                if neighbor == destination {
                    found = true;
                    break 'search;
                }
                stack.push(neighbor.clone());
            }
        }
    }

    if !found {
        return Vec::new();
    }

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

/// Whether the graph contains any cycle.
///
/// Runs DFS from every undiscovered node, so disconnected graphs and forests
/// are handled. An undirected graph has a cycle exactly when DFS encounters
/// an already-visited neighbor other than the edge it just arrived by; one
/// occurrence of the immediate parent is exempt, so a parallel edge between
/// the same pair does count as a cycle.
pub fn has_cycle<N>(graph: &Graph<N>) -> bool
where
    N: Clone + Eq + Hash + Ord,
{
    let mut visited: HashSet<N> = HashSet::new();

    for root in graph.nodes() {
        if visited.contains(root) {
            continue;
        }
        let mut stack: Vec<(N, Option<N>)> = vec![(root.clone(), None)];
        while let Some((current, parent)) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            let mut parent_skipped = false;
            for (neighbor, _weight) in graph.neighbors(&current) {
                if parent.as_ref() == Some(neighbor) && !parent_skipped {
                    parent_skipped = true;
                    continue;
                }
                if visited.contains(neighbor) {
                    return true;
                }
                stack.push((neighbor.clone(), Some(current.clone())));
            }
        }
    }

    false
}

struct Frame<N> {
    node: N,
    parent: Option<N>,
    next: usize,
    parent_skipped: bool,
}

/// Classify every edge of the graph relative to a full DFS forest.
///
/// Edges are keyed by canonical sorted pair and classified exactly once,
/// first classification wins: `tree` on first discovery of the far endpoint,
/// `back` when the far endpoint is still on the DFS stack (an ancestor),
/// `cross` when it was already fully processed. The immediate tree-parent
/// edge is skipped once so it is not re-classified from the child side.
pub fn classify_edges<N>(graph: &Graph<N>) -> HashMap<(N, N), EdgeKind>
where
    N: Clone + Eq + Hash + Ord,
{
    let mut classes: HashMap<(N, N), EdgeKind> = HashMap::new();
    let mut discovered: HashSet<N> = HashSet::new();
    let mut on_stack: HashSet<N> = HashSet::new();

    for root in graph.nodes() {
        if discovered.contains(root) {
            continue;
        }
        discovered.insert(root.clone());
        on_stack.insert(root.clone());
        let mut stack = vec![Frame {
            node: root.clone(),
            parent: None,
            next: 0,
            parent_skipped: false,
        }];

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let current = stack[top].node.clone();
            let neighbors = graph.neighbors(&current);

            if stack[top].next >= neighbors.len() {
                on_stack.remove(&current);
                stack.pop();
                continue;
            }
            let (neighbor, _weight) = &neighbors[stack[top].next];
            stack[top].next += 1;

            if stack[top].parent.as_ref() == Some(neighbor) && !stack[top].parent_skipped {
                stack[top].parent_skipped = true;
                continue;
            }

            let key = canonical_pair(&current, neighbor);
            if !discovered.contains(neighbor) {
                classes.entry(key).or_insert(EdgeKind::Tree);
                discovered.insert(neighbor.clone());
                on_stack.insert(neighbor.clone());
                stack.push(Frame {
                    node: neighbor.clone(),
                    parent: Some(current),
                    next: 0,
                    parent_skipped: false,
                });
            } else if on_stack.contains(neighbor) {
                classes.entry(key).or_insert(EdgeKind::Back);
            } else {
                classes.entry(key).or_insert(EdgeKind::Cross);
            }
        }
    }

    classes
}
