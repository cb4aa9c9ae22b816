use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{MalhaError, Result};
use crate::graph::types::{BellmanFord, BellmanFordPath};
use crate::graph::Graph;

/// Bellman-Ford single-source shortest paths with negative-cycle detection.
///
/// Relaxes every edge in both directions (the graph is undirected) up to
/// |V| - 1 times, terminating a pass early when nothing changed. One extra
/// pass afterwards sets `negative_cycle`: if any edge still relaxes, a
/// negative-weight cycle is reachable from the origin and the distances are
/// not to be trusted.
///
/// Unlike Dijkstra, negative weights are legal input here. Fails with
/// `OriginNotFound` when `origin` is not a node of the graph.
#[tracing::instrument(skip_all, fields(origin = %origin))]
pub fn bellman_ford<N>(graph: &Graph<N>, origin: &N) -> Result<BellmanFord<N>>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    if !graph.contains(origin) {
        return Err(MalhaError::OriginNotFound {
            node: origin.to_string(),
        });
    }

    let nodes = graph.nodes();
    let mut dist: HashMap<N, f64> = nodes
        .iter()
        .cloned()
        .map(|n| (n, f64::INFINITY))
        .collect();
    let mut predecessor: HashMap<N, Option<N>> =
        nodes.iter().cloned().map(|n| (n, None)).collect();
    dist.insert(origin.clone(), 0.0);

    for _pass in 1..nodes.len() {
        let mut changed = false;
        for u in nodes {
            let du = dist[u];
            if du.is_infinite() {
                continue;
            }
            for (v, weight) in graph.neighbors(u) {
                if du + weight < dist[v] {
                    dist.insert(v.clone(), du + weight);
                    predecessor.insert(v.clone(), Some(u.clone()));
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    // One more full pass: any remaining relaxation means a reachable
    // negative-weight cycle.
    let mut negative_cycle = false;
    'check: for u in nodes {
        let du = dist[u];
        if du.is_infinite() {
            continue;
        }
        for (v, weight) in graph.neighbors(u) {
            if du + weight < dist[v] {
                negative_cycle = true;
                break 'check;
            }
        }
    }

    tracing::debug!(negative_cycle, "bellman_ford");
    Ok(BellmanFord {
        dist,
        predecessor,
        negative_cycle,
    })
}

/// Bellman-Ford point-to-point query.
///
/// Lenient contract: absent endpoints yield `(infinity, [], false)`. When a
/// negative cycle is detected the computed distances are unreliable, so the
/// result is `(infinity, [], true)` regardless of any computed distance.
#[tracing::instrument(skip_all, fields(origin = %origin, destination = %destination))]
pub fn bellman_ford_path<N>(
    graph: &Graph<N>,
    origin: &N,
    destination: &N,
) -> Result<BellmanFordPath<N>>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    if !graph.contains(origin) || !graph.contains(destination) {
        return Ok(BellmanFordPath::unreachable());
    }

    let result = bellman_ford(graph, origin)?;

    if result.negative_cycle {
        return Ok(BellmanFordPath {
            cost: f64::INFINITY,
            path: Vec::new(),
            negative_cycle: true,
        });
    }

    let cost = result.dist[destination];
    if cost.is_infinite() {
        return Ok(BellmanFordPath::unreachable());
    }

    // Walk predecessors until the origin's `None`.
    let mut path = Vec::new();
    let mut current = Some(destination.clone());
    while let Some(node) = current {
        path.push(node.clone());
        current = result.predecessor.get(&node).cloned().flatten();
    }
    path.reverse();

    Ok(BellmanFordPath {
        cost,
        path,
        negative_cycle: false,
    })
}
