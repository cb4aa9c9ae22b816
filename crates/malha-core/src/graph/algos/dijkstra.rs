use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{MalhaError, Result};
use crate::graph::types::ShortestPath;
use crate::graph::Graph;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub cost: f64,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

/// Dijkstra shortest path between `origin` and `destination`.
///
/// Classic priority-queue relaxation with lazy deletion: stale heap entries
/// are skipped on pop, and the loop stops early once the destination is
/// popped (its distance is final at that point).
///
/// Every edge weight in the graph must be non-negative; the whole graph is
/// validated eagerly and a `NegativeWeight` error names the offending edge.
/// Absent endpoints are a lenient outcome: `(infinity, [])`, no error.
/// `origin == destination` returns `(0, [origin])`.
#[tracing::instrument(skip_all, fields(origin = %origin, destination = %destination))]
pub fn dijkstra<N>(graph: &Graph<N>, origin: &N, destination: &N) -> Result<ShortestPath<N>>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    // Greedy relaxation is unsound with negative weights; fail fast before
    // computing anything.
    for u in graph.nodes() {
        for (v, weight) in graph.neighbors(u) {
            if *weight < 0.0 {
                return Err(MalhaError::NegativeWeight {
                    from: u.to_string(),
                    to: v.to_string(),
                    weight: *weight,
                });
            }
        }
    }

    if !graph.contains(origin) || !graph.contains(destination) {
        return Ok(ShortestPath::unreachable());
    }

    let mut dist: HashMap<N, f64> = graph
        .nodes()
        .iter()
        .cloned()
        .map(|n| (n, f64::INFINITY))
        .collect();
    dist.insert(origin.clone(), 0.0);

    let mut predecessor: HashMap<N, N> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<N>>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node: origin.clone(),
        cost: 0.0,
    }));

    while let Some(Reverse(HeapEntry { node: current, cost })) = heap.pop() {
        // Stale entry: a fresher, shorter distance was already recorded.
        if cost > dist[&current] {
            continue;
        }
        // Once popped, the destination's distance is final.
        if current == *destination {
            break;
        }
        for (neighbor, weight) in graph.neighbors(&current) {
            let next_cost = cost + weight;
            if next_cost < dist[neighbor] {
                dist.insert(neighbor.clone(), next_cost);
                predecessor.insert(neighbor.clone(), current.clone());
                heap.push(Reverse(HeapEntry {
                    node: neighbor.clone(),
                    cost: next_cost,
                }));
            }
        }
    }

    let total = dist[destination];
    if total.is_infinite() {
        return Ok(ShortestPath::unreachable());
    }

    // Reconstruct destination -> origin, then reverse.
    let mut path = vec![destination.clone()];
    let mut current = destination.clone();
    while current != *origin {
        match predecessor.get(&current) {
            Some(prev) => {
                current = prev.clone();
                path.push(current.clone());
            }
            None => return Ok(ShortestPath::unreachable()),
        }
    }
    path.reverse();

    tracing::debug!(cost = total, hops = path.len() - 1, "dijkstra");
    Ok(ShortestPath { cost: total, path })
}
