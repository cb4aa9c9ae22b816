//! Graph metrics and rankings
//!
//! Global order/size/density, the same metrics per group over induced
//! subgraphs, per-node ego-network metrics, and the descending rankings built
//! from them.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use serde::Serialize;

use crate::graph::Graph;

/// Order, size, and density of a whole graph.
#[derive(Debug, Clone, Serialize)]
pub struct GlobalMetrics {
    pub order: usize,
    pub size: usize,
    pub density: f64,
}

pub fn global_metrics<N>(graph: &Graph<N>) -> GlobalMetrics
where
    N: Clone + Eq + Hash + Ord,
{
    GlobalMetrics {
        order: graph.order(),
        size: graph.size(),
        density: graph.density(),
    }
}

/// Metrics of the subgraph induced by one group's members.
#[derive(Debug, Clone, Serialize)]
pub struct GroupMetrics {
    pub group: String,
    pub order: usize,
    pub size: usize,
    pub density: f64,
}

/// Compute order/size/density per group over the induced subgraph of its
/// members. Groups are emitted in sorted name order.
pub fn group_metrics(
    graph: &Graph<String>,
    membership: &HashMap<String, String>,
) -> Vec<GroupMetrics> {
    let names: BTreeSet<&String> = membership.values().collect();

    names
        .into_iter()
        .map(|name| {
            let mut members: Vec<String> = membership
                .iter()
                .filter(|(_, group)| *group == name)
                .map(|(node, _)| node.clone())
                .collect();
            members.sort();
            let sub = graph.induced_subgraph(&members);
            GroupMetrics {
                group: name.clone(),
                order: sub.order(),
                size: sub.size(),
                density: sub.density(),
            }
        })
        .collect()
}

/// One row of ego-network metrics: the node's degree in the full graph plus
/// order/size/density of its ego subgraph.
#[derive(Debug, Clone, Serialize)]
pub struct EgoMetrics<N> {
    pub node: N,
    pub degree: usize,
    pub ego_order: usize,
    pub ego_size: usize,
    pub ego_density: f64,
}

/// Ego-network metrics for every node, in graph insertion order.
pub fn ego_metrics<N>(graph: &Graph<N>) -> Vec<EgoMetrics<N>>
where
    N: Clone + Eq + Hash + Ord,
{
    graph
        .nodes()
        .iter()
        .map(|node| {
            let ego = graph.ego_subgraph(node);
            EgoMetrics {
                node: node.clone(),
                degree: graph.degree(node),
                ego_order: ego.order(),
                ego_size: ego.size(),
                ego_density: ego.density(),
            }
        })
        .collect()
}

/// Nodes ranked by degree, descending, ties broken by node identifier.
pub fn rank_by_degree<N>(graph: &Graph<N>) -> Vec<(N, usize)>
where
    N: Clone + Eq + Hash + Ord,
{
    let mut rows: Vec<(N, usize)> = graph
        .nodes()
        .iter()
        .map(|node| (node.clone(), graph.degree(node)))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Nodes ranked by ego-network density, descending, ties broken by node
/// identifier.
pub fn rank_by_ego_density<N>(graph: &Graph<N>) -> Vec<(N, f64)>
where
    N: Clone + Eq + Hash + Ord,
{
    let mut rows: Vec<(N, f64)> = graph
        .nodes()
        .iter()
        .map(|node| (node.clone(), graph.ego_subgraph(node).density()))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
