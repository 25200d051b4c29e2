//! Connected components of an undirected graph via disjoint sets.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::{
    disjoint_sets::{DisjointSets, ForestDisjointSets},
    error::{AlgorithmError, Result},
    graph::{Graph, NodeId},
};

/// Partitions the nodes of `graph` into connected components.
///
/// Every node starts in its own set and the endpoints of every edge are
/// merged. Isolated nodes form singleton components. Components are ordered
/// by their smallest node id.
///
/// # Errors
/// Returns [`AlgorithmError::DirectedGraph`] for directed graphs.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use arbor_core::{AdjacencyMatrixUndirectedGraph, connected_components};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// let (a, _) = graph.add_node("A");
/// let (b, _) = graph.add_node("B");
/// let (c, _) = graph.add_node("C");
/// graph.add_unweighted_edge(a, b)?;
///
/// let components = connected_components(&graph)?;
/// assert_eq!(
///     components,
///     BTreeSet::from([BTreeSet::from([a, b]), BTreeSet::from([c])])
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "graph.connected_components",
    err,
    skip(graph),
    fields(node_count = graph.node_count()),
)]
pub fn connected_components<G: Graph>(graph: &G) -> Result<BTreeSet<BTreeSet<NodeId>>> {
    if graph.is_directed() {
        return Err(AlgorithmError::DirectedGraph);
    }

    let mut sets = ForestDisjointSets::with_capacity(graph.node_count());
    for node in graph.nodes() {
        sets.make_set(node)?;
    }
    for edge in graph.edges() {
        sets.union(&edge.node1(), &edge.node2())?;
    }

    let mut groups: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for node in graph.nodes() {
        let representative = sets.find_set(&node)?;
        groups.entry(representative).or_default().insert(node);
    }

    let components: BTreeSet<_> = groups.into_values().collect();
    debug!(components = components.len(), "components computed");
    Ok(components)
}
