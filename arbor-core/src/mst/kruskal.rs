//! Kruskal's algorithm over a pluggable disjoint-set backend.

use tracing::{debug, instrument, trace};

use super::{SpanningTree, checked_weight, ensure_undirected};
use crate::{
    disjoint_sets::{DisjointSets, ForestDisjointSets},
    error::Result,
    graph::{Graph, GraphEdge, NodeId},
};

/// Computes a minimum spanning forest with Kruskal's algorithm using
/// [`ForestDisjointSets`].
///
/// Edges are sorted ascending by weight (ties broken by endpoint ids) and
/// accepted whenever their endpoints still belong to different sets. For a
/// connected graph the result is a spanning tree with `node_count - 1` edges;
/// otherwise it is a spanning forest with one tree per component.
///
/// # Errors
/// Returns [`crate::AlgorithmError::DirectedGraph`] for directed graphs, and
/// [`crate::AlgorithmError::MissingWeight`] or
/// [`crate::AlgorithmError::NegativeWeight`] when the scan meets an edge
/// without a usable weight. The whole edge list is always scanned, so a bad
/// edge fails the call no matter where it sorts.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrixUndirectedGraph, kruskal};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// let (a, _) = graph.add_node("A");
/// let (b, _) = graph.add_node("B");
/// let (c, _) = graph.add_node("C");
/// graph.add_weighted_edge(a, b, 1.0)?;
/// graph.add_weighted_edge(b, c, 2.0)?;
/// graph.add_weighted_edge(a, c, 5.0)?;
///
/// let tree = kruskal(&graph)?;
/// assert_eq!(tree.edges().len(), 2);
/// assert_eq!(tree.total_weight(), 3.0);
/// assert!(tree.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn kruskal<G: Graph>(graph: &G) -> Result<SpanningTree> {
    kruskal_with::<ForestDisjointSets<NodeId>, G>(graph)
}

/// Runs Kruskal's algorithm with the disjoint-set backend `D`.
///
/// Every backend yields the same forest because edge order is total and
/// acceptance only depends on set membership.
///
/// # Errors
/// See [`kruskal`].
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrixUndirectedGraph, LinkedListDisjointSets, NodeId, kruskal_with};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// let (a, _) = graph.add_node('a');
/// let (b, _) = graph.add_node('b');
/// graph.add_weighted_edge(a, b, 0.5)?;
///
/// let tree = kruskal_with::<LinkedListDisjointSets<NodeId>, _>(&graph)?;
/// assert_eq!(tree.total_weight(), 0.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(
        node_count = graph.node_count(),
        backend = std::any::type_name::<D>(),
    ),
)]
pub fn kruskal_with<D, G>(graph: &G) -> Result<SpanningTree>
where
    D: DisjointSets<NodeId> + Default,
    G: Graph,
{
    ensure_undirected(graph)?;

    let node_count = graph.node_count();
    let mut sets = D::default();
    for node in graph.nodes() {
        sets.make_set(node)?;
    }

    let mut edges: Vec<&GraphEdge> = graph.edges().collect();
    edges.sort_by(|left, right| left.cmp_by_weight(right));

    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    for edge in edges {
        let weight = checked_weight(edge)?;

        #[cfg(feature = "metrics")]
        metrics::counter!("mst_edges_scanned", "algorithm" => "kruskal").increment(1);

        if sets.union(&edge.node1(), &edge.node2())?.did_merge() {
            trace!(node1 = %edge.node1(), node2 = %edge.node2(), weight, "accepted edge");

            #[cfg(feature = "metrics")]
            metrics::counter!("mst_edges_accepted", "algorithm" => "kruskal").increment(1);

            accepted.push(*edge);
        }
    }

    let tree = SpanningTree::new(accepted, node_count);
    debug!(
        edges = tree.edges().len(),
        components = tree.component_count(),
        total_weight = tree.total_weight(),
        "kruskal completed"
    );
    Ok(tree)
}
