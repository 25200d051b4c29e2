//! Prim's algorithm with a linear-scan candidate list.

use std::collections::BTreeMap;

use tracing::{debug, instrument, trace};

use super::{SpanningTree, checked_weight, ensure_undirected};
use crate::{
    error::{AlgorithmError, Result},
    graph::{Graph, GraphEdge, NodeId},
};

/// Predecessor and distance labels produced by [`prim`].
///
/// The distance of a node is the weight of the edge connecting it to its
/// predecessor. The source has distance `0` and no predecessor. Nodes that
/// cannot be reached from the source keep distance `f64::INFINITY` and no
/// predecessor.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimTree {
    source: NodeId,
    predecessors: BTreeMap<NodeId, NodeId>,
    distances: BTreeMap<NodeId, f64>,
    edges: Vec<GraphEdge>,
}

impl PrimTree {
    /// Returns the node the tree was grown from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the tree parent of `node`.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    /// Returns the distance label of `node`, or `None` for foreign nodes.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    /// Iterates over `(node, predecessor)` pairs in node order.
    pub fn predecessors(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.predecessors.iter().map(|(&node, &parent)| (node, parent))
    }

    /// Iterates over `(node, distance)` pairs in node order.
    pub fn distances(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.distances.iter().map(|(&node, &distance)| (node, distance))
    }

    /// Returns `true` if `node` was reached from the source.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some_and(f64::is_finite)
    }

    /// Returns the tree edges in the order they were added.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().filter_map(GraphEdge::weight).sum()
    }

    /// Converts the labels into a [`SpanningTree`] over all graph nodes.
    #[must_use]
    pub fn into_spanning_tree(self) -> SpanningTree {
        let node_count = self.distances.len();
        SpanningTree::new(self.edges, node_count)
    }
}

/// Best known connection of a node still waiting in the candidate list.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    node: NodeId,
    distance: f64,
    link: Option<(NodeId, GraphEdge)>,
}

impl Candidate {
    /// Lowers the distance if `edge` to the freshly visited `visited` node is
    /// strictly lighter than the current best.
    fn relax(&mut self, visited: NodeId, edge: &GraphEdge) -> Result<()> {
        let weight = checked_weight(edge)?;
        if weight < self.distance {
            self.distance = weight;
            self.link = Some((visited, *edge));
        }
        Ok(())
    }
}

/// Grows a minimum spanning tree from `source` with Prim's algorithm.
///
/// The unvisited nodes sit in a plain list that is re-sorted by distance
/// after every extraction; no heap is used, so the cost is quadratic in the
/// node count. Extraction stops once the nearest candidate is unreachable.
///
/// # Errors
/// Returns [`AlgorithmError::UnknownSource`] if `source` is not in the
/// graph, [`AlgorithmError::DirectedGraph`] for directed graphs, and
/// [`AlgorithmError::MissingWeight`] or [`AlgorithmError::NegativeWeight`]
/// when any edge lacks a usable weight. All checks run before the tree is
/// grown.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrixUndirectedGraph, prim};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// let (a, _) = graph.add_node("A");
/// let (b, _) = graph.add_node("B");
/// let (c, _) = graph.add_node("C");
/// graph.add_weighted_edge(a, b, 4.0)?;
/// graph.add_weighted_edge(b, c, 1.0)?;
/// graph.add_weighted_edge(a, c, 2.0)?;
///
/// let tree = prim(&graph, a)?;
/// assert_eq!(tree.predecessor(c), Some(a));
/// assert_eq!(tree.predecessor(b), Some(c));
/// assert_eq!(tree.distance(b), Some(1.0));
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(node_count = graph.node_count(), source = %source),
)]
pub fn prim<G: Graph>(graph: &G, source: NodeId) -> Result<PrimTree> {
    if !graph.contains_node(source) {
        return Err(AlgorithmError::UnknownSource {
            source_node: source,
        });
    }
    ensure_undirected(graph)?;
    for edge in graph.edges() {
        checked_weight(edge)?;
    }

    let mut distances: BTreeMap<NodeId, f64> =
        graph.nodes().map(|node| (node, f64::INFINITY)).collect();
    distances.insert(source, 0.0);

    let mut pending: Vec<Candidate> = graph
        .nodes()
        .filter(|&node| node != source)
        .map(|node| Candidate {
            node,
            distance: f64::INFINITY,
            link: None,
        })
        .collect();
    let mut predecessors = BTreeMap::new();
    let mut edges = Vec::with_capacity(pending.len());

    update_candidates(graph, &mut pending, source)?;
    while let Some(next) = pending.first().copied() {
        let Some((parent, edge)) = next.link else {
            trace!(remaining = pending.len(), "remaining nodes are unreachable");
            break;
        };
        pending.remove(0);

        #[cfg(feature = "metrics")]
        metrics::counter!("mst_edges_accepted", "algorithm" => "prim").increment(1);

        trace!(node = %next.node, parent = %parent, distance = next.distance, "visited node");
        distances.insert(next.node, next.distance);
        predecessors.insert(next.node, parent);
        edges.push(edge);
        update_candidates(graph, &mut pending, next.node)?;
    }

    let tree = PrimTree {
        source,
        predecessors,
        distances,
        edges,
    };
    debug!(
        reached = tree.edges.len() + 1,
        total_weight = tree.total_weight(),
        "prim completed"
    );
    Ok(tree)
}

/// Relaxes every pending candidate against the newly visited node and
/// re-sorts the list by distance.
fn update_candidates<G: Graph>(
    graph: &G,
    pending: &mut [Candidate],
    visited: NodeId,
) -> Result<()> {
    for candidate in pending.iter_mut() {
        if let Some(edge) = graph.edge(candidate.node, visited) {
            #[cfg(feature = "metrics")]
            metrics::counter!("mst_edges_scanned", "algorithm" => "prim").increment(1);

            candidate.relax(visited, edge)?;
        }
    }
    pending.sort_by(|left, right| {
        left.distance
            .total_cmp(&right.distance)
            .then_with(|| left.node.cmp(&right.node))
    });
    Ok(())
}
