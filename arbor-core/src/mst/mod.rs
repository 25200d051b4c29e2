//! Minimum spanning tree (MST) construction.
//!
//! Two algorithms are provided. [`kruskal`] sorts every edge and grows a
//! forest with a disjoint-set universe, so it also handles disconnected graphs.
//! [`prim`] grows a single tree outward from a source node using a linear-scan
//! candidate list and reports per-node predecessors and distances.
//!
//! Both reject directed graphs as well as edges that are unweighted or carry a
//! negative weight. Kruskal checks weights lazily while scanning the sorted
//! edges; Prim checks them before it starts.

mod kruskal;
mod prim;

use std::collections::HashSet;

use crate::{
    error::{AlgorithmError, Result},
    graph::{Graph, GraphEdge},
};

pub use self::{
    kruskal::{kruskal, kruskal_with},
    prim::{PrimTree, prim},
};

/// The output of a spanning tree computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are kept in ascending weight order.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    edges: Vec<GraphEdge>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningTree {
    pub(crate) fn new(mut edges: Vec<GraphEdge>, node_count: usize) -> Self {
        edges.sort_by(GraphEdge::cmp_by_weight);
        let total_weight = edges.iter().filter_map(GraphEdge::weight).sum();
        Self {
            component_count: node_count.saturating_sub(edges.len()),
            edges,
            total_weight,
        }
    }

    /// Returns the tree edges in ascending weight order.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Returns the sum of the edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns the number of connected components formed by the tree edges
    /// over the graph's nodes.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns `true` when the edges span a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns `true` if `edge` is part of the tree, ignoring its weight.
    #[must_use]
    pub fn contains(&self, edge: &GraphEdge) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the tree edges as a set.
    #[must_use]
    pub fn edge_set(&self) -> HashSet<GraphEdge> {
        self.edges.iter().copied().collect()
    }

    /// Consumes the tree and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<GraphEdge> {
        self.edges
    }
}

pub(crate) fn ensure_undirected(graph: &impl Graph) -> Result<()> {
    if graph.is_directed() {
        Err(AlgorithmError::DirectedGraph)
    } else {
        Ok(())
    }
}

/// Returns the weight of `edge` if it is present and non-negative.
pub(crate) fn checked_weight(edge: &GraphEdge) -> Result<f64> {
    let weight = edge.weight().ok_or(AlgorithmError::MissingWeight {
        node1: edge.node1(),
        node2: edge.node2(),
    })?;
    if weight < 0.0 {
        return Err(AlgorithmError::NegativeWeight {
            node1: edge.node1(),
            node2: edge.node2(),
            weight,
        });
    }
    Ok(weight)
}

#[cfg(test)]
mod property;
