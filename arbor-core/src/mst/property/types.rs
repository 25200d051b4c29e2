//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::graph::{AdjacencyMatrixUndirectedGraph, NodeId};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Sparse connected graph with roughly `1.5n` to `2n` edges.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph.
    #[weight(2)]
    Dense,
    /// Several components with no cross-component edges.
    #[weight(2)]
    Disconnected,
}

/// Generated graph together with the parameters that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Undirected edges as `(node1, node2, weight)`, endpoints distinct.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as an adjacency-matrix graph labelled by
    /// node index, so node `i` has id `NodeId::new(i)`.
    ///
    /// Duplicate pairs keep the first weight, matching the graph's own
    /// insertion rule.
    pub(super) fn graph(&self) -> AdjacencyMatrixUndirectedGraph<usize> {
        let mut graph = AdjacencyMatrixUndirectedGraph::new();
        for label in 0..self.node_count {
            graph.add_node(label);
        }
        for &(node1, node2, weight) in &self.edges {
            graph
                .add_weighted_edge(NodeId::new(node1), NodeId::new(node2), weight)
                .expect("fixture endpoints must be in range");
        }
        graph
    }

    /// Returns the edges the graph actually stores, first weight wins.
    pub(super) fn stored_edges(&self) -> Vec<(usize, usize, f64)> {
        let mut seen = std::collections::HashSet::new();
        self.edges
            .iter()
            .copied()
            .filter(|&(node1, node2, _)| seen.insert((node1.min(node2), node1.max(node2))))
            .collect()
    }
}
