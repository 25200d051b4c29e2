//! Undirected graph stored as a dense adjacency matrix.

use std::{
    collections::{BTreeSet, HashMap},
    hash::Hash,
};

use super::{Graph, GraphEdge, NodeId};
use crate::error::GraphError;

/// Undirected graph whose edges live in an `n × n` matrix of optional edges.
///
/// Nodes carry a unique label of type `L` and are addressed by the [`NodeId`]
/// returned from [`add_node`](Self::add_node). Both matrix cells of an edge
/// hold the same [`GraphEdge`], so lookup is symmetric.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrixUndirectedGraph, Graph};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// let (a, _) = graph.add_node("A");
/// let (b, _) = graph.add_node("B");
/// graph.add_weighted_edge(a, b, 4.0)?;
///
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.edge(b, a).and_then(|edge| edge.weight()), Some(4.0));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyMatrixUndirectedGraph<L> {
    labels: Vec<L>,
    index: HashMap<L, NodeId>,
    matrix: Vec<Vec<Option<GraphEdge>>>,
    edge_count: usize,
}

impl<L> Default for AdjacencyMatrixUndirectedGraph<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            matrix: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<L> AdjacencyMatrixUndirectedGraph<L> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label of `node`, if the node exists.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&L> {
        self.labels.get(node.index())
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
        self.matrix.clear();
        self.edge_count = 0;
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node.index() < self.labels.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode {
                node,
                node_count: self.labels.len(),
            })
        }
    }

    fn cell(&self, node1: NodeId, node2: NodeId) -> Option<&GraphEdge> {
        self.matrix
            .get(node1.index())
            .and_then(|row| row.get(node2.index()))
            .and_then(Option::as_ref)
    }

    fn store(&mut self, node1: NodeId, node2: NodeId, edge: Option<GraphEdge>) {
        self.matrix[node1.index()][node2.index()] = edge;
        self.matrix[node2.index()][node1.index()] = edge;
    }

    /// Adds `edge` unless its endpoints are already connected.
    ///
    /// Returns `true` if the edge was inserted. An existing edge between the
    /// same endpoints is left untouched, weight included.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedEdge`] for directed edges and
    /// [`GraphError::UnknownNode`] when an endpoint is not in the graph.
    pub fn add_edge(&mut self, edge: GraphEdge) -> Result<bool, GraphError> {
        let (node1, node2) = (edge.node1(), edge.node2());
        if edge.is_directed() {
            return Err(GraphError::DirectedEdge { node1, node2 });
        }
        self.check_node(node1)?;
        self.check_node(node2)?;

        if self.cell(node1, node2).is_some() {
            return Ok(false);
        }
        self.store(node1, node2, Some(edge));
        self.edge_count += 1;
        Ok(true)
    }

    /// Connects `node1` and `node2` with an unweighted edge.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an endpoint is not in the graph.
    pub fn add_unweighted_edge(
        &mut self,
        node1: NodeId,
        node2: NodeId,
    ) -> Result<bool, GraphError> {
        self.add_edge(GraphEdge::unweighted(node1, node2))
    }

    /// Connects `node1` and `node2` with an edge of the given weight.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an endpoint is not in the graph.
    pub fn add_weighted_edge(
        &mut self,
        node1: NodeId,
        node2: NodeId,
        weight: f64,
    ) -> Result<bool, GraphError> {
        self.add_edge(GraphEdge::weighted(node1, node2, weight))
    }

    /// Removes and returns the edge between `node1` and `node2`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] for unknown endpoints and
    /// [`GraphError::EdgeNotFound`] when the nodes are not adjacent.
    pub fn remove_edge(&mut self, node1: NodeId, node2: NodeId) -> Result<GraphEdge, GraphError> {
        self.check_node(node1)?;
        self.check_node(node2)?;

        let edge = self
            .cell(node1, node2)
            .copied()
            .ok_or(GraphError::EdgeNotFound { node1, node2 })?;
        self.store(node1, node2, None);
        self.edge_count -= 1;
        Ok(edge)
    }

    /// Returns the neighbours of `node` in ascending id order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    pub fn adjacent_nodes_of(&self, node: NodeId) -> Result<BTreeSet<NodeId>, GraphError> {
        self.check_node(node)?;
        Ok(self.matrix[node.index()]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(index, _)| NodeId::new(index))
            .collect())
    }

    /// Returns the edges incident to `node`, ordered by the opposite endpoint.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    pub fn edges_of(&self, node: NodeId) -> Result<Vec<GraphEdge>, GraphError> {
        self.check_node(node)?;
        Ok(self.matrix[node.index()].iter().flatten().copied().collect())
    }
}

impl<L: Clone + Eq + Hash> AdjacencyMatrixUndirectedGraph<L> {
    /// Adds a node labelled `label`.
    ///
    /// Returns the node's id and whether it was inserted. A label that is
    /// already present yields its existing id and `false`.
    pub fn add_node(&mut self, label: L) -> (NodeId, bool) {
        if let Some(&existing) = self.index.get(&label) {
            return (existing, false);
        }

        let node = NodeId::new(self.labels.len());
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; node.index() + 1]);
        self.labels.push(label.clone());
        self.index.insert(label, node);
        (node, true)
    }

    /// Looks up the node carrying `label`.
    #[must_use]
    pub fn node_id(&self, label: &L) -> Option<NodeId> {
        self.index.get(label).copied()
    }
}

impl<L> Graph for AdjacencyMatrixUndirectedGraph<L> {
    fn is_directed(&self) -> bool {
        false
    }

    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId::new)
    }

    fn edges(&self) -> impl Iterator<Item = &GraphEdge> + '_ {
        // Upper triangle only; the diagonal holds self-loops.
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells[row..].iter().flatten())
    }

    fn edge(&self, node1: NodeId, node2: NodeId) -> Option<&GraphEdge> {
        self.cell(node1, node2)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.labels.len()
    }
}
