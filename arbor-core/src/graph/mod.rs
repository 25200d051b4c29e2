//! Graph collaborator consumed by the spanning-tree and component algorithms.
//!
//! The algorithms only need four things from a graph: whether it is directed,
//! its nodes, its edges, and edge lookup by endpoints. [`Graph`] captures that
//! contract; [`AdjacencyMatrixUndirectedGraph`] is the implementation shipped
//! with the crate.

mod adjacency_matrix;

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

pub use self::adjacency_matrix::AdjacencyMatrixUndirectedGraph;

/// Dense identifier of a node, assigned in insertion order from zero.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw node index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

/// An edge between two nodes, optionally directed and optionally weighted.
///
/// Equality and hashing ignore the weight. Undirected edges compare equal
/// regardless of endpoint order, so `(a, b)` and `(b, a)` are the same edge.
///
/// # Examples
/// ```
/// use arbor_core::{GraphEdge, NodeId};
///
/// let a = NodeId::new(0);
/// let b = NodeId::new(1);
/// let edge = GraphEdge::weighted(a, b, 2.5);
///
/// assert_eq!(edge, GraphEdge::weighted(b, a, 9.0));
/// assert_eq!(edge.weight(), Some(2.5));
/// assert!(!GraphEdge::unweighted(a, b).has_weight());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GraphEdge {
    node1: NodeId,
    node2: NodeId,
    directed: bool,
    weight: Option<f64>,
}

impl GraphEdge {
    /// Creates an undirected, unweighted edge.
    #[must_use]
    pub const fn unweighted(node1: NodeId, node2: NodeId) -> Self {
        Self {
            node1,
            node2,
            directed: false,
            weight: None,
        }
    }

    /// Creates an undirected edge carrying `weight`.
    #[must_use]
    pub const fn weighted(node1: NodeId, node2: NodeId, weight: f64) -> Self {
        Self {
            node1,
            node2,
            directed: false,
            weight: Some(weight),
        }
    }

    /// Creates a directed edge from `node1` to `node2`.
    #[must_use]
    pub const fn directed(node1: NodeId, node2: NodeId, weight: Option<f64>) -> Self {
        Self {
            node1,
            node2,
            directed: true,
            weight,
        }
    }

    /// Returns the first endpoint (the tail, for directed edges).
    #[must_use]
    pub const fn node1(&self) -> NodeId {
        self.node1
    }

    /// Returns the second endpoint (the head, for directed edges).
    #[must_use]
    pub const fn node2(&self) -> NodeId {
        self.node2
    }

    /// Returns `true` for directed edges.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the weight, treating NaN as absent.
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.weight.filter(|weight| !weight.is_nan())
    }

    /// Returns `true` when the edge carries a usable weight.
    #[must_use]
    pub fn has_weight(&self) -> bool {
        self.weight().is_some()
    }

    /// Returns the endpoints with the smaller id first for undirected edges.
    #[must_use]
    pub fn canonical_endpoints(&self) -> (NodeId, NodeId) {
        if self.directed || self.node1 <= self.node2 {
            (self.node1, self.node2)
        } else {
            (self.node2, self.node1)
        }
    }

    /// Returns `true` if `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.node1 == node || self.node2 == node
    }

    /// Total order used to sort edges by ascending weight.
    ///
    /// Weights compare with [`f64::total_cmp`]; unweighted edges sort after
    /// every weighted edge. Ties fall back to the canonical endpoints so the
    /// order is deterministic.
    pub(crate) fn cmp_by_weight(&self, other: &Self) -> Ordering {
        match (self.weight(), other.weight()) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.canonical_endpoints().cmp(&other.canonical_endpoints()))
    }
}

impl PartialEq for GraphEdge {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed
            && self.canonical_endpoints() == other.canonical_endpoints()
    }
}

impl Eq for GraphEdge {}

impl Hash for GraphEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        self.canonical_endpoints().hash(state);
    }
}

/// Read-only view of a graph as required by the algorithms in this crate.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, GraphEdge, NodeId};
///
/// struct Pair(GraphEdge);
///
/// impl Graph for Pair {
///     fn is_directed(&self) -> bool { false }
///     fn node_count(&self) -> usize { 2 }
///     fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ { (0..2).map(NodeId::new) }
///     fn edges(&self) -> impl Iterator<Item = &GraphEdge> + '_ { std::iter::once(&self.0) }
///     fn edge(&self, node1: NodeId, node2: NodeId) -> Option<&GraphEdge> {
///         (self.0 == GraphEdge::unweighted(node1, node2)).then_some(&self.0)
///     }
/// }
///
/// let graph = Pair(GraphEdge::weighted(NodeId::new(0), NodeId::new(1), 1.0));
/// assert!(graph.contains_node(NodeId::new(1)));
/// assert!(graph.edge(NodeId::new(1), NodeId::new(0)).is_some());
/// ```
pub trait Graph {
    /// Returns `true` when edges have an orientation.
    fn is_directed(&self) -> bool;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Iterates over every node.
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Iterates over every edge exactly once.
    fn edges(&self) -> impl Iterator<Item = &GraphEdge> + '_;

    /// Looks up the edge connecting `node1` and `node2`.
    fn edge(&self, node1: NodeId, node2: NodeId) -> Option<&GraphEdge>;

    /// Returns `true` if `node` belongs to the graph.
    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes().any(|candidate| candidate == node)
    }
}
