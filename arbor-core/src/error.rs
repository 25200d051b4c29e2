//! Error types for the arbor core library.
//!
//! Each concern exposes its own error enum together with a stable,
//! machine-readable code enum generated by `define_error_codes!`.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSets`] operations.
///
/// Element values are not captured because the element type carries no
/// formatting bounds; callers already hold the offending element.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element is not tracked by any disjoint set.
    #[error("element is not present in any disjoint set")]
    NotPresent,
    /// The element already belongs to a disjoint set.
    #[error("element is already present in a disjoint set")]
    AlreadyPresent,
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element is not tracked by any disjoint set.
        NotPresent => NotPresent => "DISJOINT_SET_NOT_PRESENT",
        /// The element already belongs to a disjoint set.
        AlreadyPresent => AlreadyPresent => "DISJOINT_SET_ALREADY_PRESENT",
    }
}

/// An error produced while editing an [`crate::AdjacencyMatrixUndirectedGraph`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node id did not refer to a node of the graph.
    #[error("node {node} does not exist (node_count is {node_count})")]
    UnknownNode {
        /// The offending node id.
        node: NodeId,
        /// Number of nodes currently in the graph.
        node_count: usize,
    },
    /// A directed edge was offered to an undirected graph.
    #[error("directed edge ({node1}, {node2}) cannot be stored in an undirected graph")]
    DirectedEdge {
        /// First endpoint of the rejected edge.
        node1: NodeId,
        /// Second endpoint of the rejected edge.
        node2: NodeId,
    },
    /// No edge connects the requested endpoints.
    #[error("no edge connects {node1} and {node2}")]
    EdgeNotFound {
        /// First requested endpoint.
        node1: NodeId,
        /// Second requested endpoint.
        node2: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node id did not refer to a node of the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// A directed edge was offered to an undirected graph.
        DirectedEdge => DirectedEdge { .. } => "GRAPH_DIRECTED_EDGE",
        /// No edge connects the requested endpoints.
        EdgeNotFound => EdgeNotFound { .. } => "GRAPH_EDGE_NOT_FOUND",
    }
}

/// Errors returned by the graph algorithms (spanning trees and components).
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AlgorithmError {
    /// The algorithm requires an undirected graph.
    #[error("graph is directed but an undirected graph is required")]
    DirectedGraph,
    /// An edge carried no weight (or a NaN weight).
    #[error("edge ({node1}, {node2}) has no weight")]
    MissingWeight {
        /// First endpoint of the unweighted edge.
        node1: NodeId,
        /// Second endpoint of the unweighted edge.
        node2: NodeId,
    },
    /// An edge carried a negative weight.
    #[error("edge ({node1}, {node2}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint of the offending edge.
        node1: NodeId,
        /// Second endpoint of the offending edge.
        node2: NodeId,
        /// The negative weight.
        weight: f64,
    },
    /// The requested source node is not part of the graph.
    #[error("source node {source_node} does not exist in the graph")]
    UnknownSource {
        /// The missing source node.
        source_node: NodeId,
    },
    /// The disjoint-set universe rejected an operation, which indicates an
    /// edge endpoint outside the graph's node set.
    #[error("disjoint-set operation failed: {error}")]
    DisjointSet {
        #[source]
        /// Underlying disjoint-set error.
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`AlgorithmError`] variants.
    enum AlgorithmErrorCode for AlgorithmError {
        /// The algorithm requires an undirected graph.
        DirectedGraph => DirectedGraph => "ALGORITHM_DIRECTED_GRAPH",
        /// An edge carried no weight.
        MissingWeight => MissingWeight { .. } => "ALGORITHM_MISSING_WEIGHT",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "ALGORITHM_NEGATIVE_WEIGHT",
        /// The requested source node is not part of the graph.
        UnknownSource => UnknownSource { .. } => "ALGORITHM_UNKNOWN_SOURCE",
        /// The disjoint-set universe rejected an operation.
        DisjointSetFailure => DisjointSet { .. } => "ALGORITHM_DISJOINT_SET_FAILURE",
    }
}

impl AlgorithmError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in
    /// a disjoint-set operation.
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<DisjointSetError> for AlgorithmError {
    fn from(error: DisjointSetError) -> Self {
        Self::DisjointSet { error }
    }
}

/// An error produced by [`crate::Multiset`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MultisetError {
    /// Adding occurrences would overflow the per-element counter.
    #[error("adding {requested} occurrences to a count of {current} overflows")]
    CountOverflow {
        /// Occurrences already recorded for the element.
        current: usize,
        /// Occurrences the caller attempted to add.
        requested: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MultisetError`] variants.
    enum MultisetErrorCode for MultisetError {
        /// Adding occurrences would overflow the per-element counter.
        CountOverflow => CountOverflow { .. } => "MULTISET_COUNT_OVERFLOW",
    }
}

/// Error type produced when validating a [`crate::SpanningTreeBuilder`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum BuilderError {
    /// Prim's algorithm was selected without a source node.
    #[error("Prim's algorithm requires a source node")]
    MissingSource,
    /// The selected algorithm does not use the requested disjoint-set backend.
    #[error("algorithm {algorithm:?} cannot run on the {backend:?} disjoint-set backend")]
    IncompatibleBackend {
        /// The configured algorithm.
        algorithm: crate::SpanningAlgorithm,
        /// The configured backend.
        backend: crate::DisjointSetBackend,
    },
}

define_error_codes! {
    /// Stable codes describing [`BuilderError`] variants.
    enum BuilderErrorCode for BuilderError {
        /// Prim's algorithm was selected without a source node.
        MissingSource => MissingSource => "BUILDER_MISSING_SOURCE",
        /// The selected algorithm does not use the requested backend.
        IncompatibleBackend => IncompatibleBackend { .. } => "BUILDER_INCOMPATIBLE_BACKEND",
    }
}

/// Convenient alias for results returned by the graph algorithms.
pub type Result<T> = core::result::Result<T, AlgorithmError>;
