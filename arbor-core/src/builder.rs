//! Builder utilities for configuring spanning tree computations.
//!
//! Exposes the algorithm and disjoint-set backend selection surface and the
//! builder validation used before constructing [`SpanningTreeSolver`]
//! instances.

use tracing::instrument;

use crate::{
    disjoint_sets::{ForestDisjointSets, LinkedListDisjointSets},
    error::{BuilderError, Result},
    graph::{Graph, NodeId},
    mst::{SpanningTree, kruskal_with, prim},
};

/// Selects the algorithm a [`SpanningTreeSolver`] runs.
///
/// # Examples
/// ```
/// use arbor_core::SpanningAlgorithm;
///
/// assert_eq!(SpanningAlgorithm::default(), SpanningAlgorithm::Kruskal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpanningAlgorithm {
    /// Sort all edges and merge components with a disjoint-set universe.
    #[default]
    Kruskal,
    /// Grow a single tree from a source node.
    Prim,
}

/// Selects the disjoint-set representation Kruskal's algorithm uses.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSetBackend;
///
/// assert_eq!(DisjointSetBackend::default(), DisjointSetBackend::Forest);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisjointSetBackend {
    /// [`ForestDisjointSets`]: union by rank with path compression.
    #[default]
    Forest,
    /// [`LinkedListDisjointSets`]: constant-time `find_set`.
    LinkedList,
}

/// Configures and constructs [`SpanningTreeSolver`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{DisjointSetBackend, SpanningAlgorithm, SpanningTreeBuilder};
///
/// let solver = SpanningTreeBuilder::new()
///     .with_backend(DisjointSetBackend::LinkedList)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.algorithm(), SpanningAlgorithm::Kruskal);
/// assert_eq!(solver.backend(), DisjointSetBackend::LinkedList);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpanningTreeBuilder {
    algorithm: SpanningAlgorithm,
    backend: Option<DisjointSetBackend>,
    source: Option<NodeId>,
}

impl SpanningTreeBuilder {
    /// Creates a builder selecting Kruskal's algorithm on the forest backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the algorithm to run.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: SpanningAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> SpanningAlgorithm {
        self.algorithm
    }

    /// Sets the disjoint-set backend used by Kruskal's algorithm.
    #[must_use]
    pub fn with_backend(mut self, backend: DisjointSetBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Returns the configured backend, falling back to the default.
    #[must_use]
    pub fn backend(&self) -> DisjointSetBackend {
        self.backend.unwrap_or_default()
    }

    /// Sets the node Prim's algorithm grows its tree from. Kruskal ignores it.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{NodeId, SpanningTreeBuilder};
    ///
    /// let builder = SpanningTreeBuilder::new().with_source(NodeId::new(2));
    /// assert_eq!(builder.source(), Some(NodeId::new(2)));
    /// ```
    #[must_use]
    pub fn with_source(mut self, source: NodeId) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the configured source node.
    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// Validates the configuration and constructs a [`SpanningTreeSolver`].
    ///
    /// # Errors
    /// Returns [`BuilderError::MissingSource`] when Prim's algorithm has no
    /// source and [`BuilderError::IncompatibleBackend`] when Prim's algorithm
    /// is paired with a non-default disjoint-set backend.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{BuilderError, SpanningAlgorithm, SpanningTreeBuilder};
    ///
    /// let error = SpanningTreeBuilder::new()
    ///     .with_algorithm(SpanningAlgorithm::Prim)
    ///     .build()
    ///     .expect_err("prim needs a source");
    /// assert_eq!(error, BuilderError::MissingSource);
    /// ```
    pub fn build(self) -> core::result::Result<SpanningTreeSolver, BuilderError> {
        let plan = match self.algorithm {
            SpanningAlgorithm::Kruskal => Plan::Kruskal(self.backend()),
            SpanningAlgorithm::Prim => {
                if let Some(backend) = self.backend.filter(|&b| b != DisjointSetBackend::Forest) {
                    return Err(BuilderError::IncompatibleBackend {
                        algorithm: SpanningAlgorithm::Prim,
                        backend,
                    });
                }
                Plan::Prim(self.source.ok_or(BuilderError::MissingSource)?)
            }
        };
        Ok(SpanningTreeSolver { plan })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Kruskal(DisjointSetBackend),
    Prim(NodeId),
}

/// A validated spanning tree configuration.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrixUndirectedGraph, SpanningAlgorithm, SpanningTreeBuilder};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// let (a, _) = graph.add_node("A");
/// let (b, _) = graph.add_node("B");
/// graph.add_weighted_edge(a, b, 2.0)?;
///
/// let solver = SpanningTreeBuilder::new()
///     .with_algorithm(SpanningAlgorithm::Prim)
///     .with_source(a)
///     .build()?;
/// let tree = solver.solve(&graph)?;
/// assert_eq!(tree.total_weight(), 2.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanningTreeSolver {
    plan: Plan,
}

impl SpanningTreeSolver {
    /// Returns the algorithm this solver runs.
    #[must_use]
    pub fn algorithm(&self) -> SpanningAlgorithm {
        match self.plan {
            Plan::Kruskal(_) => SpanningAlgorithm::Kruskal,
            Plan::Prim(_) => SpanningAlgorithm::Prim,
        }
    }

    /// Returns the disjoint-set backend; Prim reports the default.
    #[must_use]
    pub fn backend(&self) -> DisjointSetBackend {
        match self.plan {
            Plan::Kruskal(backend) => backend,
            Plan::Prim(_) => DisjointSetBackend::default(),
        }
    }

    /// Returns the Prim source node, if any.
    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        match self.plan {
            Plan::Kruskal(_) => None,
            Plan::Prim(source) => Some(source),
        }
    }

    /// Computes the spanning tree (or forest) of `graph`.
    ///
    /// Prim's result covers only the source's component; nodes outside it
    /// appear as isolated components of the returned forest.
    ///
    /// # Errors
    /// Propagates the [`crate::AlgorithmError`] of the selected algorithm.
    #[instrument(name = "mst.solve", err, skip(self, graph), fields(plan = ?self.plan))]
    pub fn solve<G: Graph>(&self, graph: &G) -> Result<SpanningTree> {
        match self.plan {
            Plan::Kruskal(DisjointSetBackend::Forest) => {
                kruskal_with::<ForestDisjointSets<NodeId>, G>(graph)
            }
            Plan::Kruskal(DisjointSetBackend::LinkedList) => {
                kruskal_with::<LinkedListDisjointSets<NodeId>, G>(graph)
            }
            Plan::Prim(source) => prim(graph, source).map(|tree| tree.into_spanning_tree()),
        }
    }
}
