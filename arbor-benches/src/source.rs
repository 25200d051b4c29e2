//! Seeded synthetic inputs for the benchmarks.

use arbor_core::{AdjacencyMatrixUndirectedGraph, GraphError, NodeId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors raised while generating synthetic inputs.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// A generator was asked for zero nodes or elements.
    #[error("synthetic inputs need at least one {what}")]
    Empty {
        /// What was requested in zero quantity.
        what: &'static str,
    },
    /// Inserting a generated edge failed.
    #[error("failed to insert a generated edge: {0}")]
    Graph(#[from] GraphError),
}

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Random chords attempted per node on top of the spanning tree.
    pub extra_edges_per_node: usize,
    /// Seed for the weight and topology generator.
    pub seed: u64,
}

/// A connected, weighted, undirected graph labelled by node index.
///
/// A random recursive tree guarantees connectivity; random chords then
/// raise the density. Weights are drawn uniformly from `[0, 1)`.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: AdjacencyMatrixUndirectedGraph<usize>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError::Empty`] when `node_count` is zero.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::Empty { what: "node" });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = AdjacencyMatrixUndirectedGraph::new();
        let ids: Vec<NodeId> = (0..config.node_count)
            .map(|label| graph.add_node(label).0)
            .collect();

        for (position, &node) in ids.iter().enumerate().skip(1) {
            let parent = NodeId::new(rng.gen_range(0..position));
            graph.add_weighted_edge(parent, node, rng.gen_range(0.0..1.0))?;
        }

        let chords = config.node_count.saturating_mul(config.extra_edges_per_node);
        for _ in 0..chords {
            let left = NodeId::new(rng.gen_range(0..config.node_count));
            let right = NodeId::new(rng.gen_range(0..config.node_count));
            if left != right {
                graph.add_weighted_edge(left, right, rng.gen_range(0.0..1.0))?;
            }
        }

        Ok(Self { graph })
    }

    /// Returns the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &AdjacencyMatrixUndirectedGraph<usize> {
        &self.graph
    }
}

/// Generates `union_count` random `(left, right)` pairs over
/// `0..element_count`.
///
/// # Errors
/// Returns [`SyntheticError::Empty`] when `element_count` is zero.
pub fn union_sequence(
    element_count: usize,
    union_count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, SyntheticError> {
    if element_count == 0 {
        return Err(SyntheticError::Empty { what: "element" });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..union_count)
        .map(|_| {
            (
                rng.gen_range(0..element_count),
                rng.gen_range(0..element_count),
            )
        })
        .collect())
}
