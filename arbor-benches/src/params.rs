//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs whose `Display` output
//! doubles as the Criterion benchmark id.

use std::fmt;

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of edges actually stored in the graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}

/// Parameters for a disjoint-set benchmark run.
#[derive(Clone, Debug)]
pub struct UnionBenchParams {
    /// Number of singleton sets created up front.
    pub element_count: usize,
    /// Number of union operations replayed.
    pub union_count: usize,
}

impl fmt::Display for UnionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},u={}", self.element_count, self.union_count)
    }
}
