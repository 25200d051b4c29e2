//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise during benchmark data preparation
//! so that setup functions can propagate failures with `?` instead of using
//! `.expect()`.

use arbor_core::{AlgorithmError, DisjointSetError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic input generation failed.
    #[error("synthetic input generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A spanning tree or components computation failed.
    #[error("graph algorithm failed: {0}")]
    Algorithm(#[from] AlgorithmError),
    /// Populating a disjoint-set backend failed.
    #[error("disjoint-set operation failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}
