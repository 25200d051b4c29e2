//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs, union sequences, and parameter types
//! used by the Criterion benchmarks for the disjoint-set backends and the
//! minimum spanning tree algorithms.

pub mod error;
pub mod params;
pub mod source;
