//! Property-based tests for the MST algorithms.
//!
//! Verifies Kruskal against an independent dense Prim oracle, validates the
//! structural invariants of the returned forest, and checks that Prim and
//! Kruskal agree across graph topologies with varied weight distributions.

mod agreement;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
