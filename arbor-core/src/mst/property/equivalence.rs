//! Property 1: oracle equivalence.
//!
//! Kruskal over either disjoint-set backend must match the reference forest
//! in total weight, edge count and component count, and both backends must
//! select exactly the same edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    disjoint_sets::{ForestDisjointSets, LinkedListDisjointSets},
    graph::NodeId,
    mst::kruskal_with,
};

use super::helpers::weights_match;
use super::oracle::dense_prim_forest;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = dense_prim_forest(fixture);

    let forest = kruskal_with::<ForestDisjointSets<NodeId>, _>(&graph)
        .map_err(|error| fail_with(fixture, "forest kruskal", &error))?;
    let linked = kruskal_with::<LinkedListDisjointSets<NodeId>, _>(&graph)
        .map_err(|error| fail_with(fixture, "linked-list kruskal", &error))?;

    if !weights_match(forest.total_weight(), oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={} (distribution={:?}, nodes={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.distribution,
            fixture.node_count,
        )));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={}",
            forest.edges().len(),
            oracle.edge_count,
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={}",
            forest.component_count(),
            oracle.component_count,
        )));
    }
    if forest != linked {
        return Err(TestCaseError::fail(format!(
            "backends disagree (distribution={:?}, nodes={}, edges={})",
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }

    Ok(())
}

fn fail_with(fixture: &MstFixture, label: &str, error: &dyn std::error::Error) -> TestCaseError {
    TestCaseError::fail(format!(
        "{label} failed: {error} (distribution={:?}, nodes={}, edges={})",
        fixture.distribution,
        fixture.node_count,
        fixture.edges.len(),
    ))
}
