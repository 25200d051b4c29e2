//! Property 3: Prim and Kruskal agreement.
//!
//! Prim grown from node 0 must reach exactly the component containing node 0
//! and, on connected graphs, match Kruskal's total weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    components::connected_components,
    graph::NodeId,
    mst::{kruskal, prim},
};

use super::helpers::weights_match;
use super::types::MstFixture;

/// Runs the algorithm agreement property for the given fixture.
pub(super) fn run_agreement_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let source = NodeId::new(0);

    let tree = prim(&graph, source)
        .map_err(|error| TestCaseError::fail(format!("prim failed: {error}")))?;
    let components = connected_components(&graph)
        .map_err(|error| TestCaseError::fail(format!("components failed: {error}")))?;
    let home = components
        .iter()
        .find(|component| component.contains(&source))
        .ok_or_else(|| TestCaseError::fail("source belongs to no component"))?;

    for node in (0..fixture.node_count).map(NodeId::new) {
        if tree.is_reachable(node) != home.contains(&node) {
            return Err(TestCaseError::fail(format!(
                "node {node}: reachable={} but in source component={}",
                tree.is_reachable(node),
                home.contains(&node),
            )));
        }
        let has_parent = tree.predecessor(node).is_some();
        if has_parent != (node != source && home.contains(&node)) {
            return Err(TestCaseError::fail(format!(
                "node {node}: unexpected predecessor {:?}",
                tree.predecessor(node),
            )));
        }
    }
    if tree.edges().len() + 1 != home.len() {
        return Err(TestCaseError::fail(format!(
            "prim added {} edges for a component of {} nodes",
            tree.edges().len(),
            home.len(),
        )));
    }

    if components.len() == 1 {
        let expected = kruskal(&graph)
            .map_err(|error| TestCaseError::fail(format!("kruskal failed: {error}")))?;
        if !weights_match(tree.total_weight(), expected.total_weight()) {
            return Err(TestCaseError::fail(format!(
                "prim total {} differs from kruskal total {} (distribution={:?}, nodes={})",
                tree.total_weight(),
                expected.total_weight(),
                fixture.distribution,
                fixture.node_count,
            )));
        }
    }

    Ok(())
}
