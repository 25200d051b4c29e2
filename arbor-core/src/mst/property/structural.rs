//! Property 2: structural invariant verification.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - **Acyclicity**: no tree edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Components**: `C` matches the connected-components computation.
//! - **Provenance**: every tree edge exists in the graph with its weight.
//! - **Ordering**: edges are listed in ascending weight order.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    components::connected_components,
    graph::{Graph, GraphEdge},
    mst::kruskal,
};

use super::helpers::find_root;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let tree = kruskal(&graph).map_err(|error| {
        TestCaseError::fail(format!(
            "kruskal failed: {error} (distribution={:?}, nodes={}, edges={})",
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        ))
    })?;
    let components = connected_components(&graph)
        .map_err(|error| TestCaseError::fail(format!("components failed: {error}")))?;

    validate_acyclicity(fixture.node_count, tree.edges())?;
    validate_provenance(&graph, tree.edges())?;
    validate_ordering(tree.edges())?;

    if tree.component_count() != components.len() {
        return Err(TestCaseError::fail(format!(
            "component count {} differs from connected components {}",
            tree.component_count(),
            components.len(),
        )));
    }
    let expected_edges = fixture.node_count - components.len();
    if tree.edges().len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "expected {expected_edges} edges for {} nodes in {} components, got {}",
            fixture.node_count,
            components.len(),
            tree.edges().len(),
        )));
    }

    Ok(())
}

fn validate_acyclicity(node_count: usize, edges: &[GraphEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.node1().index());
        let right = find_root(&mut parent, edge.node2().index());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {i} ({}, {}) closes a cycle",
                edge.node1(),
                edge.node2(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_provenance(graph: &impl Graph, edges: &[GraphEdge]) -> TestCaseResult {
    for edge in edges {
        let stored = graph.edge(edge.node1(), edge.node2()).ok_or_else(|| {
            TestCaseError::fail(format!(
                "edge ({}, {}) is not in the graph",
                edge.node1(),
                edge.node2(),
            ))
        })?;
        if stored.weight() != edge.weight() {
            return Err(TestCaseError::fail(format!(
                "edge ({}, {}) weight {:?} differs from stored {:?}",
                edge.node1(),
                edge.node2(),
                edge.weight(),
                stored.weight(),
            )));
        }
    }
    Ok(())
}

fn validate_ordering(edges: &[GraphEdge]) -> TestCaseResult {
    for pair in edges.windows(2) {
        let (Some(left), Some(right)) = (pair[0].weight(), pair[1].weight()) else {
            return Err(TestCaseError::fail("tree edge without weight"));
        };
        if left > right {
            return Err(TestCaseError::fail(format!(
                "edges out of order: {left} before {right}"
            )));
        }
    }
    Ok(())
}
