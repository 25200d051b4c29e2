//! Reference minimum spanning forest for property verification.
//!
//! A textbook O(V²) Prim over a dense weight matrix, restarted from every
//! unvisited node so it yields a forest for disconnected input. It shares no
//! code with the algorithms under test.

use super::types::MstFixture;

/// Result of the reference computation.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the minimum spanning forest of the edges the fixture's graph
/// stores.
pub(super) fn dense_prim_forest(fixture: &MstFixture) -> OracleForest {
    dense_prim_forest_from(fixture.node_count, &fixture.stored_edges())
}

/// Computes the minimum spanning forest of `edges` over `node_count` nodes.
/// Self-loops are ignored; the lightest of parallel edges is used.
pub(super) fn dense_prim_forest_from(
    node_count: usize,
    edges: &[(usize, usize, f64)],
) -> OracleForest {
    let mut matrix = vec![vec![f64::INFINITY; node_count]; node_count];
    for &(left, right, weight) in edges {
        if left != right && weight < matrix[left][right] {
            matrix[left][right] = weight;
            matrix[right][left] = weight;
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut best = vec![f64::INFINITY; node_count];
    let mut result = OracleForest {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };

    for _ in 0..node_count {
        let next = (0..node_count)
            .filter(|&node| !in_tree[node])
            .min_by(|&left, &right| best[left].total_cmp(&best[right]))
            .expect("loop runs once per node");

        if best[next].is_finite() {
            result.total_weight += best[next];
            result.edge_count += 1;
        } else {
            result.component_count += 1;
        }
        in_tree[next] = true;

        for node in 0..node_count {
            if !in_tree[node] && matrix[next][node] < best[node] {
                best[node] = matrix[next][node];
            }
        }
    }

    result
}
