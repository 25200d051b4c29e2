use arbor_core::{AdjacencyMatrixUndirectedGraph, NodeId};

/// Graph labelled by city names, used across the integration suites.
pub type CityGraph = AdjacencyMatrixUndirectedGraph<&'static str>;

/// Builds a graph from labels and weighted label pairs, returning the graph
/// and the node ids in label order.
#[must_use]
pub fn city_graph(
    labels: &[&'static str],
    edges: &[(&'static str, &'static str, f64)],
) -> (CityGraph, Vec<NodeId>) {
    let mut graph = CityGraph::new();
    let ids = labels.iter().map(|&label| graph.add_node(label).0).collect();
    for &(left, right, weight) in edges {
        let left = graph.node_id(&left).expect("known label");
        let right = graph.node_id(&right).expect("known label");
        graph
            .add_weighted_edge(left, right, weight)
            .expect("endpoints exist");
    }
    (graph, ids)
}

/// Returns the label pairs of `edges`, each pair sorted and the list sorted.
#[must_use]
pub fn label_pairs(
    graph: &CityGraph,
    edges: &[arbor_core::GraphEdge],
) -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<_> = edges
        .iter()
        .map(|edge| {
            let left = *graph.label(edge.node1()).expect("known node");
            let right = *graph.label(edge.node2()).expect("known node");
            if left <= right { (left, right) } else { (right, left) }
        })
        .collect();
    pairs.sort_unstable();
    pairs
}
