//! Shared fixtures for scenario tests.
//!
//! `six_node` and `sixteen_node` are small road-network style graphs with a
//! unique feature each: node 4 of `six_node` is expensive once values are
//! attached, and `sixteen_node` has several equal-hop routes to node 15.

use wayfinder_core::{Path, SearchRequest};

pub const SIX_EDGES: [(usize, usize); 8] = [
    (0, 1),
    (0, 2),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
    (3, 5),
    (4, 5),
];

pub const SIXTEEN_EDGES: [(usize, usize); 25] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 3),
    (2, 4),
    (2, 7),
    (3, 7),
    (3, 10),
    (3, 11),
    (3, 12),
    (4, 5),
    (4, 7),
    (5, 6),
    (6, 13),
    (7, 8),
    (8, 9),
    (9, 13),
    (9, 15),
    (10, 11),
    (10, 13),
    (11, 12),
    (11, 14),
    (12, 14),
    (13, 15),
];

pub const SIX_SCALARS: [f32; 6] = [0.0, 1.0, 1.0, 2.0, 9.0, 6.0];

pub const SIXTEEN_SCALARS: [f32; 16] = [
    0.0, 10.0, 1.0, 2.0, 10.0, 15.0, 20.0, 20.0, 25.0, 5.0, 5.0, 4.0, 3.0, 5.0, 3.0, 20.0,
];

/// Unvalued six-node graph, 0 to 5.
pub fn six_node() -> SearchRequest {
    SearchRequest::new(6, 0, 5).with_edges(SIX_EDGES.to_vec())
}

/// Six-node graph with one scalar per node.
pub fn six_node_valued() -> SearchRequest {
    six_node().with_values(scalars(&SIX_SCALARS))
}

/// Six-node graph with scalars embedded in the first axis of `dim`-vectors.
pub fn six_node_embedded(dim: usize) -> SearchRequest {
    let values = SIX_SCALARS
        .iter()
        .map(|&v| {
            let mut vector = vec![0.0; dim];
            vector[0] = v;
            Some(vector)
        })
        .collect();
    six_node().with_values(values)
}

/// Unvalued sixteen-node graph, 0 to 15.
pub fn sixteen_node() -> SearchRequest {
    SearchRequest::new(16, 0, 15).with_edges(SIXTEEN_EDGES.to_vec())
}

/// Sixteen-node graph with one scalar per node.
pub fn sixteen_node_valued() -> SearchRequest {
    sixteen_node().with_values(scalars(&SIXTEEN_SCALARS))
}

pub fn scalars(values: &[f32]) -> Vec<Option<Vec<f32>>> {
    values.iter().map(|&v| Some(vec![v])).collect()
}

pub fn names(path: &Path) -> Vec<String> {
    path.names().into_iter().map(str::to_string).collect()
}

pub fn node_names(indices: &[usize]) -> Vec<String> {
    indices.iter().map(|i| format!("Node_{i}")).collect()
}
