//! Shared graphs for the search unit tests.

use crate::distance::CpuDistance;
use crate::graph::{Edge, Graph};
use crate::naming::resolve_names;
use crate::storage::{DynamicStorage, ValueStorage};

use super::{find_path, Path, SearchMethod, SearchOptions};

pub(super) const SIX_EDGES: [(usize, usize); 8] = [
    (0, 1),
    (0, 2),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
    (3, 5),
    (4, 5),
];

pub(super) const SIX_VALUES: [f32; 6] = [0.0, 1.0, 1.0, 2.0, 9.0, 6.0];

pub(super) const SIXTEEN_EDGES: [(usize, usize); 25] = [
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

pub(super) const SIXTEEN_VALUES: [f32; 16] = [
    0.0, 10.0, 1.0, 2.0, 10.0, 15.0, 20.0, 20.0, 25.0, 5.0, 5.0, 4.0, 3.0, 5.0, 3.0, 20.0,
];

pub(super) fn graph(num_nodes: usize, pairs: &[(usize, usize)]) -> Graph<DynamicStorage> {
    valued_graph(num_nodes, pairs, &[])
}

pub(super) fn scalar_graph(pairs: &[(usize, usize)], scalars: &[f32]) -> Graph<DynamicStorage> {
    let values: Vec<Option<Vec<f32>>> = scalars.iter().map(|v| Some(vec![*v])).collect();
    valued_graph(scalars.len(), pairs, &values)
}

pub(super) fn valued_graph(
    num_nodes: usize,
    pairs: &[(usize, usize)],
    values: &[Option<Vec<f32>>],
) -> Graph<DynamicStorage> {
    let storage = DynamicStorage::ingest(1, num_nodes, values).unwrap();
    let edges: Vec<Edge> = pairs.iter().copied().map(Edge::from).collect();
    Graph::build(resolve_names(num_nodes, &[], "Node_"), storage, &edges).unwrap()
}

pub(super) fn run(
    graph: &Graph<DynamicStorage>,
    start: usize,
    goal: usize,
    options: SearchOptions,
) -> Path {
    find_path(graph, start, goal, &CpuDistance::default(), &options).unwrap()
}

pub(super) fn indices(
    graph: &Graph<DynamicStorage>,
    start: usize,
    goal: usize,
    method: SearchMethod,
    bidirectional: bool,
) -> Vec<usize> {
    let options = SearchOptions::new(method).with_bidirectional(bidirectional);
    run(graph, start, goal, options).indices()
}
