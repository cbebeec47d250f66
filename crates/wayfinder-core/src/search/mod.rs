//! Start-to-goal path search.
//!
//! Four frontier disciplines share one expansion skeleton:
//!
//! | Method | Frontier | Ordering |
//! |---|---|---|
//! | [`SearchMethod::BreadthFirst`] | FIFO | insertion order |
//! | [`SearchMethod::DepthFirst`] | LIFO | last pushed first |
//! | [`SearchMethod::UniformCost`] | binary heap | accumulated cost `g` |
//! | [`SearchMethod::AStar`] | binary heap | `g + h`, `h` = cost estimate to the goal |
//!
//! Every node is closed on its first dequeue and never reopened. With
//! `bidirectional` set, two frontiers of the same discipline run from the
//! start and from the goal and meet in the middle.
//!
//! Edges are priced by an [`EdgeCost`](crate::cost::EdgeCost).
//! [`find_path`] uses the distance between endpoint values;
//! [`find_path_with_cost`] takes any cost function.
//!
//! # Example
//!
//! ```rust
//! use wayfinder_core::distance::CpuDistance;
//! use wayfinder_core::graph::{Edge, Graph};
//! use wayfinder_core::search::{find_path, SearchMethod, SearchOptions};
//! use wayfinder_core::storage::{FixedStorage, ValueStorage};
//!
//! let names = (0..4).map(|i| format!("Node_{i}")).collect();
//! let values = FixedStorage::<1>::ingest(1, 4, &[]).unwrap();
//! let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(0, 3)];
//! let graph = Graph::build(names, values, &edges).unwrap();
//!
//! let options = SearchOptions::new(SearchMethod::BreadthFirst);
//! let path = find_path(&graph, 0, 2, &CpuDistance::default(), &options).unwrap();
//! assert_eq!(path.indices(), vec![0, 1, 2]);
//! ```

mod bidirectional;
mod cost;
mod frontier;
mod method;
mod ordered_float;
mod path;
mod unidirectional;

#[cfg(test)]
mod fixtures;

pub use method::SearchMethod;
pub use path::{Path, PathStep, SearchStats};

use crate::cost::{DistanceCost, EdgeCost};
use crate::distance::DistanceEngine;
use crate::error::Result;
use crate::graph::Graph;
use crate::storage::ValueStorage;

use cost::CostModel;

/// Per-search switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Frontier discipline.
    pub method: SearchMethod,
    /// Annotate BFS/DFS paths with value cost instead of hop counts.
    pub use_node_value: bool,
    /// Search from both ends at once.
    pub bidirectional: bool,
}

impl SearchOptions {
    /// Options for a unidirectional search with hop annotations.
    #[must_use]
    pub fn new(method: SearchMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Sets bidirectional search.
    #[must_use]
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// Sets value-cost annotation for BFS/DFS.
    #[must_use]
    pub fn with_node_value(mut self, use_node_value: bool) -> Self {
        self.use_node_value = use_node_value;
        self
    }
}

/// Finds a path from `start` to `goal`, pricing edges by the distance
/// between their endpoint values.
///
/// Returns an empty [`Path`] when the goal is unreachable.
///
/// # Errors
///
/// Returns `Error::OutOfRange` if `start` or `goal` is not a node index.
pub fn find_path<S, E>(
    graph: &Graph<S>,
    start: usize,
    goal: usize,
    engine: &E,
    options: &SearchOptions,
) -> Result<Path>
where
    S: ValueStorage,
    E: DistanceEngine + ?Sized,
{
    tracing::debug!(metric = %engine.metric(), "Pricing edges by distance");
    find_path_with_cost(graph, start, goal, &DistanceCost::new(engine), options)
}

/// Finds a path from `start` to `goal` with a caller-supplied edge cost.
///
/// UCS and A* order their frontier by `edge_cost`, and A* uses its
/// [`estimate`](EdgeCost::estimate) as the heuristic. BFS and DFS only use
/// it for path annotations when `use_node_value` is set.
///
/// # Errors
///
/// Returns `Error::OutOfRange` if `start` or `goal` is not a node index.
pub fn find_path_with_cost<S, C>(
    graph: &Graph<S>,
    start: usize,
    goal: usize,
    edge_cost: &C,
    options: &SearchOptions,
) -> Result<Path>
where
    S: ValueStorage,
    C: EdgeCost + ?Sized,
{
    graph.check_index(start)?;
    graph.check_index(goal)?;

    tracing::debug!(
        method = %options.method,
        storage = ?S::KIND,
        dimension = graph.values().dimension(),
        bidirectional = options.bidirectional,
        start,
        goal,
        "Starting path search"
    );

    let cost = CostModel::new(graph, edge_cost, options.method, options.use_node_value);
    let path = if options.bidirectional {
        bidirectional::search(&cost, start, goal)
    } else {
        unidirectional::search(&cost, start, goal)
    };

    tracing::debug!(
        found = path.found(),
        length = path.len(),
        nodes_expanded = path.stats().nodes_expanded,
        edges_scanned = path.stats().edges_scanned,
        "Path search finished"
    );

    Ok(path)
}

/// Builds the result step for one node.
fn path_step<S: ValueStorage>(graph: &Graph<S>, index: usize, cost: f32) -> PathStep {
    PathStep {
        index,
        name: graph
            .node(index)
            .map(|node| node.name().to_string())
            .unwrap_or_default(),
        value: graph.value_of(index).map(<[f32]>::to_vec),
        cost,
    }
}
