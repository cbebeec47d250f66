//! Path finder entry points.
//!
//! A [`PathFinder`] is a storage discipline bound to a dimension. The six
//! concrete instances are:
//!
//! | Instance | Storage |
//! |---|---|
//! | [`PathFinderF1`], [`PathFinderF2`], [`PathFinderF3`] | [`FixedStorage<1..=3>`](FixedStorage) |
//! | `PathFinder::d1()`, `d2()`, `d3()` | [`DynamicStorage`] at dimension 1, 2, 3 |
//!
//! Every instance runs the same pipeline: resolve names, ingest values,
//! build the graph, check start and goal, search. Edges are priced by the
//! request's distance metric unless a custom
//! [`EdgeCost`](crate::cost::EdgeCost) is passed to
//! [`PathFinder::search_with_cost`].

use std::marker::PhantomData;

use crate::cost::{DistanceCost, EdgeCost};
use crate::distance::DistanceEngine;
use crate::error::Result;
use crate::graph::Graph;
use crate::naming::resolve_names;
use crate::request::SearchRequest;
use crate::search::{find_path_with_cost, Path};
use crate::storage::{
    validate_dimension, DynamicStorage, FixedStorage, StorageKind, ValueStorage, MAX_DIMENSION,
    MIN_DIMENSION,
};

/// Fixed storage, dimension 1.
pub type PathFinderF1 = PathFinder<FixedStorage<1>>;
/// Fixed storage, dimension 2.
pub type PathFinderF2 = PathFinder<FixedStorage<2>>;
/// Fixed storage, dimension 3.
pub type PathFinderF3 = PathFinder<FixedStorage<3>>;
/// Dynamic storage at a run-time dimension.
pub type PathFinderDynamic = PathFinder<DynamicStorage>;

/// Search engine over one value storage discipline.
///
/// Stateless apart from its dimension; one instance can serve any number of
/// requests, from any number of threads.
#[derive(Debug, Clone)]
pub struct PathFinder<S> {
    dimension: usize,
    _storage: PhantomData<fn() -> S>,
}

impl<const D: usize> PathFinder<FixedStorage<D>> {
    /// Creates the fixed-storage instance of dimension `D`.
    #[must_use]
    pub fn fixed() -> Self {
        const {
            assert!(
                D >= MIN_DIMENSION && D <= MAX_DIMENSION,
                "PathFinder supports dimensions 1..=3"
            );
        };
        Self {
            dimension: D,
            _storage: PhantomData,
        }
    }
}

impl<const D: usize> Default for PathFinder<FixedStorage<D>> {
    fn default() -> Self {
        Self::fixed()
    }
}

impl PathFinder<DynamicStorage> {
    /// Creates a dynamic-storage instance.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDimension` unless `dimension` is 1, 2 or 3.
    pub fn dynamic(dimension: usize) -> Result<Self> {
        validate_dimension(dimension)?;
        Ok(Self {
            dimension,
            _storage: PhantomData,
        })
    }

    /// Dynamic storage, dimension 1.
    #[must_use]
    pub fn d1() -> Self {
        Self::with_valid_dimension(1)
    }

    /// Dynamic storage, dimension 2.
    #[must_use]
    pub fn d2() -> Self {
        Self::with_valid_dimension(2)
    }

    /// Dynamic storage, dimension 3.
    #[must_use]
    pub fn d3() -> Self {
        Self::with_valid_dimension(3)
    }

    fn with_valid_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            _storage: PhantomData,
        }
    }
}

impl<S: ValueStorage> PathFinder<S> {
    /// Value dimension this instance accepts.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Storage discipline of this instance.
    #[must_use]
    pub fn kind(&self) -> StorageKind {
        S::KIND
    }

    /// Validates a request and builds its graph.
    ///
    /// # Errors
    ///
    /// - `Error::ValueCountMismatch` if the value list does not cover every node
    /// - `Error::DimensionMismatch` for a vector of the wrong length
    /// - `Error::OutOfRange` for an edge endpoint outside the graph
    pub fn build_graph(&self, request: &SearchRequest) -> Result<Graph<S>> {
        let names = resolve_names(
            request.num_nodes,
            &request.node_names,
            &request.node_prefix_name,
        );
        let values = S::ingest(self.dimension, request.num_nodes, &request.node_values)?;
        Graph::build(names, values, &request.graph_edges())
    }

    /// Runs a request with the built-in metric it names.
    ///
    /// Returns an empty [`Path`] when the goal is unreachable.
    ///
    /// # Errors
    ///
    /// Any validation error of [`build_graph`](Self::build_graph), or
    /// `Error::OutOfRange` for a start or goal outside the graph.
    pub fn search(&self, request: &SearchRequest) -> Result<Path> {
        self.search_with_cost(request, &DistanceCost::with_metric(request.distance_metric))
    }

    /// Runs a request with a caller-supplied distance engine.
    ///
    /// `request.distance_metric` is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    pub fn search_with_engine<E>(&self, request: &SearchRequest, engine: &E) -> Result<Path>
    where
        E: DistanceEngine + ?Sized,
    {
        self.search_with_cost(request, &DistanceCost::new(engine))
    }

    /// Runs a request with a caller-supplied edge cost function.
    ///
    /// `request.distance_metric` is ignored; `edge_cost` prices every edge
    /// for UCS and A* and supplies the A* heuristic.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    pub fn search_with_cost<C>(&self, request: &SearchRequest, edge_cost: &C) -> Result<Path>
    where
        C: EdgeCost + ?Sized,
    {
        let graph = self.build_graph(request)?;
        tracing::debug!(
            storage = ?S::KIND,
            dimension = self.dimension,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built search graph"
        );
        find_path_with_cost(
            &graph,
            request.start_node_idx,
            request.goal_node_idx,
            edge_cost,
            &request.options(),
        )
    }
}
