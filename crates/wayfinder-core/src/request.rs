//! Search invocation record.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::distance::DistanceMetric;
use crate::graph::Edge;
use crate::naming::DEFAULT_NODE_PREFIX;
use crate::search::{SearchMethod, SearchOptions};

fn default_prefix() -> String {
    DEFAULT_NODE_PREFIX.to_string()
}

/// Graph description plus search parameters for one invocation.
///
/// Readable from JSON; every field except `num_nodes`, `start_node_idx` and
/// `goal_node_idx` has a default.
///
/// # Example
///
/// ```rust
/// use wayfinder_core::{SearchMethod, SearchRequest};
///
/// let request = SearchRequest::new(3, 0, 2)
///     .with_edges(vec![(0, 1), (1, 2)])
///     .with_method(SearchMethod::AStar);
/// assert_eq!(request.edges.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Number of nodes; indices are `0..num_nodes`.
    pub num_nodes: usize,
    /// One optional value vector per node, or empty for none.
    #[serde(default)]
    pub node_values: Vec<Option<Vec<f32>>>,
    /// Display names, used only if there is exactly one per node.
    #[serde(default)]
    pub node_names: Vec<String>,
    /// Undirected links as index pairs.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
    /// Index of the start node.
    pub start_node_idx: usize,
    /// Index of the goal node.
    pub goal_node_idx: usize,
    /// Frontier discipline.
    #[serde(default)]
    pub method: SearchMethod,
    /// Metric for edge cost and the A* heuristic.
    #[serde(default)]
    pub distance_metric: DistanceMetric,
    /// Prefix of generated node names.
    #[serde(default = "default_prefix")]
    pub node_prefix_name: String,
    /// Annotate BFS/DFS paths with value cost.
    #[serde(default)]
    pub use_node_value: bool,
    /// Search from both ends.
    #[serde(default)]
    pub bidirectional: bool,
}

impl SearchRequest {
    /// Creates a request over `num_nodes` isolated, unvalued nodes.
    #[must_use]
    pub fn new(num_nodes: usize, start_node_idx: usize, goal_node_idx: usize) -> Self {
        Self {
            num_nodes,
            node_values: Vec::new(),
            node_names: Vec::new(),
            edges: Vec::new(),
            start_node_idx,
            goal_node_idx,
            method: SearchMethod::default(),
            distance_metric: DistanceMetric::default(),
            node_prefix_name: default_prefix(),
            use_node_value: false,
            bidirectional: false,
        }
    }

    /// Sets the edge list.
    #[must_use]
    pub fn with_edges(mut self, edges: Vec<(usize, usize)>) -> Self {
        self.edges = edges;
        self
    }

    /// Sets the per-node value vectors.
    #[must_use]
    pub fn with_values(mut self, values: Vec<Option<Vec<f32>>>) -> Self {
        self.node_values = values;
        self
    }

    /// Sets the display names.
    #[must_use]
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.node_names = names;
        self
    }

    /// Sets the frontier discipline.
    #[must_use]
    pub fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    /// Sets bidirectional search.
    #[must_use]
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// Copies every search parameter from a loaded configuration.
    #[must_use]
    pub fn with_config(mut self, config: &SearchConfig) -> Self {
        self.method = config.method;
        self.distance_metric = config.distance_metric;
        self.node_prefix_name.clone_from(&config.node_prefix_name);
        self.use_node_value = config.use_node_value;
        self.bidirectional = config.bidirectional;
        self
    }

    /// Search switches of this request.
    #[must_use]
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            method: self.method,
            use_node_value: self.use_node_value,
            bidirectional: self.bidirectional,
        }
    }

    pub(crate) fn graph_edges(&self) -> Vec<Edge> {
        self.edges.iter().copied().map(Edge::from).collect()
    }
}
