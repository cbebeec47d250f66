//! Graph types: nodes and undirected edges.

use serde::{Deserialize, Serialize};

/// A node of the search graph.
///
/// Identity is the dense index in `[0, num_nodes)`. The value vector lives in
/// the graph's [`ValueStorage`](crate::storage::ValueStorage).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    index: usize,
    name: String,
}

impl Node {
    /// Creates a node with the given index and display name.
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// Returns the node index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An undirected edge between two node indices.
///
/// `Edge::new(a, b)` and `Edge::new(b, a)` describe the same link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the second endpoint as supplied.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns true if both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoints ordered so equal links compare equal.
    #[must_use]
    pub fn normalized(&self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}
