//! Immutable undirected graph over dense node indices.
//!
//! Every edge is indexed from both endpoints. Neighbour sets keep the order
//! in which links were first supplied, which fixes the expansion order of the
//! search algorithms (and therefore which of several equal paths is found).

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::error::{Error, Result};
use crate::storage::ValueStorage;

use super::types::{Edge, Node};

type Neighbors = IndexSet<usize, FxBuildHasher>;

/// Nodes, adjacency and value storage of one search invocation.
///
/// Built once by [`Graph::build`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Graph<S> {
    nodes: Vec<Node>,
    adjacency: Vec<Neighbors>,
    values: S,
    edge_count: usize,
}

impl<S: ValueStorage> Graph<S> {
    /// Builds the graph from resolved names, ingested values and edges.
    ///
    /// The node count is `names.len()`. Duplicate links collapse into one;
    /// self-loops are kept but never shorten a path.
    ///
    /// # Errors
    ///
    /// - `Error::ValueCountMismatch` if `values` does not have one slot per node
    /// - `Error::OutOfRange` for the first edge endpoint outside `[0, num_nodes)`
    pub fn build(names: Vec<String>, values: S, edges: &[Edge]) -> Result<Self> {
        let num_nodes = names.len();
        if values.len() != num_nodes {
            return Err(Error::ValueCountMismatch {
                expected: num_nodes,
                actual: values.len(),
            });
        }

        let mut adjacency: Vec<Neighbors> = (0..num_nodes)
            .map(|_| Neighbors::with_hasher(FxBuildHasher))
            .collect();
        let mut distinct: FxHashSet<(usize, usize)> = FxHashSet::default();

        for edge in edges {
            for index in [edge.source(), edge.target()] {
                if index >= num_nodes {
                    return Err(Error::OutOfRange {
                        index,
                        bound: num_nodes,
                    });
                }
            }
            adjacency[edge.source()].insert(edge.target());
            adjacency[edge.target()].insert(edge.source());
            distinct.insert(edge.normalized());
        }

        let nodes = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Node::new(index, name))
            .collect();

        Ok(Self {
            nodes,
            adjacency,
            values,
            edge_count: distinct.len(),
        })
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct undirected links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Gets a node by index.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns all nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the neighbours of a node in first-supplied order.
    ///
    /// An unknown index has no neighbours.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(index)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Returns the number of distinct neighbours of a node.
    #[must_use]
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency.get(index).map_or(0, IndexSet::len)
    }

    /// Returns true if `a` and `b` are linked.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(&b))
    }

    /// Returns the value storage backing this graph.
    #[must_use]
    pub fn values(&self) -> &S {
        &self.values
    }

    /// Returns the value vector of a node, if it carries one.
    #[must_use]
    pub fn value_of(&self, index: usize) -> Option<&[f32]> {
        self.values.value_of(index)
    }

    /// Checks that an index names a node of this graph.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `index >= node_count()`.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.node_count() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                bound: self.node_count(),
            })
        }
    }
}
