//! Search results.

use serde::{Deserialize, Serialize};

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes closed, summed over both directions for bidirectional search.
    pub nodes_expanded: usize,
    /// Adjacency entries inspected while expanding closed nodes.
    pub edges_scanned: usize,
}

impl SearchStats {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            nodes_expanded: self.nodes_expanded + other.nodes_expanded,
            edges_scanned: self.edges_scanned + other.edges_scanned,
        }
    }
}

/// One node of a found path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    /// Node index.
    pub index: usize,
    /// Resolved display name.
    pub name: String,
    /// Value vector of the node, if it carries one.
    pub value: Option<Vec<f32>>,
    /// Accumulated cost from the start node (0 at the start).
    pub cost: f32,
}

/// Ordered start-to-goal node sequence returned by a search.
///
/// An empty path means the goal is unreachable from the start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<PathStep>,
    stats: SearchStats,
}

impl Path {
    pub(crate) fn new(steps: Vec<PathStep>, stats: SearchStats) -> Self {
        Self { steps, stats }
    }

    pub(crate) fn not_found(stats: SearchStats) -> Self {
        Self {
            steps: Vec::new(),
            stats,
        }
    }

    /// Returns true if a path was found.
    #[must_use]
    pub fn found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Returns true if no path exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of nodes on the path, endpoints included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Number of edges traversed (`len() - 1`, or 0 for an empty path).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Steps from start to goal.
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Iterates over the steps from start to goal.
    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }

    /// Node indices from start to goal.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.steps.iter().map(|step| step.index).collect()
    }

    /// Node names from start to goal.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name.as_str()).collect()
    }

    /// Accumulated cost at the goal, `None` for an empty path.
    #[must_use]
    pub fn total_cost(&self) -> Option<f32> {
        self.steps.last().map(|step| step.cost)
    }

    /// Search counters.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
