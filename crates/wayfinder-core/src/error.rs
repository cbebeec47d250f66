//! Error types for wayfinder-core.
//!
//! Every failure is detected while validating a request, before the first
//! search step runs. An unreachable goal is not an error: it is reported as
//! an empty [`Path`](crate::search::Path).

use thiserror::Error;

/// Pathfinding error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A value vector does not have the configured dimension.
    #[error("Dimension mismatch at node {node}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Index of the offending node.
        node: usize,
        /// Dimension the storage was configured with.
        expected: usize,
        /// Length of the supplied vector.
        actual: usize,
    },

    /// A start, goal or edge endpoint index is outside `[0, bound)`.
    #[error("Index {index} out of range (graph has {bound} nodes)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of nodes in the graph.
        bound: usize,
    },

    /// Storage dimension outside the supported `1..=3` range, or not the
    /// dimension a fixed storage was compiled for.
    #[error("Unsupported value dimension {0} (supported: 1..=3)")]
    UnsupportedDimension(usize),

    /// A value vector component is NaN or infinite.
    #[error("Non-finite value at node {node}, component {component}")]
    NonFiniteValue {
        /// Index of the offending node.
        node: usize,
        /// Position of the offending component.
        component: usize,
    },

    /// An aggregate edge cost got a different number of weights and terms.
    #[error("Cost weight mismatch: {weights} weights for {terms} cost terms")]
    CostWeightMismatch {
        /// Number of supplied weights.
        weights: usize,
        /// Number of supplied cost terms.
        terms: usize,
    },

    /// A cost weight or constant edge cost is negative or not finite.
    #[error("Invalid cost factor {0}: must be finite and non-negative")]
    InvalidCostFactor(f32),

    /// A non-empty value list does not cover every node.
    #[error("Value count mismatch: expected {expected} vectors, got {actual}")]
    ValueCountMismatch {
        /// Number of nodes in the graph.
        expected: usize,
        /// Number of supplied vectors.
        actual: usize,
    },

    /// Configuration could not be loaded or extracted.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for failures caused by invalid caller input rather than
    /// a configuration source.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for pathfinding operations.
pub type Result<T> = std::result::Result<T, Error>;
