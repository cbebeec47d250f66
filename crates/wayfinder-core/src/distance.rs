//! Distance metrics between node value vectors.
//!
//! The metric plays two roles during a search: edge traversal cost for the
//! cost-aware methods and goal-distance heuristic for A*. [`DistanceMetric`]
//! names the built-in metrics; [`DistanceEngine`] is the seam for adding
//! others without widening the enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Built-in distance metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Sum of absolute component differences (L1).
    #[default]
    #[serde(alias = "MANHATTAN")]
    Manhattan,
    /// Straight-line distance (L2).
    #[serde(alias = "EUCLIDEAN")]
    Euclidean,
}

impl DistanceMetric {
    /// Computes the distance between two vectors of equal length.
    #[must_use]
    pub fn calculate(&self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            Self::Manhattan => manhattan_distance(a, b),
            Self::Euclidean => euclidean_distance(a, b),
        }
    }

    /// Lower-case name used in configuration files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" | "l1" => Ok(Self::Manhattan),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            other => Err(format!("unknown distance metric: {other}")),
        }
    }
}

/// Trait for distance computation engines.
///
/// Implementations must return a non-negative, symmetric value that is zero
/// for identical vectors. Both vectors always have the storage dimension.
pub trait DistanceEngine: Send + Sync {
    /// Computes distance between two vectors.
    fn distance(&self, a: &[f32], b: &[f32]) -> f32;

    /// Returns the metric reported in logs for this engine.
    fn metric(&self) -> DistanceMetric;
}

impl<E: DistanceEngine + ?Sized> DistanceEngine for &E {
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        (**self).distance(a, b)
    }

    fn metric(&self) -> DistanceMetric {
        (**self).metric()
    }
}

/// CPU scalar distance computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuDistance {
    metric: DistanceMetric,
}

impl CpuDistance {
    /// Creates a new CPU distance engine with the given metric.
    #[must_use]
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }
}

impl DistanceEngine for CpuDistance {
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        self.metric.calculate(a, b)
    }

    fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

/// L1 distance.
#[inline]
#[must_use]
pub fn manhattan_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// L2 distance.
#[inline]
#[must_use]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}
