//! Edge cost functions.
//!
//! An [`EdgeCost`] prices the move between two adjacent nodes from their
//! value vectors, and may supply a lower-bound estimate that A* uses as its
//! heuristic. Three implementations cover the common cases:
//!
//! - [`DefaultCost`]: the same constant for every edge
//! - [`DistanceCost`]: the distance between the endpoint values (the default)
//! - [`AggregateCost`]: a weighted sum of other cost functions
//!
//! # Example
//!
//! ```rust
//! use wayfinder_core::cost::{AggregateCost, DefaultCost, DistanceCost, EdgeCost};
//! use wayfinder_core::DistanceMetric;
//!
//! // One unit per hop plus half the Manhattan distance between the endpoints.
//! let cost = AggregateCost::weighted(
//!     vec![1.0, 0.5],
//!     vec![
//!         Box::new(DefaultCost::unit()),
//!         Box::new(DistanceCost::with_metric(DistanceMetric::Manhattan)),
//!     ],
//! )
//! .unwrap();
//!
//! let (a, b): (&[f32], &[f32]) = (&[0.0], &[4.0]);
//! assert_eq!(cost.cost(Some(a), Some(b)), 3.0);
//! assert_eq!(cost.estimate(Some(a), Some(b)), 2.0);
//! ```

use std::fmt;

use crate::distance::{CpuDistance, DistanceEngine, DistanceMetric};
use crate::error::{Error, Result};

/// Cost of an edge whose endpoints cannot both be priced by value.
pub const UNIT_COST: f32 = 1.0;

/// Prices the move between two adjacent nodes.
///
/// Either value is `None` when that node carries no value vector. Costs must
/// be finite and non-negative.
pub trait EdgeCost: Send + Sync {
    /// Cost of moving from a node valued `from` to a node valued `to`.
    fn cost(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32;

    /// Lower bound on the cost of any path between the two values.
    ///
    /// A* uses this as its heuristic. The default is `0.0`, which turns A*
    /// into uniform-cost search.
    fn estimate(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        let _ = (from, to);
        0.0
    }
}

impl<C: EdgeCost + ?Sized> EdgeCost for &C {
    fn cost(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        (**self).cost(from, to)
    }

    fn estimate(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        (**self).estimate(from, to)
    }
}

impl<C: EdgeCost + ?Sized> EdgeCost for Box<C> {
    fn cost(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        (**self).cost(from, to)
    }

    fn estimate(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        (**self).estimate(from, to)
    }
}

/// Constant cost for every edge, regardless of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultCost {
    value: f32,
}

impl DefaultCost {
    /// Creates a constant edge cost.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCostFactor` if `value` is negative or not finite.
    pub fn new(value: f32) -> Result<Self> {
        check_factor(value)?;
        Ok(Self { value })
    }

    /// One per edge: the cost that makes uniform-cost search count hops.
    #[must_use]
    pub fn unit() -> Self {
        Self { value: UNIT_COST }
    }

    /// The constant returned for every edge.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl Default for DefaultCost {
    fn default() -> Self {
        Self::unit()
    }
}

impl EdgeCost for DefaultCost {
    fn cost(&self, _from: Option<&[f32]>, _to: Option<&[f32]>) -> f32 {
        self.value
    }
}

/// Distance between the endpoint values.
///
/// An edge touching a node without a value costs [`UNIT_COST`], and its
/// estimate is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceCost<E = CpuDistance> {
    engine: E,
}

impl<E: DistanceEngine> DistanceCost<E> {
    /// Wraps a distance engine.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Metric of the wrapped engine.
    #[must_use]
    pub fn metric(&self) -> DistanceMetric {
        self.engine.metric()
    }
}

impl DistanceCost<CpuDistance> {
    /// Distance cost with a built-in metric.
    #[must_use]
    pub fn with_metric(metric: DistanceMetric) -> Self {
        Self::new(CpuDistance::new(metric))
    }
}

impl<E: DistanceEngine> EdgeCost for DistanceCost<E> {
    fn cost(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        match (from, to) {
            (Some(a), Some(b)) => self.engine.distance(a, b),
            _ => UNIT_COST,
        }
    }

    fn estimate(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        match (from, to) {
            (Some(a), Some(b)) => self.engine.distance(a, b),
            _ => 0.0,
        }
    }
}

/// Weighted sum of cost functions.
///
/// Both the cost and the estimate are `Σ weights[i] * term_i`, so the
/// estimate stays a lower bound when every term's estimate is one.
pub struct AggregateCost {
    weights: Vec<f32>,
    terms: Vec<Box<dyn EdgeCost>>,
}

impl AggregateCost {
    /// Sums the terms with weight one each.
    #[must_use]
    pub fn new(terms: Vec<Box<dyn EdgeCost>>) -> Self {
        Self {
            weights: vec![1.0; terms.len()],
            terms,
        }
    }

    /// Sums the terms with one weight per term.
    ///
    /// # Errors
    ///
    /// - `Error::CostWeightMismatch` if there is not exactly one weight per term
    /// - `Error::InvalidCostFactor` for a negative or non-finite weight
    pub fn weighted(weights: Vec<f32>, terms: Vec<Box<dyn EdgeCost>>) -> Result<Self> {
        if weights.len() != terms.len() {
            tracing::error!(
                weights = weights.len(),
                terms = terms.len(),
                "Aggregate cost weights do not match its terms"
            );
            return Err(Error::CostWeightMismatch {
                weights: weights.len(),
                terms: terms.len(),
            });
        }
        for &weight in &weights {
            check_factor(weight)?;
        }
        Ok(Self { weights, terms })
    }

    /// Per-term weights.
    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms, which prices every edge at zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Debug for AggregateCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateCost")
            .field("weights", &self.weights)
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl EdgeCost for AggregateCost {
    fn cost(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        self.weights
            .iter()
            .zip(&self.terms)
            .map(|(weight, term)| weight * term.cost(from, to))
            .sum()
    }

    fn estimate(&self, from: Option<&[f32]>, to: Option<&[f32]>) -> f32 {
        self.weights
            .iter()
            .zip(&self.terms)
            .map(|(weight, term)| weight * term.estimate(from, to))
            .sum()
    }
}

fn check_factor(value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidCostFactor(value))
    }
}
