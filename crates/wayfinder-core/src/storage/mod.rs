//! Node value-vector storage strategies.
//!
//! The search algorithms read node values through [`ValueStorage`] and never
//! learn which discipline backs it:
//!
//! - [`FixedStorage<D>`]: one inline `[f32; D]` per node. The dimension is
//!   part of the type, so a stored vector can never have the wrong length.
//! - [`DynamicStorage`]: one heap `Vec<f32>` per node, validated against the
//!   configured dimension when the values are ingested.
//!
//! Both reject a wrong-length input vector with
//! [`Error::DimensionMismatch`]; neither truncates nor pads. NaN or infinite
//! components are rejected with [`Error::NonFiniteValue`].
//!
//! # Example
//!
//! ```rust
//! use wayfinder_core::storage::{DynamicStorage, FixedStorage, ValueStorage};
//!
//! let values = vec![Some(vec![0.0, 1.0]), None, Some(vec![2.0, 2.0])];
//!
//! let fixed = FixedStorage::<2>::ingest(2, 3, &values).unwrap();
//! let dynamic = DynamicStorage::ingest(2, 3, &values).unwrap();
//!
//! assert_eq!(fixed.value_of(2), dynamic.value_of(2));
//! assert!(!fixed.has_value(1));
//! ```

mod dynamic;
mod fixed;


pub use dynamic::DynamicStorage;
pub use fixed::FixedStorage;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest supported value dimension.
pub const MIN_DIMENSION: usize = 1;

/// Largest supported value dimension.
pub const MAX_DIMENSION: usize = 3;

/// Storage discipline backing a [`ValueStorage`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Inline arrays, dimension checked at compile time.
    Fixed,
    /// Heap vectors, dimension checked at ingestion.
    Dynamic,
}

/// Read/validate contract shared by every storage discipline.
pub trait ValueStorage: Sized + Send + Sync {
    /// Discipline of this storage, reported in logs.
    const KIND: StorageKind;

    /// Validates and stores one optional vector per node.
    ///
    /// An empty `values` slice means no node carries a value. Otherwise it
    /// must hold exactly `num_nodes` entries.
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedDimension` if `dimension` is not storable
    /// - `Error::ValueCountMismatch` if `values` is non-empty and does not
    ///   cover every node
    /// - `Error::DimensionMismatch` for the first vector whose length is not
    ///   `dimension`
    /// - `Error::NonFiniteValue` for the first NaN or infinite component
    fn ingest(dimension: usize, num_nodes: usize, values: &[Option<Vec<f32>>]) -> Result<Self>;

    /// Configured dimension of every stored vector.
    fn dimension(&self) -> usize;

    /// Number of node slots.
    fn len(&self) -> usize;

    /// Returns true if the storage has no node slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value vector of a node, if it carries one.
    fn value_of(&self, node: usize) -> Option<&[f32]>;

    /// Returns true if the node carries a value vector.
    fn has_value(&self, node: usize) -> bool {
        self.value_of(node).is_some()
    }

    /// Returns true if every node carries a value vector.
    fn is_fully_valued(&self) -> bool {
        (0..self.len()).all(|node| self.has_value(node))
    }
}

/// Checks a dimension against the supported range.
pub(crate) fn validate_dimension(dimension: usize) -> Result<()> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(Error::UnsupportedDimension(dimension))
    }
}

/// Checks that a non-empty value list covers every node.
pub(crate) fn validate_value_count(num_nodes: usize, values: &[Option<Vec<f32>>]) -> Result<()> {
    if values.is_empty() || values.len() == num_nodes {
        Ok(())
    } else {
        Err(Error::ValueCountMismatch {
            expected: num_nodes,
            actual: values.len(),
        })
    }
}

/// Rejects NaN and infinite components.
pub(crate) fn validate_finite(values: &[Option<Vec<f32>>]) -> Result<()> {
    for (node, value) in values.iter().enumerate() {
        let Some(value) = value else { continue };
        if let Some(component) = value.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteValue { node, component });
        }
    }
    Ok(())
}
