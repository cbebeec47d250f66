//! Inline fixed-dimension value storage.

use crate::error::{Error, Result};

use super::{
    validate_dimension, validate_finite, validate_value_count, StorageKind, ValueStorage,
    MAX_DIMENSION,
};

/// Value storage holding one `[f32; D]` per node.
///
/// `D` must lie in `1..=3`; other dimensions fail to compile as soon as the
/// storage is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStorage<const D: usize> {
    values: Vec<Option<[f32; D]>>,
}

impl<const D: usize> FixedStorage<D> {
    /// Builds storage from arrays whose length is guaranteed by the type.
    #[must_use]
    pub fn from_arrays(values: Vec<Option<[f32; D]>>) -> Self {
        const { assert!(D >= 1 && D <= MAX_DIMENSION, "FixedStorage supports dimensions 1..=3") };
        Self { values }
    }

    /// Returns the stored array of a node.
    #[must_use]
    pub fn array_of(&self, node: usize) -> Option<&[f32; D]> {
        self.values.get(node).and_then(Option::as_ref)
    }
}

impl<const D: usize> ValueStorage for FixedStorage<D> {
    const KIND: StorageKind = StorageKind::Fixed;

    fn ingest(dimension: usize, num_nodes: usize, values: &[Option<Vec<f32>>]) -> Result<Self> {
        validate_dimension(dimension)?;
        if dimension != D {
            return Err(Error::UnsupportedDimension(dimension));
        }
        validate_value_count(num_nodes, values)?;

        if values.is_empty() {
            return Ok(Self::from_arrays(vec![None; num_nodes]));
        }

        let arrays = values
            .iter()
            .enumerate()
            .map(|(node, value)| match value {
                None => Ok(None),
                Some(v) => <[f32; D]>::try_from(v.as_slice())
                    .map(Some)
                    .map_err(|_| Error::DimensionMismatch {
                        node,
                        expected: D,
                        actual: v.len(),
                    }),
            })
            .collect::<Result<Vec<_>>>()?;
        validate_finite(values)?;

        Ok(Self::from_arrays(arrays))
    }

    fn dimension(&self) -> usize {
        D
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn value_of(&self, node: usize) -> Option<&[f32]> {
        self.array_of(node).map(<[f32; D]>::as_slice)
    }
}
