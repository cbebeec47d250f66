//! Heap-allocated value storage validated at run time.

use crate::error::{Error, Result};

use super::{validate_dimension, validate_finite, validate_value_count, StorageKind, ValueStorage};

/// Value storage holding one `Vec<f32>` per node.
///
/// The dimension is a run-time property checked once at ingestion; every
/// stored vector has exactly `dimension` components afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicStorage {
    dimension: usize,
    values: Vec<Option<Vec<f32>>>,
}

impl ValueStorage for DynamicStorage {
    const KIND: StorageKind = StorageKind::Dynamic;

    fn ingest(dimension: usize, num_nodes: usize, values: &[Option<Vec<f32>>]) -> Result<Self> {
        validate_dimension(dimension)?;
        validate_value_count(num_nodes, values)?;

        if values.is_empty() {
            return Ok(Self {
                dimension,
                values: vec![None; num_nodes],
            });
        }

        if let Some((node, actual)) = values.iter().enumerate().find_map(|(node, value)| {
            value
                .as_ref()
                .filter(|v| v.len() != dimension)
                .map(|v| (node, v.len()))
        }) {
            return Err(Error::DimensionMismatch {
                node,
                expected: dimension,
                actual,
            });
        }
        validate_finite(values)?;

        Ok(Self {
            dimension,
            values: values.to_vec(),
        })
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn value_of(&self, node: usize) -> Option<&[f32]> {
        self.values.get(node).and_then(|v| v.as_deref())
    }
}
