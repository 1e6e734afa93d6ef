//! The numeric payload of a data set.

use serde::{Deserialize, Serialize};

use super::{Dim, Dimensions};
use crate::error::{RasterError, Result};

/// An n-dimensional numeric array with named axes.
///
/// Values are stored flat in row-major order alongside their shape. Core
/// data carries no coordinates: the pairing of coordinates to axes lives one
/// level up, in the dataset builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreData {
    values: Vec<f64>,
    shape: Vec<usize>,
    dims: Dimensions,
}

impl CoreData {
    /// Build a payload, checking that the shape matches the value count and
    /// the dimension names match the number of axes.
    pub fn new(values: Vec<f64>, shape: Vec<usize>, dims: Dimensions) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(RasterError::Usage(format!(
                "data holds {} values for shape {:?} ({} expected)",
                values.len(),
                shape,
                expected
            )));
        }
        if dims.ndim() != shape.len() {
            return Err(RasterError::Usage(format!(
                "{} dimension names for {} axes",
                dims.ndim(),
                shape.len()
            )));
        }
        Ok(Self { values, shape, dims })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Length of the axis labelled by a dimension name.
    pub fn axis_len(&self, dim: Dim) -> Result<usize> {
        let axis = self.dims.axis_of(dim)?;
        Ok(self.shape[axis])
    }

    /// Value at a multi-dimensional index.
    pub fn at(&self, index: &[usize]) -> Result<f64> {
        if index.len() != self.shape.len() {
            return Err(RasterError::Lookup(format!(
                "index with {} coordinates into {}-dimensional data",
                index.len(),
                self.shape.len()
            )));
        }
        let mut flat = 0;
        for (axis, (&i, &extent)) in index.iter().zip(&self.shape).enumerate() {
            if i >= extent {
                return Err(RasterError::Lookup(format!(
                    "index {i} out of range for axis {axis} (extent {extent})"
                )));
            }
            flat = flat * extent + i;
        }
        Ok(self.values[flat])
    }
}
