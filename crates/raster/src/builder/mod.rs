//! Dataset assembly: pair core data with named coordinates and metadata.

mod dataset;

pub use dataset::{Dataset, DatasetCoord};

use indexmap::IndexMap;
use serde_json::Value;

use crate::data::{CoreData, Dim};
use crate::error::{RasterError, Result};

/// Single-use accumulator assembling a [`Dataset`].
///
/// Components are added by role: the numeric payload under `data`, free-form
/// metadata under `metadata`, and each coordinate under its own name, paired
/// with the dimension it labels. [`DatasetBuilder::build`] validates that
/// the required roles are present and that coordinate lengths agree with
/// their axes, then consumes the builder — a finished builder cannot be
/// reused.
#[derive(Debug, Default, Clone)]
pub struct DatasetBuilder {
    data: Option<CoreData>,
    metadata: Option<IndexMap<String, Value>>,
    coords: IndexMap<String, (Dim, DatasetCoord)>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the numeric payload under the `data` role.
    pub fn add_data(mut self, data: CoreData) -> Self {
        self.data = Some(data);
        self
    }

    /// Add free-form metadata under the `metadata` role.
    pub fn add_metadata(mut self, metadata: IndexMap<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Add a coordinate under its own name, paired with the dimension it
    /// labels. The coordinate itself carries no axis information.
    pub fn add_coord(mut self, name: impl Into<String>, dim: Dim, coord: DatasetCoord) -> Self {
        self.coords.insert(name.into(), (dim, coord));
        self
    }

    /// Validate completeness and finalize the dataset.
    pub fn build(self) -> Result<Dataset> {
        let data = self
            .data
            .ok_or_else(|| RasterError::MissingComponent("data".to_string()))?;
        let metadata = self
            .metadata
            .ok_or_else(|| RasterError::MissingComponent("metadata".to_string()))?;

        for (name, (dim, coord)) in &self.coords {
            if !data.dims().contains(*dim) {
                return Err(RasterError::Lookup(format!(
                    "coordinate '{name}' is paired with dimension '{dim}' absent from the data"
                )));
            }
            // 2-D coordinates (pseudo-trials) span a cross product of axes
            // and are checked by their own constructor.
            if let Some(len) = coord.axis_len() {
                let expected = data.axis_len(*dim)?;
                if len != expected {
                    return Err(RasterError::Usage(format!(
                        "coordinate '{name}' holds {len} labels for axis '{dim}' of length {expected}"
                    )));
                }
            }
        }

        Ok(Dataset::new(data, self.coords, metadata))
    }
}
