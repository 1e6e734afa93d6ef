//! Composite datasets: core data, paired coordinates, and metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coord::{
    Coordinate, CoordAnimal, CoordArea, CoordAttention, CoordBehavior, CoordBlock, CoordCategory,
    CoordDepth, CoordOutcome, CoordRecording, CoordSlot, CoordStimulus, CoordTask, DType,
    ErrorCoord, FoldCoord, PseudoTrialsCoord, TimeCoord,
};
use crate::data::{CoreData, Dim};
use crate::error::{RasterError, Result};

/// A coordinate stored in a dataset, tagged by its concrete type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetCoord {
    Task(CoordTask),
    Attention(CoordAttention),
    Category(CoordCategory),
    Stimulus(CoordStimulus),
    Behavior(CoordBehavior),
    Outcome(CoordOutcome),
    Animal(CoordAnimal),
    Area(CoordArea),
    Depth(CoordDepth),
    Time(TimeCoord),
    Fold(FoldCoord),
    Error(ErrorCoord),
    Recording(CoordRecording),
    Block(CoordBlock),
    Slot(CoordSlot),
    PseudoTrials(PseudoTrialsCoord),
}

impl DatasetCoord {
    /// Number of labels along the paired axis, or `None` for coordinates
    /// spanning a cross product of axes.
    pub fn axis_len(&self) -> Option<usize> {
        match self {
            DatasetCoord::Task(c) => Some(c.len()),
            DatasetCoord::Attention(c) => Some(c.len()),
            DatasetCoord::Category(c) => Some(c.len()),
            DatasetCoord::Stimulus(c) => Some(c.len()),
            DatasetCoord::Behavior(c) => Some(c.len()),
            DatasetCoord::Outcome(c) => Some(c.len()),
            DatasetCoord::Animal(c) => Some(c.len()),
            DatasetCoord::Area(c) => Some(c.len()),
            DatasetCoord::Depth(c) => Some(c.len()),
            DatasetCoord::Time(c) => Some(c.len()),
            DatasetCoord::Fold(c) => Some(c.len()),
            DatasetCoord::Error(c) => Some(c.len()),
            DatasetCoord::Recording(c) => Some(c.len()),
            DatasetCoord::Block(c) => Some(c.len()),
            DatasetCoord::Slot(c) => Some(c.len()),
            DatasetCoord::PseudoTrials(_) => None,
        }
    }

    /// Data type of the underlying array.
    pub fn dtype(&self) -> DType {
        match self {
            DatasetCoord::Task(_)
            | DatasetCoord::Attention(_)
            | DatasetCoord::Category(_)
            | DatasetCoord::Stimulus(_)
            | DatasetCoord::Behavior(_)
            | DatasetCoord::Outcome(_)
            | DatasetCoord::Animal(_)
            | DatasetCoord::Area(_)
            | DatasetCoord::Depth(_) => DType::Str,
            DatasetCoord::Time(_) => DType::Float64,
            DatasetCoord::Fold(_)
            | DatasetCoord::Recording(_)
            | DatasetCoord::Block(_)
            | DatasetCoord::Slot(_)
            | DatasetCoord::PseudoTrials(_) => DType::Int64,
            DatasetCoord::Error(_) => DType::Bool,
        }
    }
}

/// A finalized composite dataset.
///
/// Aggregates one [`CoreData`] payload, zero or more coordinates (each
/// paired with the dimension it labels) and free-form metadata. Instances
/// are produced by [`DatasetBuilder::build`].
///
/// [`DatasetBuilder::build`]: super::DatasetBuilder::build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    data: CoreData,
    coords: IndexMap<String, (Dim, DatasetCoord)>,
    metadata: IndexMap<String, Value>,
}

impl Dataset {
    pub(crate) fn new(
        data: CoreData,
        coords: IndexMap<String, (Dim, DatasetCoord)>,
        metadata: IndexMap<String, Value>,
    ) -> Self {
        Self {
            data,
            coords,
            metadata,
        }
    }

    pub fn data(&self) -> &CoreData {
        &self.data
    }

    pub fn metadata(&self) -> &IndexMap<String, Value> {
        &self.metadata
    }

    /// Names of the stored coordinates, in insertion order.
    pub fn coord_names(&self) -> Vec<&str> {
        self.coords.keys().map(|name| name.as_str()).collect()
    }

    /// Look up a coordinate and its paired dimension by name.
    pub fn coord(&self, name: &str) -> Result<&(Dim, DatasetCoord)> {
        self.coords
            .get(name)
            .ok_or_else(|| RasterError::Lookup(format!("no coordinate named '{name}'")))
    }

    /// All coordinates paired with one dimension.
    pub fn coords_on(&self, dim: Dim) -> Vec<(&str, &DatasetCoord)> {
        self.coords
            .iter()
            .filter(|(_, (d, _))| *d == dim)
            .map(|(name, (_, coord))| (name.as_str(), coord))
            .collect()
    }
}
