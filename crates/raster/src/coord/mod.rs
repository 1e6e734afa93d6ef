//! Coordinates: validated label arrays for one dimension of a data set.
//!
//! A coordinate is an ordered, fixed-length sequence of one attribute's raw
//! values. Each concrete type declares a fixed [`DType`] and a sentinel value
//! marking missing/unset entries; every non-sentinel element must satisfy the
//! associated attribute's domain predicate, checked at construction.
//!
//! A coordinate does not know the axis it labels within a data set. That
//! pairing is established by the dataset builder, keeping coordinates and
//! core data decoupled.

mod factor;
mod positions;
mod pseudo;
mod time;
mod trials;

pub use factor::{
    CoordAnimal, CoordArea, CoordAttention, CoordBehavior, CoordCategory, CoordDepth,
    CoordOutcome, CoordStimulus, CoordTask, FactorCoord,
};
pub use positions::{CoordBlock, CoordRecording, CoordSlot, PositionCoord};
pub use pseudo::PseudoTrialsCoord;
pub use time::TimeCoord;
pub use trials::{ErrorCoord, FoldCoord};

use serde::{Deserialize, Serialize};

/// Data type of a coordinate's underlying array, exposed for I/O adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    Float64,
    Int64,
    Str,
    Bool,
}

impl DType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Float64 | DType::Int64)
    }
}

/// Common contract for coordinate arrays.
pub trait Coordinate {
    /// Raw scalar type stored in the underlying array.
    type Value: Clone + PartialEq;

    /// Fixed data type of the underlying array.
    const DTYPE: DType;

    /// The raw label values, in order.
    fn values(&self) -> &[Self::Value];

    /// Whether a raw value is the reserved missing/unset marker.
    fn is_sentinel(value: &Self::Value) -> bool;

    /// Number of labels.
    fn len(&self) -> usize {
        self.values().len()
    }

    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Number of non-sentinel labels.
    fn count_defined(&self) -> usize {
        self.values().iter().filter(|v| !Self::is_sentinel(v)).count()
    }
}
