//! Coordinates labelling positional structure (recording, block, slot).

use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Coordinate, DType};
use crate::attributes::{Block, Position, Recording, Slot};
use crate::error::{RasterError, Result};

/// Coordinate labels for one positional attribute.
///
/// Values are the raw position indices; `-1` is the sentinel for a missing
/// entry. Positions form an open label set (no fixed upper bound in
/// general), so [`PositionCoord::count_by_lab`] reports observed labels only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PositionCoord<P: Position> {
    values: Vec<i64>,
    #[serde(skip)]
    _position: PhantomData<P>,
}

/// Coordinate labels for recording numbers.
pub type CoordRecording = PositionCoord<Recording>;
/// Coordinate labels for block positions.
pub type CoordBlock = PositionCoord<Block>;
/// Coordinate labels for slots within blocks.
pub type CoordSlot = PositionCoord<Slot>;

impl<P: Position> PositionCoord<P> {
    /// Sentinel value for a missing position.
    pub const SENTINEL: i64 = -1;

    /// Build a coordinate from raw position indices, validating every
    /// non-sentinel element against the position's bounds.
    pub fn new(values: Vec<i64>) -> Result<Self> {
        for (position, value) in values.iter().enumerate() {
            if *value != Self::SENTINEL && !P::in_bounds(*value) {
                return Err(RasterError::invalid_element(P::KIND, value, position));
            }
        }
        Ok(Self {
            values,
            _position: PhantomData,
        })
    }

    /// Build labels filled with a single position.
    pub fn build_labels(n_smpl: usize, pos: P) -> Self {
        Self {
            values: vec![pos.index(); n_smpl],
            _position: PhantomData,
        }
    }

    /// Build labels filled with the sentinel.
    pub fn build_empty(n_smpl: usize) -> Self {
        Self {
            values: vec![Self::SENTINEL; n_smpl],
            _position: PhantomData,
        }
    }

    /// Count samples per observed label, in order of first appearance.
    /// Sentinel entries are not counted.
    pub fn count_by_lab(&self) -> IndexMap<i64, usize> {
        let mut counts = IndexMap::new();
        for value in &self.values {
            if *value == Self::SENTINEL {
                continue;
            }
            *counts.entry(*value).or_insert(0) += 1;
        }
        counts
    }
}

impl<P: Position> Coordinate for PositionCoord<P> {
    type Value = i64;
    const DTYPE: DType = DType::Int64;

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn is_sentinel(value: &i64) -> bool {
        *value == Self::SENTINEL
    }
}
