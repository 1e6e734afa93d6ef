//! Positional attributes capturing the sequential structure of an experiment.

use serde::{Deserialize, Serialize};

use super::Attribute;
use crate::error::{RasterError, Result};

/// Bounded integer positions within the experiment's sequential structure.
///
/// `MAX` is `None` when the position has no upper bound a priori.
pub trait Position: Attribute<Value = i64> + Copy + Eq + std::hash::Hash + 'static {
    /// Attribute kind cited in validation errors.
    const KIND: &'static str;
    const MIN: i64;
    const MAX: Option<i64>;

    /// The raw position index.
    fn index(&self) -> i64;

    /// Check a raw value against the declared bounds.
    fn in_bounds(value: i64) -> bool {
        value >= Self::MIN && Self::MAX.is_none_or(|max| value <= max)
    }
}

fn bounded<P: Position>(value: i64) -> Result<i64> {
    if !P::in_bounds(value) {
        return Err(RasterError::invalid_value(P::KIND, value));
    }
    Ok(value)
}

/// Recording number of one session at a given site, used to order sessions
/// chronologically. Numbers may not start at 1 and may have gaps, since the
/// retained sessions are a subset of the full data base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Recording(i64);

impl Recording {
    pub fn new(value: i64) -> Result<Self> {
        Self::from_value(value)
    }
}

impl Attribute for Recording {
    type Value = i64;

    fn from_value(value: i64) -> Result<Self> {
        Ok(Recording(bounded::<Self>(value)?))
    }

    fn is_valid(value: &i64) -> bool {
        Self::in_bounds(*value)
    }

    fn value(&self) -> i64 {
        self.0
    }
}

impl Position for Recording {
    const KIND: &'static str = "Recording";
    const MIN: i64 = 1;
    const MAX: Option<i64> = None;

    fn index(&self) -> i64 {
        self.0
    }
}

/// Position of one block of trials within a session. Blocks number from 1;
/// a session usually contains 30-40 of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Block(i64);

impl Block {
    pub fn new(value: i64) -> Result<Self> {
        Self::from_value(value)
    }
}

impl Attribute for Block {
    type Value = i64;

    fn from_value(value: i64) -> Result<Self> {
        Ok(Block(bounded::<Self>(value)?))
    }

    fn is_valid(value: &i64) -> bool {
        Self::in_bounds(*value)
    }

    fn value(&self) -> i64 {
        self.0
    }
}

impl Position for Block {
    const KIND: &'static str = "Block";
    const MIN: i64 = 1;
    const MAX: Option<i64> = None;

    fn index(&self) -> i64 {
        self.0
    }
}

/// Slot within one block, marking one period centered around a stimulus
/// presentation. At most 7 stimuli occur per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot(i64);

impl Slot {
    pub fn new(value: i64) -> Result<Self> {
        Self::from_value(value)
    }
}

impl Attribute for Slot {
    type Value = i64;

    fn from_value(value: i64) -> Result<Self> {
        Ok(Slot(bounded::<Self>(value)?))
    }

    fn is_valid(value: &i64) -> bool {
        Self::in_bounds(*value)
    }

    fn value(&self) -> i64 {
        self.0
    }
}

impl Position for Slot {
    const KIND: &'static str = "Slot";
    const MIN: i64 = 0;
    const MAX: Option<i64> = Some(7);

    fn index(&self) -> i64 {
        self.0
    }
}
