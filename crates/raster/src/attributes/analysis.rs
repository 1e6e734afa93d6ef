//! Labels attached to trials for analytical workflows: fold assignments and
//! trial indices.

use serde::{Deserialize, Serialize};

use super::Attribute;
use crate::error::{RasterError, Result};

/// Fold label for cross-validation. Non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fold(i64);

impl Fold {
    pub const MIN: i64 = 0;

    /// Validate and wrap a fold index.
    pub fn new(value: i64) -> Result<Self> {
        Self::from_value(value)
    }

    pub fn index(&self) -> i64 {
        self.0
    }
}

impl Attribute for Fold {
    type Value = i64;

    fn from_value(value: i64) -> Result<Self> {
        if !Self::is_valid(&value) {
            return Err(RasterError::invalid_value("Fold", value));
        }
        Ok(Fold(value))
    }

    fn is_valid(value: &i64) -> bool {
        *value >= Self::MIN
    }

    fn value(&self) -> i64 {
        self.0
    }
}

/// Index of a trial in a data set. Non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrialIndex(i64);

impl TrialIndex {
    pub const MIN: i64 = 0;

    /// Validate and wrap a trial index.
    pub fn new(value: i64) -> Result<Self> {
        Self::from_value(value)
    }

    pub fn index(&self) -> i64 {
        self.0
    }
}

impl Attribute for TrialIndex {
    type Value = i64;

    fn from_value(value: i64) -> Result<Self> {
        if !Self::is_valid(&value) {
            return Err(RasterError::invalid_value("TrialIndex", value));
        }
        Ok(TrialIndex(value))
    }

    fn is_valid(value: &i64) -> bool {
        *value >= Self::MIN
    }

    fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_bounds() {
        assert_eq!(Fold::new(0).unwrap().index(), 0);
        assert_eq!(Fold::new(7).unwrap().value(), 7);
        assert!(Fold::new(-1).is_err());
    }

    #[test]
    fn test_trial_index_bounds() {
        assert!(TrialIndex::new(12).is_ok());
        assert!(TrialIndex::new(-3).is_err());
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(Fold::new(2).unwrap(), Fold::new(2).unwrap());
        assert_ne!(Fold::new(2).unwrap(), Fold::new(3).unwrap());
    }
}
