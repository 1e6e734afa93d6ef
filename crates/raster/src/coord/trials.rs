//! Coordinates labelling trials: fold assignments and error trials.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Coordinate, DType};
use crate::attributes::{Attribute, Fold};
use crate::error::{RasterError, Result};

/// Coordinate labels for the fold assignment of each sample in
/// cross-validation.
///
/// Fold identifiers start from 0; `-1` is the sentinel for an unassigned
/// sample. For each fold, the test set is the samples labelled *with* the
/// fold number and the training set is every sample labelled with any other
/// fold (leave-one-fold-out).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldCoord {
    values: Vec<i64>,
    k: usize,
}

impl FoldCoord {
    /// Sentinel value for an unassigned sample.
    pub const SENTINEL: i64 = -1;

    /// Build a fold coordinate from raw assignments.
    ///
    /// Every non-sentinel value must be a valid fold index. When `k` is not
    /// provided, it is inferred as the maximal assignment plus one.
    pub fn new(values: Vec<i64>, k: Option<usize>) -> Result<Self> {
        for (position, value) in values.iter().enumerate() {
            if *value != Self::SENTINEL && !Fold::is_valid(value) {
                return Err(RasterError::invalid_element("Fold", value, position));
            }
        }
        let k = match k {
            Some(k) => k,
            None => values
                .iter()
                .filter(|v| **v != Self::SENTINEL)
                .max()
                .map(|max| (*max + 1) as usize)
                .unwrap_or(0),
        };
        Ok(Self { values, k })
    }

    /// Number of folds.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Build basic fold labels gathering all samples in a single fold.
    pub fn build_labels(n_smpl: usize) -> Self {
        Self {
            values: vec![0; n_smpl],
            k: 1,
        }
    }

    /// Count the number of samples in each fold.
    ///
    /// Index `i` of the result holds the count for fold `i`. Sentinel
    /// entries are not counted.
    pub fn count_by_lab(&self) -> Vec<usize> {
        let mut counts = vec![0; self.k];
        for value in &self.values {
            if *value == Self::SENTINEL {
                continue;
            }
            let fold = *value as usize;
            if fold < self.k {
                counts[fold] += 1;
            }
        }
        counts
    }

    /// Boolean mask of the test samples for one fold (labelled *with* the
    /// fold number).
    pub fn test_mask(&self, fold: usize) -> Vec<bool> {
        self.values.iter().map(|v| *v == fold as i64).collect()
    }

    /// Boolean mask of the training samples for one fold (labelled *without*
    /// the fold number).
    pub fn train_mask(&self, fold: usize) -> Vec<bool> {
        self.values.iter().map(|v| *v != fold as i64).collect()
    }
}

impl Coordinate for FoldCoord {
    type Value = i64;
    const DTYPE: DType = DType::Int64;

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn is_sentinel(value: &i64) -> bool {
        *value == Self::SENTINEL
    }
}

/// Coordinate labels marking error trials.
///
/// `true` marks an error trial, `false` a correct one. `false` doubles as
/// the sentinel, so both labels are always reported by
/// [`ErrorCoord::count_by_lab`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCoord {
    values: Vec<bool>,
}

impl ErrorCoord {
    /// Sentinel value: an unset entry counts as a correct trial.
    pub const SENTINEL: bool = false;

    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// Build basic labels filled with correct trials.
    pub fn build_labels(n_smpl: usize) -> Self {
        Self {
            values: vec![false; n_smpl],
        }
    }

    /// Count correct (`false`) and error (`true`) trials. Both labels are
    /// present in the result even with zero occurrences.
    pub fn count_by_lab(&self) -> IndexMap<bool, usize> {
        let errors = self.values.iter().filter(|v| **v).count();
        let mut counts = IndexMap::new();
        counts.insert(false, self.values.len() - errors);
        counts.insert(true, errors);
        counts
    }
}

impl Coordinate for ErrorCoord {
    type Value = bool;
    const DTYPE: DType = DType::Bool;

    fn values(&self) -> &[bool] {
        &self.values
    }

    fn is_sentinel(value: &bool) -> bool {
        *value == Self::SENTINEL
    }
}
