//! Coordinate labelling pseudo-trials: which real trial each unit contributes.

use serde::{Deserialize, Serialize};

use super::{Coordinate, DType};
use crate::attributes::{Attribute, TrialIndex};
use crate::error::{RasterError, Result};

/// Trial indices composing each pseudo-trial of a pseudo-population.
///
/// The labels span the cross product of two axes: rows are units, columns
/// are pseudo-trials, stored row-major. Entry `(u, p)` holds the index of
/// the real trial picked from unit `u` for pseudo-trial `p`; `-1` marks an
/// unset entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoTrialsCoord {
    values: Vec<i64>,
    n_units: usize,
    n_pseudo: usize,
}

impl PseudoTrialsCoord {
    /// Sentinel value for an unset entry.
    pub const SENTINEL: i64 = -1;

    /// Build from a flat row-major array.
    pub fn new(values: Vec<i64>, n_units: usize, n_pseudo: usize) -> Result<Self> {
        if values.len() != n_units * n_pseudo {
            return Err(RasterError::Usage(format!(
                "pseudo-trial labels hold {} values for a {} x {} layout",
                values.len(),
                n_units,
                n_pseudo
            )));
        }
        for (position, value) in values.iter().enumerate() {
            if *value != Self::SENTINEL && !TrialIndex::is_valid(value) {
                return Err(RasterError::invalid_element("TrialIndex", value, position));
            }
        }
        Ok(Self {
            values,
            n_units,
            n_pseudo,
        })
    }

    /// Build from one row of trial indices per unit. All rows must have the
    /// same length.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n_units = rows.len();
        let n_pseudo = rows.first().map(|row| row.len()).unwrap_or(0);
        if let Some(row) = rows.iter().find(|row| row.len() != n_pseudo) {
            return Err(RasterError::Usage(format!(
                "unequal pseudo-trial rows: expected {}, found {}",
                n_pseudo,
                row.len()
            )));
        }
        Self::new(rows.into_iter().flatten().collect(), n_units, n_pseudo)
    }

    /// Build labels filled with the sentinel.
    pub fn build_empty(n_units: usize, n_pseudo: usize) -> Self {
        Self {
            values: vec![Self::SENTINEL; n_units * n_pseudo],
            n_units,
            n_pseudo,
        }
    }

    pub fn n_units(&self) -> usize {
        self.n_units
    }

    pub fn n_pseudo(&self) -> usize {
        self.n_pseudo
    }

    /// Trial indices selected for one unit, across all pseudo-trials.
    pub fn unit_row(&self, unit: usize) -> Result<&[i64]> {
        if unit >= self.n_units {
            return Err(RasterError::Lookup(format!(
                "unit index {} out of range ({} units)",
                unit, self.n_units
            )));
        }
        let start = unit * self.n_pseudo;
        Ok(&self.values[start..start + self.n_pseudo])
    }

    /// Trial index picked from `unit` for `pseudo_trial`.
    pub fn at(&self, unit: usize, pseudo_trial: usize) -> Result<i64> {
        if pseudo_trial >= self.n_pseudo {
            return Err(RasterError::Lookup(format!(
                "pseudo-trial index {} out of range ({} pseudo-trials)",
                pseudo_trial, self.n_pseudo
            )));
        }
        Ok(self.unit_row(unit)?[pseudo_trial])
    }
}

impl Coordinate for PseudoTrialsCoord {
    type Value = i64;
    const DTYPE: DType = DType::Int64;

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn is_sentinel(value: &i64) -> bool {
        *value == Self::SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_layout() {
        let coord =
            PseudoTrialsCoord::from_rows(vec![vec![0, 1, 2], vec![2, 0, 1]]).unwrap();
        assert_eq!(coord.n_units(), 2);
        assert_eq!(coord.n_pseudo(), 3);
        assert_eq!(coord.unit_row(1).unwrap(), &[2, 0, 1]);
        assert_eq!(coord.at(0, 2).unwrap(), 2);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = PseudoTrialsCoord::from_rows(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert!(matches!(err, RasterError::Usage(_)));
    }

    #[test]
    fn test_rejects_negative_trial_index() {
        let err = PseudoTrialsCoord::new(vec![0, -3], 1, 2).unwrap_err();
        assert!(err.to_string().contains("TrialIndex"));
    }

    #[test]
    fn test_sentinel_is_accepted() {
        let coord = PseudoTrialsCoord::build_empty(2, 3);
        assert_eq!(coord.count_defined(), 0);
        assert_eq!(coord.len(), 6);
    }

    #[test]
    fn test_out_of_range_lookups_fail() {
        let coord = PseudoTrialsCoord::from_rows(vec![vec![0, 1]]).unwrap();
        assert!(coord.unit_row(1).is_err());
        assert!(coord.at(0, 2).is_err());
    }
}
