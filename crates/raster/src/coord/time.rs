//! Coordinate labelling the time stamps of measurements.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::{Coordinate, DType};
use crate::error::{RasterError, Result};

/// Relative tolerance when checking uniform spacing of time stamps.
const SPACING_TOLERANCE: f64 = 1e-9;

/// Coordinate labels for time stamps, in seconds.
///
/// `NaN` is the sentinel for a missing stamp. Supplementary markers for
/// stimulus onset/offset and shock delivery can be attached with the setter
/// methods; the time bin is inferred lazily from the spacing of the stamps
/// and cached on the instance that computed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeCoord {
    values: Vec<f64>,
    t_on: Option<f64>,
    t_off: Option<f64>,
    t_shock: Option<f64>,
    #[serde(skip)]
    bin: OnceCell<Option<f64>>,
}

impl TimeCoord {
    /// Sentinel value for a missing time stamp.
    pub const SENTINEL: f64 = f64::NAN;

    /// Build a time coordinate from raw stamps.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            t_on: None,
            t_off: None,
            t_shock: None,
            bin: OnceCell::new(),
        }
    }

    /// Time of stimulus onset, in seconds.
    pub fn t_on(&self) -> Option<f64> {
        self.t_on
    }

    /// Time of stimulus offset, in seconds.
    pub fn t_off(&self) -> Option<f64> {
        self.t_off
    }

    /// Time of shock delivery, in seconds.
    pub fn t_shock(&self) -> Option<f64> {
        self.t_shock
    }

    pub fn set_t_on(&mut self, t: f64) {
        self.t_on = Some(t);
    }

    pub fn set_t_off(&mut self, t: f64) {
        self.t_off = Some(t);
    }

    pub fn set_t_shock(&mut self, t: f64) {
        self.t_shock = Some(t);
    }

    /// Inferred time bin, in seconds.
    ///
    /// `None` when fewer than two stamps are present or the stamps are not
    /// uniformly spaced. Computed on first access and cached.
    pub fn bin_size(&self) -> Option<f64> {
        *self.bin.get_or_init(|| Self::eval_bin(&self.values))
    }

    fn eval_bin(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let first = values[1] - values[0];
        let uniform = values
            .windows(2)
            .all(|pair| (pair[1] - pair[0] - first).abs() <= SPACING_TOLERANCE * first.abs().max(1.0));
        if uniform { Some(first) } else { None }
    }

    /// Index of the stamp closest to a given time.
    pub fn index_of(&self, t: f64) -> Result<usize> {
        if self.values.is_empty() {
            return Err(RasterError::Lookup(
                "cannot index into an empty time coordinate".to_string(),
            ));
        }
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (index, value) in self.values.iter().enumerate() {
            let dist = (value - t).abs();
            if dist < best_dist {
                best = index;
                best_dist = dist;
            }
        }
        Ok(best)
    }

    /// Build uniformly spaced time labels starting at 0.
    ///
    /// Exactly two of `n_smpl`, `bin_size` and `duration` must be supplied;
    /// the third is derived. Supplying all three or fewer than two is a usage
    /// error.
    pub fn build_labels(
        n_smpl: Option<usize>,
        bin_size: Option<f64>,
        duration: Option<f64>,
    ) -> Result<Self> {
        let given = [n_smpl.is_some(), bin_size.is_some(), duration.is_some()]
            .iter()
            .filter(|g| **g)
            .count();
        if given != 2 {
            return Err(RasterError::Usage(format!(
                "time labels require exactly two of n_smpl, bin_size, duration ({given} given)"
            )));
        }
        let (n, bin) = match (n_smpl, bin_size, duration) {
            (Some(n), Some(bin), None) => (n, bin),
            (Some(n), None, Some(dur)) => (n, if n == 0 { 0.0 } else { dur / n as f64 }),
            (None, Some(bin), Some(dur)) => ((dur / bin).round() as usize, bin),
            _ => unreachable!(),
        };
        let values = (0..n).map(|i| i as f64 * bin).collect();
        Ok(Self::new(values))
    }
}

impl Coordinate for TimeCoord {
    type Value = f64;
    const DTYPE: DType = DType::Float64;

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn is_sentinel(value: &f64) -> bool {
        value.is_nan()
    }
}
