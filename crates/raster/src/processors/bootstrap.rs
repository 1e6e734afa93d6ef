//! Pseudo-trial generation through a hierarchical-bootstrap-like scheme.
//!
//! Pseudo-populations associate trials of units that were not recorded
//! simultaneously. To augment the data set, trials are recombined across
//! units: each unit contributes one real trial to each pseudo-trial. The
//! number of pseudo-trials balances units with few and many trials, each
//! trial is selected as evenly as possible within a unit, and rows are
//! shuffled to diversify the pairings across units.

use super::Processor;
use crate::error::{RasterError, Result};

/// Minimum number of pseudo-trials required for statistical robustness.
pub const N_PSEUDO_MIN: usize = 10;

/// Generate pseudo-trials by pairing trial indices across units.
///
/// For each unit with `n` available trials: when `n >= n_pseudo`, trials are
/// sampled without replacement; otherwise every trial is selected
/// `n_pseudo / n` times and the remaining `n_pseudo % n` slots are filled by
/// distinct draws. Each unit's row is then shuffled so pairings differ
/// across pseudo-trials.
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    n_pseudo: usize,
    seed: u64,
}

impl Bootstrapper {
    pub fn new(n_pseudo: usize, seed: u64) -> Self {
        Self { n_pseudo, seed }
    }

    pub fn n_pseudo(&self) -> usize {
        self.n_pseudo
    }

    /// Determine a number of pseudo-trials from the statistics of the
    /// counts: `alpha * (min + max)`, floored at `n_min`.
    ///
    /// `alpha = 0.5` targets the average of the extremes (moderate
    /// variability); `alpha = 0.0` collapses to the minimum count.
    pub fn eval_n_pseudo(counts: &[usize], n_min: usize, alpha: f64) -> usize {
        let min = counts.iter().min().copied().unwrap_or(0);
        let max = counts.iter().max().copied().unwrap_or(0);
        let n_pseudo = (alpha * (min + max) as f64).round() as usize;
        n_pseudo.max(n_min)
    }

    /// Pick `n_pseudo` trial indices for one unit with `n` available trials.
    fn pick_trials(&self, rng: &mut fastrand::Rng, n: usize) -> Vec<i64> {
        let mut trials: Vec<i64>;
        if n >= self.n_pseudo {
            let mut pool: Vec<i64> = (0..n as i64).collect();
            rng.shuffle(&mut pool);
            trials = pool.into_iter().take(self.n_pseudo).collect();
        } else {
            let q = self.n_pseudo / n;
            let r = self.n_pseudo % n;
            trials = Vec::with_capacity(self.n_pseudo);
            for trial in 0..n as i64 {
                for _ in 0..q {
                    trials.push(trial);
                }
            }
            let mut pool: Vec<i64> = (0..n as i64).collect();
            rng.shuffle(&mut pool);
            trials.extend(pool.into_iter().take(r));
        }
        rng.shuffle(&mut trials);
        trials
    }
}

impl Processor for Bootstrapper {
    type Input = Vec<usize>;
    type Output = Vec<Vec<i64>>;

    fn is_random(&self) -> bool {
        true
    }

    fn validate(&self, counts: &Vec<usize>) -> Result<()> {
        if counts.is_empty() {
            return Err(RasterError::Usage(
                "bootstrap requires at least one unit".to_string(),
            ));
        }
        if let Some((position, _)) = counts.iter().enumerate().find(|(_, n)| **n == 0) {
            return Err(RasterError::invalid_element("trial count", 0, position));
        }
        Ok(())
    }

    fn apply(&self, counts: Vec<usize>) -> Result<Vec<Vec<i64>>> {
        let mut rng = fastrand::Rng::with_seed(self.seed);
        Ok(counts
            .iter()
            .map(|n| self.pick_trials(&mut rng, *n))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_shape() {
        let rows = Bootstrapper::new(5, 42).process(vec![4, 5, 6]).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_indices_stay_in_range() {
        let counts = vec![4, 9, 2];
        let rows = Bootstrapper::new(7, 3).process(counts.clone()).unwrap();
        for (row, n) in rows.iter().zip(&counts) {
            assert!(row.iter().all(|t| *t >= 0 && (*t as usize) < *n));
        }
    }

    #[test]
    fn test_sampling_without_replacement_when_enough_trials() {
        // 8 trials for 5 pseudo-trials: no index may repeat.
        let rows = Bootstrapper::new(5, 11).process(vec![8]).unwrap();
        let mut seen = rows[0].clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_balanced_repetition_when_too_few_trials() {
        // 3 trials for 7 pseudo-trials: each trial occurs 2 or 3 times.
        let rows = Bootstrapper::new(7, 5).process(vec![3]).unwrap();
        for trial in 0..3 {
            let occurrences = rows[0].iter().filter(|t| **t == trial).count();
            assert!((2..=3).contains(&occurrences));
        }
    }

    #[test]
    fn test_deterministic_under_seed() {
        let a = Bootstrapper::new(6, 21).process(vec![4, 7]).unwrap();
        let b = Bootstrapper::new(6, 21).process(vec![4, 7]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = Bootstrapper::new(5, 0).process(vec![4, 0]).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_eval_n_pseudo() {
        // alpha 0.5: average of min and max.
        assert_eq!(Bootstrapper::eval_n_pseudo(&[20, 40, 60], 10, 0.5), 40);
        // Floored at n_min.
        assert_eq!(Bootstrapper::eval_n_pseudo(&[2, 4], N_PSEUDO_MIN, 0.5), 10);
        // alpha 0 collapses to the floor.
        assert_eq!(Bootstrapper::eval_n_pseudo(&[30, 50], 10, 0.0), 10);
    }
}
