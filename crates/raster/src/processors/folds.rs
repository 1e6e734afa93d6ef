//! Fold assignment for cross-validation.

use serde::{Deserialize, Serialize};

use super::Processor;
use crate::error::{RasterError, Result};

/// Input of the [`FoldAssigner`]: exactly one of `n_samples` or `strata`.
///
/// With `n_samples`, all samples are treated as one stratum. With `strata`,
/// assignment is stratified so that each fold receives a balanced share of
/// every stratum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoldInput {
    pub n_samples: Option<usize>,
    pub strata: Option<Vec<i64>>,
}

impl FoldInput {
    pub fn from_samples(n_samples: usize) -> Self {
        Self {
            n_samples: Some(n_samples),
            strata: None,
        }
    }

    pub fn from_strata(strata: Vec<i64>) -> Self {
        Self {
            n_samples: None,
            strata: Some(strata),
        }
    }

    fn resolve(self) -> Vec<i64> {
        match (self.n_samples, self.strata) {
            (_, Some(strata)) => strata,
            (Some(n), None) => vec![0; n],
            (None, None) => Vec::new(),
        }
    }
}

/// Assign samples (trials) to folds for cross-validation.
///
/// Within each stratum, samples are shuffled and distributed into `k`
/// maximally equal groups; the group index becomes the fold assignment. The
/// shuffle draws from a generator seeded at construction, so the assignment
/// is a pure function of `(k, seed, strata)`.
#[derive(Debug, Clone)]
pub struct FoldAssigner {
    k: usize,
    seed: u64,
}

impl FoldAssigner {
    pub fn new(k: usize, seed: u64) -> Self {
        Self { k, seed }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Split sizes for `n` samples into `k` maximally equal groups: the
    /// first `n % k` groups take one extra sample.
    fn group_sizes(&self, n: usize) -> Vec<usize> {
        (0..self.k)
            .map(|group| n / self.k + usize::from(group < n % self.k))
            .collect()
    }
}

impl Processor for FoldAssigner {
    type Input = FoldInput;
    type Output = Vec<i64>;

    fn is_random(&self) -> bool {
        true
    }

    fn validate(&self, input: &FoldInput) -> Result<()> {
        match (&input.n_samples, &input.strata) {
            (None, None) => Err(RasterError::Usage(
                "provide either n_samples or strata".to_string(),
            )),
            (Some(_), Some(_)) => Err(RasterError::Usage(
                "provide either n_samples or strata, not both".to_string(),
            )),
            _ => {
                let n = input
                    .n_samples
                    .or_else(|| input.strata.as_ref().map(|s| s.len()))
                    .unwrap_or(0);
                if n < self.k {
                    return Err(RasterError::invalid_value(
                        "n_samples",
                        format!("{} < k = {}", n, self.k),
                    ));
                }
                Ok(())
            }
        }
    }

    fn apply(&self, input: FoldInput) -> Result<Vec<i64>> {
        let strata = input.resolve();
        let mut folds = vec![0i64; strata.len()];
        let mut rng = fastrand::Rng::with_seed(self.seed);

        let mut stratum_ids: Vec<i64> = strata.clone();
        stratum_ids.sort_unstable();
        stratum_ids.dedup();

        for stratum in stratum_ids {
            let mut indices: Vec<usize> = strata
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == stratum)
                .map(|(i, _)| i)
                .collect();
            rng.shuffle(&mut indices);

            let mut cursor = 0;
            for (fold, size) in self.group_sizes(indices.len()).into_iter().enumerate() {
                for &sample in &indices[cursor..cursor + size] {
                    folds[sample] = fold as i64;
                }
                cursor += size;
            }
        }
        Ok(folds)
    }
}
