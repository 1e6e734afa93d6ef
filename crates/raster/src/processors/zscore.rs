//! Z-scoring of sample sets.

use super::Processor;
use crate::error::{RasterError, Result};

/// Z-score samples against a baseline and scale.
///
/// With no configuration, the baseline is the sample mean and the scale the
/// sample standard deviation. A custom `mu`/`sigma` (e.g. computed in a
/// reference condition) overrides either. A zero scale yields zeros rather
/// than dividing by zero.
#[derive(Debug, Default, Clone)]
pub struct ZScorer {
    mu: Option<f64>,
    sigma: Option<f64>,
}

impl ZScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Z-score against a custom baseline and scale.
    pub fn with_baseline(mu: f64, sigma: f64) -> Self {
        Self {
            mu: Some(mu),
            sigma: Some(sigma),
        }
    }

    fn mean(samples: &[f64]) -> f64 {
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    fn std(samples: &[f64], mean: f64) -> f64 {
        let variance = samples
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / samples.len() as f64;
        variance.sqrt()
    }
}

impl Processor for ZScorer {
    type Input = Vec<f64>;
    type Output = Vec<f64>;

    fn validate(&self, samples: &Vec<f64>) -> Result<()> {
        if samples.is_empty() {
            return Err(RasterError::Usage(
                "cannot z-score an empty sample set".to_string(),
            ));
        }
        Ok(())
    }

    fn apply(&self, samples: Vec<f64>) -> Result<Vec<f64>> {
        let mu = self.mu.unwrap_or_else(|| Self::mean(&samples));
        let sigma = self
            .sigma
            .unwrap_or_else(|| Self::std(&samples, Self::mean(&samples)));
        if sigma == 0.0 {
            return Ok(vec![0.0; samples.len()]);
        }
        Ok(samples.into_iter().map(|x| (x - mu) / sigma).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_zscore() {
        // mu = 1.5, sigma = 0.5.
        let z = ZScorer::new()
            .process(vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0])
            .unwrap();
        assert_eq!(z, vec![-1.0, 1.0, -1.0, 1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_custom_baseline() {
        let z = ZScorer::with_baseline(0.0, 2.0)
            .process(vec![2.0, 4.0])
            .unwrap();
        assert_eq!(z, vec![1.0, 2.0]);
    }

    #[test]
    fn test_zero_scale_yields_zeros() {
        let z = ZScorer::new().process(vec![3.0, 3.0, 3.0]).unwrap();
        assert_eq!(z, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(ZScorer::new().process(Vec::new()).is_err());
    }
}
