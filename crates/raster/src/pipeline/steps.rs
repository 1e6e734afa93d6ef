//! Concrete preprocessing steps wrapping the processors.
//!
//! Each step names the context keys it reads and writes, so chains can be
//! rewired without touching the processors. Configured steps can also be
//! built from a plain key-value configuration mapping parsed upstream.

use serde_json::{json, Value};

use super::step::{require_input, Step, StepContext};
use crate::error::{RasterError, Result};
use crate::processors::{
    Bootstrapper, Feature, FoldAssigner, FoldInput, Processor, Stratifier, ZScorer,
};

fn config_u64(config: &StepContext, key: &str, step: &str) -> Result<u64> {
    require_input(config, key, step)?
        .as_u64()
        .ok_or_else(|| {
            RasterError::Usage(format!("configuration '{key}' of step '{step}' is not an integer"))
        })
}

fn config_u64_or(config: &StepContext, key: &str, step: &str, default: u64) -> Result<u64> {
    match config.get(key) {
        Some(value) => value.as_u64().ok_or_else(|| {
            RasterError::Usage(format!("configuration '{key}' of step '{step}' is not an integer"))
        }),
        None => Ok(default),
    }
}

/// Compute stratum ids from parallel feature arrays.
///
/// Reads `features` (a list of [`Feature`]s), writes `strata`.
#[derive(Debug, Default, Clone)]
pub struct StratifyStep;

impl StratifyStep {
    pub const INPUT: &'static str = "features";
    pub const OUTPUT: &'static str = "strata";

    pub fn new() -> Self {
        Self
    }
}

impl Step for StratifyStep {
    fn name(&self) -> &str {
        "stratify"
    }

    fn output_keys(&self) -> Vec<String> {
        vec![Self::OUTPUT.to_string()]
    }

    fn execute(&self, ctx: &mut StepContext) -> Result<()> {
        let raw = require_input(ctx, Self::INPUT, self.name())?;
        let features: Vec<Feature> = serde_json::from_value(raw.clone())?;
        let strata = Stratifier::new().process(features)?;
        ctx.insert(Self::OUTPUT.to_string(), json!(strata));
        Ok(())
    }
}

/// Assign samples to folds from stratum ids.
///
/// Reads `strata`, writes `folds`.
#[derive(Debug, Clone)]
pub struct FoldStep {
    assigner: FoldAssigner,
    seed: u64,
}

impl FoldStep {
    pub const INPUT: &'static str = "strata";
    pub const OUTPUT: &'static str = "folds";

    pub fn new(k: usize, seed: u64) -> Self {
        Self {
            assigner: FoldAssigner::new(k, seed),
            seed,
        }
    }

    /// Build from a configuration mapping: requires `k`, accepts `seed`
    /// (default 0).
    pub fn from_config(config: &StepContext) -> Result<Self> {
        let k = config_u64(config, "k", "folds")?;
        let seed = config_u64_or(config, "seed", "folds", 0)?;
        Ok(Self::new(k as usize, seed))
    }
}

impl Step for FoldStep {
    fn name(&self) -> &str {
        "folds"
    }

    fn config(&self) -> Value {
        json!({"k": self.assigner.k(), "seed": self.seed})
    }

    fn output_keys(&self) -> Vec<String> {
        vec![Self::OUTPUT.to_string()]
    }

    fn execute(&self, ctx: &mut StepContext) -> Result<()> {
        let raw = require_input(ctx, Self::INPUT, self.name())?;
        let strata: Vec<i64> = serde_json::from_value(raw.clone())?;
        let folds = self.assigner.process(FoldInput::from_strata(strata))?;
        ctx.insert(Self::OUTPUT.to_string(), json!(folds));
        Ok(())
    }
}

/// Generate pseudo-trial indices from per-unit trial counts.
///
/// Reads `trial_counts`, writes `pseudo_trials` (one row per unit).
#[derive(Debug, Clone)]
pub struct BootstrapStep {
    bootstrapper: Bootstrapper,
    seed: u64,
}

impl BootstrapStep {
    pub const INPUT: &'static str = "trial_counts";
    pub const OUTPUT: &'static str = "pseudo_trials";

    pub fn new(n_pseudo: usize, seed: u64) -> Self {
        Self {
            bootstrapper: Bootstrapper::new(n_pseudo, seed),
            seed,
        }
    }

    /// Build from a configuration mapping: requires `n_pseudo`, accepts
    /// `seed` (default 0).
    pub fn from_config(config: &StepContext) -> Result<Self> {
        let n_pseudo = config_u64(config, "n_pseudo", "bootstrap")?;
        let seed = config_u64_or(config, "seed", "bootstrap", 0)?;
        Ok(Self::new(n_pseudo as usize, seed))
    }
}

impl Step for BootstrapStep {
    fn name(&self) -> &str {
        "bootstrap"
    }

    fn config(&self) -> Value {
        json!({"n_pseudo": self.bootstrapper.n_pseudo(), "seed": self.seed})
    }

    fn output_keys(&self) -> Vec<String> {
        vec![Self::OUTPUT.to_string()]
    }

    fn execute(&self, ctx: &mut StepContext) -> Result<()> {
        let raw = require_input(ctx, Self::INPUT, self.name())?;
        let counts: Vec<usize> = serde_json::from_value(raw.clone())?;
        let rows = self.bootstrapper.process(counts)?;
        ctx.insert(Self::OUTPUT.to_string(), json!(rows));
        Ok(())
    }
}

/// Z-score a flat sample array.
///
/// Reads `rates`, writes `rates_z`.
#[derive(Debug, Default, Clone)]
pub struct ZScoreStep {
    zscorer: ZScorer,
    mu: Option<f64>,
    sigma: Option<f64>,
}

impl ZScoreStep {
    pub const INPUT: &'static str = "rates";
    pub const OUTPUT: &'static str = "rates_z";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baseline(mu: f64, sigma: f64) -> Self {
        Self {
            zscorer: ZScorer::with_baseline(mu, sigma),
            mu: Some(mu),
            sigma: Some(sigma),
        }
    }

    /// Build from a configuration mapping: accepts `mu` and `sigma` together
    /// (a custom baseline) or neither (sample statistics).
    pub fn from_config(config: &StepContext) -> Result<Self> {
        let read = |key: &str| -> Result<Option<f64>> {
            match config.get(key) {
                Some(value) => value
                    .as_f64()
                    .map(Some)
                    .ok_or_else(|| {
                        RasterError::Usage(format!(
                            "configuration '{key}' of step 'z_score' is not a number"
                        ))
                    }),
                None => Ok(None),
            }
        };
        match (read("mu")?, read("sigma")?) {
            (Some(mu), Some(sigma)) => Ok(Self::with_baseline(mu, sigma)),
            (None, None) => Ok(Self::new()),
            _ => Err(RasterError::Usage(
                "step 'z_score' requires both mu and sigma, or neither".to_string(),
            )),
        }
    }
}

impl Step for ZScoreStep {
    fn name(&self) -> &str {
        "z_score"
    }

    fn config(&self) -> Value {
        json!({"mu": self.mu, "sigma": self.sigma})
    }

    fn output_keys(&self) -> Vec<String> {
        vec![Self::OUTPUT.to_string()]
    }

    fn execute(&self, ctx: &mut StepContext) -> Result<()> {
        let raw = require_input(ctx, Self::INPUT, self.name())?;
        let rates: Vec<f64> = serde_json::from_value(raw.clone())?;
        let z = self.zscorer.process(rates)?;
        ctx.insert(Self::OUTPUT.to_string(), json!(z));
        Ok(())
    }
}
