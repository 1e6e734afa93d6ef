//! Pipeline execution over an ordered sequence of steps.

use std::path::{Path, PathBuf};

use super::step::{Step, StepContext};
use crate::error::Result;

/// Outcome of one pipeline execution.
#[derive(Debug, Clone, Default)]
pub struct PipelineRun {
    /// Steps whose logic was executed.
    pub executed: Vec<String>,
    /// Steps restored from a checkpoint instead of recomputed.
    pub restored: Vec<String>,
}

/// An ordered sequence of steps sharing one context.
///
/// With a checkpoint directory configured, each step first tries to restore
/// its outputs from a checkpoint; only on a miss (or fingerprint mismatch)
/// is the step executed, and its outputs are then persisted before the
/// pipeline proceeds. Execution stops at the first failing step.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
    checkpoint_dir: Option<PathBuf>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist and restore step outputs under `dir`.
    pub fn with_checkpoint_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.checkpoint_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Append a step to the end of the chain.
    pub fn add_step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn n_steps(&self) -> usize {
        self.steps.len()
    }

    /// Run all steps in order against the context.
    pub fn execute(&self, ctx: &mut StepContext) -> Result<PipelineRun> {
        let mut run = PipelineRun::default();
        for step in &self.steps {
            if let Some(ref dir) = self.checkpoint_dir {
                if step.load_checkpoint(dir, ctx)? {
                    run.restored.push(step.name().to_string());
                    continue;
                }
            }
            step.execute(ctx)?;
            if let Some(ref dir) = self.checkpoint_dir {
                step.save_checkpoint(dir, ctx)?;
            }
            run.executed.push(step.name().to_string());
        }
        Ok(run)
    }
}
