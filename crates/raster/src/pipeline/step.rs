//! Steps: named units of work over a shared context.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use super::checkpoint::{fingerprint, Checkpoint};
use crate::error::{RasterError, Result};

/// Shared blackboard between pipeline steps: named JSON values.
pub type StepContext = IndexMap<String, Value>;

/// Fetch a required input from the context, failing with a lookup error
/// naming the step that needed it.
pub fn require_input<'ctx>(ctx: &'ctx StepContext, key: &str, step: &str) -> Result<&'ctx Value> {
    ctx.get(key).ok_or_else(|| {
        RasterError::Lookup(format!("input '{key}' missing for step '{step}'"))
    })
}

/// One named processing step of a pipeline.
///
/// A step reads its inputs from the context and writes the keys listed by
/// [`Step::output_keys`] back into it. The checkpoint methods persist and
/// restore exactly those outputs; a checkpoint is only restored when its
/// fingerprint matches the step's current configuration.
pub trait Step {
    /// Stable name, used for checkpoint files and error messages.
    fn name(&self) -> &str;

    /// Configuration fingerprinted into checkpoints.
    fn config(&self) -> Value {
        Value::Null
    }

    /// Context keys this step writes.
    fn output_keys(&self) -> Vec<String>;

    /// Run the step's logic over the context.
    fn execute(&self, ctx: &mut StepContext) -> Result<()>;

    /// Persist this step's outputs from the context.
    fn save_checkpoint(&self, dir: &Path, ctx: &StepContext) -> Result<()> {
        let mut outputs = IndexMap::new();
        for key in self.output_keys() {
            let value = ctx.get(&key).ok_or_else(|| {
                RasterError::Lookup(format!(
                    "output '{}' missing after step '{}'",
                    key,
                    self.name()
                ))
            })?;
            outputs.insert(key, value.clone());
        }
        Checkpoint::new(self.name(), fingerprint(&self.config()), outputs).save(dir)
    }

    /// Restore this step's outputs into the context, if a checkpoint with a
    /// matching configuration exists. Returns whether outputs were restored.
    fn load_checkpoint(&self, dir: &Path, ctx: &mut StepContext) -> Result<bool> {
        match Checkpoint::load(dir, self.name())? {
            Some(checkpoint) if checkpoint.fingerprint == fingerprint(&self.config()) => {
                for (key, value) in checkpoint.outputs {
                    ctx.insert(key, value);
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
