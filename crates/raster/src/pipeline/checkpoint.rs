//! Persistence for step checkpoints - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::{RasterError, Result};

/// Persisted outputs of one completed pipeline step.
///
/// The fingerprint ties the checkpoint to the step configuration that
/// produced it: a checkpoint written under a different configuration is
/// ignored on load rather than silently reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Name of the step that produced the outputs.
    pub step: String,
    /// Fingerprint of the step configuration.
    pub fingerprint: String,
    /// When the checkpoint was written.
    pub created_at: DateTime<Utc>,
    /// Step outputs, keyed as they appear in the step context.
    pub outputs: IndexMap<String, Value>,
}

impl Checkpoint {
    pub fn new(step: &str, fingerprint: String, outputs: IndexMap<String, Value>) -> Self {
        Self {
            step: step.to_string(),
            fingerprint,
            created_at: Utc::now(),
            outputs,
        }
    }

    /// Checkpoint file path for a step within a checkpoint directory.
    pub fn path_for(dir: &Path, step: &str) -> PathBuf {
        dir.join(format!("{step}.checkpoint.json"))
    }

    /// Save the checkpoint to `dir`, creating the directory if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                RasterError::Checkpoint(format!(
                    "failed to create directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let path = Self::path_for(dir, &self.step);
        let file = File::create(&path).map_err(|e| {
            RasterError::Checkpoint(format!("failed to create file '{}': {}", path.display(), e))
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            RasterError::Checkpoint(format!("failed to serialize checkpoint: {e}"))
        })?;
        Ok(())
    }

    /// Load a step's checkpoint from `dir`. A missing file is not an error;
    /// a malformed file is.
    pub fn load(dir: &Path, step: &str) -> Result<Option<Self>> {
        let path = Self::path_for(dir, step);
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(&path).map_err(|e| {
            RasterError::Checkpoint(format!("failed to open file '{}': {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        let checkpoint = serde_json::from_reader(reader).map_err(|e| {
            RasterError::Checkpoint(format!(
                "failed to parse checkpoint '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(checkpoint))
    }
}

/// Hex fingerprint of a step configuration.
pub fn fingerprint(config: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(config.to_string().as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
