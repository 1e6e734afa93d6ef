//! Pipelines: ordered, checkpointable chains of processing steps.
//!
//! Each step reads named inputs from a shared context and writes named
//! outputs back. Between steps, outputs can be persisted as checkpoints so
//! an interrupted pipeline resumes by reloading the last completed step
//! instead of recomputing it (crash recovery via idempotent restart, not
//! concurrency).

mod checkpoint;
mod pipeline;
mod step;
mod steps;

pub use checkpoint::{fingerprint, Checkpoint};
pub use pipeline::{Pipeline, PipelineRun};
pub use step::{require_input, Step, StepContext};
pub use steps::{BootstrapStep, FoldStep, StratifyStep, ZScoreStep};
