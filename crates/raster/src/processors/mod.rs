//! Processors: single-purpose transformations over coordinates and data.
//!
//! Each processor validates its inputs, then delegates to its own
//! transformation logic. Processors are stateless with respect to their
//! inputs: configuration is fixed at construction, inputs are passed to
//! [`Processor::process`] and outputs returned, so repeated calls do not
//! interact.

mod bootstrap;
mod exclude;
mod folds;
mod stratify;
mod zscore;

pub use bootstrap::{Bootstrapper, N_PSEUDO_MIN};
pub use exclude::{Candidates, Excluder};
pub use folds::{FoldAssigner, FoldInput};
pub use stratify::{Feature, FeatureValues, Stratifier};
pub use zscore::ZScorer;

use crate::error::Result;

/// Template contract for processors.
///
/// [`Processor::process`] is the public entry point: it validates the input,
/// then delegates to [`Processor::apply`]. `is_random` reports whether the
/// transformation consults the random stream; randomized processors here
/// carry an explicit seed, so runs remain reproducible.
pub trait Processor {
    type Input;
    type Output;

    /// Whether repeated calls may draw on randomness.
    fn is_random(&self) -> bool {
        false
    }

    /// Validate an input before processing.
    fn validate(&self, _input: &Self::Input) -> Result<()> {
        Ok(())
    }

    /// Transformation logic. Implementors assume a validated input.
    fn apply(&self, input: Self::Input) -> Result<Self::Output>;

    /// Validate, then transform.
    fn process(&self, input: Self::Input) -> Result<Self::Output> {
        self.validate(&input)?;
        self.apply(input)
    }
}
