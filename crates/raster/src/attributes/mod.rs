//! Validated scalar attributes: domain-constrained descriptors of recordings.
//!
//! Attributes come in two families. *Categorical* attributes are closed enums
//! with a fixed set of short codes and descriptive labels (task identity,
//! attentional state, animal, brain area). *Quantitative* attributes are
//! bounded integer newtypes (fold index, trial index, positions within the
//! experiment). Both construct only from values inside their declared domain
//! and behave as immutable value types.

mod analysis;
mod brain;
mod exp_factors;
mod positions;

pub use analysis::{Fold, TrialIndex};
pub use brain::{Animal, Area, CorticalDepth, Training};
pub use exp_factors::{Attention, Behavior, Category, ResponseOutcome, Stimulus, Task};
pub use positions::{Block, Position, Recording, Slot};

use crate::error::Result;

/// Common contract for validated scalar attributes.
///
/// Construction goes through [`Attribute::from_value`], which fails with a
/// validation error when the value falls outside the attribute's domain.
pub trait Attribute: Sized {
    /// Underlying scalar type stored in coordinate arrays.
    type Value: Clone + PartialEq;

    /// Validate and wrap a raw value.
    fn from_value(value: Self::Value) -> Result<Self>;

    /// Check whether a raw value belongs to the attribute's domain.
    fn is_valid(value: &Self::Value) -> bool;

    /// Recover the underlying raw value.
    fn value(&self) -> Self::Value;
}

/// Categorical attributes: a closed set of short codes with descriptive labels.
///
/// Each implementor is an enum with one variant per legal value, so invalid
/// states are unrepresentable once parsed. The label table lives in
/// [`Categorical::full_label`].
pub trait Categorical: Copy + Eq + std::hash::Hash + Sized + 'static {
    /// Attribute kind cited in validation errors (e.g. `"Task"`).
    const KIND: &'static str;

    /// All legal values, in canonical order.
    fn options() -> &'static [Self];

    /// Short code stored in coordinate arrays (e.g. `"PTD"`).
    fn code(&self) -> &'static str;

    /// Descriptive label, often used for display.
    fn full_label(&self) -> &'static str;

    /// Parse a short code, failing with a validation error on unknown codes.
    fn parse(code: &str) -> Result<Self> {
        Self::options()
            .iter()
            .copied()
            .find(|option| option.code() == code)
            .ok_or_else(|| crate::error::RasterError::invalid_value(Self::KIND, code))
    }

    /// Check whether a code names a legal value.
    fn is_valid_code(code: &str) -> bool {
        Self::options().iter().any(|option| option.code() == code)
    }
}

impl<C: Categorical> Attribute for C {
    type Value = String;

    fn from_value(value: String) -> Result<Self> {
        Self::parse(&value)
    }

    fn is_valid(value: &String) -> bool {
        Self::is_valid_code(value)
    }

    fn value(&self) -> String {
        self.code().to_string()
    }
}
