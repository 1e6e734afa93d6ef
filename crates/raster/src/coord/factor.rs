//! Coordinates labelling experimental factors (task, attention, category...).

use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Coordinate, DType};
use crate::attributes::{
    Animal, Area, Attention, Behavior, Categorical, Category, CorticalDepth, ResponseOutcome,
    Stimulus, Task,
};
use crate::error::{RasterError, Result};

/// Coordinate labels for one categorical attribute along a data dimension.
///
/// Values are the attribute's short codes; the empty string is the sentinel
/// for missing labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FactorCoord<F: Categorical> {
    values: Vec<String>,
    #[serde(skip)]
    _factor: PhantomData<F>,
}

/// Coordinate labels for tasks.
pub type CoordTask = FactorCoord<Task>;
/// Coordinate labels for attentional states.
pub type CoordAttention = FactorCoord<Attention>;
/// Coordinate labels for stimulus categories.
pub type CoordCategory = FactorCoord<Category>;
/// Coordinate labels for physical stimuli.
pub type CoordStimulus = FactorCoord<Stimulus>;
/// Coordinate labels for behavioral choices.
pub type CoordBehavior = FactorCoord<Behavior>;
/// Coordinate labels for response outcomes.
pub type CoordOutcome = FactorCoord<ResponseOutcome>;
/// Coordinate labels for animals, along the units dimension.
pub type CoordAnimal = FactorCoord<Animal>;
/// Coordinate labels for brain areas, along the units dimension.
pub type CoordArea = FactorCoord<Area>;
/// Coordinate labels for cortical depths, along the units dimension.
pub type CoordDepth = FactorCoord<CorticalDepth>;

impl<F: Categorical> FactorCoord<F> {
    /// Sentinel code for a missing label.
    pub const SENTINEL: &'static str = "";

    /// Build a coordinate from raw label codes, validating every non-sentinel
    /// element against the factor's domain.
    pub fn new(values: Vec<String>) -> Result<Self> {
        for (position, value) in values.iter().enumerate() {
            if value != Self::SENTINEL && !F::is_valid_code(value) {
                return Err(RasterError::invalid_element(F::KIND, value, position));
            }
        }
        Ok(Self {
            values,
            _factor: PhantomData,
        })
    }

    /// Build labels filled with a single factor value.
    pub fn build_labels(n_smpl: usize, factor: F) -> Self {
        Self {
            values: vec![factor.code().to_string(); n_smpl],
            _factor: PhantomData,
        }
    }

    /// Build labels filled with the sentinel.
    pub fn build_empty(n_smpl: usize) -> Self {
        Self {
            values: vec![Self::SENTINEL.to_string(); n_smpl],
            _factor: PhantomData,
        }
    }

    /// Count samples per label.
    ///
    /// The map contains every option of the factor, in canonical order, with
    /// zero counts for absent labels. Sentinel entries are not counted.
    pub fn count_by_lab(&self) -> IndexMap<F, usize> {
        let mut counts: IndexMap<F, usize> =
            F::options().iter().map(|factor| (*factor, 0)).collect();
        for value in &self.values {
            if value == Self::SENTINEL {
                continue;
            }
            if let Ok(factor) = F::parse(value) {
                if let Some(count) = counts.get_mut(&factor) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Count samples matching a single label.
    pub fn count_label(&self, factor: F) -> usize {
        self.values.iter().filter(|v| v.as_str() == factor.code()).count()
    }

    /// Return a new coordinate with every occurrence of `old` replaced by
    /// `new`. The receiver is left untouched.
    pub fn replace_label(&self, old: F, new: F) -> Self {
        let values = self
            .values
            .iter()
            .map(|value| {
                if value.as_str() == old.code() {
                    new.code().to_string()
                } else {
                    value.clone()
                }
            })
            .collect();
        Self {
            values,
            _factor: PhantomData,
        }
    }
}

impl<F: Categorical> Coordinate for FactorCoord<F> {
    type Value = String;
    const DTYPE: DType = DType::Str;

    fn values(&self) -> &[String] {
        &self.values
    }

    fn is_sentinel(value: &String) -> bool {
        value == Self::SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_values() {
        let input = vec!["PTD".to_string(), "".to_string(), "CLK".to_string()];
        let coord = CoordTask::new(input.clone()).unwrap();
        assert_eq!(coord.values(), input.as_slice());
    }

    #[test]
    fn test_invalid_element_cites_position() {
        let input = vec!["PTD".to_string(), "BAD".to_string()];
        let err = CoordTask::new(input).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for Task: 'BAD' at position 1");
    }

    #[test]
    fn test_build_labels_single_value() {
        let coord = CoordTask::build_labels(10, Task::PureToneDiscrimination);
        assert_eq!(coord.len(), 10);
        assert!(coord.values().iter().all(|v| v == "PTD"));
    }

    #[test]
    fn test_count_by_lab_includes_zero_counts() {
        let mut values = vec!["PTD".to_string(); 5];
        values.extend(vec!["CLK".to_string(); 5]);
        let coord = CoordTask::new(values).unwrap();
        let counts = coord.count_by_lab();
        assert_eq!(counts[&Task::PureToneDiscrimination], 5);
        assert_eq!(counts[&Task::ClickRateDiscrimination], 5);
        assert_eq!(counts[&Task::ComplexChordDiscrimination], 0);
        assert_eq!(counts.values().sum::<usize>(), coord.len());
    }

    #[test]
    fn test_count_by_lab_skips_sentinel() {
        let coord =
            CoordTask::new(vec!["PTD".to_string(), "".to_string(), "".to_string()]).unwrap();
        assert_eq!(coord.count_by_lab().values().sum::<usize>(), 1);
        assert_eq!(coord.count_defined(), 1);
    }

    #[test]
    fn test_replace_label_returns_new_coordinate() {
        let coord = CoordAttention::new(vec!["p".to_string(), "a".to_string(), "p".to_string()])
            .unwrap();
        let replaced = coord.replace_label(Attention::Passive, Attention::PrePassive);
        assert_eq!(replaced.values(), &["p-pre", "a", "p-pre"]);
        // Original unchanged.
        assert_eq!(coord.values(), &["p", "a", "p"]);
    }

    #[test]
    fn test_build_empty_is_all_sentinel() {
        let coord = CoordCategory::build_empty(4);
        assert_eq!(coord.count_defined(), 0);
        assert_eq!(coord.len(), 4);
    }
}
