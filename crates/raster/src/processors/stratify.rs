//! Stratification: group samples by identical combinations of features.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Processor;
use crate::coord::DType;
use crate::error::{RasterError, Result};

/// Raw values of one feature array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureValues {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Str(Vec<String>),
    Bool(Vec<bool>),
}

impl FeatureValues {
    fn len(&self) -> usize {
        match self {
            FeatureValues::Int(v) => v.len(),
            FeatureValues::Float(v) => v.len(),
            FeatureValues::Str(v) => v.len(),
            FeatureValues::Bool(v) => v.len(),
        }
    }

    fn dtype(&self) -> DType {
        match self {
            FeatureValues::Int(_) => DType::Int64,
            FeatureValues::Float(_) => DType::Float64,
            FeatureValues::Str(_) => DType::Str,
            FeatureValues::Bool(_) => DType::Bool,
        }
    }

    /// Grouping key for one sample. Floats are keyed by bit pattern so that
    /// equal values group together without tolerance logic.
    fn key_at(&self, index: usize) -> String {
        match self {
            FeatureValues::Int(v) => v[index].to_string(),
            FeatureValues::Float(v) => format!("{:016x}", v[index].to_bits()),
            FeatureValues::Str(v) => v[index].clone(),
            FeatureValues::Bool(v) => v[index].to_string(),
        }
    }
}

/// One feature array with an explicit shape.
///
/// The one-argument constructors build 1-D features; [`Feature::with_shape`]
/// exists so that callers holding multi-dimensional data hit the validation
/// error instead of silently flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    values: FeatureValues,
    shape: Vec<usize>,
}

impl Feature {
    pub fn int(values: Vec<i64>) -> Self {
        let shape = vec![values.len()];
        Self {
            values: FeatureValues::Int(values),
            shape,
        }
    }

    pub fn float(values: Vec<f64>) -> Self {
        let shape = vec![values.len()];
        Self {
            values: FeatureValues::Float(values),
            shape,
        }
    }

    pub fn str(values: Vec<String>) -> Self {
        let shape = vec![values.len()];
        Self {
            values: FeatureValues::Str(values),
            shape,
        }
    }

    pub fn bool(values: Vec<bool>) -> Self {
        let shape = vec![values.len()];
        Self {
            values: FeatureValues::Bool(values),
            shape,
        }
    }

    pub fn with_shape(values: FeatureValues, shape: Vec<usize>) -> Self {
        Self { values, shape }
    }

    pub fn dtype(&self) -> DType {
        self.values.dtype()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn n_samples(&self) -> usize {
        self.values.len()
    }
}

/// Divide samples into strata based on combinations of feature values.
///
/// Two samples receive the same stratum id iff all their feature values
/// match. Ids are assigned 0, 1, 2, ... in order of first appearance of each
/// distinct combination.
///
/// # Example
///
/// ```
/// use raster::processors::{Feature, Processor, Stratifier};
///
/// let features = vec![
///     Feature::int(vec![1, 1, 2]),
///     Feature::float(vec![0.1, 0.1, 0.2]),
///     Feature::str(vec!["A".into(), "A".into(), "B".into()]),
/// ];
/// let strata = Stratifier::new().process(features).unwrap();
/// assert_eq!(strata, vec![0, 0, 1]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Stratifier;

impl Stratifier {
    /// Feature dtypes accepted for stratification.
    pub const VALID_TYPES: [DType; 3] = [DType::Int64, DType::Float64, DType::Str];

    pub fn new() -> Self {
        Self
    }
}

impl Processor for Stratifier {
    type Input = Vec<Feature>;
    type Output = Vec<i64>;

    fn validate(&self, features: &Vec<Feature>) -> Result<()> {
        if features.is_empty() {
            return Err(RasterError::Usage(
                "stratification requires at least one feature".to_string(),
            ));
        }
        for (position, feature) in features.iter().enumerate() {
            if feature.shape().len() != 1 {
                return Err(RasterError::invalid_element(
                    "Feature dimensions",
                    format!("{:?}", feature.shape()),
                    position,
                ));
            }
            if !Self::VALID_TYPES.contains(&feature.dtype()) {
                return Err(RasterError::invalid_element(
                    "Feature dtype",
                    format!("{:?}", feature.dtype()),
                    position,
                ));
            }
        }
        let n_samples = features[0].n_samples();
        if let Some((position, feature)) = features
            .iter()
            .enumerate()
            .find(|(_, f)| f.n_samples() != n_samples)
        {
            return Err(RasterError::invalid_element(
                "Feature length",
                feature.n_samples(),
                position,
            ));
        }
        Ok(())
    }

    fn apply(&self, features: Vec<Feature>) -> Result<Vec<i64>> {
        let n_samples = features[0].n_samples();
        let mut ids: IndexMap<String, i64> = IndexMap::new();
        let mut strata = Vec::with_capacity(n_samples);
        for sample in 0..n_samples {
            let key = features
                .iter()
                .map(|feature| feature.values.key_at(sample))
                .collect::<Vec<_>>()
                .join("\u{1f}");
            let next = ids.len() as i64;
            let id = *ids.entry(key).or_insert(next);
            strata.push(id);
        }
        Ok(strata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strata_by_first_appearance() {
        // "B" combinations appear before "A" ones: ids follow appearance
        // order, not value order.
        let features = vec![Feature::str(vec![
            "B".to_string(),
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ])];
        let strata = Stratifier::new().process(features).unwrap();
        assert_eq!(strata, vec![0, 1, 0, 2]);
    }

    #[test]
    fn test_mixed_dtypes() {
        let features = vec![
            Feature::int(vec![1, 1, 2]),
            Feature::float(vec![0.1, 0.1, 0.2]),
            Feature::str(vec!["A".into(), "A".into(), "B".into()]),
        ];
        let strata = Stratifier::new().process(features).unwrap();
        assert_eq!(strata, vec![0, 0, 1]);
    }

    #[test]
    fn test_all_features_must_match_for_same_stratum() {
        let features = vec![
            Feature::int(vec![1, 1, 1]),
            Feature::str(vec!["A".into(), "B".into(), "A".into()]),
        ];
        let strata = Stratifier::new().process(features).unwrap();
        assert_eq!(strata, vec![0, 1, 0]);
    }

    #[test]
    fn test_two_dimensional_feature_rejected() {
        let features = vec![Feature::with_shape(
            FeatureValues::Int(vec![1, 2, 3, 4]),
            vec![2, 2],
        )];
        let err = Stratifier::new().process(features).unwrap_err();
        assert!(matches!(err, RasterError::Validation { .. }));
    }

    #[test]
    fn test_bool_dtype_rejected() {
        let features = vec![Feature::bool(vec![true, false])];
        let err = Stratifier::new().process(features).unwrap_err();
        assert!(err.to_string().contains("dtype"));
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let features = vec![Feature::int(vec![1, 2]), Feature::int(vec![1, 2, 3])];
        assert!(Stratifier::new().process(features).is_err());
    }

    #[test]
    fn test_not_random() {
        assert!(!Stratifier::new().is_random());
    }
}
