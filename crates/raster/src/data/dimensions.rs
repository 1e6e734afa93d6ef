//! Named dimensions annotating the axes of a data component.

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};

/// Valid dimension names for data axes. A closed vocabulary: parsing any
/// other name fails at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dim {
    Time,
    Trials,
    Units,
    Folds,
}

impl Dim {
    /// All valid dimension names.
    pub fn options() -> &'static [Self] {
        &[Dim::Time, Dim::Trials, Dim::Units, Dim::Folds]
    }

    /// The dimension's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dim::Time => "time",
            Dim::Trials => "trials",
            Dim::Units => "units",
            Dim::Folds => "folds",
        }
    }

    /// Parse a dimension name, failing with a validation error on names
    /// outside the vocabulary.
    pub fn parse(name: &str) -> Result<Self> {
        Self::options()
            .iter()
            .copied()
            .find(|dim| dim.as_str() == name)
            .ok_or_else(|| RasterError::invalid_value("Dim", name))
    }
}

impl std::fmt::Display for Dim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, unique sequence of dimension names labelling the axes of an
/// n-dimensional payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    names: Vec<Dim>,
}

impl Dimensions {
    /// Build a dimension set, rejecting duplicates.
    pub fn new(names: Vec<Dim>) -> Result<Self> {
        for (position, dim) in names.iter().enumerate() {
            if names[..position].contains(dim) {
                return Err(RasterError::invalid_element("Dimensions", dim, position));
            }
        }
        Ok(Self { names })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.names.len()
    }

    /// The dimension names, in axis order.
    pub fn names(&self) -> &[Dim] {
        &self.names
    }

    /// Axis index of a dimension name.
    pub fn axis_of(&self, dim: Dim) -> Result<usize> {
        self.names
            .iter()
            .position(|name| *name == dim)
            .ok_or_else(|| RasterError::Lookup(format!("dimension '{dim}' not among the axes")))
    }

    /// Dimension name at an axis index.
    pub fn dim_at(&self, axis: usize) -> Result<Dim> {
        self.names.get(axis).copied().ok_or_else(|| {
            RasterError::Lookup(format!(
                "axis {} out of range ({} dimensions)",
                axis,
                self.names.len()
            ))
        })
    }

    /// Check whether a dimension is present.
    pub fn contains(&self, dim: Dim) -> bool {
        self.names.contains(&dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert_eq!(Dim::parse("time").unwrap(), Dim::Time);
        assert_eq!(Dim::parse("trials").unwrap(), Dim::Trials);
    }

    #[test]
    fn test_parse_invalid_name() {
        let err = Dim::parse("channels").unwrap_err();
        assert!(err.to_string().contains("channels"));
    }

    #[test]
    fn test_axis_lookups_both_directions() {
        let dims = Dimensions::new(vec![Dim::Units, Dim::Trials, Dim::Time]).unwrap();
        assert_eq!(dims.axis_of(Dim::Trials).unwrap(), 1);
        assert_eq!(dims.dim_at(2).unwrap(), Dim::Time);
    }

    #[test]
    fn test_missing_lookups_fail() {
        let dims = Dimensions::new(vec![Dim::Time]).unwrap();
        assert!(matches!(dims.axis_of(Dim::Units), Err(RasterError::Lookup(_))));
        assert!(matches!(dims.dim_at(1), Err(RasterError::Lookup(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        assert!(Dimensions::new(vec![Dim::Time, Dim::Time]).is_err());
    }
}
