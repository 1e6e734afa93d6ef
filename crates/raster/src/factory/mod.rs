//! Factories: the single authorized construction path for coordinate
//! products.
//!
//! A factory centralizes whatever multi-step assembly its product requires
//! (raw-value derivation, processor runs, sentinel filling) behind one
//! `create` operation. Failures propagate from the product's own
//! constructor.

use crate::attributes::Categorical;
use crate::coord::{FactorCoord, FoldCoord, PseudoTrialsCoord};
use crate::error::Result;
use crate::processors::{Bootstrapper, FoldAssigner, FoldInput, Processor};

/// Contract for factories: one specification in, one product out.
pub trait Factory {
    /// Inputs required to create the product.
    type Spec;
    /// Product type, declared as part of the factory's contract.
    type Product;

    /// Orchestrate the creation of a product.
    fn create(&self, spec: Self::Spec) -> Result<Self::Product>;
}

/// Specification for a categorical factor coordinate.
#[derive(Debug, Clone)]
pub enum FactorCoordSpec<F: Categorical> {
    /// Validate raw label codes.
    Values(Vec<String>),
    /// Fill `n_smpl` labels with a single factor value.
    Fill { n_smpl: usize, factor: F },
    /// Fill `n_smpl` labels with the sentinel.
    Empty { n_smpl: usize },
}

/// Factory for categorical factor coordinates.
#[derive(Debug, Clone)]
pub struct FactorCoordFactory<F: Categorical> {
    _factor: std::marker::PhantomData<F>,
}

impl<F: Categorical> FactorCoordFactory<F> {
    pub fn new() -> Self {
        Self {
            _factor: std::marker::PhantomData,
        }
    }
}

impl<F: Categorical> Factory for FactorCoordFactory<F> {
    type Spec = FactorCoordSpec<F>;
    type Product = FactorCoord<F>;

    fn create(&self, spec: FactorCoordSpec<F>) -> Result<FactorCoord<F>> {
        match spec {
            FactorCoordSpec::Values(values) => FactorCoord::new(values),
            FactorCoordSpec::Fill { n_smpl, factor } => {
                Ok(FactorCoord::build_labels(n_smpl, factor))
            }
            FactorCoordSpec::Empty { n_smpl } => Ok(FactorCoord::build_empty(n_smpl)),
        }
    }
}

/// Factory for fold coordinates, running a [`FoldAssigner`] over the
/// requested samples or strata.
#[derive(Debug, Clone)]
pub struct FoldFactory {
    assigner: FoldAssigner,
}

impl FoldFactory {
    pub fn new(k: usize, seed: u64) -> Self {
        Self {
            assigner: FoldAssigner::new(k, seed),
        }
    }
}

impl Factory for FoldFactory {
    type Spec = FoldInput;
    type Product = FoldCoord;

    fn create(&self, spec: FoldInput) -> Result<FoldCoord> {
        let folds = self.assigner.process(spec)?;
        FoldCoord::new(folds, Some(self.assigner.k()))
    }
}

/// Factory for pseudo-trial coordinates, running a [`Bootstrapper`] over
/// per-unit trial counts.
#[derive(Debug, Clone)]
pub struct PseudoTrialsFactory {
    bootstrapper: Bootstrapper,
}

impl PseudoTrialsFactory {
    pub fn new(n_pseudo: usize, seed: u64) -> Self {
        Self {
            bootstrapper: Bootstrapper::new(n_pseudo, seed),
        }
    }
}

impl Factory for PseudoTrialsFactory {
    type Spec = Vec<usize>;
    type Product = PseudoTrialsCoord;

    fn create(&self, counts: Vec<usize>) -> Result<PseudoTrialsCoord> {
        let rows = self.bootstrapper.process(counts)?;
        PseudoTrialsCoord::from_rows(rows)
    }
}
