//! Exclusion utilities over candidate sets.

use crate::error::{RasterError, Result};

/// Utilities to exclude elements from a set by various criteria.
///
/// Not a [`Processor`](super::Processor): these are pure, configuration-free
/// helpers.
pub struct Excluder;

impl Excluder {
    pub const IS_RANDOM: bool = false;

    /// Remove every element of `intruders` from `candidates`, preserving the
    /// original order and multiplicities of the remaining elements.
    ///
    /// # Example
    ///
    /// ```
    /// use raster::processors::Excluder;
    ///
    /// let retained = Excluder::process(&[1, 2, 3, 4, 5], &[2, 4]);
    /// assert_eq!(retained, vec![1, 3, 5]);
    /// ```
    pub fn process<T: Clone + PartialEq>(candidates: &[T], intruders: &[T]) -> Vec<T> {
        candidates
            .iter()
            .filter(|element| !intruders.contains(element))
            .cloned()
            .collect()
    }

    /// Indices of the elements whose count meets a required minimum.
    pub fn retain_by_counts(counts: &[usize], n_min: usize) -> Vec<usize> {
        counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count >= n_min)
            .map(|(index, _)| index)
            .collect()
    }
}

/// A candidate set with pure set-algebra operations.
///
/// The constructor takes its own copy of the input; every operation returns
/// a new set and leaves the receiver (and the original input) untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates<T> {
    items: Vec<T>,
}

impl<T: Clone + PartialEq> Candidates<T> {
    /// Build a candidate set from any iterable of elements.
    pub fn new(candidates: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: candidates.into_iter().collect(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A new set without the intruders.
    pub fn exclude(&self, intruders: &[T]) -> Self {
        Self {
            items: Excluder::process(&self.items, intruders),
        }
    }

    /// A new set keeping only elements satisfying the predicate.
    pub fn retain(&self, predicate: impl Fn(&T) -> bool) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    /// A new set keeping only elements whose associated value satisfies the
    /// predicate. `values` must run parallel to the candidate set.
    pub fn retain_by_associated<V>(
        &self,
        values: &[V],
        predicate: impl Fn(&V) -> bool,
    ) -> Result<Self> {
        if values.len() != self.items.len() {
            return Err(RasterError::Usage(format!(
                "{} associated values for {} candidates",
                values.len(),
                self.items.len()
            )));
        }
        Ok(Self {
            items: self
                .items
                .iter()
                .zip(values)
                .filter(|(_, value)| predicate(value))
                .map(|(element, _)| element.clone())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_preserves_order() {
        assert_eq!(Excluder::process(&[1, 2, 3, 4, 5], &[2, 4]), vec![1, 3, 5]);
    }

    #[test]
    fn test_exclude_preserves_multiplicities() {
        assert_eq!(Excluder::process(&[1, 2, 1, 3, 1], &[3]), vec![1, 2, 1, 1]);
    }

    #[test]
    fn test_exclude_empty_intruders() {
        assert_eq!(Excluder::process(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn test_retain_by_counts() {
        assert_eq!(Excluder::retain_by_counts(&[5, 2, 9, 3], 3), vec![0, 2, 3]);
    }

    #[test]
    fn test_candidates_operations_do_not_mutate() {
        let candidates = Candidates::new([1, 2, 3, 4, 5]);
        let excluded = candidates.exclude(&[2, 4]);
        let filtered = candidates.retain(|x| x % 2 == 0);

        assert_eq!(excluded.items(), &[1, 3, 5]);
        assert_eq!(filtered.items(), &[2, 4]);
        assert_eq!(candidates.items(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_retain_by_associated() {
        let candidates = Candidates::new(["a", "b", "c", "d"]);
        let kept = candidates
            .retain_by_associated(&[1, 2, 3, 4], |x| x % 2 == 0)
            .unwrap();
        assert_eq!(kept.items(), &["b", "d"]);
    }

    #[test]
    fn test_retain_by_associated_length_mismatch() {
        let candidates = Candidates::new(["a", "b"]);
        assert!(candidates.retain_by_associated(&[1], |_| true).is_err());
    }
}
