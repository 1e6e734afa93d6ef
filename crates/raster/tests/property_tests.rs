//! Property-based tests for attribute and coordinate invariants.
//!
//! These tests use proptest to generate random inputs and verify that:
//!
//! 1. **No panics**: constructors never crash on any input
//! 2. **Round-trip**: accepted values are stored exactly as given
//! 3. **Immutability**: transforming operations never mutate their receiver
//! 4. **Determinism**: seeded randomized processors reproduce their output

use proptest::prelude::*;

use raster::attributes::{Attention, Categorical, Fold, Task};
use raster::coord::{CoordTask, Coordinate, FoldCoord};
use raster::processors::{Excluder, Feature, FoldAssigner, FoldInput, Processor, Stratifier};

/// Strategy over valid task codes plus the sentinel.
fn task_code_or_sentinel() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("PTD".to_string()),
        Just("CLK".to_string()),
        Just("CCH".to_string()),
        Just(String::new()),
    ]
}

/// Strategy over arbitrary short uppercase strings.
fn arbitrary_code() -> impl Strategy<Value = String> {
    "[A-Z]{0,5}"
}

proptest! {
    #[test]
    fn prop_attribute_accepts_exactly_its_options(code in arbitrary_code()) {
        let parsed = Task::parse(&code);
        let expected = Task::options().iter().any(|t| t.code() == code);
        prop_assert_eq!(parsed.is_ok(), expected);
    }

    #[test]
    fn prop_fold_accepts_exactly_non_negative(value in any::<i64>()) {
        prop_assert_eq!(Fold::new(value).is_ok(), value >= 0);
    }

    #[test]
    fn prop_coordinate_round_trip(values in proptest::collection::vec(task_code_or_sentinel(), 0..50)) {
        let coord = CoordTask::new(values.clone()).unwrap();
        prop_assert_eq!(coord.values(), values.as_slice());
        // Counts over all labels plus sentinels cover every element.
        let counted: usize = coord.count_by_lab().values().sum();
        let sentinels = values.iter().filter(|v| v.is_empty()).count();
        prop_assert_eq!(counted + sentinels, values.len());
    }

    #[test]
    fn prop_replace_label_never_mutates(values in proptest::collection::vec(task_code_or_sentinel(), 0..30)) {
        let coord = CoordTask::new(values.clone()).unwrap();
        let _ = coord.replace_label(Task::PureToneDiscrimination, Task::ClickRateDiscrimination);
        prop_assert_eq!(coord.values(), values.as_slice());
    }

    #[test]
    fn prop_exclusion_is_order_preserving_subset(
        candidates in proptest::collection::vec(0i64..20, 0..40),
        intruders in proptest::collection::vec(0i64..20, 0..10),
    ) {
        let retained = Excluder::process(&candidates, &intruders);
        // No intruder survives.
        prop_assert!(retained.iter().all(|r| !intruders.contains(r)));
        // Order is preserved: retained is a subsequence of candidates.
        let mut cursor = candidates.iter();
        for element in &retained {
            prop_assert!(cursor.any(|c| c == element));
        }
    }

    #[test]
    fn prop_strata_partition_samples(labels in proptest::collection::vec(0i64..5, 1..40)) {
        let n = labels.len();
        let strata = Stratifier::new()
            .process(vec![Feature::int(labels.clone())])
            .unwrap();
        prop_assert_eq!(strata.len(), n);
        // Same label iff same stratum.
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(labels[i] == labels[j], strata[i] == strata[j]);
            }
        }
        // Ids are dense and start at 0.
        let max = *strata.iter().max().unwrap();
        for id in 0..=max {
            prop_assert!(strata.contains(&id));
        }
    }

    #[test]
    fn prop_fold_assignment_is_deterministic_and_complete(
        n in 5usize..60,
        k in 2usize..5,
        seed in any::<u64>(),
    ) {
        let assigner = FoldAssigner::new(k, seed);
        let folds = assigner.process(FoldInput::from_samples(n)).unwrap();
        let again = assigner.process(FoldInput::from_samples(n)).unwrap();
        prop_assert_eq!(&folds, &again);
        prop_assert_eq!(folds.len(), n);
        prop_assert!(folds.iter().all(|f| *f >= 0 && (*f as usize) < k));

        // The assignment loads as a valid fold coordinate.
        let coord = FoldCoord::new(folds, Some(k)).unwrap();
        prop_assert_eq!(coord.count_by_lab().iter().sum::<usize>(), n);
    }

    #[test]
    fn prop_attention_labels_are_total(code in prop_oneof![
        Just("a".to_string()),
        Just("p".to_string()),
        Just("p-pre".to_string()),
        Just("p-post".to_string()),
    ]) {
        let attention = Attention::parse(&code).unwrap();
        prop_assert!(!attention.full_label().is_empty());
        prop_assert_eq!(attention.code(), code);
    }
}
