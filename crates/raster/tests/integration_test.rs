//! Integration tests for raster.

use indexmap::IndexMap;
use serde_json::json;

use raster::attributes::{Attention, Categorical, Task};
use raster::builder::{DatasetBuilder, DatasetCoord};
use raster::coord::{CoordAttention, CoordTask, Coordinate, FoldCoord, TimeCoord};
use raster::data::{CoreData, Dim, Dimensions};
use raster::entities::{Entity, Registry};
use raster::factory::{Factory, FoldFactory, PseudoTrialsFactory};
use raster::pipeline::{FoldStep, Pipeline, StepContext, StratifyStep, ZScoreStep};
use raster::processors::{Excluder, Feature, FoldInput, Processor, Stratifier};
use raster::RasterError;

// =============================================================================
// Entity Resolution
// =============================================================================

#[test]
fn test_unit_registration_builds_site_graph() {
    let mut registry = Registry::new();
    registry.register_unit("avo052a-d1").unwrap();
    registry.register_unit("avo052a-b3").unwrap();
    registry.register_session("avo052a04_p_PTD").unwrap();

    let site = registry.site("avo052a").expect("site should exist");
    assert_eq!(site.unit_ids().len(), 2);
    assert_eq!(site.session_ids().len(), 1);

    let unit = registry.unit("avo052a-d1").unwrap();
    assert_eq!(unit.site_id(), "avo052a");
    assert_eq!(registry.site_of(unit).unwrap().id(), "avo052a");
}

#[test]
fn test_unit_split_id() {
    let mut registry = Registry::new();
    let unit = registry.register_unit("avo052a-d1").unwrap();
    assert_eq!(
        unit.split_id(),
        ("avo052a".to_string(), "avo".to_string(), "a".to_string())
    );
}

#[test]
fn test_session_split_id() {
    let mut registry = Registry::new();
    let session = registry.register_session("avo052a04_p_PTD").unwrap();
    assert_eq!(
        session.split_id(),
        (
            "avo052a".to_string(),
            4,
            "p".to_string(),
            "PTD".to_string()
        )
    );
}

#[test]
fn test_malformed_identifiers_are_rejected() {
    let mut registry = Registry::new();
    for id in ["", "avo052a", "avo052a-d", "avo52a-d1"] {
        assert!(
            matches!(registry.register_unit(id), Err(RasterError::Format { .. })),
            "id '{id}' should be rejected"
        );
    }
}

// =============================================================================
// Coordinate Construction and Counting
// =============================================================================

#[test]
fn test_factor_coordinate_counts_cover_all_labels() {
    let mut values = vec!["PTD".to_string(); 5];
    values.extend(vec!["CLK".to_string(); 5]);
    let coord = CoordTask::new(values).unwrap();

    let counts = coord.count_by_lab();
    assert_eq!(counts.len(), Task::options().len());
    assert_eq!(counts[&Task::PureToneDiscrimination], 5);
    assert_eq!(counts[&Task::ClickRateDiscrimination], 5);
    assert_eq!(counts[&Task::ComplexChordDiscrimination], 0);
    assert_eq!(counts.values().sum::<usize>(), 10);
}

#[test]
fn test_replace_label_leaves_original_untouched() {
    let coord =
        CoordAttention::new(vec!["p".to_string(), "a".to_string()]).unwrap();
    let replaced = coord.replace_label(Attention::Passive, Attention::PostPassive);

    assert_eq!(coord.values(), &["p", "a"]);
    assert_eq!(replaced.values(), &["p-post", "a"]);
}

// =============================================================================
// Processing Chain
// =============================================================================

#[test]
fn test_exclusion_and_stratification() {
    let retained = Excluder::process(&[1, 2, 3, 4, 5], &[2, 4]);
    assert_eq!(retained, vec![1, 3, 5]);

    let features = vec![
        Feature::int(vec![1, 1, 2]),
        Feature::float(vec![0.1, 0.1, 0.2]),
        Feature::str(vec!["A".into(), "A".into(), "B".into()]),
    ];
    let strata = Stratifier::new().process(features).unwrap();
    assert_eq!(strata, vec![0, 0, 1]);
}

#[test]
fn test_fold_factory_to_coordinate_masks() {
    let factory = FoldFactory::new(3, 42);
    let folds: FoldCoord = factory.create(FoldInput::from_samples(9)).unwrap();

    assert_eq!(folds.count_by_lab().iter().sum::<usize>(), 9);
    for fold in 0..3 {
        let test = folds.test_mask(fold);
        let train = folds.train_mask(fold);
        let n_test = test.iter().filter(|m| **m).count();
        assert_eq!(n_test, 3);
        assert!(test.iter().zip(&train).all(|(t, r)| t != r));
    }
}

#[test]
fn test_pseudo_trials_respect_unit_counts() {
    let factory = PseudoTrialsFactory::new(8, 5);
    let coord = factory.create(vec![3, 10, 8]).unwrap();

    assert_eq!(coord.n_units(), 3);
    assert_eq!(coord.n_pseudo(), 8);
    for (unit, count) in [(0usize, 3i64), (1, 10), (2, 8)] {
        let row = coord.unit_row(unit).unwrap();
        assert!(row.iter().all(|t| *t >= 0 && *t < count));
    }
}

// =============================================================================
// Dataset Assembly
// =============================================================================

#[test]
fn test_builder_assembles_labeled_dataset() {
    let dims = Dimensions::new(vec![Dim::Trials, Dim::Time]).unwrap();
    let data = CoreData::new(vec![0.0; 20], vec![4, 5], dims).unwrap();
    let task = CoordTask::build_labels(4, Task::ClickRateDiscrimination);
    let time = TimeCoord::build_labels(Some(5), Some(0.05), None).unwrap();

    let mut metadata = IndexMap::new();
    metadata.insert("session".to_string(), json!("avo052a04_p_CLK"));

    let dataset = DatasetBuilder::new()
        .add_data(data)
        .add_metadata(metadata)
        .add_coord("task", Dim::Trials, DatasetCoord::Task(task))
        .add_coord("time", Dim::Time, DatasetCoord::Time(time))
        .build()
        .unwrap();

    assert_eq!(dataset.coord_names(), vec!["task", "time"]);
    assert_eq!(dataset.data().axis_len(Dim::Trials).unwrap(), 4);
    assert_eq!(dataset.coords_on(Dim::Time).len(), 1);
}

#[test]
fn test_builder_requires_data_and_metadata() {
    let dims = Dimensions::new(vec![Dim::Trials]).unwrap();
    let data = CoreData::new(vec![0.0; 3], vec![3], dims).unwrap();

    let err = DatasetBuilder::new().add_data(data).build().unwrap_err();
    match err {
        RasterError::MissingComponent(role) => assert_eq!(role, "metadata"),
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// End-to-End Pipeline with Checkpoints
// =============================================================================

#[test]
fn test_pipeline_end_to_end_with_resume() {
    let dir = tempfile::tempdir().unwrap();

    let features = json!(vec![Feature::str(vec![
        "PTD".into(),
        "PTD".into(),
        "PTD".into(),
        "CLK".into(),
        "CLK".into(),
        "CLK".into(),
    ])]);

    let build_pipeline = || {
        Pipeline::new()
            .with_checkpoint_dir(dir.path())
            .add_step(StratifyStep::new())
            .add_step(FoldStep::new(3, 11))
            .add_step(ZScoreStep::new())
    };

    let mut ctx = StepContext::new();
    ctx.insert("features".to_string(), features.clone());
    ctx.insert("rates".to_string(), json!([1.0, 2.0, 1.0, 2.0]));

    let first = build_pipeline().execute(&mut ctx).unwrap();
    assert_eq!(first.executed.len(), 3);

    let folds: Vec<i64> = serde_json::from_value(ctx["folds"].clone()).unwrap();
    assert_eq!(folds.len(), 6);

    // A fresh context resumes entirely from checkpoints.
    let mut resumed = StepContext::new();
    resumed.insert("features".to_string(), features.clone());
    resumed.insert("rates".to_string(), json!([1.0, 2.0, 1.0, 2.0]));

    let second = build_pipeline().execute(&mut resumed).unwrap();
    assert!(second.executed.is_empty());
    assert_eq!(second.restored.len(), 3);
    assert_eq!(resumed["folds"], ctx["folds"]);
}

#[test]
fn test_changed_configuration_invalidates_checkpoint() {
    let dir = tempfile::tempdir().unwrap();

    let run = |k: usize| {
        let pipeline = Pipeline::new()
            .with_checkpoint_dir(dir.path())
            .add_step(FoldStep::new(k, 11));
        let mut ctx = StepContext::new();
        ctx.insert("strata".to_string(), json!([0, 0, 0, 1, 1, 1]));
        let outcome = pipeline.execute(&mut ctx).unwrap();
        (outcome, ctx)
    };

    let (first, _) = run(2);
    assert_eq!(first.executed.len(), 1);

    // Same configuration: restored. Different k: recomputed.
    let (second, _) = run(2);
    assert_eq!(second.restored.len(), 1);
    let (third, ctx) = run(3);
    assert_eq!(third.executed.len(), 1);
    let folds: Vec<i64> = serde_json::from_value(ctx["folds"].clone()).unwrap();
    assert!(folds.iter().any(|f| *f == 2));
}
