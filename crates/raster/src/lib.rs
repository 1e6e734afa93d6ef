//! Raster: typed coordinates and dataset assembly for neural population
//! recordings.
//!
//! Raster labels the axes of scientific array data with validated,
//! domain-constrained coordinates and assembles them into composite
//! datasets through checkpointable processing pipelines.
//!
//! # Core Principles
//!
//! - **Validated at the edge**: attribute and coordinate values are checked
//!   against their declared domain at construction, never coerced.
//! - **Decoupled labels**: a coordinate does not know which axis it labels;
//!   the dataset builder establishes that pairing.
//! - **Resumable processing**: pipeline steps persist their outputs as
//!   checkpoints, so an interrupted run resumes without recomputation.
//!
//! # Example
//!
//! ```
//! use raster::attributes::Task;
//! use raster::builder::{DatasetBuilder, DatasetCoord};
//! use raster::coord::CoordTask;
//! use raster::data::{CoreData, Dim, Dimensions};
//! use indexmap::IndexMap;
//!
//! let dims = Dimensions::new(vec![Dim::Trials]).unwrap();
//! let data = CoreData::new(vec![0.5, 1.0, 2.5], vec![3], dims).unwrap();
//! let task = CoordTask::build_labels(3, Task::PureToneDiscrimination);
//!
//! let mut metadata = IndexMap::new();
//! metadata.insert("site".to_string(), serde_json::json!("avo052a"));
//!
//! let dataset = DatasetBuilder::new()
//!     .add_data(data)
//!     .add_metadata(metadata)
//!     .add_coord("task", Dim::Trials, DatasetCoord::Task(task))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dataset.coord_names(), vec!["task"]);
//! ```

pub mod attributes;
pub mod builder;
pub mod coord;
pub mod data;
pub mod entities;
pub mod error;
pub mod factory;
pub mod pipeline;
pub mod processors;

pub use builder::{Dataset, DatasetBuilder, DatasetCoord};
pub use coord::{Coordinate, DType};
pub use data::{CoreData, Dim, Dimensions};
pub use entities::Registry;
pub use error::{RasterError, Result};
pub use pipeline::{Pipeline, Step, StepContext};
pub use processors::Processor;
