//! Transmission-line dataset for gridquery
//!
//! The dataset is a read-only snapshot of GeoJSON features, loaded once and
//! shared by every query.
//!
//! # Invariants
//!
//! - Query execution never mutates a loaded dataset
//! - Feature order is the order of the source file
//! - Every field is optional; absence is never an error

mod dataset;
mod errors;
mod feature;
mod slot;
mod summary;

pub use dataset::Dataset;
pub use errors::{DatasetError, DatasetResult};
pub use feature::{fields, Feature};
pub use slot::DatasetSlot;
pub use summary::{DatasetSummary, ValueCount, SAMPLE_COLUMNS};
