//! Dataset loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The data file could not be read
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but is not a GeoJSON FeatureCollection
    #[error("Dataset is not a GeoJSON FeatureCollection: {0}")]
    NotFeatureCollection(String),
}
