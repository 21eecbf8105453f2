//! Executor error types
//!
//! Execution itself is total. The only failure is a violated precondition:
//! querying before a dataset has been installed.
//!
//! Error codes:
//! - GRID_DATASET_UNAVAILABLE (ERROR)

use std::fmt;

/// Severity levels for executor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Request cannot be served; process is healthy
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Executor-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// No dataset is loaded yet (or loading failed)
    GridDatasetUnavailable,
}

impl ExecutorErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::GridDatasetUnavailable => "GRID_DATASET_UNAVAILABLE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error type with full context
#[derive(Debug, Clone)]
pub struct ExecutorError {
    code: ExecutorErrorCode,
    message: String,
}

impl ExecutorError {
    /// Create a dataset unavailable error
    pub fn dataset_unavailable() -> Self {
        Self {
            code: ExecutorErrorCode::GridDatasetUnavailable,
            message: "Data not yet loaded or failed to load.".into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ExecutorErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the dataset was not available
    pub fn is_unavailable(&self) -> bool {
        self.code == ExecutorErrorCode::GridDatasetUnavailable
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ExecutorError {}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string() {
        assert_eq!(
            ExecutorErrorCode::GridDatasetUnavailable.code(),
            "GRID_DATASET_UNAVAILABLE"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ExecutorError::dataset_unavailable();
        let display = format!("{}", err);
        assert_eq!(
            display,
            "[ERROR] GRID_DATASET_UNAVAILABLE: Data not yet loaded or failed to load."
        );
        assert!(err.is_unavailable());
        assert_eq!(err.severity(), Severity::Error);
    }
}
