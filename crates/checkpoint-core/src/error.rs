//! Error types for the checkpoint library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Test case not found for the given ID
    #[error("Test case with ID {id} not found")]
    TestCaseNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A blocking database task panicked or was cancelled
    #[error("Task failed: {message}")]
    Task { message: String },
}

/// Coarse classification of [`PlannerError`] for collaborators that map
/// failures onto their own surface (exit codes, HTTP statuses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced plan or test case does not exist.
    NotFound,
    /// A value was rejected before any write took place.
    InvalidArgument,
    /// The store could not be reached or a read/write failed.
    StorageFailure,
    /// The task running the operation panicked or was cancelled. Nothing is
    /// known about the store.
    Internal,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a failed blocking task join.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string(),
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PlanNotFound { .. } | Self::TestCaseNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput { .. } => ErrorKind::InvalidArgument,
            Self::Database { .. } | Self::FileSystem { .. } | Self::XdgDirectory(_) => {
                ErrorKind::StorageFailure
            }
            Self::Task { .. } => ErrorKind::Internal,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            PlannerError::PlanNotFound { id: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            PlannerError::TestCaseNotFound { id: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            PlannerError::invalid_input("status")
                .with_reason("bad")
                .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PlannerError::database("boom")
                .with_source(rusqlite::Error::QueryReturnedNoRows)
                .kind(),
            ErrorKind::StorageFailure
        );
    }

    #[tokio::test]
    async fn test_panicked_task_is_internal() {
        let join_error = tokio::task::spawn_blocking(|| panic!("worker died"))
            .await
            .unwrap_err();
        let err = PlannerError::join(join_error);
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().starts_with("Task failed:"));
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load plan").unwrap_err();
        assert!(err.to_string().contains("Failed to load plan"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
