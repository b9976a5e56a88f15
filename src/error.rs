//! Error types for the dfbnb crate

use thiserror::Error;

/// Main error type for the dfbnb crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid edge cost distribution '{input}'. Expected one of: {expected}")]
    ParseDistribution { input: String, expected: String },

    #[error("invalid goal rule '{input}'. Expected one of: {expected}")]
    ParseGoalRule { input: String, expected: String },

    #[error("tree with branching factor {branching_factor} and depth {depth} is too large: {reason}")]
    TreeTooLarge {
        branching_factor: u32,
        depth: u32,
        reason: String,
    },

    #[error("failed to {operation}: {source}")]
    Storage {
        operation: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("value {value} is out of range for column '{column}'")]
    ColumnOutOfRange { column: &'static str, value: i128 },

    #[error("failed to {operation}: {source}")]
    StorageIo {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("internal node {node} at depth {depth} has {found} children in the store, expected {expected}")]
    SearchInconsistency {
        node: u64,
        depth: u32,
        found: usize,
        expected: u32,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of [`Error`] for callers that react per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unsupported or out-of-range configuration; raised before any store mutation.
    Configuration,
    /// The persisted edge relation could not be created, written or queried.
    Storage,
    /// The store does not hold the children the tree shape requires.
    SearchInconsistency,
    /// Writing results (CSV, JSON, files) failed.
    Output,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidConfiguration { .. }
            | Error::ParseDistribution { .. }
            | Error::ParseGoalRule { .. }
            | Error::TreeTooLarge { .. } => ErrorKind::Configuration,
            Error::Storage { .. } | Error::StorageIo { .. } | Error::ColumnOutOfRange { .. } => {
                ErrorKind::Storage
            }
            Error::SearchInconsistency { .. } => ErrorKind::SearchInconsistency,
            Error::Io { .. } | Error::Csv(_) | Error::Serialization(_) => ErrorKind::Output,
        }
    }

    pub(crate) fn storage(operation: impl Into<String>, source: rusqlite::Error) -> Self {
        Error::Storage {
            operation: operation.into(),
            source,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
