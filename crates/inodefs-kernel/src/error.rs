//! Namespace error types.

use std::io;
use thiserror::Error;

/// Namespace error type.
///
/// Every variant describes an expected condition. Operations report these
/// as values and leave the tree untouched; nothing here is raised past the
/// operation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NsError {
    /// Parent directory or leaf entry does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A path segment that must be traversed holds a file.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// A file operation named a subdirectory entry.
    #[error("is a directory: {0}")]
    IsADirectory(String),

    /// Entry name is empty or contains a separator.
    #[error("invalid name: {0:?}")]
    InvalidName(String),
}

impl NsError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Create an IsADirectory error.
    pub fn is_a_directory(path: impl Into<String>) -> Self {
        Self::IsADirectory(path.into())
    }

    /// Create an InvalidName error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Returns true for the NotFound variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Convert NsError to std::io::Error for compatibility.
impl From<NsError> for io::Error {
    fn from(e: NsError) -> Self {
        match e {
            NsError::NotFound(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
            NsError::NotADirectory(msg) => io::Error::new(io::ErrorKind::NotADirectory, msg),
            NsError::IsADirectory(msg) => io::Error::new(io::ErrorKind::IsADirectory, msg),
            NsError::InvalidName(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
        }
    }
}

/// Namespace result type.
pub type NsResult<T> = Result<T, NsError>;
