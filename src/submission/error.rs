//! Submission Store Errors

/// Common result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No storage backend (no window, storage disabled)
    Unavailable(String),
    /// Record could not be encoded
    Serialization(String),
    /// Backend rejected the write (quota exceeded, ...)
    Write(String),
    /// Stored log is not a valid record array
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StoreError::Write(msg) => write!(f, "Write failed: {}", msg),
            StoreError::Corrupt(msg) => write!(f, "Corrupt submission log: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
