//! Error types for the state core.
//!
//! The persistence layer never surfaces read-side problems: an absent or
//! corrupted durable record degrades to an empty list (logged, not raised).
//! Only `save` propagates failures, because a write that did not land (disk
//! full, permissions) is the one thing the caller must hear about.

use thiserror::Error;

/// Failure writing to or reading from durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying storage I/O failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Item list could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::Poisoned;
        assert_eq!(err.to_string(), "storage lock poisoned");
    }
}
