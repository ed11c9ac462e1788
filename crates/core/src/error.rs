//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StorageResult<T> = Result<T, StorageError>;

/// Domain-level error.
///
/// Every variant is a deterministic contract violation surfaced at the call
/// site; there is nothing to retry and no partial recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A caller-supplied value failed validation (e.g. negative amount,
    /// capacities out of order at construction).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Allocating one more container would exceed the total storage capacity.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// A free-space query was made for a good with no allocated container.
    #[error("not found")]
    NotFound,
}

impl StorageError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn capacity_exceeded(msg: impl Into<String>) -> Self {
        Self::CapacityExceeded(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_through_display() {
        let err = StorageError::invalid_argument("amount cannot be negative");
        assert_eq!(err.to_string(), "invalid argument: amount cannot be negative");

        let err = StorageError::capacity_exceeded("no room for another container");
        assert_eq!(err.to_string(), "capacity exceeded: no room for another container");

        assert_eq!(StorageError::not_found().to_string(), "not found");
    }
}
