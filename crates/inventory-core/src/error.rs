//! Error types for inventory operations.
//!
//! Only two places swallow these: the snapshot adapter (local cache
//! failures are logged and ignored) and the store's sync settlement
//! (remote failures become an advisory message). Everywhere else they
//! propagate with `?`.

use thiserror::Error;

/// Result type alias for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised by storage slots and the remote sync client
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Transport-level failure talking to the sync endpoint
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The sync endpoint answered with a non-success status
    #[error("sync endpoint returned status {0}")]
    Status(u16),

    /// A payload could not be encoded or decoded
    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A snapshot slot could not be read or written
    #[error("storage error: {0}")]
    Storage(String),

    /// No sync endpoint is configured; the app runs local-only
    #[error("no sync endpoint configured")]
    NotConfigured,
}

impl InventoryError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this failure came from the remote side rather than local storage
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status(_) | Self::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(InventoryError::Status(502).to_string(), "sync endpoint returned status 502");
        assert_eq!(InventoryError::storage("quota exceeded").to_string(), "storage error: quota exceeded");
        assert_eq!(InventoryError::NotConfigured.to_string(), "no sync endpoint configured");
    }

    #[test]
    fn test_is_remote() {
        assert!(InventoryError::Status(500).is_remote());
        assert!(InventoryError::NotConfigured.is_remote());
        assert!(!InventoryError::storage("disk full").is_remote());
    }
}
