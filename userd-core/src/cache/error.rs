use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// Cache errors never fail a request: callers log them and fall through
/// to the authoritative store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("cache operation failed: {0}")]
    OperationFailed(String),
    #[error("snapshot serialization failed: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
