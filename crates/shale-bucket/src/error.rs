//! Error types for object-store operations.

use thiserror::Error;

/// Errors from the object-store client.
#[derive(Debug, Error)]
pub enum BucketError {
    /// The named container (bucket) does not exist or is not accessible.
    #[error("container not found: {0}")]
    ContainerNotFound(String),

    /// The requested object key does not exist in the container.
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// The backend rejected or failed the request (auth, throttling, ...).
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O error from the underlying transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for object-store operations.
pub type BucketResult<T> = Result<T, BucketError>;
