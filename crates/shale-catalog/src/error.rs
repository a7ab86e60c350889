//! Error types for catalog construction.

use thiserror::Error;

use crate::migration::Direction;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two objects claim the same (version, direction) slot.
    ///
    /// Names the second key observed so an operator can find and remove
    /// the duplicate by hand.
    #[error("ambiguous migration: {key} duplicates version {version} ({direction})")]
    Ambiguous {
        key: String,
        version: u64,
        direction: Direction,
    },
}

/// Result alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;
