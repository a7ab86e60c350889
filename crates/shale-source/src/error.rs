//! Error types for the migration source.

use thiserror::Error;

use shale_bucket::BucketError;
use shale_catalog::CatalogError;

/// Errors from opening and reading a migration source.
///
/// Construction-time failures (`InvalidAddress`, `Listing`, `Catalog`)
/// abort the whole open; per-call failures (`NotFound`, `Fetch`) are
/// returned to the immediate caller and leave the catalog untouched.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The store address is not `<scheme>://<container>[/<path>]`.
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Listing the container at open time failed.
    #[error("listing failed: {0}")]
    Listing(#[source] BucketError),

    /// The key listing did not fold into an unambiguous catalog.
    #[error("catalog construction failed: {0}")]
    Catalog(#[from] CatalogError),

    /// The object vanished or became unreadable between listing and read.
    #[error("fetch failed: {0}")]
    Fetch(#[source] BucketError),

    /// The requested version or half is not in the catalog.
    ///
    /// The ordinary terminal condition when traversal runs off either end
    /// of the sequence; not a fault.
    #[error("migration does not exist")]
    NotFound,
}

/// Result alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
