//! Ordered migration catalog for Shale.
//!
//! An object store hands back an unordered, flatly-namespaced key listing.
//! This crate turns that listing into a frozen, version-ordered index and
//! exposes deterministic traversal over it: smallest version, next version
//! up, previous version down, and the up/down halves of any one version.
//!
//! # Key Types
//!
//! - [`Migration`] — one parsed migration half (`<version>_<label>.<up|down>.<ext>`)
//! - [`Direction`] — which half a file holds, apply or revert
//! - [`Catalog`] — the frozen index, built once from a key listing
//!
//! # Policy
//!
//! Two deliberately asymmetric rules govern construction:
//!
//! 1. Keys that do not parse as migration filenames are skipped silently.
//!    Buckets hold unrelated objects; noise is not an error.
//! 2. Two keys claiming the same (version, direction) slot abort
//!    construction with [`CatalogError::Ambiguous`]. Silently picking one
//!    candidate could apply the wrong schema change, so nobody gets picked.

pub mod catalog;
pub mod error;
pub mod migration;

pub use catalog::{Catalog, VersionSlots};
pub use error::{CatalogError, CatalogResult};
pub use migration::{Direction, Migration};
