//! Migration source driver for Shale.
//!
//! Composes the object-store client (`shale-bucket`) and the ordered
//! catalog (`shale-catalog`) into the traversal contract a migration
//! execution engine consumes: open an address, then `first`, `prev`,
//! `next`, `read_up`, `read_down`, `close`.
//!
//! Opening is atomic: address parsing, the single listing call, and
//! catalog construction either all succeed or the whole open fails with
//! no partially-usable source. After open, the source owns no mutable
//! state; traversal is pure catalog lookup, and reads fetch one object
//! on demand.
//!
//! ```no_run
//! use std::sync::Arc;
//! use shale_bucket::InMemoryBucket;
//! use shale_source::BucketSource;
//!
//! # async fn demo() -> Result<(), shale_source::SourceError> {
//! let bucket = Arc::new(InMemoryBucket::new("migration-bucket"));
//! let source = BucketSource::open(bucket, "s3://migration-bucket/prod/migrations").await?;
//! let version = source.first()?;
//! let (_body, _label) = source.read_up(version).await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod error;
pub mod source;

pub use address::Address;
pub use error::{SourceError, SourceResult};
pub use source::BucketSource;
