//! Object-store capability boundary for Shale.
//!
//! Shale reads versioned schema migrations out of a flat object-store
//! namespace (S3-style buckets, or anything shaped like one). This crate
//! defines the minimal client capability the rest of the system needs --
//! listing keys under a prefix and fetching one object's bytes -- so that
//! production backends and test doubles are interchangeable variants behind
//! one trait.
//!
//! # Design Rules
//!
//! 1. The client is read-only: Shale never writes to the store.
//! 2. Listing with a delimiter excludes keys nested below the prefix, so
//!    "no recursion into subdirectories" is a parameter, not caller logic.
//! 3. Fetched bodies are live, caller-owned streams; the client holds no
//!    handle once `get` returns.
//! 4. Cancellation and deadlines belong to the caller: dropping the future
//!    abandons the operation.
//! 5. All store errors are propagated, never retried internally.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{BucketError, BucketResult};
pub use memory::InMemoryBucket;
pub use traits::{BucketClient, ObjectBody};
