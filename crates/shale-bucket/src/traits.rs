use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::BucketResult;

/// A readable stream of one object's bytes.
///
/// Owned exclusively by the caller once returned; dropping it releases
/// whatever the backend had open.
pub type ObjectBody = Box<dyn AsyncRead + Send + Unpin>;

/// Read-only object-store client.
///
/// All implementations must satisfy these invariants:
/// - `list` returns full object keys (prefix included), in no guaranteed
///   order; callers impose their own ordering.
/// - When a delimiter is supplied, `list` excludes any key that still
///   contains the delimiter after the prefix is removed. This mirrors
///   stores that group objects by common prefix.
/// - `get` returns the current bytes of the object or an error; it never
///   retries, and an object deleted between list and get surfaces as an
///   error, not an empty stream.
/// - Implementations are safe to share across tasks (`Send + Sync`).
#[async_trait]
pub trait BucketClient: Send + Sync {
    /// List the object keys in `container` that start with `prefix`.
    async fn list(
        &self,
        container: &str,
        prefix: &str,
        delimiter: Option<char>,
    ) -> BucketResult<Vec<String>>;

    /// Fetch one object's bytes as a caller-owned stream.
    async fn get(&self, container: &str, key: &str) -> BucketResult<ObjectBody>;
}
