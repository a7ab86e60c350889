//! Store address parsing and prefix normalization.
//!
//! Addresses look like `<scheme>://<container>[/<path>]`. The scheme is
//! accepted as-is (the caller picked the client; the address just names
//! where to look), the container is the host component, and the optional
//! path becomes the object-key prefix.

use crate::error::{SourceError, SourceResult};

/// A resolved store address: container plus normalized key prefix.
///
/// The prefix is either empty or ends with exactly one `/`; leading and
/// trailing separators from user input are normalized away. Immutable
/// after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    container: String,
    prefix: String,
}

impl Address {
    /// Build an address from parts, normalizing the prefix.
    pub fn new(container: impl Into<String>, prefix: &str) -> Address {
        let trimmed = prefix.trim_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        };
        Address {
            container: container.into(),
            prefix,
        }
    }

    /// Parse `<scheme>://<container>[/<path>]`.
    pub fn parse(address: &str) -> SourceResult<Address> {
        let invalid = |reason: &str| SourceError::InvalidAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        };

        let (scheme, rest) = address
            .split_once("://")
            .ok_or_else(|| invalid("missing `://` scheme separator"))?;
        if scheme.is_empty() {
            return Err(invalid("empty scheme"));
        }
        let (container, path) = match rest.split_once('/') {
            Some((container, path)) => (container, path),
            None => (rest, ""),
        };
        if container.is_empty() {
            return Err(invalid("empty container"));
        }
        Ok(Address::new(container, path))
    }

    /// The container (bucket) component.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// The normalized key prefix: empty, or ending in `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The full object key for a filename under this prefix.
    pub fn key(&self, filename: &str) -> String {
        format!("{}{}", self.prefix, filename)
    }
}
