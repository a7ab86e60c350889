//! The driver facade: open once, traverse forever.

use std::sync::Arc;

use tracing::{debug, info};

use shale_bucket::{BucketClient, ObjectBody};
use shale_catalog::{Catalog, Migration};

use crate::address::Address;
use crate::error::{SourceError, SourceResult};

/// Migration source backed by a remote object store.
///
/// Built atomically by [`BucketSource::open`]: resolve the address, list
/// the keys under its prefix once, fold them into a [`Catalog`]. Any
/// failure along that path aborts the open. Afterwards the source is
/// frozen -- traversal is pure in-memory lookup, reads fetch single
/// objects on demand, and concurrent unsynchronized use is safe.
pub struct BucketSource {
    client: Arc<dyn BucketClient>,
    address: Address,
    catalog: Catalog,
}

impl BucketSource {
    /// Open a source at a string address, e.g.
    /// `s3://migration-bucket/prod/migrations`.
    pub async fn open(client: Arc<dyn BucketClient>, address: &str) -> SourceResult<BucketSource> {
        let address = Address::parse(address)?;
        Self::with_address(client, address).await
    }

    /// Open a source at an already-resolved [`Address`].
    ///
    /// The seam for embedders and tests that construct the client and
    /// address themselves.
    pub async fn with_address(
        client: Arc<dyn BucketClient>,
        address: Address,
    ) -> SourceResult<BucketSource> {
        // Delimiter '/' keeps nested groupings out of the listing; the
        // catalog excludes them again for clients that ignore it.
        let keys = client
            .list(address.container(), address.prefix(), Some('/'))
            .await
            .map_err(SourceError::Listing)?;
        debug!(
            container = address.container(),
            prefix = address.prefix(),
            keys = keys.len(),
            "listed objects under migration prefix"
        );

        let catalog = Catalog::build(address.prefix(), &keys)?;
        info!(
            container = address.container(),
            prefix = address.prefix(),
            versions = catalog.len(),
            "migration source opened"
        );

        Ok(BucketSource {
            client,
            address,
            catalog,
        })
    }

    /// The smallest version in the catalog.
    pub fn first(&self) -> SourceResult<u64> {
        self.catalog.first().ok_or(SourceError::NotFound)
    }

    /// The largest version strictly before `version`.
    pub fn prev(&self, version: u64) -> SourceResult<u64> {
        self.catalog.prev(version).ok_or(SourceError::NotFound)
    }

    /// The smallest version strictly after `version`.
    pub fn next(&self, version: u64) -> SourceResult<u64> {
        self.catalog.next(version).ok_or(SourceError::NotFound)
    }

    /// Stream the up half of `version`, with its human-readable label.
    ///
    /// An absent version or half returns [`SourceError::NotFound`] without
    /// contacting the store.
    pub async fn read_up(&self, version: u64) -> SourceResult<(ObjectBody, String)> {
        match self.catalog.up(version) {
            Some(migration) => self.fetch(migration).await,
            None => Err(SourceError::NotFound),
        }
    }

    /// Stream the down half of `version`, with its human-readable label.
    pub async fn read_down(&self, version: u64) -> SourceResult<(ObjectBody, String)> {
        match self.catalog.down(version) {
            Some(migration) => self.fetch(migration).await,
            None => Err(SourceError::NotFound),
        }
    }

    /// The frozen catalog backing this source.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The resolved address this source reads from.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Release the source. No handles outlive the open; dropping works
    /// equally well.
    pub fn close(self) {}

    async fn fetch(&self, migration: &Migration) -> SourceResult<(ObjectBody, String)> {
        // The raw filename, not the label, addresses the object.
        let key = self.address.key(&migration.raw);
        let body = self
            .client
            .get(self.address.container(), &key)
            .await
            .map_err(SourceError::Fetch)?;
        Ok((body, migration.identifier.clone()))
    }
}

impl std::fmt::Debug for BucketSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketSource")
            .field("address", &self.address)
            .field("catalog", &self.catalog)
            .finish()
    }
}
