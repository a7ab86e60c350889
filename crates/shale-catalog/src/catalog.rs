//! The frozen, version-ordered migration index.
//!
//! [`Catalog::build`] folds an object-key listing into a
//! `BTreeMap<u64, VersionSlots>` exactly once; every traversal method after
//! that is a pure read against the frozen map. The catalog takes no locks
//! and exposes no mutation, so unsynchronized concurrent reads are safe.

use std::collections::BTreeMap;
use std::ops::Bound;

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::migration::{Direction, Migration};

/// The up and down halves recorded for one version.
///
/// Either half may be absent. A version with only an up half is a
/// legitimate, common state (an irreversible migration) and participates
/// in traversal like any other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionSlots {
    pub up: Option<Migration>,
    pub down: Option<Migration>,
}

/// The frozen migration index: versions in ascending order, each holding
/// up to one up half and one down half.
pub struct Catalog {
    entries: BTreeMap<u64, VersionSlots>,
}

impl Catalog {
    /// Build a catalog from an object-key listing taken under `prefix`.
    ///
    /// For each key:
    /// 1. Strip `prefix`. Keys outside the prefix are skipped.
    /// 2. Skip keys still containing a `/` -- those live in nested
    ///    groupings under the prefix, which the catalog does not recurse
    ///    into.
    /// 3. Parse the leaf filename; non-migration names are skipped.
    /// 4. Record the (version, direction) slot. A second claim on an
    ///    occupied slot aborts construction with
    ///    [`CatalogError::Ambiguous`].
    pub fn build<I, S>(prefix: &str, keys: I) -> CatalogResult<Catalog>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: BTreeMap<u64, VersionSlots> = BTreeMap::new();

        for key in keys {
            let key = key.as_ref();
            let Some(remainder) = key.strip_prefix(prefix) else {
                debug!(key, "key outside prefix, skipping");
                continue;
            };
            if remainder.contains('/') {
                debug!(key, "nested key under prefix, skipping");
                continue;
            }
            let Some(migration) = Migration::parse(remainder) else {
                debug!(key, "not a migration filename, skipping");
                continue;
            };

            let slots = entries.entry(migration.version).or_default();
            let slot = match migration.direction {
                Direction::Up => &mut slots.up,
                Direction::Down => &mut slots.down,
            };
            if slot.is_some() {
                return Err(CatalogError::Ambiguous {
                    key: key.to_string(),
                    version: migration.version,
                    direction: migration.direction,
                });
            }
            debug!(
                key,
                version = migration.version,
                direction = %migration.direction,
                "migration recorded"
            );
            *slot = Some(migration);
        }

        Ok(Catalog { entries })
    }

    /// The smallest version present, by either half.
    pub fn first(&self) -> Option<u64> {
        self.entries.keys().next().copied()
    }

    /// The largest version strictly less than `version`.
    pub fn prev(&self, version: u64) -> Option<u64> {
        self.entries.range(..version).next_back().map(|(v, _)| *v)
    }

    /// The smallest version strictly greater than `version`.
    pub fn next(&self, version: u64) -> Option<u64> {
        self.entries
            .range((Bound::Excluded(version), Bound::Unbounded))
            .next()
            .map(|(v, _)| *v)
    }

    /// The up half of `version`, if present.
    pub fn up(&self, version: u64) -> Option<&Migration> {
        self.entries.get(&version)?.up.as_ref()
    }

    /// The down half of `version`, if present.
    pub fn down(&self, version: u64) -> Option<&Migration> {
        self.entries.get(&version)?.down.as_ref()
    }

    /// Whether `version` is present with either half.
    pub fn contains(&self, version: u64) -> bool {
        self.entries.contains_key(&version)
    }

    /// Number of distinct versions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no versions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All versions in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("versions", &self.len())
            .finish()
    }
}
