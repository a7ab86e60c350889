use std::collections::HashMap;
use std::io::Cursor;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{BucketError, BucketResult};
use crate::traits::{BucketClient, ObjectBody};

/// In-memory, HashMap-backed object store.
///
/// Intended for tests and embedding. One instance models one container;
/// requests against any other container name fail the same way a missing
/// bucket would. Objects are held behind a `RwLock` and cloned on read.
pub struct InMemoryBucket {
    container: String,
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBucket {
    /// Create an empty bucket answering to `container`.
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Insert (or replace) an object.
    pub fn insert(&self, key: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.objects
            .write()
            .expect("lock poisoned")
            .insert(key.into(), data.into());
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the bucket holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Return a sorted list of all keys in the bucket.
    pub fn keys(&self) -> Vec<String> {
        let map = self.objects.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn check_container(&self, container: &str) -> BucketResult<()> {
        if container != self.container {
            return Err(BucketError::ContainerNotFound(container.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BucketClient for InMemoryBucket {
    async fn list(
        &self,
        container: &str,
        prefix: &str,
        delimiter: Option<char>,
    ) -> BucketResult<Vec<String>> {
        self.check_container(container)?;
        let map = self.objects.read().expect("lock poisoned");
        let mut keys: Vec<String> = map
            .keys()
            .filter(|key| key.starts_with(prefix))
            .filter(|key| match delimiter {
                Some(d) => !key[prefix.len()..].contains(d),
                None => true,
            })
            .cloned()
            .collect();
        // Real stores list lexicographically; do the same for determinism.
        keys.sort();
        Ok(keys)
    }

    async fn get(&self, container: &str, key: &str) -> BucketResult<ObjectBody> {
        self.check_container(container)?;
        let map = self.objects.read().expect("lock poisoned");
        match map.get(key) {
            Some(data) => Ok(Box::new(Cursor::new(data.clone()))),
            None => Err(BucketError::ObjectNotFound(key.to_string())),
        }
    }
}

impl std::fmt::Debug for InMemoryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBucket")
            .field("container", &self.container)
            .field("object_count", &self.len())
            .finish()
    }
}
