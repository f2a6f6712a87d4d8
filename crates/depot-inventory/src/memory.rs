//! In-memory inventory store for testing and ephemeral use.
//!
//! [`InMemoryInventory`] holds version listings in a `HashMap` behind a
//! `RwLock`. It implements the full [`InventoryStore`] trait and is suitable
//! for unit tests and embedding; data is lost when the store is dropped.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use depot_types::{ContentId, ContentKey, VersionHandle};

use crate::error::{InventoryError, InventoryResult};
use crate::record::ContentRecord;
use crate::traits::InventoryStore;

/// An in-memory implementation of [`InventoryStore`].
pub struct InMemoryInventory {
    versions: RwLock<HashMap<VersionHandle, Vec<ContentRecord>>>,
}

impl InMemoryInventory {
    /// Create a new empty inventory.
    pub fn new() -> Self {
        Self {
            versions: RwLock::new(HashMap::new()),
        }
    }

    /// Register `version` with the given content listing, replacing any
    /// previous listing for the same handle.
    pub fn insert_version(&self, version: VersionHandle, records: Vec<ContentRecord>) {
        self.versions
            .write()
            .expect("lock poisoned")
            .insert(version, records);
    }

    /// Append one record to `version`, creating the version if needed.
    pub fn insert_record(&self, version: &VersionHandle, record: ContentRecord) {
        self.versions
            .write()
            .expect("lock poisoned")
            .entry(version.clone())
            .or_default()
            .push(record);
    }

    /// Remove one record from `version` by its identifier. Returns `true` if
    /// the record existed.
    pub fn remove_record(&self, version: &VersionHandle, id: &ContentId) -> bool {
        let mut versions = self.versions.write().expect("lock poisoned");
        match versions.get_mut(version) {
            Some(records) => {
                let before = records.len();
                records.retain(|r| r.id != *id);
                records.len() < before
            }
            None => false,
        }
    }

    /// Number of versions known to the store.
    pub fn version_count(&self) -> usize {
        self.versions.read().expect("lock poisoned").len()
    }

    /// Number of content units in `version`, or `None` if unknown.
    pub fn content_count(&self, version: &VersionHandle) -> Option<usize> {
        self.versions
            .read()
            .expect("lock poisoned")
            .get(version)
            .map(Vec::len)
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore for InMemoryInventory {
    fn content_keys(&self, version: &VersionHandle) -> InventoryResult<Vec<ContentKey>> {
        let versions = self.versions.read().expect("lock poisoned");
        let records = versions
            .get(version)
            .ok_or_else(|| InventoryError::VersionNotFound(version.clone()))?;
        Ok(records.iter().map(|r| r.key.clone()).collect())
    }

    fn lookup_batch(
        &self,
        version: &VersionHandle,
        keys: &[ContentKey],
    ) -> InventoryResult<Vec<ContentId>> {
        let versions = self.versions.read().expect("lock poisoned");
        let records = versions
            .get(version)
            .ok_or_else(|| InventoryError::VersionNotFound(version.clone()))?;
        // Missing keys are skipped, not an error: the caller expects the
        // inventory to have possibly changed since the delta was computed.
        let wanted: HashSet<&ContentKey> = keys.iter().collect();
        Ok(records
            .iter()
            .filter(|r| wanted.contains(&r.key))
            .map(|r| r.id)
            .collect())
    }

    fn content_records(&self, version: &VersionHandle) -> InventoryResult<Vec<ContentRecord>> {
        let versions = self.versions.read().expect("lock poisoned");
        let records = versions
            .get(version)
            .ok_or_else(|| InventoryError::VersionNotFound(version.clone()))?;
        Ok(records.clone())
    }
}

impl std::fmt::Debug for InMemoryInventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryInventory")
            .field("version_count", &self.version_count())
            .finish()
    }
}
