use std::collections::HashSet;

use depot_inventory::InventoryStore;
use depot_types::{ContentKey, VersionHandle};

use crate::error::SyncResult;

/// The local side of the reconciliation: every natural key present in the
/// prior repository version.
///
/// Built once per sync and immutable for the sync's duration. Holding only
/// keys (never full records) keeps the snapshot memory-light even for very
/// large repositories.
#[derive(Clone, Debug, Default)]
pub struct InventorySnapshot {
    keys: HashSet<ContentKey>,
}

impl InventorySnapshot {
    /// Build a snapshot of `prior`'s content keys.
    ///
    /// `None` means this is the first sync; the snapshot is empty and that is
    /// the normal case, not an error.
    pub fn build(
        store: &dyn InventoryStore,
        prior: Option<&VersionHandle>,
    ) -> SyncResult<Self> {
        let keys = match prior {
            None => HashSet::new(),
            Some(version) => store.content_keys(version)?.into_iter().collect(),
        };
        Ok(Self { keys })
    }

    /// Whether `key` was present in the prior version.
    pub fn contains(&self, key: &ContentKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys in the snapshot.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the prior version was empty or absent.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The underlying key set.
    pub fn keys(&self) -> &HashSet<ContentKey> {
        &self.keys
    }
}

impl FromIterator<ContentKey> for InventorySnapshot {
    fn from_iter<T: IntoIterator<Item = ContentKey>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
