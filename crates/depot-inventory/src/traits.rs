use depot_types::{ContentId, ContentKey, VersionHandle};

use crate::error::InventoryResult;
use crate::record::ContentRecord;

/// Read-side interface over the durable content inventory.
///
/// Implementations must be thread-safe (`Send + Sync`). The sync core only
/// ever reads through this trait; all writes belong to the host system's
/// apply engine.
pub trait InventoryStore: Send + Sync {
    /// Project every content unit of `version` to its natural key.
    ///
    /// This is deliberately a key projection, not full-record hydration:
    /// snapshotting must stay memory-light even when a version holds a very
    /// large number of content units.
    fn content_keys(&self, version: &VersionHandle) -> InventoryResult<Vec<ContentKey>>;

    /// Resolve a batch of natural keys to persisted content identifiers.
    ///
    /// One call resolves the whole batch. Keys with no match in `version` are
    /// simply absent from the result; the inventory may have changed
    /// concurrently, and that is not an error.
    fn lookup_batch(
        &self,
        version: &VersionHandle,
        keys: &[ContentKey],
    ) -> InventoryResult<Vec<ContentId>>;

    /// Enumerate the full records of `version`, in iteration order.
    ///
    /// Used by the publish side, which needs sizes as well as keys.
    fn content_records(&self, version: &VersionHandle) -> InventoryResult<Vec<ContentRecord>>;
}
