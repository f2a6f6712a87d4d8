use serde::{Deserialize, Serialize};

use depot_types::{ContentId, ContentKey};

/// One persisted content unit as the inventory store sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Opaque identifier of the persisted unit.
    pub id: ContentId,
    /// Natural key of the unit.
    pub key: ContentKey,
    /// Size of the unit's artifact in bytes.
    pub size: u64,
}

impl ContentRecord {
    /// Create a record with a freshly generated identifier.
    pub fn new(key: ContentKey, size: u64) -> Self {
        Self {
            id: ContentId::generate(),
            key,
            size,
        }
    }
}
