use serde::{Deserialize, Serialize};

use depot_types::ContentKey;

/// One record of a remote content listing. Immutable once read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Relative path of the content unit, unique within the manifest.
    pub path: String,
    /// Hex-encoded content digest.
    pub digest: String,
    /// Size of the content in bytes.
    pub size: u64,
}

impl Entry {
    /// Create an entry.
    pub fn new(path: impl Into<String>, digest: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            digest: digest.into(),
            size,
        }
    }

    /// The natural key of this entry.
    pub fn key(&self) -> ContentKey {
        ContentKey::new(self.path.clone(), self.digest.clone())
    }
}
