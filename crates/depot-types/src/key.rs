use std::fmt;

use serde::{Deserialize, Serialize};

/// Natural identity of one content unit: relative path plus content digest.
///
/// Keys are pure values: equality and hashing depend only on the two fields,
/// and both must match for two keys to be equal. Two entries with the same
/// path but different digests are distinct keys; a content update is modeled
/// as remove-old plus add-new, never as an in-place mutation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentKey {
    /// Relative path of the content unit, unique within one manifest.
    pub path: String,
    /// Hex-encoded content digest (e.g. SHA-256).
    pub digest: String,
}

impl ContentKey {
    /// Create a key from a path and digest.
    pub fn new(path: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            digest: digest.into(),
        }
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({}@{})", self.path, short_digest(&self.digest))
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.path, short_digest(&self.digest))
    }
}

fn short_digest(digest: &str) -> &str {
    digest.get(..8).unwrap_or(digest)
}
