use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a persisted content unit.
///
/// The inventory store hands these out when resolving natural keys; the apply
/// engine consumes them to delete content. The core never inspects the value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(Uuid);

impl ContentId {
    /// Generate a fresh identifier (UUID v7, time-ordered).
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentId({})", self.0)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle naming one version of a repository.
///
/// Version lifecycle (creation, completion, rollback) is owned by the host
/// system; the sync core only reads a prior version's content listing and
/// contributes descriptors toward a target version.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionHandle {
    /// Name of the repository this version belongs to.
    pub repository: String,
    /// Monotonic version number within the repository.
    pub number: u64,
}

impl VersionHandle {
    /// Create a handle for `repository` at version `number`.
    pub fn new(repository: impl Into<String>, number: u64) -> Self {
        Self {
            repository: repository.into(),
            number,
        }
    }
}

impl fmt::Debug for VersionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionHandle({}@v{})", self.repository, self.number)
    }
}

impl fmt::Display for VersionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@v{}", self.repository, self.number)
    }
}
