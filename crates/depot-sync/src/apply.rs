use async_trait::async_trait;

use depot_types::{ContentId, VersionHandle};

use crate::error::{ApplyError, SyncResult};
use crate::types::{Counted, PendingContent};

/// Counted lazy stream of addition descriptors. Fallible mid-stream: the
/// second manifest pass may hit a malformed line.
pub type Additions<'a> = Counted<Box<dyn Iterator<Item = SyncResult<PendingContent>> + Send + 'a>>;

/// Counted lazy stream of removal identifiers. The count is an upper bound;
/// keys lost to a concurrent inventory change resolve to nothing.
pub type Removals<'a> = Counted<Box<dyn Iterator<Item = SyncResult<ContentId>> + Send + 'a>>;

/// Apply engine collaborator: persists one sync's delta.
///
/// Owns all real side effects (downloading, storing, deleting) and reports
/// success or failure for the delta as a whole.
#[async_trait]
pub trait ApplyEngine: Send + Sync {
    /// Drain both streams against `target`. On failure the half-built
    /// version is the caller's to discard.
    async fn apply(
        &self,
        target: &VersionHandle,
        additions: Additions<'_>,
        removals: Removals<'_>,
    ) -> Result<(), ApplyError>;
}
