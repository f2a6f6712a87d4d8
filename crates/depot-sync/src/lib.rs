//! Content synchronization engine for depot.
//!
//! Reconciles a repository version against a remote manifest: fetch the
//! manifest, snapshot the local inventory, set-difference the two by natural
//! key, expand the delta, and hand it to an apply engine that owns
//! persistence. All I/O goes through the [`Downloader`],
//! [`InventoryStore`](depot_inventory::InventoryStore), and [`ApplyEngine`]
//! collaborators; the reconciliation math stays synchronous.

pub mod apply;
pub mod delta;
pub mod error;
pub mod expand;
pub mod orchestrator;
pub mod snapshot;
pub mod transfer;
pub mod types;

pub use apply::{Additions, ApplyEngine, Removals};
pub use delta::Delta;
pub use error::{ApplyError, SyncError, SyncResult, TransferError};
pub use expand::{expand_additions, expand_removals, resolve_artifact_url};
pub use orchestrator::Synchronizer;
pub use snapshot::InventorySnapshot;
pub use transfer::{Downloader, FileDownloader};
pub use types::{
    Counted, PendingArtifact, PendingContent, SyncOptions, SyncReport, DEFAULT_REMOVAL_BATCH,
};
