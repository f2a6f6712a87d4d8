//! Error taxonomy for a sync run.
//!
//! Every variant is fatal to the attempt: the orchestrator propagates rather
//! than retries, and compensating for a half-built version is the caller's
//! job. The one benign exception, a removal key missing from the inventory
//! at expansion time, never surfaces here at all.

use thiserror::Error;

use depot_inventory::InventoryError;
use depot_manifest::ManifestError;

/// Errors that can end a sync attempt.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The sync was started without a usable remote feed location.
    /// Surfaced before any state is touched; there is nothing to retry.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The downloaded manifest could not be parsed.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The manifest could not be downloaded.
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),

    /// The inventory store failed while snapshotting or resolving removals.
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// The apply engine rejected or failed the delta as a whole.
    #[error("apply error: {0}")]
    Apply(#[from] ApplyError),

    /// I/O error outside the collaborators.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Download failure from the remote feed.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The downloader does not handle this URL scheme.
    #[error("unsupported URL scheme {scheme:?} for {url}")]
    UnsupportedScheme { scheme: String, url: String },

    /// The fetch itself failed (network, missing file, permission).
    #[error("download failed for {url}: {reason}")]
    Failed { url: String, reason: String },

    /// I/O error from the transfer layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reported by the apply engine for the delta as a whole.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct ApplyError {
    reason: String,
}

impl ApplyError {
    /// Wrap a failure reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
