//! Publication side of depot.
//!
//! A publication renders one repository version as a manifest: one [`Entry`]
//! per content unit, with the digest and size the inventory recorded at sync
//! time, written through the same codec the sync side reads. Entries appear
//! in the version's content iteration order; no further ordering is
//! guaranteed.
//!
//! Like the sync core, this crate never owns lifecycle: if publication
//! fails, discarding whatever tracking record was created around it is the
//! caller's compensation.

use std::path::{Path, PathBuf};

use tracing::info;

use depot_inventory::{InventoryError, InventoryStore};
use depot_manifest::{Entry, Manifest, ManifestError};
use depot_types::VersionHandle;

/// Errors from publishing a repository version.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The version's content listing could not be read.
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// The manifest could not be written.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Result alias for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Outcome of a completed publication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishReport {
    /// Version that was published.
    pub version: VersionHandle,
    /// Entries written to the manifest.
    pub entries: usize,
    /// Where the manifest was written.
    pub manifest_path: PathBuf,
}

/// Publish `version` as a manifest at `out_path`.
///
/// Enumerates the version's content records and writes one entry each.
/// Errors propagate without compensation.
pub fn publish(
    store: &dyn InventoryStore,
    version: &VersionHandle,
    out_path: impl AsRef<Path>,
) -> PublishResult<PublishReport> {
    let out_path = out_path.as_ref();
    let records = store.content_records(version)?;
    let written = records.len();
    let entries = records
        .into_iter()
        .map(|r| Entry::new(r.key.path, r.key.digest, r.size));
    Manifest::write(out_path, entries)?;

    info!(%version, entries = written, path = %out_path.display(), "publication written");
    Ok(PublishReport {
        version: version.clone(),
        entries: written,
        manifest_path: out_path.to_path_buf(),
    })
}
