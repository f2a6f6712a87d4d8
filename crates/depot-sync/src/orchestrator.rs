//! The sync orchestrator.
//!
//! Sequences one sync run through its linear phases: fetch manifest →
//! snapshot inventory → compute delta → expand → apply. Any failure exits
//! the run; there is no retry and no rollback here. The caller owns the
//! target version's lifecycle and must discard it if the run fails, so no
//! partial version is ever visible as complete.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use depot_inventory::InventoryStore;
use depot_manifest::{Entry, Manifest, ManifestResult};
use depot_types::VersionHandle;

use crate::apply::{Additions, ApplyEngine, Removals};
use crate::delta::Delta;
use crate::error::{SyncError, SyncResult};
use crate::expand::{expand_additions, expand_removals};
use crate::snapshot::InventorySnapshot;
use crate::transfer::Downloader;
use crate::types::{Counted, SyncOptions, SyncReport};

/// Sequences one full sync against a repository.
///
/// All collaborators are supplied explicitly at construction; the
/// orchestrator holds no ambient or process-global state.
pub struct Synchronizer {
    downloader: Arc<dyn Downloader>,
    inventory: Arc<dyn InventoryStore>,
    apply: Arc<dyn ApplyEngine>,
}

impl Synchronizer {
    /// Create an orchestrator over the three collaborators.
    pub fn new(
        downloader: Arc<dyn Downloader>,
        inventory: Arc<dyn InventoryStore>,
        apply: Arc<dyn ApplyEngine>,
    ) -> Self {
        Self {
            downloader,
            inventory,
            apply,
        }
    }

    /// Run one sync: reconcile `target` against the remote manifest.
    ///
    /// `prior` is the latest complete version, or `None` on the first sync.
    /// Returns how many additions and removals were handed to the apply
    /// engine. Errors propagate without compensation; deleting a half-built
    /// `target` is the caller's job.
    pub async fn run(
        &self,
        options: &SyncOptions,
        prior: Option<&VersionHandle>,
        target: &VersionHandle,
    ) -> SyncResult<SyncReport> {
        let feed_url = options
            .feed_url
            .clone()
            .ok_or_else(|| SyncError::Configuration("a sync requires a feed URL".to_string()))?;

        info!(%target, feed = %feed_url, mirror = options.mirror, "starting sync");

        // Determine what is available remotely.
        let manifest_path = self.downloader.fetch(&feed_url).await?;
        let manifest = Manifest::open(manifest_path);

        // Determine what is already in the repository.
        let snapshot = InventorySnapshot::build(self.inventory.as_ref(), prior)?;
        debug!(local = snapshot.len(), "inventory snapshot built");

        if options.buffer_manifest {
            // Single parse, entries held in memory for both uses.
            let entries: Vec<Entry> = manifest.read()?.collect::<ManifestResult<_>>()?;
            let delta = Delta::compute(entries.iter().map(Entry::key), &snapshot, options.mirror);
            self.apply_delta(entries.into_iter().map(Ok), &feed_url, delta, prior, target, options)
                .await
        } else {
            // First pass: identity only. Holding just the natural keys keeps
            // memory bounded for arbitrarily large manifests.
            let mut remote_keys = HashSet::new();
            for entry in manifest.read()? {
                remote_keys.insert(entry?.key());
            }
            let delta = Delta::compute(remote_keys, &snapshot, options.mirror);
            // Second pass re-opens the source for the full entries.
            self.apply_delta(manifest.read()?, &feed_url, delta, prior, target, options)
                .await
        }
    }

    async fn apply_delta<I>(
        &self,
        entries: I,
        feed_url: &Url,
        delta: Delta,
        prior: Option<&VersionHandle>,
        target: &VersionHandle,
        options: &SyncOptions,
    ) -> SyncResult<SyncReport>
    where
        I: IntoIterator<Item = ManifestResult<Entry>>,
        I::IntoIter: Send,
    {
        let added = delta.to_add.len();
        let removed = delta.to_remove.len();
        debug!(add = added, remove = removed, "delta computed");

        let additions: Additions<'_> = Counted::new(
            Box::new(expand_additions(entries, &delta.to_add, feed_url)),
            added,
        );
        let removals: Removals<'_> = match prior {
            // A non-empty remove set implies a prior version existed.
            Some(version) if removed > 0 => Counted::new(
                Box::new(expand_removals(
                    self.inventory.as_ref(),
                    version,
                    &delta.to_remove,
                    options.removal_batch,
                )),
                removed,
            ),
            _ => Counted::new(Box::new(std::iter::empty()), 0),
        };

        self.apply.apply(target, additions, removals).await?;
        info!(added, removed, "sync applied");
        Ok(SyncReport { added, removed })
    }
}
