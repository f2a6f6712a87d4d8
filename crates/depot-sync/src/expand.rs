//! Re-expansion of delta decisions into concrete descriptors.
//!
//! The delta carries natural keys only. Additions re-scan the manifest for
//! the full entries behind the add keys; removals resolve remove keys to
//! persisted content identifiers through batched inventory lookups.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;
use url::Url;

use depot_inventory::InventoryStore;
use depot_manifest::{Entry, ManifestResult};
use depot_types::{ContentId, ContentKey, VersionHandle};

use crate::error::SyncResult;
use crate::types::{PendingArtifact, PendingContent};

/// Resolve an entry's relative path against the directory portion of the
/// feed URL.
///
/// The feed URL names the manifest file itself; artifacts live next to it.
/// Only the path component changes; scheme, host, and query survive.
pub fn resolve_artifact_url(feed_url: &Url, relative_path: &str) -> Url {
    let mut url = feed_url.clone();
    let dir = match feed_url.path().rfind('/') {
        Some(idx) => &feed_url.path()[..idx],
        None => "",
    };
    url.set_path(&format!("{dir}/{relative_path}"));
    url
}

/// Second manifest pass: filter `entries` to the add set and build one
/// pending content descriptor per key.
///
/// Descriptors come out in manifest order. A repeated key names the same
/// path and digest, so only the size can vary; the last occurrence supplies
/// the descriptor. A parse error ends the stream and the sync with it.
///
/// The scan holds the matched entries only, never the whole manifest.
pub fn expand_additions<'a, I>(
    entries: I,
    to_add: &'a HashSet<ContentKey>,
    feed_url: &'a Url,
) -> impl Iterator<Item = SyncResult<PendingContent>> + 'a
where
    I: IntoIterator<Item = ManifestResult<Entry>> + 'a,
{
    let mut entries = entries.into_iter();
    let mut scanned = false;
    let mut ready: VecDeque<PendingContent> = VecDeque::new();

    std::iter::from_fn(move || {
        if !scanned {
            scanned = true;
            let mut order: Vec<ContentKey> = Vec::with_capacity(to_add.len());
            let mut selected: HashMap<ContentKey, Entry> =
                HashMap::with_capacity(to_add.len());
            for entry in entries.by_ref() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(e.into())),
                };
                let key = entry.key();
                if !to_add.contains(&key) {
                    continue;
                }
                if !selected.contains_key(&key) {
                    order.push(key.clone());
                }
                selected.insert(key, entry);
            }
            ready = order
                .into_iter()
                .filter_map(|key| selected.remove(&key))
                .map(|entry| {
                    let url = resolve_artifact_url(feed_url, &entry.path);
                    PendingContent {
                        key: entry.key(),
                        artifacts: vec![PendingArtifact {
                            size: entry.size,
                            digest: entry.digest,
                            url,
                            relative_path: entry.path,
                        }],
                    }
                })
                .collect();
        }
        ready.pop_front().map(Ok)
    })
}

/// Batched resolution of remove-keys to persisted content identifiers.
///
/// Keys are chunked so that no single inventory lookup grows unbounded; one
/// store call resolves each chunk. A key the inventory no longer knows is
/// skipped silently; the listing may have changed since the delta was
/// computed, and that race is expected, not an error.
pub fn expand_removals<'a>(
    store: &'a dyn InventoryStore,
    prior: &'a VersionHandle,
    to_remove: &HashSet<ContentKey>,
    batch_size: usize,
) -> impl Iterator<Item = SyncResult<ContentId>> + 'a {
    let batch_size = batch_size.max(1);
    let keys: Vec<ContentKey> = to_remove.iter().cloned().collect();
    let mut batches: VecDeque<Vec<ContentKey>> =
        keys.chunks(batch_size).map(|chunk| chunk.to_vec()).collect();
    let mut resolved: VecDeque<ContentId> = VecDeque::new();

    std::iter::from_fn(move || loop {
        if let Some(id) = resolved.pop_front() {
            return Some(Ok(id));
        }
        let batch = batches.pop_front()?;
        match store.lookup_batch(prior, &batch) {
            Ok(ids) => {
                if ids.len() < batch.len() {
                    debug!(
                        requested = batch.len(),
                        resolved = ids.len(),
                        "some removal keys no longer in inventory, skipping"
                    );
                }
                resolved.extend(ids);
            }
            Err(e) => return Some(Err(e.into())),
        }
    })
}
