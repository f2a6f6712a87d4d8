use serde::{Deserialize, Serialize};
use url::Url;

use depot_types::ContentKey;

/// Default number of keys per batched removal lookup.
pub const DEFAULT_REMOVAL_BATCH: usize = 1000;

/// Intent to fetch and store one content unit. Nothing is persisted yet;
/// the apply engine owns turning this into stored content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingContent {
    /// Natural key of the unit to create.
    pub key: ContentKey,
    /// Artifacts to download and attach to the unit.
    pub artifacts: Vec<PendingArtifact>,
}

/// One downloadable artifact belonging to a pending content unit.
///
/// Size and digest come straight from the manifest, so the apply engine can
/// verify the download without a redundant remote existence check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingArtifact {
    /// Expected size in bytes.
    pub size: u64,
    /// Expected hex digest.
    pub digest: String,
    /// Where to fetch the bytes from.
    pub url: Url,
    /// Where the artifact lives relative to the repository root.
    pub relative_path: String,
}

/// How the orchestrator runs one sync.
#[derive(Clone, Debug)]
pub struct SyncOptions {
    /// Location of the remote manifest. Required; validated at sync entry.
    pub feed_url: Option<Url>,
    /// Mirror policy: when `true`, local content absent from the remote is
    /// removed; when `false`, the sync is purely additive.
    pub mirror: bool,
    /// Parse the manifest once into memory instead of re-reading the source
    /// per pass. Safe when manifest sizes are known-bounded.
    pub buffer_manifest: bool,
    /// Keys per batched removal lookup against the inventory store.
    pub removal_batch: usize,
}

impl SyncOptions {
    /// Options for a mirror sync of `feed_url` with default strategy.
    pub fn new(feed_url: Url) -> Self {
        Self {
            feed_url: Some(feed_url),
            ..Self::default()
        }
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            feed_url: None,
            mirror: true,
            buffer_manifest: false,
            removal_batch: DEFAULT_REMOVAL_BATCH,
        }
    }
}

/// Outcome summary of a completed sync.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Content units handed to the apply engine as additions.
    pub added: usize,
    /// Content units handed to the apply engine as removals.
    pub removed: usize,
}

/// Iterator wrapper carrying an exact element count.
///
/// The apply engine receives lazy streams but still needs their sizes up
/// front (for progress reporting and allocation); the delta already knows
/// both counts, so the orchestrator attaches them here.
pub struct Counted<I> {
    iter: I,
    remaining: usize,
}

impl<I> Counted<I> {
    /// Wrap `iter`, asserting it will yield exactly `len` items.
    pub fn new(iter: I, len: usize) -> Self {
        Self {
            iter,
            remaining: len,
        }
    }

    /// Items left to yield.
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Returns `true` if nothing is left to yield.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next();
        if item.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for Counted<I> {}
