//! Content manifest format for depot.
//!
//! A manifest is a UTF-8 text file with newline-terminated records. The first
//! line is a format marker, consumed but not interpreted. Every other
//! non-blank line describes one content unit as three comma-separated fields:
//! relative path, hex digest, decimal size in bytes.
//!
//! Reading is lazy and restartable: [`Manifest::read`] returns a fresh
//! iterator over the source each time it is called, so a sync can scan the
//! same manifest twice (once for identity, once for full entries) without
//! holding it in memory.

pub mod entry;
pub mod error;
pub mod manifest;

pub use entry::Entry;
pub use error::{ManifestError, ManifestResult};
pub use manifest::{Entries, Manifest, FORMAT_MARKER};
