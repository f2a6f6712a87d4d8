//! Foundation types for depot.
//!
//! Identity types used throughout the depot system: [`ContentKey`] (natural
//! identity of a content unit), [`ContentId`] (opaque identifier of a
//! persisted unit), and [`VersionHandle`] (one version of a repository).
//! Every other depot crate depends on `depot-types`.

pub mod key;
pub mod version;

pub use key::ContentKey;
pub use version::{ContentId, VersionHandle};
