use depot_types::VersionHandle;

/// Errors from inventory store operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The requested repository version does not exist in this store.
    #[error("version not found: {0}")]
    VersionNotFound(VersionHandle),

    /// The storage backend failed.
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O error from the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
