/// Errors from reading or writing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// A content line could not be parsed. Fatal to the surrounding sync.
    #[error("malformed manifest line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// I/O error from the underlying source or destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;
