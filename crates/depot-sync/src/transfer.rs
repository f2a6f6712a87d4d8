use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::TransferError;

/// Downloader collaborator: fetches a URL to a local file.
///
/// The orchestrator treats any failure as fatal to the sync attempt. Retry
/// policy, if any, belongs inside the downloader or the host system's task
/// scheduling, never in the sync core.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Fetch `url` and return the local path of the downloaded bytes.
    async fn fetch(&self, url: &Url) -> Result<PathBuf, TransferError>;
}

/// Downloader for `file://` feeds.
///
/// Serves local mirrors and tests; network schemes belong to the host
/// system's downloader.
#[derive(Debug, Default)]
pub struct FileDownloader;

impl FileDownloader {
    /// Create a file downloader.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Downloader for FileDownloader {
    async fn fetch(&self, url: &Url) -> Result<PathBuf, TransferError> {
        if url.scheme() != "file" {
            return Err(TransferError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                url: url.to_string(),
            });
        }
        let path = url.to_file_path().map_err(|_| TransferError::Failed {
            url: url.to_string(),
            reason: "URL does not name a local file path".to_string(),
        })?;
        tokio::fs::metadata(&path)
            .await
            .map_err(|e| TransferError::Failed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        debug!(%url, path = %path.display(), "resolved file feed");
        Ok(path)
    }
}
