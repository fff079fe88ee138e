//! Upload-and-discard
//!
//! The uploader sends a local file to the media provider and then removes the
//! local copy. Cleanup is attempted exactly once whether or not the upload
//! succeeded, and a cleanup problem never replaces the upload outcome:
//!
//! - the file being already gone is not an error (logged at debug level)
//! - any other delete failure is logged and reported through [`Cleanup::Failed`]

use crate::traits::{MediaProvider, ProviderError, UploadOptions, UploadResponse};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;

/// What happened to the local file after the upload attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleanup {
    Removed,
    AlreadyMissing,
    Failed(String),
}

/// A successful upload and the fate of the local copy
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub response: UploadResponse,
    pub cleanup: Cleanup,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload failed: {source}")]
    UploadFailed {
        #[source]
        source: ProviderError,
        cleanup: Cleanup,
    },
}

impl UploadError {
    /// Cleanup outcome, if a cleanup was attempted
    pub fn cleanup(&self) -> Option<&Cleanup> {
        match self {
            UploadError::InvalidInput(_) => None,
            UploadError::UploadFailed { cleanup, .. } => Some(cleanup),
        }
    }
}

/// Uploads local files to a [`MediaProvider`] and deletes them afterwards
#[derive(Clone)]
pub struct Uploader {
    provider: Arc<dyn MediaProvider>,
    options: UploadOptions,
}

impl Debug for Uploader {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Uploader")
            .field("provider", &self.provider.name())
            .field("options", &self.options)
            .finish()
    }
}

impl Uploader {
    /// Create an uploader with default options (resource type `auto`, no folder)
    pub fn new(provider: Arc<dyn MediaProvider>) -> Self {
        Self {
            provider,
            options: UploadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UploadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &UploadOptions {
        &self.options
    }

    /// Upload `local_file_path`, then delete it.
    ///
    /// An empty path is rejected before anything is touched. File existence is
    /// not checked up front; a missing file surfaces as a provider error.
    pub async fn upload(&self, local_file_path: &str) -> Result<UploadOutcome, UploadError> {
        if local_file_path.is_empty() {
            tracing::error!("No file path provided for upload");
            return Err(UploadError::InvalidInput(
                "No file path provided for upload".to_string(),
            ));
        }

        let path = Path::new(local_file_path);
        let start = std::time::Instant::now();

        match self.provider.upload(path, &self.options).await {
            Ok(response) => {
                let cleanup = remove_local_file(path).await;
                if let Cleanup::Failed(ref reason) = cleanup {
                    tracing::warn!(
                        path = %path.display(),
                        public_id = %response.public_id,
                        error = %reason,
                        "Upload succeeded but the local file could not be deleted"
                    );
                }

                tracing::info!(
                    provider = self.provider.name(),
                    path = %path.display(),
                    public_id = %response.public_id,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Upload complete"
                );

                Ok(UploadOutcome { response, cleanup })
            }
            Err(source) => {
                tracing::error!(
                    provider = self.provider.name(),
                    path = %path.display(),
                    error = %source,
                    "Upload failed"
                );

                let cleanup = remove_local_file(path).await;
                if let Cleanup::Failed(ref reason) = cleanup {
                    tracing::error!(
                        path = %path.display(),
                        error = %reason,
                        "Failed to delete local file"
                    );
                }

                Err(UploadError::UploadFailed { source, cleanup })
            }
        }
    }

    /// Same as [`Uploader::upload`], collapsing every failure to `None`.
    ///
    /// Failures are already logged by `upload`; callers that need to know
    /// which failure occurred should use `upload` instead.
    pub async fn upload_or_none(&self, local_file_path: &str) -> Option<UploadResponse> {
        self.upload(local_file_path)
            .await
            .ok()
            .map(|outcome| outcome.response)
    }
}

/// Delete the local copy. A missing file is not treated as a failure.
async fn remove_local_file(path: &Path) -> Cleanup {
    match fs::remove_file(path).await {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Local file deleted");
            Cleanup::Removed
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Local file already gone");
            Cleanup::AlreadyMissing
        }
        Err(e) => Cleanup::Failed(e.to_string()),
    }
}
