//! Media provider abstraction trait
//!
//! This module defines the MediaProvider trait that all upload backends must implement,
//! along with the request options and the response shape returned by the provider.

use async_trait::async_trait;
use cloudpost_core::ResourceType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Provider operation errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider error: {0}")]
    UploadFailed(String),

    #[error("Provider rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[cfg(feature = "provider-cloudinary")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Per-request upload options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// `Auto` lets the provider detect image, video or raw.
    pub resource_type: ResourceType,
    /// Remote folder to place the asset in
    pub folder: Option<String>,
}

impl UploadOptions {
    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

/// Provider response for a stored asset
///
/// Well-known fields are typed; everything else the provider sends is kept
/// in `extra` so the response can be handed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Media provider trait
///
/// The uploader talks to the remote service only through this trait, so a
/// provider can be swapped (or mocked in tests) without touching the cleanup logic.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Upload the file at `path` and return the provider's description of the stored asset
    async fn upload(&self, path: &Path, options: &UploadOptions) -> ProviderResult<UploadResponse>;

    /// Short provider name used in logs
    fn name(&self) -> &str;
}
