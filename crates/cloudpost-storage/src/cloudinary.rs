use crate::signing::sign_params;
use crate::traits::{MediaProvider, ProviderError, ProviderResult, UploadOptions, UploadResponse};
use async_trait::async_trait;
use cloudpost_core::{ProviderConfig, ResourceType};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Cloudinary upload API client
#[derive(Clone)]
pub struct CloudinaryProvider {
    http_client: Client,
    config: ProviderConfig,
}

impl Debug for CloudinaryProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CloudinaryProvider")
            .field("cloud_name", &self.config.cloud_name)
            .finish()
    }
}

impl CloudinaryProvider {
    /// Create a new CloudinaryProvider instance
    ///
    /// The HTTP client is built once and reused for every upload.
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Upload endpoint: {api_base_url}/{cloud_name}/{resource_type}/upload
    fn upload_url(&self, resource_type: ResourceType) -> String {
        format!(
            "{}/{}/{}/upload",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name,
            resource_type.as_str()
        )
    }

    fn signed_params(&self, options: &UploadOptions) -> Vec<(&'static str, String)> {
        let mut params = vec![("timestamp", chrono::Utc::now().timestamp().to_string())];

        if let Some(folder) = options.folder.as_ref().filter(|f| !f.is_empty()) {
            params.push(("folder", folder.clone()));
        }

        params
    }
}

/// Pull `error.message` out of a provider error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                "Unknown error".to_string()
            } else {
                body.chars().take(300).collect()
            }
        })
}

#[async_trait]
impl MediaProvider for CloudinaryProvider {
    async fn upload(&self, path: &Path, options: &UploadOptions) -> ProviderResult<UploadResponse> {
        let start = std::time::Instant::now();

        let data = fs::read(path).await?;
        let size = data.len();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let params = self.signed_params(options);
        let signature = sign_params(&params, &self.config.api_secret);

        let mut form = Form::new()
            .part("file", Part::bytes(data).file_name(filename))
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);
        for (name, value) in params {
            form = form.text(name, value);
        }

        let url = self.upload_url(options.resource_type);
        let response = self.http_client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = error_message(&body);

            tracing::warn!(
                status = status.as_u16(),
                error = %message,
                path = %path.display(),
                "Cloudinary upload rejected"
            );

            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let uploaded: UploadResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            path = %path.display(),
            public_id = %uploaded.public_id,
            resource_type = uploaded.resource_type.as_deref().unwrap_or("unknown"),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Cloudinary upload successful"
        );

        Ok(uploaded)
    }

    fn name(&self) -> &str {
        "cloudinary"
    }
}
