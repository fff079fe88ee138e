//! Mock MediaProvider implementation for testing

use crate::traits::{MediaProvider, ProviderError, ProviderResult, UploadOptions, UploadResponse};
use async_trait::async_trait;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

enum Behavior {
    Succeed(UploadResponse),
    /// Read the file first so a missing path fails the way a real provider would
    ReadThenSucceed(UploadResponse),
    Fail(String),
    /// Delete the local file before failing, as if it vanished mid-upload
    RemoveThenFail(String),
}

/// Mock provider that records every call and answers with a canned behavior
pub struct MockProvider {
    behavior: Behavior,
    calls: Mutex<Vec<(PathBuf, UploadOptions)>>,
}

impl MockProvider {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(response: UploadResponse) -> Self {
        Self::with_behavior(Behavior::Succeed(response))
    }

    pub fn reading_file(response: UploadResponse) -> Self {
        Self::with_behavior(Behavior::ReadThenSucceed(response))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_behavior(Behavior::Fail(message.to_string()))
    }

    pub fn removing_then_failing(message: &str) -> Self {
        Self::with_behavior(Behavior::RemoveThenFail(message.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn last_options(&self) -> Option<UploadOptions> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(_, options)| options.clone())
    }
}

#[async_trait]
impl MediaProvider for MockProvider {
    async fn upload(&self, path: &Path, options: &UploadOptions) -> ProviderResult<UploadResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_path_buf(), options.clone()));

        match &self.behavior {
            Behavior::Succeed(response) => Ok(response.clone()),
            Behavior::ReadThenSucceed(response) => {
                tokio::fs::read(path).await?;
                Ok(response.clone())
            }
            Behavior::Fail(message) => Err(ProviderError::UploadFailed(message.clone())),
            Behavior::RemoveThenFail(message) => {
                let _ = std::fs::remove_file(path);
                Err(ProviderError::UploadFailed(message.clone()))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// A provider response shaped like a real image upload
pub fn sample_response(public_id: &str) -> UploadResponse {
    let mut extra = serde_json::Map::new();
    extra.insert("asset_id".to_string(), json!("b5e6d2b39ba3e0869d67141ba7dba6cf"));
    extra.insert("tags".to_string(), json!([]));

    UploadResponse {
        public_id: public_id.to_string(),
        secure_url: format!("https://res.cloudinary.com/demo/image/upload/{}.png", public_id),
        url: Some(format!("http://res.cloudinary.com/demo/image/upload/{}.png", public_id)),
        resource_type: Some("image".to_string()),
        bytes: Some(1024),
        etag: Some("d41d8cd98f00b204e9800998ecf8427e".to_string()),
        format: Some("png".to_string()),
        version: Some(1_700_000_000),
        created_at: Some("2023-11-14T22:13:20Z".to_string()),
        width: Some(64),
        height: Some(64),
        original_filename: Some(public_id.to_string()),
        extra,
    }
}
