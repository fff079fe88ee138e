//! Configuration module
//!
//! Provider credentials and upload defaults are read once at process startup
//! and handed to the storage factory. Nothing here is global.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::storage_types::ResourceType;

const API_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
const UPLOAD_TIMEOUT_SECS: u64 = 120;

/// Credentials and endpoint for the media provider
#[derive(Clone)]
pub struct ProviderConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Versioned API root, without the cloud name (e.g. "https://api.cloudinary.com/v1_1")
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base_url: API_BASE_URL.to_string(),
            timeout_secs: UPLOAD_TIMEOUT_SECS,
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProviderConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub provider: ProviderConfig,
    pub default_resource_type: ResourceType,
    pub upload_folder: Option<String>,
    pub environment: String,
}

impl Config {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            default_resource_type: ResourceType::Auto,
            upload_folder: None,
            environment: "development".to_string(),
        }
    }

    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cloud_name =
            get("CLOUD_NAME").ok_or_else(|| anyhow::anyhow!("CLOUD_NAME must be set"))?;
        let api_key =
            get("CLOUD_API_KEY").ok_or_else(|| anyhow::anyhow!("CLOUD_API_KEY must be set"))?;
        let api_secret = get("CLOUD_API_SECRET")
            .ok_or_else(|| anyhow::anyhow!("CLOUD_API_SECRET must be set"))?;

        let timeout_secs = match get("CLOUD_UPLOAD_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!("CLOUD_UPLOAD_TIMEOUT_SECS must be a valid number")
            })?,
            None => UPLOAD_TIMEOUT_SECS,
        };

        let default_resource_type = match get("CLOUD_RESOURCE_TYPE") {
            Some(raw) => raw.parse()?,
            None => ResourceType::Auto,
        };

        let provider = ProviderConfig {
            cloud_name: cloud_name.trim().to_string(),
            api_key: api_key.trim().to_string(),
            api_secret: api_secret.trim().to_string(),
            api_base_url: get("CLOUD_API_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| API_BASE_URL.to_string()),
            timeout_secs,
        };

        Ok(Config {
            provider,
            default_resource_type,
            upload_folder: get("CLOUD_UPLOAD_FOLDER").map(|f| f.trim().to_string()),
            environment: get("ENVIRONMENT")
                .or_else(|| get("APP_ENV"))
                .unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let provider = &self.provider;

        if provider.cloud_name.trim().is_empty() {
            return Err(anyhow::anyhow!("CLOUD_NAME must not be empty"));
        }

        if provider.cloud_name.contains('/') {
            return Err(anyhow::anyhow!("CLOUD_NAME must not contain '/'"));
        }

        if provider.api_key.trim().is_empty() || provider.api_secret.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "CLOUD_API_KEY and CLOUD_API_SECRET must not be empty"
            ));
        }

        if !provider.api_base_url.starts_with("https://")
            && !provider.api_base_url.starts_with("http://")
        {
            return Err(anyhow::anyhow!(
                "CLOUD_API_BASE_URL must be an http(s) URL, got {}",
                provider.api_base_url
            ));
        }

        if self.is_production() && provider.api_base_url.starts_with("http://") {
            return Err(anyhow::anyhow!(
                "CLOUD_API_BASE_URL must use https in production"
            ));
        }

        if provider.timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "CLOUD_UPLOAD_TIMEOUT_SECS must be greater than zero"
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn cloud_name(&self) -> &str {
        &self.provider.cloud_name
    }

    pub fn api_base_url(&self) -> &str {
        &self.provider.api_base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.provider.timeout_secs
    }

    pub fn default_resource_type(&self) -> ResourceType {
        self.default_resource_type
    }

    pub fn upload_folder(&self) -> Option<&str> {
        self.upload_folder.as_deref()
    }
}
