#[cfg(feature = "provider-cloudinary")]
use crate::CloudinaryProvider;
use crate::{MediaProvider, ProviderError, ProviderResult, UploadOptions, Uploader};
use cloudpost_core::Config;
use std::sync::Arc;

/// Create a media provider based on configuration
pub fn create_provider(config: &Config) -> ProviderResult<Arc<dyn MediaProvider>> {
    config
        .validate()
        .map_err(|e| ProviderError::ConfigError(e.to_string()))?;

    #[cfg(feature = "provider-cloudinary")]
    {
        let provider = CloudinaryProvider::new(config.provider.clone())?;
        Ok(Arc::new(provider))
    }

    #[cfg(not(feature = "provider-cloudinary"))]
    {
        Err(ProviderError::ConfigError(
            "Cloudinary provider not available (provider-cloudinary feature not enabled)"
                .to_string(),
        ))
    }
}

/// Create an uploader using the configured provider and upload defaults
pub fn create_uploader(config: &Config) -> ProviderResult<Uploader> {
    let provider = create_provider(config)?;

    let mut options = UploadOptions::default().with_resource_type(config.default_resource_type());
    if let Some(folder) = config.upload_folder() {
        options = options.with_folder(folder);
    }

    tracing::debug!(
        cloud_name = %config.cloud_name(),
        resource_type = %options.resource_type,
        folder = options.folder.as_deref().unwrap_or(""),
        "Uploader configured"
    );

    Ok(Uploader::new(provider).with_options(options))
}
