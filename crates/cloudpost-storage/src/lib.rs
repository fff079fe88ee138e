//! Cloudpost Storage Library
//!
//! This crate uploads local files to a cloud media provider and removes the
//! local copy afterwards. It includes the MediaProvider trait, the Cloudinary
//! implementation, and the [`Uploader`] that sequences upload and cleanup.
//!
//! # Cleanup policy
//!
//! Every upload attempt with a non-empty path is followed by exactly one
//! attempt to delete the local file, whatever the upload outcome. A missing
//! file is not an error. Any other delete failure is logged and reported next
//! to the upload outcome, never in place of it.

#[cfg(feature = "provider-cloudinary")]
pub mod cloudinary;
pub mod factory;
#[cfg(feature = "provider-cloudinary")]
pub(crate) mod signing;
pub mod traits;
pub mod uploader;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used types
#[cfg(feature = "provider-cloudinary")]
pub use cloudinary::CloudinaryProvider;
pub use cloudpost_core::ResourceType;
pub use factory::{create_provider, create_uploader};
pub use traits::{MediaProvider, ProviderError, ProviderResult, UploadOptions, UploadResponse};
pub use uploader::{Cleanup, UploadError, UploadOutcome, Uploader};
