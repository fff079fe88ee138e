//! Cloudpost Core Library
//!
//! This crate provides configuration and the shared provider types used by
//! the storage and CLI crates.

pub mod config;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, ProviderConfig};
pub use storage_types::ResourceType;
