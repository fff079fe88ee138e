use cloudpost_storage::{Cleanup, UploadOutcome};
use serde::Serialize;
use std::path::PathBuf;

/// One line of CLI output per uploaded file.
#[derive(Debug, Serialize)]
pub struct UploadReport<'a> {
    pub file: &'a str,
    pub public_id: &'a str,
    pub secure_url: &'a str,
    pub resource_type: Option<&'a str>,
    pub bytes: Option<u64>,
    pub local_copy: &'static str,
}

impl<'a> UploadReport<'a> {
    pub fn new(file: &'a str, outcome: &'a UploadOutcome) -> Self {
        Self {
            file,
            public_id: &outcome.response.public_id,
            secure_url: &outcome.response.secure_url,
            resource_type: outcome.response.resource_type.as_deref(),
            bytes: outcome.response.bytes,
            local_copy: cleanup_label(&outcome.cleanup),
        }
    }
}

/// Short label for what happened to the local file.
pub fn cleanup_label(cleanup: &Cleanup) -> &'static str {
    match cleanup {
        Cleanup::Removed => "deleted",
        Cleanup::AlreadyMissing => "already gone",
        Cleanup::Failed(_) => "kept (delete failed)",
    }
}

/// Convert command-line paths to the `&str` form the uploader takes.
///
/// Fails on the first path that is not valid UTF-8 so that nothing is uploaded
/// (or deleted) under a mangled name.
pub fn utf8_paths(files: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    files
        .iter()
        .map(|file| match file.to_str() {
            Some(path) => Ok(path.to_string()),
            None => anyhow::bail!(
                "File path is not valid UTF-8, nothing was uploaded: {}",
                file.display()
            ),
        })
        .collect()
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
