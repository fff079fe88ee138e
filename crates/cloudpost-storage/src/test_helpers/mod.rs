//! Test helpers for cloudpost-storage

pub mod log_capture;
pub mod mock_provider;

pub use log_capture::LogCapture;
pub use mock_provider::{sample_response, MockProvider};
