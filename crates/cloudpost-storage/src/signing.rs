//! Request signing for the provider upload API.
//!
//! The string to sign is every signed parameter sorted by name, joined as
//! `name=value&name=value`, with the API secret appended. The signature is the
//! lowercase hex SHA-1 of that string. `file`, `api_key`, `cloud_name` and
//! `resource_type` are never part of it.

use sha1::{Digest, Sha1};

const UNSIGNED_PARAMS: [&str; 4] = ["file", "api_key", "cloud_name", "resource_type"];

/// Build the canonical string to sign. Empty values are skipped.
pub fn string_to_sign(params: &[(&str, String)]) -> String {
    let mut signed: Vec<&(&str, String)> = params
        .iter()
        .filter(|(name, value)| !value.is_empty() && !UNSIGNED_PARAMS.contains(name))
        .collect();
    signed.sort_by(|a, b| a.0.cmp(b.0));

    signed
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sign upload parameters with the account's API secret.
pub fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
