//! Base64 sniffing
//!
//! Upstream producers disagree on whether certificate and key material is
//! pre-encoded. Values matching the canonical base64 shape are decoded; anything
//! else is taken as raw bytes. A raw secret that happens to be valid base64 is
//! decoded too; callers cannot opt out per value.

use crate::error::ResolveError;
use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use std::sync::LazyLock;

// Groups of four alphabet characters, last group optionally padded with one or two '='
static BASE64_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9+/]{4})*([A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)?$")
});

/// Whether `value` has the shape of standard, padded base64
pub fn looks_like_base64(value: &str) -> bool {
    match BASE64_PATTERN.as_ref() {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

/// Decode `value` if it looks like base64, otherwise return its bytes unchanged
///
/// A value that matches the pattern but fails to decode (e.g. non-zero
/// trailing bits) is an error, never a silent fallback to raw bytes.
pub fn sniff_and_decode(value: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if looks_like_base64(value) {
        general_purpose::STANDARD.decode(value)
    } else {
        Ok(value.as_bytes().to_vec())
    }
}

/// [`sniff_and_decode`] with the failing field named in the error
pub fn sniff_field(field: &'static str, value: &str) -> Result<Vec<u8>, ResolveError> {
    sniff_and_decode(value).map_err(|source| ResolveError::MalformedEncoding { field, source })
}

#[cfg(test)]
#[path = "encoding_test.rs"]
mod encoding_test;
