//! Short code generation and validation utilities.
//!
//! Codes are derived from the long URL itself: the SHA-256 digest of the URL
//! is truncated to [`HASH_PREFIX_BYTES`] bytes and encoded as URL-safe base64
//! without padding. Equal URLs always produce equal codes, so resubmitting a
//! URL finds its existing mapping.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept before encoding. 6 bytes encode to exactly
/// 8 base64 characters, so no padding is ever produced.
pub const HASH_PREFIX_BYTES: usize = 6;

/// Length of every generated code.
pub const GENERATED_CODE_LENGTH: usize = 8;

/// Maximum length of a caller-supplied code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Codes that would shadow a route.
pub const RESERVED_CODES: &[&str] = &["stats", "health"];

/// Separator between the URL and the attempt counter in perturbed inputs.
/// A NUL byte never occurs in a valid URL.
const ATTEMPT_SEPARATOR: char = '\0';

/// Derives the short code for `long_url` on the given collision `attempt`.
///
/// Attempt 0 hashes the URL as-is. Later attempts hash the URL followed by
/// a separator and the attempt number, which yields an unrelated but still
/// deterministic code.
///
/// # Examples
///
/// ```
/// use hashlink::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("https://example.com/page", 0), "NkHF8idM");
/// assert_eq!(generate_code("https://example.com/page", 1), "9CZa9FPa");
/// ```
pub fn generate_code(long_url: &str, attempt: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(long_url.as_bytes());
    if attempt > 0 {
        hasher.update(format!("{ATTEMPT_SEPARATOR}{attempt}").as_bytes());
    }
    let digest = hasher.finalize();

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..HASH_PREFIX_BYTES])
}

/// Validates a caller-supplied custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_` (the same
///   alphabet generated codes use)
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
