//! Host extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Returns the `Host` header, port included.
///
/// Used to compose short URLs when no public base URL is configured, so the
/// returned link points back at the address the client used.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the header is missing, not valid
/// UTF-8, or empty.
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Invalid Host header", json!({})));
    }

    Ok(host.to_string())
}
