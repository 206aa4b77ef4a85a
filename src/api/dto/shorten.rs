//! DTOs for the submission endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Submitted form fields.
///
/// Accepted as `application/x-www-form-urlencoded` or JSON. Only the custom
/// code size is checked here; URL syntax and length, and custom code rules,
/// are enforced by [`crate::application::services::LinkService::shorten`].
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub long_url: String,

    /// Optional caller-chosen short code. Blank means "generate one".
    #[serde(default)]
    #[validate(length(max = 256))]
    pub custom_code: Option<String>,
}

/// Successful submission.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
}
