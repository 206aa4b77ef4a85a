//! Syntactic validation of submitted URLs.
//!
//! The submitted text is stored exactly as given; this module only decides
//! whether it is acceptable.

use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http`/`https` URL with a host.
///
/// Rejects `javascript:`, `data:`, `file:` and other schemes, relative
/// references, and text that does not parse as a URL.
///
/// The input is stored and later sent back verbatim in `Location`, so it
/// must not contain whitespace or control characters, which `Url::parse`
/// would otherwise strip silently.
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] that applies.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if let Some(c) = input
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        return Err(UrlValidationError::InvalidFormat(format!(
            "URL contains forbidden character {:?}",
            c
        )));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/page?x=1#top").is_ok());
        assert!(validate_url("https://127.0.0.1:8080/").is_ok());
        assert!(validate_url("https://[::1]/path").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(validate_url(&url), Err(UrlValidationError::TooLong));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("example.com/page"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for url in [
            "javascript:alert(1)",
            "data:text/html,hi",
            "file:///etc/passwd",
            "ftp://example.com/file",
        ] {
            assert_eq!(
                validate_url(url),
                Err(UrlValidationError::UnsupportedProtocol),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_whitespace_and_control_characters() {
        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/a\rb",
            " https://example.com/lead",
            "https://example.com/trail ",
            "https://example.com/a b",
            "https://example.com/\u{0}",
            "https://example.com/\u{7f}",
        ] {
            assert!(
                matches!(validate_url(url), Err(UrlValidationError::InvalidFormat(_))),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepted_url_is_a_valid_header_value() {
        let url = "https://example.com/path?q=%20x&y=1#frag";
        assert!(validate_url(url).is_ok());
        assert!(axum::http::HeaderValue::try_from(url).is_ok());
    }
}
