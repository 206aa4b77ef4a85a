//! Link entity representing a shortened URL mapping.

/// A short code and the long URL it resolves to.
///
/// Codes are case-sensitive. Once stored, a mapping is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
}

impl Link {
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}

/// Visit statistics for a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub code: String,
    pub long_url: String,
    pub clicks: u64,
}

/// Result of shortening a URL.
///
/// `created` is `false` when an identical mapping already existed and was
/// handed back instead of writing a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub link: Link,
    pub created: bool,
}

impl ShortenOutcome {
    pub fn created(link: Link) -> Self {
        Self {
            link,
            created: true,
        }
    }

    pub fn reused(link: Link) -> Self {
        Self {
            link,
            created: false,
        }
    }
}
