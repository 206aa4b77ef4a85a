//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, ShortenOutcome};
use crate::domain::repositories::{MappingStore, PutOutcome};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{debug, info};

/// Number of codes tried per URL before giving up on collisions.
pub const MAX_ATTEMPTS: u32 = 10;

/// Service for assigning short codes and resolving them.
///
/// Every write is a single conditional store call, so two concurrent
/// submissions can never overwrite each other's mapping.
pub struct LinkService {
    store: Arc<dyn MappingStore>,
}

impl LinkService {
    /// Creates a new link service over the given store.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Assigns a short code to `long_url`.
    ///
    /// A non-blank `custom_code` is validated and claimed as-is. Otherwise the
    /// code is derived from the URL hash; see [`Self::claim_generated_code`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the custom code is invalid.
    ///
    /// Returns [`AppError::Conflict`] if the custom code is already taken. The
    /// existing mapping is left untouched.
    ///
    /// Returns [`AppError::Internal`] if no free code is found or the store fails.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortenOutcome, AppError> {
        validate_url(long_url).map_err(|e| {
            AppError::bad_request(
                "Invalid URL. Please enter a valid URL.",
                json!({ "reason": e.to_string() }),
            )
        })?;

        match custom_code.map(str::trim).filter(|code| !code.is_empty()) {
            Some(code) => self.claim_custom_code(code, long_url).await,
            None => self.claim_generated_code(long_url).await,
        }
    }

    async fn claim_custom_code(
        &self,
        code: &str,
        long_url: &str,
    ) -> Result<ShortenOutcome, AppError> {
        validate_custom_code(code)?;

        match self.store.put_if_absent(code, long_url).await? {
            PutOutcome::Created => {
                info!("Created custom code {} -> {}", code, long_url);
                Ok(ShortenOutcome::created(Link::new(code, long_url)))
            }
            PutOutcome::AlreadyExists => Err(AppError::conflict(
                "Custom short code already exists. Please choose another one.",
                json!({ "code": code }),
            )),
        }
    }

    /// Claims the hash-derived code for `long_url`, retrying on collision.
    ///
    /// Attempt `n` uses [`generate_code`]`(long_url, n)`. When the candidate is
    /// taken by the same URL that mapping is reused; when it is taken by a
    /// different URL the next attempt is tried. The stored value is always
    /// `long_url` itself.
    async fn claim_generated_code(&self, long_url: &str) -> Result<ShortenOutcome, AppError> {
        for attempt in 0..MAX_ATTEMPTS {
            let code = generate_code(long_url, attempt);

            match self.store.put_if_absent(&code, long_url).await? {
                PutOutcome::Created => {
                    info!("Created code {} -> {} (attempt {})", code, long_url, attempt);
                    return Ok(ShortenOutcome::created(Link::new(code, long_url)));
                }
                PutOutcome::AlreadyExists => match self.store.get(&code).await? {
                    Some(existing) if existing == long_url => {
                        debug!("Reusing code {} for {}", code, long_url);
                        return Ok(ShortenOutcome::reused(Link::new(code, long_url)));
                    }
                    _ => {
                        debug!("Code {} collides, retrying (attempt {})", code, attempt);
                    }
                },
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves `code` and counts the visit.
    ///
    /// The click counter is only incremented when the code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches the code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self.get_link_by_code(code).await?;

        let clicks = self.store.increment_clicks(code).await?;
        debug!("Code {} visited, {} clicks", code, clicks);

        Ok(link)
    }

    /// Retrieves a mapping by its short code without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches the code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.store
            .get(code)
            .await?
            .map(|long_url| Link::new(code, long_url))
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Composes the public short URL from a base URL and a code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Checks whether the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockMappingStore, StoreError};

    const URL: &str = "https://example.com/page";
    const CODE_0: &str = "NkHF8idM";
    const CODE_1: &str = "9CZa9FPa";

    fn service(store: MockMappingStore) -> LinkService {
        LinkService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_shorten_generates_hash_code() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .withf(|code, url| code == CODE_0 && url == URL)
            .times(1)
            .returning(|_, _| Ok(PutOutcome::Created));

        let outcome = service(store).shorten(URL, None).await.unwrap();

        assert!(outcome.created);
        assert_eq!(outcome.link, Link::new(CODE_0, URL));
    }

    #[tokio::test]
    async fn test_shorten_blank_custom_code_is_ignored() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .withf(|code, _| code == CODE_0)
            .times(1)
            .returning(|_, _| Ok(PutOutcome::Created));

        let outcome = service(store).shorten(URL, Some("   ")).await.unwrap();

        assert_eq!(outcome.link.code, CODE_0);
    }

    #[tokio::test]
    async fn test_shorten_reuses_mapping_for_same_url() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .times(1)
            .returning(|_, _| Ok(PutOutcome::AlreadyExists));
        store
            .expect_get()
            .withf(|code| code == CODE_0)
            .times(1)
            .returning(|_| Ok(Some(URL.to_string())));

        let outcome = service(store).shorten(URL, None).await.unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.link.code, CODE_0);
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision_with_other_url() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .withf(|code, _| code == CODE_0)
            .times(1)
            .returning(|_, _| Ok(PutOutcome::AlreadyExists));
        store
            .expect_get()
            .withf(|code| code == CODE_0)
            .times(1)
            .returning(|_| Ok(Some("https://other.example.com".to_string())));
        store
            .expect_put_if_absent()
            .withf(|code, url| code == CODE_1 && url == URL)
            .times(1)
            .returning(|_, _| Ok(PutOutcome::Created));

        let outcome = service(store).shorten(URL, None).await.unwrap();

        assert!(outcome.created);
        assert_eq!(outcome.link, Link::new(CODE_1, URL));
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .times(MAX_ATTEMPTS as usize)
            .returning(|_, _| Ok(PutOutcome::AlreadyExists));
        store
            .expect_get()
            .times(MAX_ATTEMPTS as usize)
            .returning(|_| Ok(Some("https://other.example.com".to_string())));

        let err = service(store).shorten(URL, None).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_touches_nothing() {
        let mut store = MockMappingStore::new();
        store.expect_put_if_absent().times(0);

        let err = service(store).shorten("not a url", None).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[tokio::test]
    async fn test_shorten_with_custom_code() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .withf(|code, url| code == "my-link" && url == URL)
            .times(1)
            .returning(|_, _| Ok(PutOutcome::Created));

        let outcome = service(store).shorten(URL, Some(" my-link ")).await.unwrap();

        assert!(outcome.created);
        assert_eq!(outcome.link.code, "my-link");
    }

    #[tokio::test]
    async fn test_shorten_custom_code_taken_is_conflict() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .times(1)
            .returning(|_, _| Ok(PutOutcome::AlreadyExists));
        store.expect_get().times(0);

        let err = service(store)
            .shorten(URL, Some("taken"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_shorten_reserved_custom_code_rejected() {
        let mut store = MockMappingStore::new();
        store.expect_put_if_absent().times(0);

        let err = service(store)
            .shorten(URL, Some("stats"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_propagates_store_failure() {
        let mut store = MockMappingStore::new();
        store
            .expect_put_if_absent()
            .returning(|_, _| Err(StoreError::Connection("refused".to_string())));

        let err = service(store).shorten(URL, None).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_counts_click() {
        let mut store = MockMappingStore::new();
        store
            .expect_get()
            .withf(|code| code == "abc")
            .returning(|_| Ok(Some(URL.to_string())));
        store
            .expect_increment_clicks()
            .withf(|code| code == "abc")
            .times(1)
            .returning(|_| Ok(1));

        let link = service(store).resolve("abc").await.unwrap();

        assert_eq!(link.long_url, URL);
    }

    #[tokio::test]
    async fn test_resolve_miss_does_not_count() {
        let mut store = MockMappingStore::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_increment_clicks().times(0);

        let err = service(store).resolve("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_link_by_code_does_not_count() {
        let mut store = MockMappingStore::new();
        store.expect_get().returning(|_| Ok(Some(URL.to_string())));
        store.expect_increment_clicks().times(0);

        let link = service(store).get_link_by_code("abc").await.unwrap();

        assert_eq!(link, Link::new("abc", URL));
    }

    #[test]
    fn test_get_short_url() {
        let service = service(MockMappingStore::new());

        assert_eq!(
            service.get_short_url("https://s.example.com/", "abc"),
            "https://s.example.com/abc"
        );
        assert_eq!(
            service.get_short_url("http://localhost:3000", "abc"),
            "http://localhost:3000/abc"
        );
    }
}
