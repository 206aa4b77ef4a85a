//! Redis-backed mapping store.

use crate::domain::repositories::{MappingStore, PutOutcome, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

/// Namespace for `code -> long URL` keys.
const URL_KEY_PREFIX: &str = "url:";

/// Namespace for `code -> clicks` keys.
const CLICKS_KEY_PREFIX: &str = "clicks:";

/// Redis store for short code mappings and click counters.
///
/// Uses a `ConnectionManager`, which multiplexes one connection and
/// reconnects on failure; it is cloned per command. Unlike a cache, errors
/// are propagated to callers as [`StoreError`].
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        Ok(Self { client: manager })
    }

    /// Connects with exponential backoff, making up to `retries` further
    /// attempts after the first failure.
    ///
    /// # Errors
    ///
    /// Returns the last [`StoreError::Connection`] once all attempts fail.
    pub async fn connect_with_retry(redis_url: &str, retries: usize) -> StoreResult<Self> {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(100)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(retries);

        let store = Retry::spawn(strategy, || async {
            Self::connect(redis_url).await.inspect_err(|e| {
                warn!("{}", e);
            })
        })
        .await?;

        info!("✓ Connected to Redis");
        Ok(store)
    }

    fn url_key(code: &str) -> String {
        format!("{}{}", URL_KEY_PREFIX, code)
    }

    fn clicks_key(code: &str) -> String {
        format!("{}{}", CLICKS_KEY_PREFIX, code)
    }
}

fn operation_error(op: &str, code: &str, e: redis::RedisError) -> StoreError {
    StoreError::Operation(format!("Redis {} failed for {}: {}", op, code, e))
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn exists(&self, code: &str) -> StoreResult<bool> {
        let mut conn = self.client.clone();

        conn.exists::<_, bool>(Self::url_key(code))
            .await
            .map_err(|e| operation_error("EXISTS", code, e))
    }

    async fn put_if_absent(&self, code: &str, long_url: &str) -> StoreResult<PutOutcome> {
        let mut conn = self.client.clone();

        let inserted = conn
            .set_nx::<_, _, bool>(Self::url_key(code), long_url)
            .await
            .map_err(|e| operation_error("SETNX", code, e))?;

        if inserted {
            debug!("Store SET: {} -> {}", code, long_url);
            Ok(PutOutcome::Created)
        } else {
            debug!("Store SET skipped, {} already taken", code);
            Ok(PutOutcome::AlreadyExists)
        }
    }

    async fn get(&self, code: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(Self::url_key(code))
            .await
            .map_err(|e| operation_error("GET", code, e))
    }

    async fn increment_clicks(&self, code: &str) -> StoreResult<u64> {
        let mut conn = self.client.clone();

        conn.incr::<_, _, u64>(Self::clicks_key(code), 1u64)
            .await
            .map_err(|e| operation_error("INCR", code, e))
    }

    async fn clicks(&self, code: &str) -> StoreResult<u64> {
        let mut conn = self.client.clone();

        let clicks = conn
            .get::<_, Option<u64>>(Self::clicks_key(code))
            .await
            .map_err(|e| operation_error("GET", code, e))?;

        Ok(clicks.unwrap_or(0))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
