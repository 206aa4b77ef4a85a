//! Key-value store contract for short code mappings and click counters.

use async_trait::async_trait;

/// Errors raised by a store backend.
///
/// Backends do not distinguish an unreachable store from a failed command.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The code was free and now maps to the given URL.
    Created,
    /// The code was already taken; the existing mapping is untouched.
    AlreadyExists,
}

/// Store holding `code -> long URL` mappings and `code -> clicks` counters.
///
/// All mutation goes through atomic primitives: [`MappingStore::put_if_absent`]
/// is a single "set if not present" and [`MappingStore::increment_clicks`] a
/// single increment, so concurrent requests never overwrite a mapping or lose
/// a click.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis (`SETNX` / `INCR`)
/// - [`crate::infrastructure::store::MemoryStore`] - In-process maps
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Returns whether a mapping exists for `code`.
    async fn exists(&self, code: &str) -> StoreResult<bool>;

    /// Stores `code -> long_url` unless `code` is already taken.
    async fn put_if_absent(&self, code: &str, long_url: &str) -> StoreResult<PutOutcome>;

    /// Returns the long URL for `code`, or `None` if no mapping exists.
    async fn get(&self, code: &str) -> StoreResult<Option<String>>;

    /// Adds one to the click counter of `code` and returns the new value.
    ///
    /// A missing counter starts at zero, so the first call returns 1.
    async fn increment_clicks(&self, code: &str) -> StoreResult<u64>;

    /// Returns the click counter of `code`, 0 when it was never incremented.
    async fn clicks(&self, code: &str) -> StoreResult<u64>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
