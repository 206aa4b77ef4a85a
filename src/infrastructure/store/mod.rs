//! Mapping store backends.
//!
//! Provides two [`MappingStore`](crate::domain::repositories::MappingStore)
//! implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process store for tests and local development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
