//! # hashlink
//!
//! A hash-based URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the [`domain::repositories::MappingStore`] contract
//! - **Application Layer** ([`application`]) - Shortening, resolution and stats workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## How codes are made
//!
//! A short code is the URL-safe base64 encoding of the first 6 bytes of the
//! URL's SHA-256 digest, so the same URL always gets the same 8-character
//! code. On a collision with a different URL the input is deterministically
//! perturbed and hashed again. Writes are a single `SETNX`, so an existing
//! mapping is never overwritten.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! cargo run
//!
//! curl -d long_url=https://example.com/page http://localhost:3000/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{Link, LinkStats, ShortenOutcome};
    pub use crate::domain::repositories::{MappingStore, PutOutcome, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
