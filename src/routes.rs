//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Submission form description
//! - `POST /`             - Shorten a URL
//! - `GET  /{code}`       - Short link redirect
//! - `GET  /stats/{code}` - Link statistics
//! - `GET  /health`       - Store health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash
/// normalization, so `/stats/abc/` routes like `/stats/abc`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
