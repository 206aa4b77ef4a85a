//! API route configuration.

use crate::api::handlers::{
    health_handler, index_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`              - Submission form description
/// - `POST /`              - Shorten a URL
/// - `GET  /health`        - Store health check
/// - `GET  /stats/{code}`  - Long URL and click count
/// - `GET  /{code}`        - Redirect to the long URL
///
/// `stats` and `health` are reserved, so no short code can shadow them.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler).post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
}
