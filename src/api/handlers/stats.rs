//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports the long URL and click count of a short code.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// { "code": "NkHF8idM", "long_url": "https://example.com/page", "clicks": 3 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(stats.into()))
}
