//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the store
/// 2. On a hit, increment the click counter
/// 3. Return 302 Found with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist; the counter is
/// not touched in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(link.long_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
