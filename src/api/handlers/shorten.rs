//! Handler for the submission endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host_from_headers;

/// Submission body, decoded from JSON or from an urlencoded form depending
/// on `Content-Type`.
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let payload = if is_json {
            let Json(payload) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
                })?;
            payload
        } else {
            let Form(payload) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
                })?;
            payload
        };

        Ok(Self(payload))
    }
}

/// Creates a short URL for the submitted long URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// - `long_url` (required): absolute http(s) URL
/// - `custom_code` (optional): code to claim instead of the generated one
///
/// # Response
///
/// `201 Created` for a new mapping, `200 OK` when the URL was already
/// shortened to the same code:
///
/// ```json
/// {
///   "code": "NkHF8idM",
///   "long_url": "https://example.com/page",
///   "short_url": "http://localhost:3000/NkHF8idM"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL or custom code, or when no
/// base URL is configured and the request has no `Host` header.
/// Returns 409 Conflict if the custom code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ShortenPayload(payload): ShortenPayload,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .link_service
        .shorten(&payload.long_url, payload.custom_code.as_deref())
        .await?;

    let base_url = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => format!("http://{}", extract_host_from_headers(&headers)?),
    };

    let short_url = state
        .link_service
        .get_short_url(&base_url, &outcome.link.code);

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ShortenResponse {
            code: outcome.link.code,
            long_url: outcome.link.long_url,
            short_url,
        }),
    ))
}
