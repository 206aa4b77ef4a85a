//! Handler for the service entry point.

use axum::Json;

use crate::api::dto::index::{
    EndpointDescription, FieldDescription, FormDescription, IndexResponse,
};

/// Describes the submission form and the available endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        form: FormDescription {
            method: "POST",
            action: "/",
            content_types: vec!["application/x-www-form-urlencoded", "application/json"],
            fields: vec![
                FieldDescription {
                    name: "long_url",
                    required: true,
                    description: "Absolute http(s) URL to shorten",
                },
                FieldDescription {
                    name: "custom_code",
                    required: false,
                    description: "Short code to claim instead of the generated one",
                },
            ],
        },
        endpoints: vec![
            EndpointDescription {
                method: "GET",
                path: "/{code}",
                description: "Redirect to the stored URL",
            },
            EndpointDescription {
                method: "GET",
                path: "/stats/{code}",
                description: "Stored URL and click count",
            },
            EndpointDescription {
                method: "GET",
                path: "/health",
                description: "Store connectivity",
            },
        ],
    })
}
