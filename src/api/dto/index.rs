//! DTOs describing the submission form.

use serde::Serialize;

/// Machine-readable description of the service entry point.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub form: FormDescription,
    pub endpoints: Vec<EndpointDescription>,
}

/// How to submit a URL.
#[derive(Debug, Serialize)]
pub struct FormDescription {
    pub method: &'static str,
    pub action: &'static str,
    pub content_types: Vec<&'static str>,
    pub fields: Vec<FieldDescription>,
}

#[derive(Debug, Serialize)]
pub struct FieldDescription {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EndpointDescription {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
