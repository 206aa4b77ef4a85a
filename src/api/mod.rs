//! HTTP layer translating requests into service calls.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
