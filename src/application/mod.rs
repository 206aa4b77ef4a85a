//! Application layer services implementing the shortener workflows.
//!
//! Services receive the [`crate::domain::repositories::MappingStore`] they work
//! on at construction time, so handlers, the admin CLI and tests all inject
//! their own backend.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Code assignment and resolution
//! - [`services::stats_service::StatsService`] - Click statistics

pub mod services;
