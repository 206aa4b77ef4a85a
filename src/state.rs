//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::repositories::MappingStore;

/// Handler state.
///
/// Holds the services built over one injected store. There is no other
/// shared mutable state; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    /// Public base for composed short URLs. Falls back to the request's
    /// `Host` header when `None`.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds services over `store`.
    pub fn new(store: Arc<dyn MappingStore>, base_url: Option<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone())),
            stats_service: Arc::new(StatsService::new(store)),
            base_url,
        }
    }
}
