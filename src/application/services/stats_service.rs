//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::LinkStats;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use serde_json::json;

/// Service for reading visit statistics of short codes.
pub struct StatsService {
    store: Arc<dyn MappingStore>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Returns the long URL and click count for `code`.
    ///
    /// A code that was never visited reports 0 clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches the code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let long_url = self
            .store
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": code })))?;

        let clicks = self.store.clicks(code).await?;

        Ok(LinkStats {
            code: code.to_string(),
            long_url,
            clicks,
        })
    }
}
