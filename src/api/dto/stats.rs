//! DTO for link statistics.

use serde::Serialize;

use crate::domain::entities::LinkStats;

/// Long URL and visit count of a short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub clicks: u64,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            code: stats.code,
            long_url: stats.long_url,
            clicks: stats.clicks,
        }
    }
}
