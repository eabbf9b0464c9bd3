//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! entities themselves.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for hero writes (POST/PUT/DELETE /heroes)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human readable outcome
    pub message: String,
    /// Id of the hero that was written
    pub id: u32,
}

impl MessageResponse {
    pub fn added(id: u32) -> Self {
        Self {
            message: format!("Hero successfully added with id: {id}"),
            id,
        }
    }

    pub fn updated(id: u32) -> Self {
        Self {
            message: format!("Hero successfully updated with id: {id}"),
            id,
        }
    }

    pub fn deleted(id: u32) -> Self {
        Self {
            message: format!("Hero with id {id} successfully deleted"),
            id,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
