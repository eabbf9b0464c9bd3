//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default OpenDota API base endpoint
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.opendota.com/api/";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream data provider
    pub upstream_base_url: String,
    /// TTL in seconds applied to every cached response
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Path of the JSON file listing hero ids allowed for benchmark queries
    pub hero_ids_path: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `UPSTREAM_BASE_URL` - Upstream API base (default: OpenDota)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 900)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `HERO_IDS_PATH` - Hero id allow-list file (default: data/hero_ids.json)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or(defaults.upstream_base_url),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            hero_ids_path: env::var("HERO_IDS_PATH").unwrap_or(defaults.hero_ids_path),
        }
    }

    /// Cache TTL as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            cache_ttl: 15 * 60,
            cleanup_interval: 60,
            hero_ids_path: "data/hero_ids.json".to_string(),
        }
    }
}
