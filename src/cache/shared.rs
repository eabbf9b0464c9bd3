//! Shared Cache Handle
//!
//! Cloneable async handle used by every facade and the cleanup task.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{GatewayError, Result};

// == TTL Cache ==
/// Thread-safe TTL cache shared by all facades.
///
/// Every entry written through this handle gets the same fixed TTL. The lock is
/// only held for the duration of a single map operation, never across I/O.
#[derive(Debug, Clone)]
pub struct TtlCache {
    store: Arc<RwLock<CacheStore>>,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new())),
            ttl,
        }
    }

    /// Raw payload lookup. Write lock because expired entries are dropped on read.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.store.write().await.get(key)
    }

    /// Raw payload store, last write wins.
    pub async fn set(&self, key: impl Into<String>, payload: String) {
        self.store.write().await.set(key.into(), payload, self.ttl);
    }

    /// Typed lookup.
    ///
    /// A payload that no longer deserializes into `T` is reported as a miss so the
    /// caller refills it from upstream.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let payload = self.get(key).await?;
        match serde_json::from_str(&payload) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Discarding undecodable cache payload for {}: {}", key, err);
                None
            }
        }
    }

    /// Typed store.
    pub async fn set_json<T: Serialize>(&self, key: impl Into<String>, value: &T) -> Result<()> {
        let payload =
            serde_json::to_string(value).map_err(|e| GatewayError::Internal(e.to_string()))?;
        self.set(key, payload).await;
        Ok(())
    }

    /// Cache-aside read.
    ///
    /// Returns the cached value for `key`, or runs `fetch`, stores its result and
    /// returns it. A failed fetch is returned as-is and leaves the cache untouched.
    /// No lock is held while `fetch` runs, so concurrent misses on one key may
    /// each fetch; the last write wins.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.get_json(key).await {
            debug!("Cache hit: {}", key);
            return Ok(value);
        }

        debug!("Cache miss: {}", key);
        let value = fetch().await?;
        self.set_json(key, &value).await?;
        Ok(value)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}
