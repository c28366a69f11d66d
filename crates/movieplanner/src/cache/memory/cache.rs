//! In-memory cache implementation.
//!
//! One `HashMap` behind a tokio mutex. Expiry is lazy: an expired entry is
//! dropped the next time its key is read. There is no sweeper and no size cap.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use movieplanner_core::cache::{expires_at, Cache, Result};
use movieplanner_core::clock::{Clock, SystemClock};

/// A single stored value with optional expiration.
#[derive(Debug, Clone)]
struct StoredValue {
    value: Vec<u8>,
    expires_at: Option<DateTime<Utc>>,
}

impl StoredValue {
    /// Returns true if this value has expired at `now`.
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }
}

/// In-memory cache implementation.
///
/// The lock is held only for the map access itself.
#[derive(Clone)]
pub struct MemoryCache {
    store: Arc<Mutex<HashMap<String, StoredValue>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    /// Creates an empty cache driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    /// Number of stored values, including expired ones not yet read.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = self.clock.now();
        let mut store = self.store.lock().await;

        match store.get(key) {
            Some(stored) if stored.is_expired(now) => {
                store.remove(key);
                Ok(None)
            }
            Some(stored) => Ok(Some(stored.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let stored = StoredValue {
            value: value.to_vec(),
            expires_at: ttl.and_then(|ttl| expires_at(self.clock.now(), ttl)),
        };
        self.store.lock().await.insert(key.to_string(), stored);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.lock().await.remove(key);
        Ok(())
    }
}
