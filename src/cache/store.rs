// In-memory response cache.
// Read-through, single level, unbounded; entries expire by age only.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::github::{Languages, Profile, RateLimitInfo, Repository};

use super::key::CacheKey;

/// Wrapper for cached data with its insertion time.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// An entry is valid while its age is strictly below the TTL.
    pub fn is_valid(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            // Entries stamped in the future count as brand new.
            .unwrap_or(Duration::ZERO);

        elapsed < ttl
    }
}

/// Payloads the GitHub client stores.
#[derive(Debug, Clone)]
pub enum CachedPayload {
    User(Profile),
    Repositories(Vec<Repository>),
    Languages(Languages),
    Readme(String),
    RateLimit(RateLimitInfo),
}

/// Time-bound cache keyed by request.
///
/// The lock is only ever held for a map operation, never across an await,
/// so concurrent lookups for the same key may both miss and both fetch.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<CacheKey, CachedData<CachedPayload>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, CachedData<CachedPayload>>> {
        // A panic mid-insert cannot leave the map half-written.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the payload for `key` if it is still fresh.
    pub fn get(&self, key: &CacheKey) -> Option<CachedPayload> {
        let entries = self.entries();
        match entries.get(key) {
            Some(cached) if cached.is_valid(key.ttl()) => Some(cached.data.clone()),
            _ => None,
        }
    }

    /// Store (or overwrite) the payload for `key`, stamped now.
    pub fn insert(&self, key: CacheKey, payload: CachedPayload) {
        self.entries().insert(key, CachedData::new(payload));
    }

    /// Evict every entry.
    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Shift an entry's insertion time into the past.
    #[cfg(test)]
    pub fn backdate(&self, key: &CacheKey, by: chrono::Duration) {
        if let Some(cached) = self.entries().get_mut(key) {
            cached.cached_at -= by;
        }
    }
}
