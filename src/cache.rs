//! URL-keyed response cache.
//!
//! Holds the raw bodies of validated upstream responses. Freshness is decided
//! per lookup: an entry is served only while it is younger than the TTL of the
//! call asking for it, so a short-lived "today" lookup never sees a body that
//! is merely fresh enough for a calendar view. A zero TTL never hits.
//!
//! Entries older than the cache's retention are swept whenever a new entry is
//! stored, and dropped on lookup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::constants::CALENDAR_TTL;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: Bytes,
    stored_at: Instant,
    /// Age past which no caller can use the entry.
    keep_for: Duration,
}

impl CacheEntry {
    fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    fn is_dead(&self, now: Instant) -> bool {
        self.age(now) >= self.keep_for
    }
}

/// Shared, cloneable TTL cache of response bodies keyed by request URL.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    /// Longest TTL any caller is expected to pass.
    retention: Duration,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::with_retention(CALENDAR_TTL)
    }
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that keeps entries for at least `retention`, normally the
    /// longest configured TTL.
    pub fn with_retention(retention: Duration) -> Self {
        Self {
            entries: Arc::default(),
            retention,
        }
    }

    /// Body cached for `url`, if it was stored less than `ttl` ago.
    pub fn get(&self, url: &str, ttl: Duration) -> Option<Bytes> {
        if ttl.is_zero() {
            return None;
        }
        let now = Instant::now();
        let mut entries = self.lock();
        let entry = entries.get(url)?;
        if entry.is_dead(now) {
            entries.remove(url);
            return None;
        }
        (entry.age(now) < ttl).then(|| entry.body.clone())
    }

    /// Store `body` under `url`. A zero TTL stores nothing.
    ///
    /// The entry is retained for the longer of `ttl` and the cache retention,
    /// so later callers with a longer window can still use it.
    pub fn insert(&self, url: impl Into<String>, body: Bytes, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }
        let now = Instant::now();
        let mut entries = self.lock();
        entries.retain(|_, e| !e.is_dead(now));
        entries.insert(
            url.into(),
            CacheEntry {
                body,
                stored_at: now,
                keep_for: ttl.max(self.retention),
            },
        );
    }

    /// Number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
