//! Caching subsystem.
//!
//! [`QueryCache`] is a process-local cache-aside primitive for expensive
//! store queries and composed result documents. Entries hold JSON values
//! with a per-entry TTL; expiry is lazy (performed by the access that
//! discovers it), with [`QueryCache::cleanup_expired`] available for
//! proactive sweeps from an external scheduler.
//!
//! # Architecture
//!
//! The cache sits in [`ReportOrchestrator`](crate::ReportOrchestrator)
//! between its operations and the [`SessionStore`](crate::SessionStore).
//! Values cross the boundary as [`serde_json::Value`], so one cache
//! serves every query family and [`QueryCache::stats`] can estimate
//! memory without knowing concrete types. Keys follow the grammar in
//! [`keys`]; hit/miss metrics are labelled with the key namespace.
//!
//! # Concurrency
//!
//! A mutex guards the map and is never held across an await. Two tasks
//! that miss the same key at the same moment both run their producer and
//! the later write wins. The producers behind this cache are idempotent
//! reads, so the duplicated work is accepted instead of paying for
//! per-key coordination.
//!
//! # Future extensibility: shared caching
//!
//! When several processes serve reports, the map becomes a backend trait
//! injected through the orchestrator builder. String keys and JSON
//! values are already backend-agnostic, so only the storage moves; call
//! sites stay as they are.

pub mod keys;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::Result;
use crate::telemetry;

/// TTL applied when neither the write nor the cache names one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

struct CacheEntry {
    value: serde_json::Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Expired strictly after the TTL elapses; an entry aged exactly
    /// `ttl` is still served.
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.stored_at) > self.ttl
    }
}

/// Point-in-time snapshot of cache contents.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Entries currently stored. Expired entries count until an access
    /// or sweep removes them.
    pub size: usize,
    /// Keys currently stored, sorted.
    pub entries: Vec<String>,
    /// Rough estimate: two bytes per key character plus two per
    /// serialized-value character.
    pub approx_memory_bytes: usize,
}

/// TTL cache for query results, keyed by the [`keys`] grammar.
///
/// Unbounded; entry count is driven by the active session population
/// and bounded in practice by TTLs. Time comes from [`tokio::time`], so
/// tests drive expiry with a paused runtime clock.
pub struct QueryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl QueryCache {
    /// Create an empty cache with the standard default TTL.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL)
    }

    /// Create an empty cache whose unlabelled writes use `default_ttl`.
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Look up a cached value.
    ///
    /// Returns `None` when the key was never set, when its TTL has
    /// elapsed (the entry is removed), or when the stored JSON does not
    /// deserialize as `T` (the entry is left for the next write to
    /// overwrite). Emits cache hit/miss metrics.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cached = {
            let mut entries = self.entries.lock().expect("query cache mutex poisoned");
            match entries.get(key) {
                Some(entry) if entry.is_expired(Instant::now()) => {
                    entries.remove(key);
                    metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL, "reason" => "expired")
                        .increment(1);
                    None
                }
                Some(entry) => Some(entry.value.clone()),
                None => None,
            }
        };

        let Some(value) = cached else {
            record_miss(key);
            return None;
        };

        match serde_json::from_value(value) {
            Ok(decoded) => {
                record_hit(key);
                Some(decoded)
            }
            Err(error) => {
                warn!(key, error = %error, "cached value does not deserialize as requested type");
                record_miss(key);
                None
            }
        }
    }

    /// Insert or overwrite a value.
    ///
    /// The entry's age resets on every write; `None` applies the
    /// cache's default TTL.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()> {
        let entry = CacheEntry {
            value: serde_json::to_value(value)?,
            stored_at: Instant::now(),
            ttl: ttl.unwrap_or(self.default_ttl),
        };
        self.entries
            .lock()
            .expect("query cache mutex poisoned")
            .insert(key.to_string(), entry);
        Ok(())
    }

    /// Return the value for `key`, computing and storing it on a miss.
    ///
    /// The producer runs without the cache lock held. Producer errors
    /// propagate to the caller and nothing is stored, so the next call
    /// computes again. Concurrent callers missing the same key may each
    /// run their producer; see the module docs.
    pub async fn get_or_compute<T, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        producer: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(cached) = self.get(key) {
            return Ok(cached);
        }
        let value = producer().await?;
        self.set(key, &value, ttl)?;
        Ok(value)
    }

    /// Remove one key. Absent keys are a no-op.
    pub fn invalidate(&self, key: &str) {
        let removed = self
            .entries
            .lock()
            .expect("query cache mutex poisoned")
            .remove(key);
        if removed.is_some() {
            metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL, "reason" => "invalidated")
                .increment(1);
            debug!(key, "cache entry invalidated");
        }
    }

    /// Remove every key matching `pattern`, where `*` matches any
    /// substring (an empty one included) and every other character
    /// matches literally. Returns the number of entries removed.
    pub fn invalidate_pattern(&self, pattern: &str) -> usize {
        let regex = pattern_regex(pattern);
        let mut entries = self.entries.lock().expect("query cache mutex poisoned");
        let before = entries.len();
        entries.retain(|key, _| !regex.is_match(key));
        let removed = before - entries.len();
        drop(entries);
        if removed > 0 {
            metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL, "reason" => "invalidated")
                .increment(removed as u64);
            debug!(pattern, removed, "cache entries invalidated by pattern");
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().expect("query cache mutex poisoned");
        let removed = entries.len();
        entries.clear();
        drop(entries);
        if removed > 0 {
            metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL, "reason" => "cleared")
                .increment(removed as u64);
            debug!(removed, "cache cleared");
        }
    }

    /// Proactively remove expired entries, returning how many were
    /// dropped. Complements lazy expiry for deployments that schedule a
    /// periodic sweep.
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("query cache mutex poisoned");
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        drop(entries);
        if removed > 0 {
            metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL, "reason" => "expired")
                .increment(removed as u64);
            debug!(removed, "swept expired cache entries");
        }
        removed
    }

    /// Snapshot current contents for monitoring surfaces.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().expect("query cache mutex poisoned");
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        let approx_memory_bytes = entries
            .iter()
            .map(|(key, entry)| key.len() * 2 + entry.value.to_string().len() * 2)
            .sum();
        CacheStats {
            size: entries.len(),
            entries: keys,
            approx_memory_bytes,
        }
    }

    /// Number of entries currently stored, expired or not.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("query cache mutex poisoned")
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile a `*`-wildcard pattern into an anchored regex.
fn pattern_regex(pattern: &str) -> Regex {
    let escaped = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{escaped}$")).expect("escaped wildcard pattern is a valid regex")
}

fn record_hit(key: &str) {
    metrics::counter!(telemetry::CACHE_HITS_TOTAL, "namespace" => namespace(key).to_owned())
        .increment(1);
}

fn record_miss(key: &str) {
    metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "namespace" => namespace(key).to_owned())
        .increment(1);
}

/// Key namespace: the text before the first `:`, or the whole key.
fn namespace(key: &str) -> &str {
    key.split_once(':').map_or(key, |(ns, _)| ns)
}
