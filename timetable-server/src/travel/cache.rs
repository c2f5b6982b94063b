//! Caching layer for travel-time lookups.
//!
//! Scoring one planning request can ask for the same pair of buildings
//! hundreds of times, once per candidate combination. Lookups are memoized
//! process-wide, keyed by the ordered (from, to) address pair. Only
//! successful lookups are cached; a failed lookup falls back for this call
//! and is retried next time.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{trace, warn};

use super::oracle::{FALLBACK_MINUTES, TravelTimeOracle, TravelTimeSource};

/// Cache key: (from address, to address).
type PairKey = (String, String);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // Walking times do not change within a day
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Oracle that memoizes a [`TravelTimeSource`].
pub struct CachedOracle<S> {
    source: S,
    cache: MokaCache<PairKey, u32>,
}

impl<S> CachedOracle<S> {
    /// Create a new cached oracle.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, cache }
    }

    /// Access the underlying source for lookups that bypass the cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: TravelTimeSource + Sync> TravelTimeOracle for CachedOracle<S> {
    async fn travel_minutes(&self, from: &str, to: &str) -> u32 {
        let key = (from.to_string(), to.to_string());
        let lookup = self.source.fetch_minutes(from, to);

        match self.cache.try_get_with(key, lookup).await {
            Ok(minutes) => {
                trace!(from, to, minutes, "travel time");
                minutes
            }
            Err(e) => {
                warn!(from, to, error = %e, "travel lookup failed, using fallback");
                FALLBACK_MINUTES
            }
        }
    }
}
