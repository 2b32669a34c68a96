//! Caching layer for live feed responses.
//!
//! The feed is "now"-relative, so a short TTL alone bounds staleness;
//! entries are keyed per stop so a journey touching two stops shares
//! nothing stale between them. Errors are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::departures::LiveService;
use crate::domain::StopCode;
use crate::tfgm::{LiveSource, TfgmError};

/// Configuration for the live-feed cache.
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
            ttl: Duration::from_secs(30),
            max_capacity: 200,
        }
    }
}

/// A live-feed source with per-stop response caching.
pub struct CachedLiveSource {
    source: LiveSource,
    boards: MokaCache<StopCode, Arc<Vec<LiveService>>>,
}

impl CachedLiveSource {
    /// Wrap a live source with a cache.
    pub fn new(source: LiveSource, config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, boards }
    }

    /// Fetch live departures for the given stops, consulting the cache
    /// per stop.
    pub async fn departures(&self, stop_codes: &[StopCode]) -> Result<Vec<LiveService>, TfgmError> {
        let mut all = Vec::new();

        for &code in stop_codes {
            if let Some(cached) = self.boards.get(&code).await {
                all.extend(cached.iter().cloned());
                continue;
            }

            let fetched = Arc::new(self.source.departures(&[code]).await?);
            self.boards.insert(code, fetched.clone()).await;
            all.extend(fetched.iter().cloned());
        }

        Ok(all)
    }

    /// Number of cached per-stop boards.
    pub fn entry_count(&self) -> u64 {
        self.boards.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.boards.invalidate_all();
    }
}
