//! In-memory extractor cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{ExtractorCache, ExtractorCollection};

/// Cache entry.
#[derive(Clone)]
struct CacheEntry {
    extractors: Arc<ExtractorCollection>,
    inserted_at: Instant,
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of content types kept; `0` disables storage
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_entries: 1000 }
    }
}

/// In-memory cache of extractor collections.
///
/// Thread-safe. Stale collections are kept until replaced or evicted; the
/// coordinator decides what to do with them.
pub struct MemoryExtractorCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: CacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryExtractorCache {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Removes the entry for a content type.
    pub fn remove(&self, content_type: &str) {
        self.entries.write().remove(content_type);
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes every stale collection. Returns the number removed.
    pub fn evict_stale(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, e| e.extractors.is_fresh());
        before - entries.len()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read();
        let fresh = entries.values().filter(|e| e.extractors.is_fresh()).count();
        CacheStats {
            total_entries: entries.len(),
            fresh_entries: fresh,
            stale_entries: entries.len() - fresh,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            capacity: self.config.max_entries,
        }
    }
}

impl Default for MemoryExtractorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorCache for MemoryExtractorCache {
    fn load_extractors_from_cache(&self, content_type: &str) -> Option<Arc<ExtractorCollection>> {
        let found = self
            .entries
            .read()
            .get(content_type)
            .map(|e| e.extractors.clone());

        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    #[instrument(skip(self, extractors), fields(count = extractors.len()))]
    fn put_extractors_in_cache(&self, content_type: &str, extractors: Arc<ExtractorCollection>) {
        if self.config.max_entries == 0 {
            return;
        }
        let mut entries = self.entries.write();

        if !entries.contains_key(content_type) && entries.len() >= self.config.max_entries {
            entries.retain(|_, e| e.extractors.is_fresh());
        }
        // Still at capacity? Remove oldest entry
        if !entries.contains_key(content_type) && entries.len() >= self.config.max_entries {
            if let Some(oldest_key) = entries
                .iter()
                .min_by_key(|(_, e)| e.inserted_at)
                .map(|(k, _)| k.clone())
            {
                debug!(evicted = %oldest_key, "Cache full, evicting oldest entry");
                entries.remove(&oldest_key);
            }
        }

        entries.insert(
            content_type.to_string(),
            CacheEntry {
                extractors,
                inserted_at: Instant::now(),
            },
        );
    }
}

/// Cache statistics.
#[derive(Clone, Debug)]
pub struct CacheStats {
    /// Cached content types
    pub total_entries: usize,
    /// Entries still matching their registry version
    pub fresh_entries: usize,
    /// Entries awaiting rebuild
    pub stale_entries: usize,
    /// Loads that found an entry
    pub hits: u64,
    /// Loads that found nothing
    pub misses: u64,
    /// Configured maximum number of entries
    pub capacity: usize,
}
