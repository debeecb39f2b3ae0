//! # SEO Cache
//!
//! Caches, per content type, the extractors that apply to it.
//!
//! - [`ExtractorCollection`]: Resolved extractors plus the registry version
//!   they were resolved against
//! - [`RegistryVersion`]: Shared counter deciding collection freshness
//! - [`ExtractorCache`]: Load/store interface used by the presentation coordinator
//! - [`MemoryExtractorCache`]: Thread-safe in-memory implementation
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seo_cache::{ExtractorCache, ExtractorCollection, MemoryExtractorCache, RegistryVersion};
//!
//! let version = RegistryVersion::new();
//! let cache = MemoryExtractorCache::new();
//! cache.put_extractors_in_cache("article", Arc::new(ExtractorCollection::new("article", Vec::new(), &version)));
//!
//! assert!(cache.load_extractors_from_cache("article").unwrap().is_fresh());
//! version.bump();
//! assert!(!cache.load_extractors_from_cache("article").unwrap().is_fresh());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod collection;
mod memory;

use std::sync::Arc;

pub use collection::{ExtractorCollection, RegistryVersion};
pub use memory::{CacheConfig, CacheStats, MemoryExtractorCache};

/// Storage for resolved extractor collections, keyed by content type.
///
/// Implementations must replace entries whole: a concurrent reader sees
/// either the previous collection or the new one.
pub trait ExtractorCache: Send + Sync {
    /// Returns the collection cached for `content_type`, fresh or not.
    fn load_extractors_from_cache(&self, content_type: &str) -> Option<Arc<ExtractorCollection>>;

    /// Stores `extractors` for `content_type`, replacing any previous entry.
    fn put_extractors_in_cache(&self, content_type: &str, extractors: Arc<ExtractorCollection>);
}
