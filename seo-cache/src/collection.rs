//! Resolved extractor collections and their freshness.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use seo_core::traits::SeoExtractor;

/// Version of an extractor registry.
///
/// Cloning shares the counter. Every change to the registry bumps it, which
/// turns every collection built against an older value stale.
#[derive(Clone, Debug, Default)]
pub struct RegistryVersion(Arc<AtomicU64>);

impl RegistryVersion {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Advances the version and returns the new value.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// The extractors that apply to one content type.
pub struct ExtractorCollection {
    content_type: String,
    extractors: Vec<Arc<dyn SeoExtractor>>,
    built_at: u64,
    version: RegistryVersion,
}

impl ExtractorCollection {
    /// Creates a collection resolved against the current value of `version`.
    pub fn new(
        content_type: impl Into<String>,
        extractors: Vec<Arc<dyn SeoExtractor>>,
        version: &RegistryVersion,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            extractors,
            built_at: version.current(),
            version: version.clone(),
        }
    }

    /// Returns true while the registry has not changed since this collection was built.
    pub fn is_fresh(&self) -> bool {
        self.built_at == self.version.current()
    }

    /// Content type this collection was resolved for.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Registry version this collection was resolved against.
    pub fn built_at(&self) -> u64 {
        self.built_at
    }

    /// Iterates the extractors in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SeoExtractor>> {
        self.extractors.iter()
    }

    /// Names of the extractors, in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Number of extractors.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Returns true if no extractor applies.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExtractorCollection {
    type Item = &'a Arc<dyn SeoExtractor>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn SeoExtractor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.extractors.iter()
    }
}

impl fmt::Debug for ExtractorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorCollection")
            .field("content_type", &self.content_type)
            .field("extractors", &self.names())
            .field("built_at", &self.built_at)
            .field("fresh", &self.is_fresh())
            .finish()
    }
}
