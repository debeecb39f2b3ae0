//! Registry of cacheable extractors.

use std::sync::Arc;

use tracing::debug;

use seo_cache::{ExtractorCollection, RegistryVersion};
use seo_core::{SeoContent, SeoExtractor};

struct RegisteredExtractor {
    priority: i32,
    extractor: Arc<dyn SeoExtractor>,
}

/// Extractors resolved per content type and cached.
///
/// Ordered by descending priority; equal priorities keep registration order.
/// Every registration bumps the [`RegistryVersion`], so collections built
/// before it are no longer fresh.
#[derive(Default)]
pub struct ExtractorRegistry {
    entries: Vec<RegisteredExtractor>,
    version: RegistryVersion,
}

impl ExtractorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extractor.
    pub fn register(&mut self, extractor: Arc<dyn SeoExtractor>, priority: i32) {
        let position = self
            .entries
            .iter()
            .position(|e| e.priority < priority)
            .unwrap_or(self.entries.len());
        debug!(extractor = extractor.name(), priority, position, "Registering extractor");
        self.entries.insert(position, RegisteredExtractor { priority, extractor });
        self.version.bump();
    }

    /// Version handle shared with the collections this registry builds.
    pub fn version(&self) -> &RegistryVersion {
        &self.version
    }

    /// Names of the registered extractors, in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.extractor.name()).collect()
    }

    /// Number of registered extractors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no extractor is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the collection of extractors supporting `content`.
    pub fn resolve(&self, content: &dyn SeoContent) -> ExtractorCollection {
        let supported = self
            .entries
            .iter()
            .filter(|e| e.extractor.supports(content))
            .map(|e| e.extractor.clone())
            .collect();
        ExtractorCollection::new(content.content_type(), supported, &self.version)
    }
}
