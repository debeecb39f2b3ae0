//! Canonical URL emission.

use seo_core::{
    ExtraProperty, PropertyType, Result, SeoContent, SeoExtractor, SeoMetadata, CANONICAL_URL_KEY,
};

/// Publishes the resolved original URL as a canonical meta tag.
///
/// Reads the metadata rather than the content, so it must run after the
/// extractors that set `original_url`. Emits `og:url` by default; an
/// existing property with the same type and key is replaced.
#[derive(Clone, Debug)]
pub struct CanonicalUrlExtractor {
    kind: PropertyType,
    key: String,
}

impl CanonicalUrlExtractor {
    /// Creates an extractor emitting `<meta property="og:url">`.
    pub fn new() -> Self {
        Self::with_property(PropertyType::Property, CANONICAL_URL_KEY)
    }

    /// Creates an extractor emitting the given meta tag.
    pub fn with_property(kind: PropertyType, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }
}

impl Default for CanonicalUrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoExtractor for CanonicalUrlExtractor {
    fn name(&self) -> &str {
        "canonical_url"
    }

    fn supports(&self, content: &dyn SeoContent) -> bool {
        content.seo_metadata().is_some()
            || content.seo_original_url().is_some()
            || content.seo_original_route().is_some()
    }

    fn update_metadata(&self, _content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()> {
        let Some(url) = metadata.original_url().map(str::to_string) else {
            return Ok(());
        };
        metadata.remove_extra_property(self.kind, &self.key);
        metadata.add_extra_property(ExtraProperty::new(self.kind, self.key.clone(), url));
        Ok(())
    }
}
