//! Custom meta tag extraction.

use seo_core::{Result, SeoContent, SeoExtractor, SeoMetadata};

/// Appends the content's `seo_extras` to the metadata's extra properties.
///
/// An extra with the same type and key as an existing property replaces it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtrasExtractor;

impl SeoExtractor for ExtrasExtractor {
    fn name(&self) -> &str {
        "extras"
    }

    fn supports(&self, content: &dyn SeoContent) -> bool {
        content.seo_extras().is_some()
    }

    fn update_metadata(&self, content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()> {
        for extra in content.seo_extras().unwrap_or_default() {
            metadata.remove_extra_property(extra.kind, &extra.key);
            metadata.add_extra_property(extra);
        }
        Ok(())
    }
}
