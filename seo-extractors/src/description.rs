//! Description extraction.

use seo_core::{Result, SeoContent, SeoExtractor, SeoMetadata};

/// Copies the content's `seo_description` into the meta description.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescriptionExtractor;

impl SeoExtractor for DescriptionExtractor {
    fn name(&self) -> &str {
        "description"
    }

    fn supports(&self, content: &dyn SeoContent) -> bool {
        content.seo_description().is_some()
    }

    fn update_metadata(&self, content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()> {
        if let Some(description) = content.seo_description() {
            metadata.meta_description = Some(description);
        }
        Ok(())
    }
}
