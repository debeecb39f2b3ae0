//! Keyword extraction.

use seo_core::{Result, SeoContent, SeoExtractor, SeoMetadata, KEYWORDS_SEPARATOR};

/// Appends the content's `seo_keywords` to the metadata keywords.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordsExtractor;

impl SeoExtractor for KeywordsExtractor {
    fn name(&self) -> &str {
        "keywords"
    }

    fn supports(&self, content: &dyn SeoContent) -> bool {
        content.seo_keywords().is_some()
    }

    fn update_metadata(&self, content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()> {
        let Some(keywords) = content.seo_keywords() else {
            return Ok(());
        };

        let mut parts: Vec<String> = metadata.meta_keywords().map(str::to_string).into_iter().collect();
        parts.extend(
            keywords
                .into_iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
        );
        if !parts.is_empty() {
            metadata.meta_keywords = Some(parts.join(KEYWORDS_SEPARATOR));
        }
        Ok(())
    }
}
