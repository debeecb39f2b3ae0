//! Title extraction.

use seo_core::{Result, SeoContent, SeoExtractor, SeoMetadata};

/// Copies the content's `seo_title` into the metadata title.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitleExtractor;

impl SeoExtractor for TitleExtractor {
    fn name(&self) -> &str {
        "title"
    }

    fn supports(&self, content: &dyn SeoContent) -> bool {
        content.seo_title().is_some()
    }

    fn update_metadata(&self, content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()> {
        if let Some(title) = content.seo_title() {
            metadata.title = Some(title);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Titled;

    impl SeoContent for Titled {
        fn seo_title(&self) -> Option<String> {
            Some("Content title".into())
        }
    }

    struct Untitled;

    impl SeoContent for Untitled {}

    #[test]
    fn test_supports_only_titled_content() {
        assert!(TitleExtractor.supports(&Titled));
        assert!(!TitleExtractor.supports(&Untitled));
    }

    #[test]
    fn test_overwrites_existing_title() {
        let mut metadata = SeoMetadata::new().with_title("Stored title");
        TitleExtractor.update_metadata(&Titled, &mut metadata).unwrap();
        assert_eq!(metadata.title(), Some("Content title"));
    }
}
