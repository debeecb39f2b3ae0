//! Original URL extraction, from a literal URL or a named route.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use seo_core::{Result, SeoContent, SeoError, SeoExtractor, SeoMetadata, UrlGenerator};

/// Returns the trimmed URL, or `None` when it is blank.
fn present(url: &str) -> Option<&str> {
    Some(url.trim()).filter(|u| !u.is_empty())
}

/// Checks that a present `url` is usable as a redirect or canonical target.
///
/// Relative references are accepted as they are. Absolute URLs must use
/// `http` or `https`.
fn validate_original_url(url: &str) -> Result<()> {
    match Url::parse(url) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
            Err(SeoError::InvalidOriginalUrl(format!(
                "unsupported scheme '{}' in {}",
                parsed.scheme(),
                url
            )))
        }
        _ => Ok(()),
    }
}

/// Copies the content's `seo_original_url` into the metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct OriginalUrlExtractor;

impl SeoExtractor for OriginalUrlExtractor {
    fn name(&self) -> &str {
        "original_url"
    }

    fn supports(&self, content: &dyn SeoContent) -> bool {
        content
            .seo_original_url()
            .is_some_and(|url| present(&url).is_some())
    }

    fn update_metadata(&self, content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()> {
        let Some(raw) = content.seo_original_url() else {
            return Ok(());
        };
        if let Some(url) = present(&raw) {
            validate_original_url(url)?;
            metadata.original_url = Some(url.to_string());
        }
        Ok(())
    }
}

/// Resolves the content's `seo_original_route` into the metadata's original URL.
#[derive(Clone)]
pub struct OriginalRouteExtractor {
    generator: Arc<dyn UrlGenerator>,
}

impl OriginalRouteExtractor {
    /// Creates an extractor generating URLs with `generator`.
    pub fn new(generator: Arc<dyn UrlGenerator>) -> Self {
        Self { generator }
    }
}

impl SeoExtractor for OriginalRouteExtractor {
    fn name(&self) -> &str {
        "original_route"
    }

    fn supports(&self, content: &dyn SeoContent) -> bool {
        content
            .seo_original_route()
            .is_some_and(|route| !route.name.trim().is_empty())
    }

    fn update_metadata(&self, content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()> {
        let Some(route) = content
            .seo_original_route()
            .filter(|route| !route.name.trim().is_empty())
        else {
            return Ok(());
        };
        let generated = self.generator.generate(&route)?;
        let Some(url) = present(&generated) else {
            debug!(route = %route.name, "Route generated an empty URL, skipping");
            return Ok(());
        };
        debug!(route = %route.name, url, "Resolved original route");
        validate_original_url(url)?;
        metadata.original_url = Some(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteTable;
    use seo_core::SeoRoute;
    use test_case::test_case;

    struct Moved(&'static str);

    impl SeoContent for Moved {
        fn seo_original_url(&self) -> Option<String> {
            Some(self.0.into())
        }
    }

    struct Routed(SeoRoute);

    impl SeoContent for Routed {
        fn seo_original_route(&self) -> Option<SeoRoute> {
            Some(self.0.clone())
        }
    }

    #[test_case("/redirect/target" ; "absolute path")]
    #[test_case("https://example.com/news/1" ; "https url")]
    #[test_case("http://example.com" ; "http url")]
    #[test_case("news/1" ; "relative path")]
    #[test_case("?page=2" ; "query only")]
    fn test_accepts_url(url: &'static str) {
        let mut metadata = SeoMetadata::new();
        OriginalUrlExtractor.update_metadata(&Moved(url), &mut metadata).unwrap();
        assert_eq!(metadata.original_url(), Some(url));
    }

    #[test_case("javascript:alert(1)" ; "script scheme")]
    #[test_case("ftp://files.example.com/a" ; "ftp scheme")]
    fn test_rejects_url(url: &'static str) {
        let mut metadata = SeoMetadata::new();
        let err = OriginalUrlExtractor
            .update_metadata(&Moved(url), &mut metadata)
            .unwrap_err();
        assert!(matches!(err, SeoError::InvalidOriginalUrl(_)));
        assert!(metadata.original_url.is_none());
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    fn test_blank_url_is_unset(url: &'static str) {
        assert!(!OriginalUrlExtractor.supports(&Moved(url)));

        let mut metadata = SeoMetadata::new().with_original_url("/kept");
        OriginalUrlExtractor.update_metadata(&Moved(url), &mut metadata).unwrap();
        assert_eq!(metadata.original_url(), Some("/kept"));
    }

    #[test]
    fn test_url_is_trimmed() {
        let mut metadata = SeoMetadata::new();
        OriginalUrlExtractor
            .update_metadata(&Moved("  /padded "), &mut metadata)
            .unwrap();
        assert_eq!(metadata.original_url(), Some("/padded"));
    }

    #[test]
    fn test_route_resolved_through_generator() {
        let routes = RouteTable::new().with_route("news_show", "/news/{slug}");
        let extractor = OriginalRouteExtractor::new(Arc::new(routes));
        let content = Routed(SeoRoute::new("news_show").with_parameter("slug", "launch"));

        assert!(extractor.supports(&content));
        let mut metadata = SeoMetadata::new();
        extractor.update_metadata(&content, &mut metadata).unwrap();
        assert_eq!(metadata.original_url(), Some("/news/launch"));
    }

    #[test]
    fn test_route_failure_propagates() {
        let extractor = OriginalRouteExtractor::new(Arc::new(RouteTable::new()));
        let mut metadata = SeoMetadata::new();
        let err = extractor
            .update_metadata(&Routed(SeoRoute::new("unknown")), &mut metadata)
            .unwrap_err();
        assert!(matches!(err, SeoError::RouteGeneration { .. }));
        assert!(!extractor.supports(&Moved("/x")));
    }

    struct EmptyGenerator;

    impl UrlGenerator for EmptyGenerator {
        fn generate(&self, _route: &SeoRoute) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_route_without_url_is_skipped() {
        let extractor = OriginalRouteExtractor::new(Arc::new(EmptyGenerator));
        let mut metadata = SeoMetadata::new();
        extractor
            .update_metadata(&Routed(SeoRoute::new("home")), &mut metadata)
            .unwrap();
        assert!(metadata.original_url.is_none());
        assert!(!extractor.supports(&Routed(SeoRoute::new(" "))));
    }
}
