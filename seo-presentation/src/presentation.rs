//! The presentation coordinator.

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use seo_cache::{ExtractorCache, ExtractorCollection};
use seo_core::{
    OriginalUrlBehaviour, PropertyType, Result, SeoConfigValues, SeoContent, SeoExtractor,
    SeoMetadata, SeoPageSink, Translator, CONTENT_DESCRIPTION_PARAM, CONTENT_TITLE_PARAM,
    META_DESCRIPTION_KEY, META_KEYWORDS_KEY,
};
use seo_extractors::CanonicalUrlExtractor;

use crate::keywords::merge_keywords;
use crate::redirect::RedirectResponse;
use crate::registry::ExtractorRegistry;

/// Priority of the canonical URL extractor: after every other registered extractor.
const CANONICAL_EXTRACTOR_PRIORITY: i32 = i32::MIN;

/// Pushes the SEO metadata of content into a page sink.
///
/// # Extractors
///
/// Two kinds of extractors are consulted on every pass:
///
/// - *direct* extractors added with [`add_extractor`](Self::add_extractor),
///   checked against every content and run first
/// - *registered* extractors added with
///   [`register_extractor`](Self::register_extractor), resolved once per
///   content type and kept in the [`ExtractorCache`] when one is configured
///
/// Registered extractors run after direct ones and therefore win when both
/// write the same field.
pub struct SeoPresentation<P, T> {
    page: P,
    translator: T,
    config: SeoConfigValues,
    cache: Option<Arc<dyn ExtractorCache>>,
    extractors: Vec<Arc<dyn SeoExtractor>>,
    registry: ExtractorRegistry,
    redirect: Option<RedirectResponse>,
}

impl<P: SeoPageSink, T: Translator> SeoPresentation<P, T> {
    /// Creates a coordinator without cache or extractors.
    pub fn new(page: P, translator: T, config: SeoConfigValues) -> Self {
        Self {
            page,
            translator,
            config,
            cache: None,
            extractors: Vec::new(),
            registry: ExtractorRegistry::new(),
            redirect: None,
        }
    }

    /// Caches resolved extractor collections in `cache`.
    pub fn with_cache(mut self, cache: Arc<dyn ExtractorCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Adds the title, description and original URL extractors as direct extractors.
    ///
    /// With [`OriginalUrlBehaviour::Canonical`] configured, also registers a
    /// [`CanonicalUrlExtractor`] at the lowest priority so it sees the
    /// original URL set by every other extractor.
    pub fn with_default_extractors(mut self) -> Self {
        for extractor in seo_extractors::default_extractors() {
            self.add_extractor(extractor);
        }
        if self.config.original_url_behaviour == OriginalUrlBehaviour::Canonical {
            self.register_extractor(
                Arc::new(CanonicalUrlExtractor::new()),
                CANONICAL_EXTRACTOR_PRIORITY,
            );
        }
        self
    }

    /// Adds an extractor consulted on every pass, bypassing the cache.
    pub fn add_extractor(&mut self, extractor: Arc<dyn SeoExtractor>) {
        debug!(extractor = extractor.name(), "Adding direct extractor");
        self.extractors.push(extractor);
    }

    /// Registers a cacheable extractor. Higher priorities run first.
    pub fn register_extractor(&mut self, extractor: Arc<dyn SeoExtractor>, priority: i32) {
        self.registry.register(extractor, priority);
    }

    /// Registered extractors.
    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Configured defaults.
    pub fn config(&self) -> &SeoConfigValues {
        &self.config
    }

    /// Replaces the configured defaults.
    pub fn set_config(&mut self, config: SeoConfigValues) {
        self.config = config;
    }

    /// The page sink.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The page sink, mutably.
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Consumes the coordinator, returning the page sink.
    pub fn into_page(self) -> P {
        self.page
    }

    /// Redirect decided by the last [`update_seo_page`](Self::update_seo_page) call.
    pub fn redirect_response(&self) -> Option<&RedirectResponse> {
        self.redirect.as_ref()
    }

    /// Writes the SEO metadata of `content` to the page.
    ///
    /// Absent values are skipped. Errors returned by extractors abort the
    /// pass and are propagated unchanged.
    #[instrument(skip_all, fields(content_type = content.content_type()))]
    pub fn update_seo_page(&mut self, content: &dyn SeoContent) -> Result<()> {
        self.redirect = None;
        let metadata = self.seo_metadata(content)?;

        if let Some(title) = self.create_title(&metadata) {
            self.page.set_title(&title);
        }

        if let Some(description) = self.create_description(&metadata) {
            self.page
                .add_meta(PropertyType::Name, META_DESCRIPTION_KEY, &description);
        }

        for property in &metadata.extra_properties {
            self.page.add_meta(property.kind, &property.key, &property.value);
        }

        if let Some(keywords) = self.create_keywords(&metadata) {
            self.page.add_meta(PropertyType::Name, META_KEYWORDS_KEY, &keywords);
        }

        self.redirect = self.create_redirect(&metadata);
        Ok(())
    }

    /// Resolves the metadata of `content` after running every applicable extractor.
    pub fn seo_metadata(&self, content: &dyn SeoContent) -> Result<SeoMetadata> {
        let mut metadata = content.seo_metadata().unwrap_or_default();

        for extractor in self.extractors.iter().filter(|e| e.supports(content)) {
            trace!(extractor = extractor.name(), "Running direct extractor");
            extractor.update_metadata(content, &mut metadata)?;
        }

        let resolved = self.resolve_extractors(content);
        for extractor in resolved.iter() {
            trace!(extractor = extractor.name(), "Running resolved extractor");
            extractor.update_metadata(content, &mut metadata)?;
        }

        Ok(metadata)
    }

    fn resolve_extractors(&self, content: &dyn SeoContent) -> Arc<ExtractorCollection> {
        let Some(cache) = &self.cache else {
            return Arc::new(self.registry.resolve(content));
        };

        let content_type = content.content_type();
        match cache.load_extractors_from_cache(content_type) {
            Some(cached) if cached.is_fresh() => {
                debug!(content_type, count = cached.len(), "Extractor cache hit");
                cached
            }
            stale => {
                if stale.is_some() {
                    debug!(content_type, "Cached extractors are stale, rebuilding");
                } else {
                    debug!(content_type, "Extractor cache miss");
                }
                let rebuilt = Arc::new(self.registry.resolve(content));
                cache.put_extractors_in_cache(content_type, rebuilt.clone());
                rebuilt
            }
        }
    }

    fn create_title(&self, metadata: &SeoMetadata) -> Option<String> {
        let title = metadata.title()?;
        Some(match self.config.default_title() {
            Some(template) => self.translate(template, CONTENT_TITLE_PARAM, title),
            None => title.to_string(),
        })
    }

    fn create_description(&self, metadata: &SeoMetadata) -> Option<String> {
        let description = metadata.meta_description()?;
        Some(match self.config.default_description() {
            Some(template) => self.translate(template, CONTENT_DESCRIPTION_PARAM, description),
            None => description.to_string(),
        })
    }

    fn create_keywords(&self, metadata: &SeoMetadata) -> Option<String> {
        let keywords = metadata.meta_keywords()?;
        let existing = self
            .page
            .metas()
            .get(&PropertyType::Name)
            .and_then(|names| names.get(META_KEYWORDS_KEY))
            .map(|entry| entry.content.as_str())
            .unwrap_or_default();

        let merged = merge_keywords(existing, keywords);
        (!merged.is_empty()).then_some(merged)
    }

    fn create_redirect(&self, metadata: &SeoMetadata) -> Option<RedirectResponse> {
        match self.config.original_url_behaviour {
            OriginalUrlBehaviour::Redirect => {
                let url = metadata.original_url()?;
                debug!(target_url = url, "Redirecting to original URL");
                Some(RedirectResponse::permanent(url))
            }
            // Canonical URLs are emitted as extra properties by CanonicalUrlExtractor.
            OriginalUrlBehaviour::Canonical | OriginalUrlBehaviour::None => None,
        }
    }

    fn translate(&self, template: &str, param: &str, value: &str) -> String {
        self.translator.trans(
            template,
            &[(param, value)],
            self.config.translation_domain.as_deref(),
        )
    }
}
