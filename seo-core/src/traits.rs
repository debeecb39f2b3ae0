//! Collaborator traits.
//!
//! These traits define the seams between the presentation coordinator and
//! the outside world: the content being rendered, the page sink receiving
//! meta tags, the translator, URL generation and the extractors themselves.

use std::any::Any;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ExtraProperty, PropertyType, SeoMetadata, SeoRoute};

// ═══════════════════════════════════════════════════════════════════════════════
// CONTENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Upcast to [`Any`], implemented for every `'static` type.
pub trait AsAny {
    /// Returns `self` as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A piece of content that can be presented.
///
/// Every capability is optional and defaults to `None`. Extractors decide
/// whether they apply by probing these accessors, so a content type opts in
/// to an extractor simply by overriding the matching method.
pub trait SeoContent: AsAny + Send + Sync {
    /// Key under which the resolved extractors for this content are cached.
    ///
    /// Defaults to the Rust type name.
    fn content_type(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Full metadata record carried by the content itself.
    fn seo_metadata(&self) -> Option<SeoMetadata> {
        None
    }

    /// Title to use for the page.
    fn seo_title(&self) -> Option<String> {
        None
    }

    /// Description to use for the page.
    fn seo_description(&self) -> Option<String> {
        None
    }

    /// URL the content was originally published under.
    fn seo_original_url(&self) -> Option<String> {
        None
    }

    /// Route the content was originally published under.
    fn seo_original_route(&self) -> Option<SeoRoute> {
        None
    }

    /// Keywords describing the content.
    fn seo_keywords(&self) -> Option<Vec<String>> {
        None
    }

    /// Custom meta tags.
    fn seo_extras(&self) -> Option<Vec<ExtraProperty>> {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PAGE SINK
// ═══════════════════════════════════════════════════════════════════════════════

/// Content and extra attributes of one emitted meta tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    /// `content` attribute
    pub content: String,
    /// Additional attributes rendered on the tag
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl MetaEntry {
    /// Creates an entry without extra attributes.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            extras: BTreeMap::new(),
        }
    }
}

/// Emitted meta tags: type → key → entry.
pub type MetaMap = BTreeMap<PropertyType, BTreeMap<String, MetaEntry>>;

/// The page-rendering service receiving the final title and meta values.
pub trait SeoPageSink {
    /// Replaces the page title.
    fn set_title(&mut self, title: &str);

    /// Sets a meta tag, replacing any previous value for the same type and key.
    fn add_meta(&mut self, kind: PropertyType, key: &str, value: &str);

    /// Meta tags currently registered on the page.
    fn metas(&self) -> &MetaMap;
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRANSLATOR
// ═══════════════════════════════════════════════════════════════════════════════

/// Message catalog lookup.
pub trait Translator {
    /// Translates a message id, substituting `parameters` into the result.
    fn trans(&self, id: &str, parameters: &[(&str, &str)], domain: Option<&str>) -> String;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn trans(&self, id: &str, parameters: &[(&str, &str)], domain: Option<&str>) -> String {
        (**self).trans(id, parameters, domain)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// URL GENERATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Turns named routes into URLs.
pub trait UrlGenerator: Send + Sync {
    /// Generates the URL for `route`.
    fn generate(&self, route: &SeoRoute) -> Result<String>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXTRACTORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Derives SEO metadata from content it supports.
///
/// Several extractors may touch the same field; they run in collection order
/// and the last writer wins.
pub trait SeoExtractor: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns true if this extractor applies to `content`. Must be side-effect free.
    fn supports(&self, content: &dyn SeoContent) -> bool;

    /// Updates `metadata` from `content`.
    fn update_metadata(&self, content: &dyn SeoContent, metadata: &mut SeoMetadata) -> Result<()>;
}
