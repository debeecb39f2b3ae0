//! In-memory page sink.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;

use seo_core::{MetaEntry, MetaMap, PropertyType, SeoPageSink};

/// Default separator between title segments.
const DEFAULT_TITLE_SEPARATOR: &str = " - ";

/// Title and meta tags of one page.
#[derive(Clone, Debug, Serialize)]
pub struct SeoPage {
    title: String,
    #[serde(skip)]
    separator: String,
    metas: MetaMap,
}

impl SeoPage {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            separator: DEFAULT_TITLE_SEPARATOR.to_string(),
            metas: MetaMap::new(),
        }
    }

    /// Sets the separator used by [`add_title`](Self::add_title).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Prepends a segment to the title.
    pub fn add_title(&mut self, title: &str) {
        self.title = if self.title.is_empty() {
            title.to_string()
        } else {
            format!("{}{}{}", title, self.separator, self.title)
        };
    }

    /// Sets a meta tag with extra attributes.
    pub fn add_meta_with_extras(
        &mut self,
        kind: PropertyType,
        key: &str,
        value: &str,
        extras: BTreeMap<String, String>,
    ) {
        trace!(%kind, key, value, "add meta");
        self.metas.entry(kind).or_default().insert(
            key.to_string(),
            MetaEntry {
                content: value.to_string(),
                extras,
            },
        );
    }

    /// Content of a meta tag.
    pub fn meta(&self, kind: PropertyType, key: &str) -> Option<&str> {
        self.metas
            .get(&kind)
            .and_then(|m| m.get(key))
            .map(|e| e.content.as_str())
    }

    /// Returns true if the meta tag is set.
    pub fn has_meta(&self, kind: PropertyType, key: &str) -> bool {
        self.meta(kind, key).is_some()
    }

    /// Removes a meta tag, returning its entry.
    pub fn remove_meta(&mut self, kind: PropertyType, key: &str) -> Option<MetaEntry> {
        let group = self.metas.get_mut(&kind)?;
        let removed = group.remove(key);
        if group.is_empty() {
            self.metas.remove(&kind);
        }
        removed
    }

    /// Total number of meta tags.
    pub fn meta_count(&self) -> usize {
        self.metas.values().map(BTreeMap::len).sum()
    }
}

impl Default for SeoPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoPageSink for SeoPage {
    fn set_title(&mut self, title: &str) {
        trace!(title, "set title");
        self.title = title.to_string();
    }

    fn add_meta(&mut self, kind: PropertyType, key: &str, value: &str) {
        self.add_meta_with_extras(kind, key, value, BTreeMap::new());
    }

    fn metas(&self) -> &MetaMap {
        &self.metas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_title_prepends() {
        let mut page = SeoPage::new();
        page.add_title("Site");
        page.add_title("Section");
        assert_eq!(page.title(), "Section - Site");

        let mut page = SeoPage::new().with_separator(" | ");
        page.set_title("Site");
        page.add_title("Article");
        assert_eq!(page.title(), "Article | Site");
    }

    #[test]
    fn test_add_meta_replaces_same_key() {
        let mut page = SeoPage::new();
        page.add_meta(PropertyType::Name, "robots", "index");
        page.add_meta(PropertyType::Name, "robots", "noindex");
        page.add_meta(PropertyType::Property, "robots", "other");

        assert_eq!(page.meta(PropertyType::Name, "robots"), Some("noindex"));
        assert_eq!(page.meta_count(), 2);
    }

    #[test]
    fn test_remove_meta() {
        let mut page = SeoPage::new();
        page.add_meta(PropertyType::HttpEquiv, "Content-Type", "text/html");
        assert!(page.has_meta(PropertyType::HttpEquiv, "Content-Type"));

        let removed = page.remove_meta(PropertyType::HttpEquiv, "Content-Type").unwrap();
        assert_eq!(removed.content, "text/html");
        assert!(page.metas().is_empty());
        assert!(page.remove_meta(PropertyType::Name, "missing").is_none());
    }

    #[test]
    fn test_serializes_metas_by_attribute() {
        let mut page = SeoPage::new();
        page.set_title("Hello");
        page.add_meta(PropertyType::HttpEquiv, "refresh", "30");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["metas"]["http-equiv"]["refresh"]["content"], "30");
    }
}
