//! The per-request metadata record and its extra properties.
//!
//! A [`SeoMetadata`] is created fresh (or cloned from the content) before each
//! presentation pass, enriched by extractors, pushed into the page sink and
//! then discarded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeoError;

/// Attribute used to identify a meta tag.
///
/// `<meta name="robots">`, `<meta property="og:title">` and
/// `<meta http-equiv="Content-Type">` respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    /// `name` attribute
    Name,
    /// `property` attribute (Open Graph and friends)
    Property,
    /// `http-equiv` attribute
    HttpEquiv,
}

impl PropertyType {
    /// All supported property types, in attribute order.
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Name,
        PropertyType::Property,
        PropertyType::HttpEquiv,
    ];

    /// Returns the HTML attribute name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Name => "name",
            PropertyType::Property => "property",
            PropertyType::HttpEquiv => "http-equiv",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = SeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(PropertyType::Name),
            "property" => Ok(PropertyType::Property),
            "http-equiv" => Ok(PropertyType::HttpEquiv),
            _ => Err(SeoError::InvalidPropertyType(s.to_string())),
        }
    }
}

/// A custom meta tag: `(type, key, value)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtraProperty {
    /// Attribute identifying the tag
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Value of the identifying attribute, e.g. `og:title`
    pub key: String,
    /// Content of the tag
    pub value: String,
}

impl ExtraProperty {
    /// Creates a new extra property.
    pub fn new(kind: PropertyType, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an extra property from a raw type string.
    ///
    /// Fails for types other than `name`, `property` and `http-equiv`.
    pub fn parse(
        kind: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
        Ok(Self::new(kind.parse()?, key, value))
    }
}

/// SEO values of one piece of content for one request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    /// Page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `<meta name="description">` content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Comma separated keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    /// Custom meta tags, in emission order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_properties: Vec<ExtraProperty>,
    /// URL this content was originally published under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

impl SeoMetadata {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the meta description.
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = Some(description.into());
        self
    }

    /// Sets the meta keywords.
    pub fn with_meta_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.meta_keywords = Some(keywords.into());
        self
    }

    /// Sets the original URL.
    pub fn with_original_url(mut self, url: impl Into<String>) -> Self {
        self.original_url = Some(url.into());
        self
    }

    /// Appends an extra property.
    pub fn with_extra_property(mut self, property: ExtraProperty) -> Self {
        self.extra_properties.push(property);
        self
    }

    /// Appends an extra property.
    pub fn add_extra_property(&mut self, property: ExtraProperty) {
        self.extra_properties.push(property);
    }

    /// Removes every extra property with the given type and key.
    ///
    /// Returns the number of removed properties.
    pub fn remove_extra_property(&mut self, kind: PropertyType, key: &str) -> usize {
        let before = self.extra_properties.len();
        self.extra_properties
            .retain(|p| !(p.kind == kind && p.key == key));
        before - self.extra_properties.len()
    }

    /// Returns the extra properties of one type, in order.
    pub fn extra_properties_of(&self, kind: PropertyType) -> impl Iterator<Item = &ExtraProperty> {
        self.extra_properties.iter().filter(move |p| p.kind == kind)
    }

    /// Returns true if a property with this type and key is present.
    pub fn has_extra_property(&self, kind: PropertyType, key: &str) -> bool {
        self.extra_properties
            .iter()
            .any(|p| p.kind == kind && p.key == key)
    }

    /// Returns true if a non-empty original URL is set.
    pub fn has_original_url(&self) -> bool {
        self.original_url().is_some()
    }

    /// Title, if set and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Meta description, if set and non-empty.
    pub fn meta_description(&self) -> Option<&str> {
        non_empty(&self.meta_description)
    }

    /// Meta keywords, if set and non-empty.
    pub fn meta_keywords(&self) -> Option<&str> {
        non_empty(&self.meta_keywords)
    }

    /// Original URL, if set and non-empty.
    pub fn original_url(&self) -> Option<&str> {
        non_empty(&self.original_url)
    }

    /// Returns true if nothing would be emitted for this record.
    pub fn is_empty(&self) -> bool {
        self.title().is_none()
            && self.meta_description().is_none()
            && self.meta_keywords().is_none()
            && self.original_url().is_none()
            && self.extra_properties.is_empty()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("name", PropertyType::Name)]
    #[test_case("property", PropertyType::Property)]
    #[test_case("http-equiv", PropertyType::HttpEquiv)]
    #[test_case(" HTTP-EQUIV ", PropertyType::HttpEquiv)]
    fn test_property_type_parse(raw: &str, expected: PropertyType) {
        assert_eq!(raw.parse::<PropertyType>().unwrap(), expected);
    }

    #[test]
    fn test_property_type_rejects_unknown() {
        let err = "charset".parse::<PropertyType>().unwrap_err();
        assert!(matches!(err, SeoError::InvalidPropertyType(ref t) if t == "charset"));
        assert!(ExtraProperty::parse("itemprop", "name", "x").is_err());
    }

    #[test]
    fn test_property_type_display_roundtrips() {
        for kind in PropertyType::ALL {
            assert_eq!(kind.to_string().parse::<PropertyType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_extra_property_serde_uses_type_field() {
        let prop = ExtraProperty::new(PropertyType::HttpEquiv, "Content-Type", "text/html");
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["type"], "http-equiv");
        assert_eq!(json["key"], "Content-Type");
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let metadata = SeoMetadata::new()
            .with_title("")
            .with_meta_description("   ")
            .with_original_url("");
        assert!(metadata.title().is_none());
        assert!(metadata.meta_description().is_none());
        assert!(metadata.original_url().is_none());
        assert!(!metadata.has_original_url());
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_remove_extra_property() {
        let mut metadata = SeoMetadata::new()
            .with_extra_property(ExtraProperty::new(PropertyType::Name, "robots", "index"))
            .with_extra_property(ExtraProperty::new(PropertyType::Property, "robots", "x"))
            .with_extra_property(ExtraProperty::new(PropertyType::Name, "robots", "follow"));

        assert_eq!(metadata.remove_extra_property(PropertyType::Name, "robots"), 2);
        assert_eq!(metadata.extra_properties.len(), 1);
        assert_eq!(metadata.extra_properties_of(PropertyType::Property).count(), 1);
        assert!(metadata.has_extra_property(PropertyType::Property, "robots"));
        assert!(!metadata.has_extra_property(PropertyType::Name, "robots"));
        assert!(!metadata.is_empty());
    }

    #[test]
    fn test_deserialize_partial_record() {
        let metadata: SeoMetadata =
            serde_json::from_str(r#"{"title":"Hello","extra_properties":[{"type":"name","key":"robots","value":"noindex"}]}"#)
                .unwrap();
        assert_eq!(metadata.title(), Some("Hello"));
        assert_eq!(metadata.extra_properties[0].kind, PropertyType::Name);
        assert!(metadata.meta_keywords.is_none());
    }
}
