//! JSON content documents.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use seo_core::{ExtraProperty, SeoContent, SeoMetadata, SeoRoute};

/// Content type used when a document does not name one.
pub const DEFAULT_CONTENT_TYPE: &str = "document";

/// A content object read from a JSON file.
///
/// Every field is optional. A document carrying `metadata` behaves like
/// content that exposes its own metadata record; the remaining fields feed
/// the matching extractors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentDocument {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SeoMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_route: Option<SeoRoute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Vec<ExtraProperty>>,
}

impl ContentDocument {
    /// Reads a document from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open content file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid content document {}", path.display()))
    }
}

impl SeoContent for ContentDocument {
    fn content_type(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    fn seo_metadata(&self) -> Option<SeoMetadata> {
        self.metadata.clone()
    }

    fn seo_title(&self) -> Option<String> {
        self.title.clone()
    }

    fn seo_description(&self) -> Option<String> {
        self.description.clone()
    }

    fn seo_original_url(&self) -> Option<String> {
        self.original_url.clone()
    }

    fn seo_original_route(&self) -> Option<SeoRoute> {
        self.original_route.clone()
    }

    fn seo_keywords(&self) -> Option<Vec<String>> {
        self.keywords.clone()
    }

    fn seo_extras(&self) -> Option<Vec<ExtraProperty>> {
        self.extras.clone()
    }
}
