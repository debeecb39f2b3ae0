//! Translators.

use std::collections::HashMap;
use std::path::Path;

use seo_core::{Result, SeoError, Translator};

/// Domain used when none is given.
pub const DEFAULT_DOMAIN: &str = "messages";

/// Substitutes every parameter into `message`.
fn substitute(message: &str, parameters: &[(&str, &str)]) -> String {
    parameters
        .iter()
        .fold(message.to_string(), |acc, (key, value)| acc.replace(key, value))
}

/// Uses the message id itself as the message.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn trans(&self, id: &str, parameters: &[(&str, &str)], _domain: Option<&str>) -> String {
        substitute(id, parameters)
    }
}

/// Looks messages up in an in-memory catalog: domain → id → message.
///
/// Unknown ids fall back to the id itself.
#[derive(Clone, Debug, Default)]
pub struct CatalogTranslator {
    catalog: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message to a domain.
    pub fn with_message(
        mut self,
        domain: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.catalog
            .entry(domain.into())
            .or_default()
            .insert(id.into(), message.into());
        self
    }

    /// Loads a catalog from a JSON file shaped `{"domain": {"id": "message"}}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SeoError::ConfigError(format!("failed to read catalog {}: {}", path.display(), e))
        })?;
        Ok(Self {
            catalog: serde_json::from_str(&contents)?,
        })
    }

    /// Number of messages across all domains.
    pub fn len(&self) -> usize {
        self.catalog.values().map(HashMap::len).sum()
    }

    /// Returns true if the catalog holds no message.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Translator for CatalogTranslator {
    fn trans(&self, id: &str, parameters: &[(&str, &str)], domain: Option<&str>) -> String {
        let message = self
            .catalog
            .get(domain.unwrap_or(DEFAULT_DOMAIN))
            .and_then(|messages| messages.get(id))
            .map(String::as_str)
            .unwrap_or(id);
        substitute(message, parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_identity_substitutes_parameters() {
        let translated = IdentityTranslator.trans(
            "%content_title% | Site",
            &[("%content_title%", "Hello")],
            None,
        );
        assert_eq!(translated, "Hello | Site");
    }

    #[test]
    fn test_catalog_lookup_by_domain() {
        let translator = CatalogTranslator::new()
            .with_message("seo", "default_title", "%content_title% | Seo")
            .with_message(DEFAULT_DOMAIN, "default_title", "%content_title% | Messages");

        let params = [("%content_title%", "Hello")];
        assert_eq!(translator.trans("default_title", &params, Some("seo")), "Hello | Seo");
        assert_eq!(translator.trans("default_title", &params, None), "Hello | Messages");
        assert_eq!(translator.trans("unknown %content_title%", &params, None), "unknown Hello");
        assert_eq!(translator.len(), 2);
    }

    #[test]
    fn test_catalog_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"messages": {{"default_description": "%content_description% Read more."}}}}"#).unwrap();

        let translator = CatalogTranslator::from_json_file(file.path()).unwrap();
        assert_eq!(
            translator.trans("default_description", &[("%content_description%", "Intro.")], None),
            "Intro. Read more."
        );
    }

    #[test]
    fn test_catalog_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();
        assert!(matches!(
            CatalogTranslator::from_json_file(file.path()),
            Err(SeoError::JsonError(_))
        ));
    }
}
