//! Process-wide defaults consulted during a presentation pass.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ENV_DEFAULT_DESCRIPTION, ENV_DEFAULT_TITLE, ENV_ORIGINAL_URL_BEHAVIOUR, ENV_TRANSLATION_DOMAIN,
};
use crate::error::{Result, SeoError};

/// What to do with a content's original URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginalUrlBehaviour {
    /// Ignore the original URL.
    None,
    /// Expose the original URL as canonical link; left to extractors.
    #[default]
    Canonical,
    /// Redirect the request to the original URL.
    Redirect,
}

impl OriginalUrlBehaviour {
    /// Returns the configuration string for this behaviour.
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginalUrlBehaviour::None => "none",
            OriginalUrlBehaviour::Canonical => "canonical",
            OriginalUrlBehaviour::Redirect => "redirect",
        }
    }
}

impl fmt::Display for OriginalUrlBehaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginalUrlBehaviour {
    type Err = SeoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(OriginalUrlBehaviour::None),
            "canonical" => Ok(OriginalUrlBehaviour::Canonical),
            "redirect" => Ok(OriginalUrlBehaviour::Redirect),
            _ => Err(SeoError::InvalidOriginalUrlBehaviour(s.to_string())),
        }
    }
}

/// Default values merged with every content's metadata.
///
/// `title` and `description` are translation message ids; the translator
/// receives the content's own value as `%content_title%` or
/// `%content_description%`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfigValues {
    /// Default title template
    pub title: Option<String>,
    /// Default description template
    pub description: Option<String>,
    /// Handling of the content's original URL
    pub original_url_behaviour: OriginalUrlBehaviour,
    /// Translation domain passed to the translator
    pub translation_domain: Option<String>,
}

impl SeoConfigValues {
    /// Creates a configuration without defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default title template.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the default description template.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the original URL behaviour.
    pub fn with_original_url_behaviour(mut self, behaviour: OriginalUrlBehaviour) -> Self {
        self.original_url_behaviour = behaviour;
        self
    }

    /// Sets the translation domain.
    pub fn with_translation_domain(mut self, domain: impl Into<String>) -> Self {
        self.translation_domain = Some(domain.into());
        self
    }

    /// Default title template, if configured and non-empty.
    pub fn default_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Default description template, if configured and non-empty.
    pub fn default_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Loads configuration from the environment.
    ///
    /// Reads a `.env` file first when present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let original_url_behaviour = match lookup(ENV_ORIGINAL_URL_BEHAVIOUR) {
            Some(raw) => raw.parse()?,
            None => OriginalUrlBehaviour::default(),
        };

        Ok(Self {
            title: lookup(ENV_DEFAULT_TITLE),
            description: lookup(ENV_DEFAULT_DESCRIPTION),
            original_url_behaviour,
            translation_domain: lookup(ENV_TRANSLATION_DOMAIN),
        })
    }

    /// Loads configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SeoError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_behaviour_parse() {
        assert_eq!("REDIRECT".parse::<OriginalUrlBehaviour>().unwrap(), OriginalUrlBehaviour::Redirect);
        assert_eq!("none".parse::<OriginalUrlBehaviour>().unwrap(), OriginalUrlBehaviour::None);
        assert!("moved".parse::<OriginalUrlBehaviour>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = SeoConfigValues::default();
        assert!(config.default_title().is_none());
        assert_eq!(config.original_url_behaviour, OriginalUrlBehaviour::Canonical);
    }

    #[test]
    fn test_empty_templates_are_unset() {
        let config = SeoConfigValues::new().with_title("").with_description("");
        assert!(config.default_title().is_none());
        assert!(config.default_description().is_none());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_DEFAULT_TITLE, "%content_title% | Site"),
            (ENV_ORIGINAL_URL_BEHAVIOUR, "redirect"),
        ]
        .into_iter()
        .collect();

        let config = SeoConfigValues::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.default_title(), Some("%content_title% | Site"));
        assert!(config.description.is_none());
        assert_eq!(config.original_url_behaviour, OriginalUrlBehaviour::Redirect);
    }

    #[test]
    fn test_from_lookup_rejects_bad_behaviour() {
        let result = SeoConfigValues::from_lookup(|k| {
            (k == ENV_ORIGINAL_URL_BEHAVIOUR).then(|| "sometimes".to_string())
        });
        assert!(matches!(result, Err(SeoError::InvalidOriginalUrlBehaviour(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title":"default_title","original_url_behaviour":"none","translation_domain":"seo"}}"#
        )
        .unwrap();

        let config = SeoConfigValues::from_json_file(file.path()).unwrap();
        assert_eq!(config.default_title(), Some("default_title"));
        assert_eq!(config.original_url_behaviour, OriginalUrlBehaviour::None);
        assert_eq!(config.translation_domain.as_deref(), Some("seo"));
        assert!(config.description.is_none());
    }

    #[test]
    fn test_from_missing_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SeoConfigValues::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(SeoError::ConfigError(_))));
    }
}
