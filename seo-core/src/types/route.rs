//! Named routes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A route name plus parameters, resolved to a URL by a [`UrlGenerator`](crate::UrlGenerator).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoRoute {
    /// Route name
    pub name: String,
    /// Route parameters
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl SeoRoute {
    /// Creates a route without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}
