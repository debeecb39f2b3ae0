//! Pattern-based URL generation.

use std::collections::HashMap;

use url::form_urlencoded;
use url::Url;

use seo_core::{Result, SeoError, SeoRoute, UrlGenerator};

/// Percent-encodes `value` as a single path segment (`/` included).
fn encode_path_segment(value: &str) -> Option<String> {
    let mut scratch = Url::parse("http://localhost/").ok()?;
    scratch.path_segments_mut().ok()?.clear().push(value);
    scratch.path().strip_prefix('/').map(str::to_string)
}

/// Maps route names to path patterns such as `/news/{slug}`.
///
/// Parameters matching a placeholder are substituted (percent-encoded as a
/// path segment);
/// the rest are appended as a query string. With a base URL configured the
/// generated URLs are absolute.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    patterns: HashMap<String, String>,
    base_url: Option<Url>,
}

impl RouteTable {
    /// Creates an empty table generating relative URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route.
    pub fn with_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.insert(name.into(), pattern.into());
        self
    }

    /// Generates absolute URLs relative to `base_url`.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Returns true if the route is known.
    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }
}

impl UrlGenerator for RouteTable {
    fn generate(&self, route: &SeoRoute) -> Result<String> {
        let failed = |reason: String| SeoError::RouteGeneration {
            route: route.name.clone(),
            reason,
        };

        let pattern = self
            .patterns
            .get(&route.name)
            .ok_or_else(|| failed("unknown route".into()))?;

        let mut path = String::with_capacity(pattern.len());
        let mut used = Vec::new();
        let mut rest = pattern.as_str();
        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let end = rest[start..]
                .find('}')
                .map(|i| start + i)
                .ok_or_else(|| failed(format!("unterminated placeholder in '{}'", pattern)))?;
            let name = &rest[start + 1..end];
            let value = route
                .parameters
                .get(name)
                .ok_or_else(|| failed(format!("missing parameter '{}'", name)))?;
            let encoded = encode_path_segment(value)
                .ok_or_else(|| failed(format!("cannot encode parameter '{}'", name)))?;
            path.push_str(&encoded);
            used.push(name);
            rest = &rest[end + 1..];
        }
        path.push_str(rest);

        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut has_query = false;
        for (key, value) in &route.parameters {
            if !used.contains(&key.as_str()) {
                query.append_pair(key, value);
                has_query = true;
            }
        }
        if has_query {
            path.push('?');
            path.push_str(&query.finish());
        }

        match &self.base_url {
            Some(base) => base
                .join(&path)
                .map(String::from)
                .map_err(|e| failed(e.to_string())),
            None => Ok(path),
        }
    }
}
