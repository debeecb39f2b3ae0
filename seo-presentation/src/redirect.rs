//! Redirect decisions.

use serde::Serialize;

use seo_core::ORIGINAL_URL_REDIRECT_STATUS;

/// An HTTP redirect the host framework should answer the request with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RedirectResponse {
    target_url: String,
    status: u16,
}

impl RedirectResponse {
    /// Creates a redirect with an explicit status code.
    pub fn new(target_url: impl Into<String>, status: u16) -> Self {
        Self {
            target_url: target_url.into(),
            status,
        }
    }

    /// Creates a permanent (301) redirect.
    pub fn permanent(target_url: impl Into<String>) -> Self {
        Self::new(target_url, ORIGINAL_URL_REDIRECT_STATUS)
    }

    /// Redirect target.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true for 301 and 308.
    pub fn is_permanent(&self) -> bool {
        matches!(self.status, 301 | 308)
    }
}
