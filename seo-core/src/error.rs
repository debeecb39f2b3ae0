//! Error types for SEO presentation.
//!
//! Missing data is never an error: absent titles, descriptions or URLs are
//! simply not emitted. The variants below cover malformed input and
//! failures reported by extractors or their collaborators.

use thiserror::Error;

/// Result type alias using `SeoError`.
pub type Result<T> = std::result::Result<T, SeoError>;

/// Main error type for all SEO operations.
#[derive(Debug, Error)]
pub enum SeoError {
    // ═══════════════════════════════════════════════════════════════════════════
    // METADATA ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Extra property type outside `name`, `property` and `http-equiv`.
    #[error("Invalid extra property type '{0}': expected one of name, property, http-equiv")]
    InvalidPropertyType(String),

    /// Unknown original URL behaviour.
    #[error("Invalid original URL behaviour '{0}': expected one of none, canonical, redirect")]
    InvalidOriginalUrlBehaviour(String),

    /// Original URL that cannot be used as a redirect or canonical target.
    #[error("Invalid original URL: {0}")]
    InvalidOriginalUrl(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // EXTRACTOR ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A route could not be turned into a URL.
    #[error("Route generation failed for '{route}': {reason}")]
    RouteGeneration { route: String, reason: String },

    /// An extractor failed while updating metadata.
    #[error("Extractor '{extractor}' failed: {reason}")]
    Extractor { extractor: String, reason: String },

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION & IO ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SeoError {
    /// Returns true if the error was raised by an extractor or one of its collaborators.
    pub fn is_extractor_error(&self) -> bool {
        matches!(
            self,
            SeoError::Extractor { .. }
                | SeoError::RouteGeneration { .. }
                | SeoError::InvalidOriginalUrl(_)
        )
    }

    /// Returns true if this is an input validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            SeoError::InvalidPropertyType(_)
                | SeoError::InvalidOriginalUrlBehaviour(_)
                | SeoError::InvalidOriginalUrl(_)
        )
    }
}
