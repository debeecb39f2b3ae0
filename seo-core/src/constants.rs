//! Constants shared across the SEO crates.

// ═══════════════════════════════════════════════════════════════════════════════
// TRANSLATION PARAMETERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Parameter carrying the content title into the default title template.
pub const CONTENT_TITLE_PARAM: &str = "%content_title%";

/// Parameter carrying the content description into the default description template.
pub const CONTENT_DESCRIPTION_PARAM: &str = "%content_description%";

// ═══════════════════════════════════════════════════════════════════════════════
// META KEYS
// ═══════════════════════════════════════════════════════════════════════════════

/// Key of the `name` meta tag holding the page description.
pub const META_DESCRIPTION_KEY: &str = "description";

/// Key of the `name` meta tag holding the page keywords.
pub const META_KEYWORDS_KEY: &str = "keywords";

/// Key of the `property` meta tag carrying the canonical URL.
pub const CANONICAL_URL_KEY: &str = "og:url";

/// Separator used when joining keywords.
pub const KEYWORDS_SEPARATOR: &str = ", ";

// ═══════════════════════════════════════════════════════════════════════════════
// REDIRECTS
// ═══════════════════════════════════════════════════════════════════════════════

/// HTTP status used when redirecting to a content's original URL (Moved Permanently).
pub const ORIGINAL_URL_REDIRECT_STATUS: u16 = 301;

// ═══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Environment variable for the default title template.
pub const ENV_DEFAULT_TITLE: &str = "SEO_DEFAULT_TITLE";

/// Environment variable for the default description template.
pub const ENV_DEFAULT_DESCRIPTION: &str = "SEO_DEFAULT_DESCRIPTION";

/// Environment variable for the original URL behaviour (`none`, `canonical`, `redirect`).
pub const ENV_ORIGINAL_URL_BEHAVIOUR: &str = "SEO_ORIGINAL_URL_BEHAVIOUR";

/// Environment variable for the translation domain.
pub const ENV_TRANSLATION_DOMAIN: &str = "SEO_TRANSLATION_DOMAIN";
