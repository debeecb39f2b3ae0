//! # SEO Presentation
//!
//! Collects the SEO metadata of a content object and pushes it into a page's
//! meta registry.
//!
//! - [`SeoPresentation`]: The coordinator. Resolves extractors (through an
//!   optional [`ExtractorCache`](seo_cache::ExtractorCache)), runs them,
//!   merges the result with configured defaults and translations and writes
//!   title and meta tags to the sink
//! - [`SeoPage`]: In-memory page sink
//! - [`IdentityTranslator`] / [`CatalogTranslator`]: Translators
//! - [`RedirectResponse`]: Redirect decision for content with an original URL
//!
//! ## Example
//!
//! ```rust
//! use seo_core::{SeoConfigValues, SeoContent, SeoMetadata};
//! use seo_presentation::{IdentityTranslator, SeoPage, SeoPresentation};
//!
//! struct Article;
//!
//! impl SeoContent for Article {
//!     fn seo_metadata(&self) -> Option<SeoMetadata> {
//!         Some(SeoMetadata::new().with_title("Launch day"))
//!     }
//! }
//!
//! let config = SeoConfigValues::new().with_title("%content_title% | Example");
//! let mut presentation = SeoPresentation::new(SeoPage::new(), IdentityTranslator, config);
//! presentation.update_seo_page(&Article).unwrap();
//! assert_eq!(presentation.page().title(), "Launch day | Example");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod keywords;
mod page;
mod presentation;
mod redirect;
mod registry;
mod translator;

pub use keywords::merge_keywords;
pub use page::SeoPage;
pub use presentation::SeoPresentation;
pub use redirect::RedirectResponse;
pub use registry::ExtractorRegistry;
pub use translator::{CatalogTranslator, IdentityTranslator, DEFAULT_DOMAIN};
