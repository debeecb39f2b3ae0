//! # SEO Extractors
//!
//! Built-in extractors deriving [`SeoMetadata`](seo_core::SeoMetadata) fields
//! from content capabilities. Each one targets a single field and only
//! activates when the content exposes the matching capability.
//!
//! | Extractor | Capability | Field |
//! |---|---|---|
//! | [`TitleExtractor`] | `seo_title` | `title` |
//! | [`DescriptionExtractor`] | `seo_description` | `meta_description` |
//! | [`OriginalUrlExtractor`] | `seo_original_url` | `original_url` |
//! | [`OriginalRouteExtractor`] | `seo_original_route` | `original_url` |
//! | [`KeywordsExtractor`] | `seo_keywords` | `meta_keywords` |
//! | [`ExtrasExtractor`] | `seo_extras` | `extra_properties` |
//! | [`CanonicalUrlExtractor`] | resolved `original_url` | `extra_properties` (`og:url`) |

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod canonical;
mod description;
mod extras;
mod keywords;
mod original_url;
mod routes;
mod title;

use std::sync::Arc;

use seo_core::traits::SeoExtractor;

pub use canonical::CanonicalUrlExtractor;
pub use description::DescriptionExtractor;
pub use extras::ExtrasExtractor;
pub use keywords::KeywordsExtractor;
pub use original_url::{OriginalRouteExtractor, OriginalUrlExtractor};
pub use routes::RouteTable;
pub use title::TitleExtractor;

/// The default strategies: title, description and original URL.
pub fn default_extractors() -> Vec<Arc<dyn SeoExtractor>> {
    vec![
        Arc::new(TitleExtractor),
        Arc::new(DescriptionExtractor),
        Arc::new(OriginalUrlExtractor),
    ]
}
