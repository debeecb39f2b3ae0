//! Domain types for SEO presentation.
//!
//! - [`SeoMetadata`]: Per-request bag of SEO values
//! - [`ExtraProperty`]: Custom meta tag triple
//! - [`SeoConfigValues`]: Process-wide defaults
//! - [`SeoRoute`]: Named route used to build an original URL

mod config;
mod metadata;
mod route;

pub use config::*;
pub use metadata::*;
pub use route::*;
