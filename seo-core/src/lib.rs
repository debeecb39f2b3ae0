//! # SEO Core
//!
//! Core types, errors, and traits for SEO metadata presentation.
//!
//! This crate provides the foundational building blocks used by all other crates:
//!
//! - **Types**: The per-request [`SeoMetadata`] record, [`ExtraProperty`] and
//!   the process-wide [`SeoConfigValues`]
//! - **Errors**: A single [`SeoError`] enum with a crate-wide [`Result`]
//! - **Constants**: Translation parameter names, meta keys and env variables
//! - **Traits**: Content capabilities, the page sink, the translator and extractors
//!
//! ## Example
//!
//! ```rust
//! use seo_core::{ExtraProperty, PropertyType, SeoMetadata};
//!
//! let mut metadata = SeoMetadata::new().with_title("Hello");
//! metadata.add_extra_property(ExtraProperty::new(PropertyType::Property, "og:title", "Hello"));
//! let json = serde_json::to_string(&metadata).unwrap();
//! assert!(json.contains("og:title"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, SeoError};
pub use traits::*;
pub use types::*;
