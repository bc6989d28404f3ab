//! Urlify turns titles and phrases into URL-safe slugs: lowercase ASCII words joined by single
//! hyphens. Characters from the supported scripts are transliterated, filler words are
//! dropped, whatever else isn't a letter, digit or separator is discarded and the result can
//! optionally be capped to a maximum length.
//!
//! Use [`slugify()`] for one-off conversions or a [`SlugBuilder`] to configure and reuse
//! options. Nothing here ever fails, the worst case is an empty slug.

pub mod builder;
pub mod charmap;
pub mod config;
pub mod pipeline;
pub mod slugify;
pub mod stopwords;

pub use builder::SlugBuilder;
pub use config::{ConfigError, UrlifyConfig};
pub use pipeline::{SlugOptions, slugify_with};
pub use slugify::{slugify, slugify_in};
