//! Core value types shared across the crate.

mod url;

pub use url::UrlPath;
