//! Page route - source to URL mapping.

use std::path::PathBuf;

use crate::core::UrlPath;

/// Where a page came from and where it is published.
///
/// ```text
/// PageRoute {
///     source:    content/blog/2020/post.md
///     permalink: /blog/2020/post/
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageRoute {
    /// Source file path (e.g. content/blog/2020/post.md).
    pub source: PathBuf,
    /// Canonical URL path / permalink (e.g. /blog/2020/post/).
    pub permalink: UrlPath,
}

impl PageRoute {
    pub fn new(source: impl Into<PathBuf>, permalink: impl Into<UrlPath>) -> Self {
        Self {
            source: source.into(),
            permalink: permalink.into(),
        }
    }
}
