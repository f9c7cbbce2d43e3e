//! Page entity and page sequence helpers.

mod kind;
mod meta;
mod route;

pub use kind::PageKind;
pub use meta::PageMeta;
pub use route::PageRoute;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::core::UrlPath;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// An ordered page sequence. Pages are shared; cloning a sequence is cheap.
///
/// Object identity (for [`find_page_pos`] and identity-based removal)
/// is `Arc` pointer identity, not structural equality.
pub type Pages = Vec<Arc<Page>>;

/// One ancestor in a page's breadcrumb chain.
#[derive(Debug, Clone, Serialize)]
pub struct Breadcrumb {
    pub title: String,
    pub url: UrlPath,
}

impl Breadcrumb {
    pub fn new(title: impl Into<String>, url: impl Into<UrlPath>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A content item produced by the site pipeline.
///
/// The pipeline constructs pages (parsing, URL assignment, breadcrumb
/// computation all happen upstream); this crate indexes and serves them.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Structural role of the page.
    pub kind: PageKind,
    /// Path segments of the page's location in the content tree
    /// (e.g. `["blog", "2020", "post"]`).
    pub sections: Vec<String>,
    /// Source path and permalink.
    pub route: PageRoute,
    /// Front-matter metadata.
    pub meta: PageMeta,
    /// Ancestor chain, site root first, the page itself last.
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl Page {
    /// The page's canonical URL.
    #[inline]
    pub fn url(&self) -> &UrlPath {
        &self.route.permalink
    }

    /// Title, falling back to the permalink if not set.
    pub fn title(&self) -> &str {
        self.meta
            .title
            .as_deref()
            .unwrap_or_else(|| self.route.permalink.as_str())
    }
}

/// Find a page's position by object identity.
pub fn find_page_pos(pages: &[Arc<Page>], page: &Arc<Page>) -> Option<usize> {
    pages.iter().position(|p| Arc::ptr_eq(p, page))
}

/// Find the first page whose source file path equals `path`.
pub fn find_page_pos_by_path(pages: &[Arc<Page>], path: &Path) -> Option<usize> {
    pages.iter().position(|p| p.route.source == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_page(source: &str, permalink: &str) -> Arc<Page> {
        Arc::new(Page {
            route: PageRoute::new(source, permalink),
            ..Default::default()
        })
    }

    #[test]
    fn test_title_fallback_to_permalink() {
        let page = make_page("content/a.md", "/a/");
        assert_eq!(page.title(), "/a/");

        let mut titled = (*page).clone();
        titled.meta.title = Some("A".to_string());
        assert_eq!(titled.title(), "A");
    }

    #[test]
    fn test_find_page_pos_uses_identity() {
        let a = make_page("content/a.md", "/a/");
        let b = make_page("content/b.md", "/b/");
        // Structurally equal to `a`, different allocation
        let twin = Arc::new((*a).clone());
        let pages = vec![a.clone(), b.clone()];

        assert_eq!(find_page_pos(&pages, &b), Some(1));
        assert_eq!(find_page_pos(&pages, &twin), None);
    }

    #[test]
    fn test_find_page_pos_by_path() {
        let pages = vec![
            make_page("content/a.md", "/a/"),
            make_page("content/b.md", "/b/"),
        ];
        assert_eq!(find_page_pos_by_path(&pages, Path::new("content/b.md")), Some(1));
        assert_eq!(find_page_pos_by_path(&pages, Path::new("content/c.md")), None);
    }
}
