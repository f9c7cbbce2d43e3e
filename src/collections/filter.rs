//! Kind filter - pure partition predicates over a page sequence.

use std::sync::Arc;

use crate::page::{Page, PageKind, Pages};

/// Keep pages of the given kind, preserving input order.
pub fn filter_by_kind(kind: PageKind, pages: &[Arc<Page>]) -> Pages {
    pages.iter().filter(|p| p.kind == kind).cloned().collect()
}

/// Keep pages of any other kind, preserving input order.
pub fn filter_by_kind_excluding(kind: PageKind, pages: &[Arc<Page>]) -> Pages {
    pages.iter().filter(|p| p.kind != kind).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_page(kind: PageKind, permalink: &str) -> Arc<Page> {
        Arc::new(Page {
            kind,
            route: crate::page::PageRoute::new("", permalink),
            ..Default::default()
        })
    }

    #[test]
    fn test_partition_preserves_order() {
        let pages = vec![
            make_page(PageKind::Home, "/"),
            make_page(PageKind::Regular, "/a/"),
            make_page(PageKind::Section, "/blog/"),
            make_page(PageKind::Regular, "/b/"),
            make_page(PageKind::Taxonomy, "/tags/go/"),
        ];

        let regular = filter_by_kind(PageKind::Regular, &pages);
        assert_eq!(regular.len(), 2);
        assert_eq!(regular[0].url(), "/a/");
        assert_eq!(regular[1].url(), "/b/");

        let index = filter_by_kind_excluding(PageKind::Regular, &pages);
        assert_eq!(index.len(), 3);
        assert_eq!(index[0].url(), "/");
        assert_eq!(index[1].url(), "/blog/");
        assert_eq!(index[2].url(), "/tags/go/");
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_kind(PageKind::Regular, &[]).is_empty());
        assert!(filter_by_kind_excluding(PageKind::Regular, &[]).is_empty());
    }
}
