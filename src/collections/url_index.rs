//! Lazily built canonical-URL index.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::core::UrlPath;
use crate::debug;
use crate::page::Page;

/// Memoized URL -> page map, built on first lookup.
///
/// Instance-scoped: every [`PageCollections`](super::PageCollections)
/// owns its index, so builds and lookups on different stores never
/// contend. The map is built at most once per instance lifetime, from
/// whatever page sequence the first lookup sees; later mutation of the
/// store does not invalidate it. Callers must finish mutating before
/// the first URL lookup.
#[derive(Debug, Default)]
pub struct UrlIndex {
    by_url: RwLock<Option<FxHashMap<UrlPath, Arc<Page>>>>,
}

impl UrlIndex {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a page by canonical URL, building the index from
    /// `all_pages` if this is the first lookup.
    pub fn lookup(&self, url: &UrlPath, all_pages: &[Arc<Page>]) -> Option<Arc<Page>> {
        if let Some(map) = self.by_url.read().as_ref() {
            return map.get(url).cloned();
        }

        let mut guard = self.by_url.write();
        // Another writer may have built the index while we waited
        let map = guard.get_or_insert_with(|| Self::build(all_pages));
        map.get(url).cloned()
    }

    /// Whether the index has been built.
    #[allow(dead_code)]
    pub fn is_built(&self) -> bool {
        self.by_url.read().is_some()
    }

    fn build(all_pages: &[Arc<Page>]) -> FxHashMap<UrlPath, Arc<Page>> {
        let mut map = FxHashMap::with_capacity_and_hasher(all_pages.len(), Default::default());
        for page in all_pages {
            // Duplicate URLs are a caller error; last writer wins
            map.insert(page.url().clone(), page.clone());
        }
        debug!("index"; "url index built with {} entries", map.len());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageRoute;

    fn make_page(permalink: &str) -> Arc<Page> {
        Arc::new(Page {
            route: PageRoute::new("", permalink),
            ..Default::default()
        })
    }

    #[test]
    fn test_lazy_build_and_lookup() {
        let index = UrlIndex::new();
        let pages = vec![make_page("/a/"), make_page("/b/")];

        assert!(!index.is_built());
        let found = index.lookup(&UrlPath::from_page("/b/"), &pages);
        assert!(index.is_built());
        assert_eq!(found.unwrap().url(), "/b/");
    }

    #[test]
    fn test_built_once_never_invalidated() {
        let index = UrlIndex::new();
        let pages = vec![make_page("/a/")];
        assert!(index.lookup(&UrlPath::from_page("/a/"), &pages).is_some());

        // A later, larger sequence is ignored: the first build sticks
        let more = vec![make_page("/a/"), make_page("/new/")];
        assert!(index.lookup(&UrlPath::from_page("/new/"), &more).is_none());
    }

    #[test]
    fn test_duplicate_urls_last_writer_wins() {
        let index = UrlIndex::new();
        let first = Arc::new(Page {
            meta: crate::page::PageMeta {
                title: Some("first".into()),
                ..Default::default()
            },
            route: PageRoute::new("", "/dup/"),
            ..Default::default()
        });
        let second = Arc::new(Page {
            meta: crate::page::PageMeta {
                title: Some("second".into()),
                ..Default::default()
            },
            route: PageRoute::new("", "/dup/"),
            ..Default::default()
        });

        let found = index
            .lookup(&UrlPath::from_page("/dup/"), &[first, second])
            .unwrap();
        assert_eq!(found.title(), "second");
    }
}
