//! Page collection store.
//!
//! [`PageCollections`] owns the authoritative page sequence collected
//! during a site build and the derived views the render phase reads.
//! Lifecycle: create once per build (empty or seeded), mutate while
//! collecting content, [`refresh`](PageCollections::refresh), then
//! treat as read-mostly while rendering.

mod error;
mod filter;
mod query;
mod url_index;

pub use error::QueryError;
pub use filter::{filter_by_kind, filter_by_kind_excluding};
pub use query::TermInfo;

use std::path::Path;
use std::sync::Arc;

use url_index::UrlIndex;

use crate::config::UrlConfig;
use crate::core::UrlPath;
use crate::debug;
use crate::page::{Page, PageKind, Pages, find_page_pos, find_page_pos_by_path};

/// The page collections for a site.
///
/// Derived views (`regular_pages`, `all_regular_pages`, `index_pages`)
/// are snapshots taken by the last [`refresh`](Self::refresh); they are
/// not recomputed on mutation. The URL index is built once, on the
/// first URL lookup. The caller owns the ordering between mutation,
/// refresh, and lookup.
#[derive(Debug, Default)]
pub struct PageCollections {
    /// Current-language pages, all kinds. Assigned by the pipeline.
    pages: Pages,
    /// Pages across all languages, all kinds. Assigned by the pipeline.
    all_pages: Pages,
    /// Regular subset of `pages`, as of the last refresh.
    regular_pages: Pages,
    /// Regular subset of `all_pages`, as of the last refresh.
    all_regular_pages: Pages,
    /// Non-regular subset of `pages` (sections, taxonomies, home),
    /// as of the last refresh.
    index_pages: Pages,
    /// Authoritative, unfiltered sequence across all languages and
    /// draft states. The only structure the mutation API touches.
    raw_all_pages: Pages,
    /// Alias substitutions applied before URL lookups.
    url_config: UrlConfig,
    /// Lazily built URL -> page map over `all_pages`.
    url_index: UrlIndex,
}

impl PageCollections {
    /// Create an empty store.
    pub fn new(url_config: UrlConfig) -> Self {
        Self {
            url_config,
            ..Default::default()
        }
    }

    /// Create a store seeded with an existing page sequence.
    ///
    /// Used for narrow, ephemeral views such as "pages under this
    /// section".
    pub fn from_raw(raw_all_pages: Pages, url_config: UrlConfig) -> Self {
        Self {
            raw_all_pages,
            url_config,
            ..Default::default()
        }
    }

    // === Working sets ===

    /// Current-language pages, all kinds.
    #[inline]
    pub fn pages(&self) -> &[Arc<Page>] {
        &self.pages
    }

    /// Pages across all languages.
    #[inline]
    pub fn all_pages(&self) -> &[Arc<Page>] {
        &self.all_pages
    }

    /// Regular pages of the current language, as of the last refresh.
    #[inline]
    pub fn regular_pages(&self) -> &[Arc<Page>] {
        &self.regular_pages
    }

    /// Regular pages across all languages, as of the last refresh.
    #[inline]
    pub fn all_regular_pages(&self) -> &[Arc<Page>] {
        &self.all_regular_pages
    }

    /// Index pages (sections, taxonomies, home) of the current
    /// language, as of the last refresh.
    #[inline]
    pub fn index_pages(&self) -> &[Arc<Page>] {
        &self.index_pages
    }

    /// The authoritative raw sequence.
    #[inline]
    pub fn raw_all_pages(&self) -> &[Arc<Page>] {
        &self.raw_all_pages
    }

    /// Assign the current-language working set. Call `refresh` after.
    pub fn set_pages(&mut self, pages: Pages) {
        self.pages = pages;
    }

    /// Assign the all-languages working set. Call `refresh` after.
    pub fn set_all_pages(&mut self, pages: Pages) {
        self.all_pages = pages;
    }

    /// Recompute the kind-filtered views from the working sets.
    ///
    /// Must be called after any change to `pages` / `all_pages`; the
    /// store does not refresh itself on mutation.
    pub fn refresh(&mut self) {
        self.index_pages = filter_by_kind_excluding(PageKind::Regular, &self.pages);
        self.regular_pages = filter_by_kind(PageKind::Regular, &self.pages);
        self.all_regular_pages = filter_by_kind(PageKind::Regular, &self.all_pages);
        debug!(
            "store";
            "refreshed views: {} regular, {} index",
            self.regular_pages.len(),
            self.index_pages.len()
        );
    }

    // === Mutation API ===
    //
    // Mutations touch only `raw_all_pages`. They never refresh derived
    // views and never touch the URL index; do not rely on URL lookups
    // after mutating.

    /// Append a page to the raw sequence.
    pub fn add_page(&mut self, page: Arc<Page>) {
        self.raw_all_pages.push(page);
    }

    /// Remove the first page that is reference-equal to `page`.
    /// No-op if absent.
    pub fn remove_page(&mut self, page: &Arc<Page>) {
        if let Some(i) = find_page_pos(&self.raw_all_pages, page) {
            self.raw_all_pages.remove(i);
        }
    }

    /// Remove the first page whose source file path equals `path`.
    /// No-op if absent.
    pub fn remove_page_by_path(&mut self, path: &Path) {
        if let Some(i) = find_page_pos_by_path(&self.raw_all_pages, path) {
            self.raw_all_pages.remove(i);
        }
    }

    /// Remove a reference-equal prior occurrence of `page`, then append.
    ///
    /// Removal is identity-based: a re-parsed page at the same source
    /// path is a different object and will NOT displace the old one —
    /// use [`replace_page_by_path`](Self::replace_page_by_path) for
    /// that.
    pub fn replace_page(&mut self, page: Arc<Page>) {
        self.remove_page(&page);
        self.add_page(page);
    }

    /// Remove the first page at the same source path, then append.
    ///
    /// This is the operation to use when a page has been re-parsed and
    /// the new object should displace the old one.
    pub fn replace_page_by_path(&mut self, page: Arc<Page>) {
        let path = page.route.source.clone();
        self.remove_page_by_path(&path);
        self.add_page(page);
    }

    // === Internal ===

    #[inline]
    pub(crate) fn url_config(&self) -> &UrlConfig {
        &self.url_config
    }

    /// Consult the URL index, building it from `all_pages` on first use.
    pub(crate) fn lookup_url(&self, url: &UrlPath) -> Option<Arc<Page>> {
        self.url_index.lookup(url, &self.all_pages)
    }
}
