//! Query API: path lookup, URL lookup, taxonomy terms, navigation state.

use std::sync::Arc;

use serde::Serialize;

use super::filter::filter_by_kind;
use super::{PageCollections, QueryError};
use crate::core::UrlPath;
use crate::page::{Page, PageKind};
use crate::utils::slug::slugify;

/// URL suffix of the site's not-found page. A 404 page is never "active".
const NOT_FOUND_SUFFIX: &str = "/404/";

/// Resolved taxonomy term: title and canonical URL.
///
/// Falls back to synthetic data when the term page does not exist
/// (e.g. during a bootstrap pass before taxonomy pages are generated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermInfo {
    pub title: String,
    pub url: UrlPath,
}

impl PageCollections {
    /// Find a page of the given kind by hierarchical path.
    ///
    /// With an empty `path`, returns the page only if it is the single
    /// page of that kind. Otherwise scans the kind-filtered sequence in
    /// order and returns the first page whose `sections` start with
    /// `path`; ties are resolved by original sequence order.
    pub fn get_page(&self, kind: PageKind, path: &[&str]) -> Option<Arc<Page>> {
        let matches = filter_by_kind(kind, self.pages());
        if matches.is_empty() {
            return None;
        }

        if path.is_empty() {
            return (matches.len() == 1).then(|| matches[0].clone());
        }

        matches
            .into_iter()
            .find(|p| {
                path.iter()
                    .enumerate()
                    .all(|(i, segment)| p.sections.get(i).is_some_and(|s| s == segment))
            })
    }

    /// Find a page by canonical URL.
    ///
    /// Applies the alias table first, then consults the lazily built
    /// URL index. The error names the requested URL. Idempotent while
    /// the store is not mutated; stale after mutation (the index is
    /// never rebuilt).
    pub fn find_page_by_url(&self, url: impl AsRef<str>) -> Result<Arc<Page>, QueryError> {
        let requested = UrlPath::from_page(url.as_ref());
        let canonical = self.url_config().resolve(&requested);
        self.lookup_url(canonical)
            .ok_or(QueryError::PageNotFound { url: requested })
    }

    /// Resolve a taxonomy term to its page's title and URL.
    ///
    /// Never fails: when no page exists at the term's canonical URL
    /// (`/{taxonomy}/{slug}/`), returns the term name and computed URL.
    pub fn term_info(&self, taxonomy: &str, term: &str) -> TermInfo {
        let url = UrlPath::from_page(&format!("/{}/{}/", taxonomy, slugify(term)));
        match self.find_page_by_url(url.as_str()) {
            Ok(page) => TermInfo {
                title: page.title().to_string(),
                url: page.url().clone(),
            },
            Err(_) => TermInfo {
                title: term.to_string(),
                url,
            },
        }
    }

    /// Whether `target_url` is "active" while rendering `current_url`:
    /// the target is the current page itself or one of its breadcrumb
    /// ancestors.
    ///
    /// The site root and the not-found page are never active targets.
    /// Fails if `current_url` does not resolve to a page.
    pub fn page_is_active(&self, current_url: &str, target_url: &str) -> Result<bool, QueryError> {
        let current = UrlPath::from_page(current_url);
        let target = UrlPath::from_page(target_url);

        if target == current {
            return Ok(true);
        }
        if target.is_root() || current.ends_with(NOT_FOUND_SUFFIX) {
            return Ok(false);
        }

        let page = self.find_page_by_url(current.as_str())?;
        Ok(page.breadcrumbs.iter().any(|crumb| crumb.url == target))
    }
}
