//! Page structural kind.

use serde::{Deserialize, Serialize};

/// Structural role of a page within the site.
///
/// A closed set: filtering on a kind that does not exist is a compile
/// error, not an empty view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Regular content page.
    #[default]
    Regular,
    /// Section index (branch bundle / list page for a content directory).
    Section,
    /// Single taxonomy term page (e.g. `/tags/go/`).
    Taxonomy,
    /// Listing of all terms of a taxonomy (e.g. `/tags/`).
    TaxonomyList,
    /// The site home page.
    Home,
}

impl PageKind {
    /// Check if this is regular content.
    #[inline]
    pub fn is_regular(&self) -> bool {
        matches!(self, Self::Regular)
    }

    /// Check if this is one of the index kinds (everything non-regular).
    #[inline]
    pub fn is_index(&self) -> bool {
        match self {
            Self::Regular => false,
            Self::Section | Self::Taxonomy | Self::TaxonomyList | Self::Home => true,
        }
    }
}
