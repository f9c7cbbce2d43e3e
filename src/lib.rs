//! pagedex - in-memory page collections for site generation.
//!
//! A site-generation pipeline produces pages; this crate indexes them
//! and serves the render phase:
//!
//! - [`PageCollections`] owns the authoritative page sequence and the
//!   kind-filtered views of it (`regular_pages`, `index_pages`, ...)
//! - URL lookups go through a lazily built canonical-URL index with
//!   alias substitution ([`UrlConfig`])
//! - navigation queries ([`PageCollections::page_is_active`]) walk the
//!   breadcrumb chains the pipeline attached to each page
//!
//! The pipeline mutates the store while collecting content, calls
//! [`PageCollections::refresh`], and then queries it while rendering.

mod collections;
mod config;
mod core;
pub mod logger;
mod page;
mod utils;

pub use collections::{
    PageCollections, QueryError, TermInfo, filter_by_kind, filter_by_kind_excluding,
};
pub use config::{ConfigError, UrlConfig};
pub use core::UrlPath;
pub use page::{
    Breadcrumb, JsonMap, Page, PageKind, PageMeta, PageRoute, Pages, find_page_pos,
    find_page_pos_by_path,
};
pub use utils::slug::slugify;
