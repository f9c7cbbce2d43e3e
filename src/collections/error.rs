//! Query error types.

use thiserror::Error;

use crate::core::UrlPath;

/// Lookup failures surfaced to the caller.
///
/// Not-found is always returned, never logged or swallowed internally.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("page with url `{url}` not found")]
    PageNotFound { url: UrlPath },
}
