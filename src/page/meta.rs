//! Page metadata parsed upstream from front matter.

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Metadata attached to a page by the content pipeline.
///
/// The pipeline owns parsing; this crate only reads the fields it needs
/// (`title`, `draft`) and carries the rest through. Unknown fields are
/// captured in `extra` as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: Option<String>,
    /// Publication date as written in the front matter.
    pub date: Option<String>,
    #[serde(default)]
    pub draft: bool,
    /// Additional user-defined fields.
    #[serde(flatten, default)]
    pub extra: JsonMap,
}
