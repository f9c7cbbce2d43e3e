//! Alias-table configuration.
//!
//! ```toml
//! [aliases]
//! "/old-tags/go/" = "/tags/go/"
//! "/2019/hello/" = "/blog/2019/hello/"
//! ```

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::core::UrlPath;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parsing error")]
    Toml(#[from] toml::de::Error),
}

/// URL configuration: custom URL -> canonical URL substitutions.
///
/// Supplied by site configuration and passed to
/// [`PageCollections`](crate::collections::PageCollections) at
/// construction. Lookups substitute the canonical URL before consulting
/// the index, so legacy links keep resolving to their pages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UrlConfig {
    /// Alias URL keyed substitution table. Both sides are normalized on load.
    pub aliases: FxHashMap<UrlPath, UrlPath>,
}

impl UrlConfig {
    /// Parse from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Substitute an alias with its canonical URL, if one is configured.
    pub fn resolve<'a>(&'a self, url: &'a UrlPath) -> &'a UrlPath {
        self.aliases.get(url).unwrap_or(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = UrlConfig::from_toml("").unwrap();
        assert!(config.aliases.is_empty());

        let url = UrlPath::from_page("/tags/go/");
        assert_eq!(config.resolve(&url), &url);
    }

    #[test]
    fn test_alias_substitution() {
        let config = UrlConfig::from_toml(
            r#"
            [aliases]
            "/old-tags/go/" = "/tags/go/"
            "#,
        )
        .unwrap();

        let alias = UrlPath::from_page("/old-tags/go/");
        assert_eq!(config.resolve(&alias), "/tags/go/");
    }

    #[test]
    fn test_aliases_normalized_on_load() {
        // Keys and values missing slashes still match normalized lookups
        let config = UrlConfig::from_toml(
            r#"
            [aliases]
            "legacy/post" = "blog/post"
            "#,
        )
        .unwrap();

        let alias = UrlPath::from_page("/legacy/post/");
        assert_eq!(config.resolve(&alias), "/blog/post/");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(UrlConfig::from_toml("aliases = 3").is_err());
    }
}
