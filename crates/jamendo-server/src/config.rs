//! Process configuration read from the environment.
//!
//! Every value falls back to its default when the variable is unset or does
//! not parse.

use std::env;

pub const DEFAULT_ITEMS_PER_PAGE: u64 = 20;
pub const DEFAULT_TAGS_PER_PAGE: u64 = 200;
pub const DEFAULT_ITEMS_PER_FEED: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Host (and optional port) used to build absolute links in feeds.
    pub site_domain: String,
    pub site_name: String,
    pub site_scheme: String,
    pub items_per_page: u64,
    pub tags_per_page: u64,
    /// Cap on entries in the artists and albums feeds.
    pub items_per_feed: u64,
    pub port: u16,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            site_domain: lookup("SITE_DOMAIN")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "localhost:8080".to_string()),
            site_name: lookup("SITE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "Jamendo mirror".to_string()),
            site_scheme: lookup("SITE_SCHEME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "http".to_string()),
            items_per_page: number("ITEMS_PER_PAGE", DEFAULT_ITEMS_PER_PAGE),
            tags_per_page: number("TAGS_PER_PAGE", DEFAULT_TAGS_PER_PAGE),
            items_per_feed: number("ITEMS_PER_FEED", DEFAULT_ITEMS_PER_FEED),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(8080),
        }
    }

    /// `scheme://domain`, without a trailing slash.
    pub fn site_root(&self) -> String {
        format!("{}://{}", self.site_scheme, self.site_domain)
    }

    /// Absolute URL for a site path such as `/artists/3/`.
    pub fn site_url(&self, path: &str) -> String {
        format!("{}{}", self.site_root(), path)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> CatalogConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.items_per_page, 20);
        assert_eq!(config.tags_per_page, 200);
        assert_eq!(config.items_per_feed, 20);
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_root(), "http://localhost:8080");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("ITEMS_PER_PAGE", "50"),
            ("TAGS_PER_PAGE", "10"),
            ("ITEMS_PER_FEED", "5"),
            ("SITE_DOMAIN", "music.example.org"),
            ("SITE_SCHEME", "https"),
        ]);
        assert_eq!(config.items_per_page, 50);
        assert_eq!(config.tags_per_page, 10);
        assert_eq!(config.items_per_feed, 5);
        assert_eq!(
            config.site_url("/feeds/artists/"),
            "https://music.example.org/feeds/artists/"
        );
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = from_pairs(&[("ITEMS_PER_PAGE", "lots"), ("ITEMS_PER_FEED", "-3")]);
        assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.items_per_feed, DEFAULT_ITEMS_PER_FEED);
    }
}
