//! `[catalog]` section configuration.
//!
//! Catalog tier, image format hint and optional entity allow-lists.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[catalog]` section in storegen.toml - catalog-wide switches.
///
/// # Example
/// ```toml
/// [catalog]
/// lite = false
/// webp = true
/// collection_titles = "Sale,New Arrivals"
/// product_tags = "featured,summer"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Lite-tier catalogs carry no pages, blogs or articles; their page
    /// generation is skipped entirely.
    #[serde(default)]
    pub lite: bool,

    /// Whether templates should prefer webp image variants.
    #[serde(default = "defaults::catalog::webp")]
    #[educe(Default = defaults::catalog::webp())]
    pub webp: bool,

    /// Comma-separated allow-list of collection titles. Unset means all
    /// collections.
    #[serde(default)]
    pub collection_titles: Option<String>,

    /// Comma-separated allow-list of product tags. Unset means all
    /// products.
    #[serde(default)]
    pub product_tags: Option<String>,
}

impl CatalogConfig {
    /// Parsed collection title allow-list, `None` when unrestricted.
    pub fn collection_title_list(&self) -> Option<Vec<String>> {
        self.collection_titles.as_deref().map(split_list)
    }

    /// Parsed product tag allow-list, `None` when unrestricted.
    pub fn product_tag_list(&self) -> Option<Vec<String>> {
        self.product_tags.as_deref().map(split_list)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
