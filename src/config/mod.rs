//! Site configuration management for `storegen.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[routes]`    | Route segments per entity kind                   |
//! | `[listing]`   | Pagination page sizes                            |
//! | `[catalog]`   | Catalog tier, webp hint, allow-list filters      |
//! | `[build]`     | Catalog snapshot, output and cache locations     |
//! | `[[main_page]]` | Ordered main page sections                     |
//! | `[extra]`     | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [routes]
//! base_path = "shop"
//!
//! [listing]
//! products_per_collection_page = 12
//!
//! [catalog]
//! lite = false
//!
//! [[main_page]]
//! type = "collection"
//! handle = "frontpage"
//!
//! [[main_page]]
//! type = "carousel"
//! children = [{ type = "product", handle = "mug" }]
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod build;
mod catalog;
pub mod defaults;
mod error;
mod listing;
mod routes;

// Re-export public types used by other modules
pub use catalog::CatalogConfig;
pub use routes::RoutesConfig;

// Internal imports used in this module
use build::BuildConfig;
use error::ConfigError;
use listing::ListingConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Main Page Tree
// ============================================================================

/// Section kind on the configured main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MainPageKind {
    Collection,
    Product,
    Carousel,
    Header,
    /// Unrecognized section kinds are carried but contribute nothing.
    Unknown,
}

impl From<String> for MainPageKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "collection" => Self::Collection,
            "product" => Self::Product,
            "carousel" => Self::Carousel,
            "header" => Self::Header,
            _ => Self::Unknown,
        }
    }
}

/// One `[[main_page]]` entry: a section of the configured main page.
///
/// `collection` and `product` sections contribute their own handle;
/// `carousel` and `header` sections contribute their children's handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainPageEntry {
    #[serde(rename = "type")]
    pub kind: MainPageKind,

    #[serde(default)]
    pub handle: String,

    #[serde(default)]
    pub children: Vec<MainPageChild>,
}

/// A child of a `carousel` or `header` main page section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainPageChild {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    pub handle: String,
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing storegen.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Route segment settings
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Pagination page sizes
    #[serde(default)]
    pub listing: ListingConfig,

    /// Catalog tier and filters
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Build paths
    #[serde(default)]
    pub build: BuildConfig,

    /// Ordered main page sections
    #[serde(default)]
    pub main_page: Vec<MainPageEntry>,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl StoreConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Commands::Build { clean } = &cli.command {
            if *clean {
                self.build.clean = true;
            }
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        if let Some(catalog) = cli.catalog.as_ref() {
            self.build.catalog = catalog.clone();
        }
        if let Some(output) = cli.output.as_ref() {
            self.build.output = output.clone();
        }

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path and all directory paths
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.catalog = Self::normalize_path(&root.join(&self.build.catalog));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.cache = Self::normalize_path(&root.join(&self.build.cache));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration once at startup
    pub fn validate(&self) -> Result<()> {
        if self.listing.products_per_collection_page == 0 {
            bail!(ConfigError::Validation(
                "[listing.products_per_collection_page] must be positive".into()
            ));
        }

        if self.listing.articles_per_blog_page == 0 {
            bail!(ConfigError::Validation(
                "[listing.articles_per_blog_page] must be positive".into()
            ));
        }

        if !self.build.catalog.exists() {
            bail!(ConfigError::Validation(format!(
                "[build.catalog] not found: {}",
                self.build.catalog.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_empty() {
        let config = StoreConfig::from_str("").unwrap();
        assert_eq!(config.routes.product_path, "product");
        assert_eq!(config.listing.products_per_collection_page, 9);
        assert!(config.main_page.is_empty());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = StoreConfig::from_str(
            r#"
            [routes
            base_path = "shop"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = StoreConfig::from_str(
            r#"
            [unknown_section]
            field = "value"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = StoreConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = StoreConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_main_page_entries() {
        let config = StoreConfig::from_str(
            r#"
            [[main_page]]
            type = "collection"
            handle = "frontpage"

            [[main_page]]
            type = "carousel"
            children = [
                { type = "product", handle = "mug" },
                { type = "product", handle = "cap" },
            ]
        "#,
        )
        .unwrap();

        assert_eq!(config.main_page.len(), 2);
        assert_eq!(config.main_page[0].kind, MainPageKind::Collection);
        assert_eq!(config.main_page[0].handle, "frontpage");
        assert_eq!(config.main_page[1].kind, MainPageKind::Carousel);
        assert_eq!(config.main_page[1].children.len(), 2);
        assert_eq!(config.main_page[1].children[1].handle, "cap");
    }

    #[test]
    fn test_main_page_unknown_kind_tolerated() {
        let config = StoreConfig::from_str(
            r#"
            [[main_page]]
            type = "banner"
            handle = "x"
        "#,
        )
        .unwrap();

        assert_eq!(config.main_page[0].kind, MainPageKind::Unknown);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = StoreConfig::from_str(
            r#"
            [listing]
            products_per_collection_page = 0
        "#,
        )
        .unwrap();
        config.build.catalog = PathBuf::from("/dev/null");

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("products_per_collection_page"));
    }

    #[test]
    fn test_validate_rejects_missing_catalog() {
        let mut config = StoreConfig::default();
        config.build.catalog = PathBuf::from("/definitely/not/here/catalog.json");

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.catalog] not found"));
    }

    #[test]
    fn test_extra_fields() {
        let config = StoreConfig::from_str(
            r#"
            [extra]
            analytics_id = "UA-12345"
            number_field = 42
        "#,
        )
        .unwrap();

        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-12345")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = StoreConfig::from_str(
            r#"
            [routes]
            base_path = "shop"
            cart_path = "basket"

            [listing]
            products_per_collection_page = 12
            articles_per_blog_page = 4

            [catalog]
            lite = true
            collection_titles = "Sale"

            [build]
            catalog = "snapshot.json"
            output = "dist"

            [[main_page]]
            type = "product"
            handle = "mug"

            [extra]
            theme = "dark"
        "#,
        )
        .unwrap();

        assert_eq!(config.routes.base_path, "shop");
        assert_eq!(config.listing.products_per_collection_page, 12);
        assert!(config.catalog.lite);
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.main_page.len(), 1);
        assert!(config.extra.contains_key("theme"));
    }
}
