//! `[routes]` section configuration.
//!
//! Route segments for each entity kind. Every segment may be empty, in
//! which case it is omitted from composed routes entirely.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[routes]` section in storegen.toml - route segment configuration.
///
/// # Example
/// ```toml
/// [routes]
/// base_path = "shop"
/// product_path = "p"
/// blog_path = "journal"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RoutesConfig {
    /// Site-wide prefix for every generated route.
    #[serde(default)]
    pub base_path: String,

    /// Segment for product routes (`/{base}/{product_path}/{handle}`).
    #[serde(default = "defaults::routes::product_path")]
    #[educe(Default = defaults::routes::product_path())]
    pub product_path: String,

    /// Segment for collection listing routes.
    #[serde(default = "defaults::routes::collection_path")]
    #[educe(Default = defaults::routes::collection_path())]
    pub collection_path: String,

    /// Segment for shop policy routes.
    #[serde(default = "defaults::routes::policy_path")]
    #[educe(Default = defaults::routes::policy_path())]
    pub policy_path: String,

    /// Segment for static page routes.
    #[serde(default = "defaults::routes::page_path")]
    #[educe(Default = defaults::routes::page_path())]
    pub page_path: String,

    /// Segment for blog listing routes; article routes nest under it.
    #[serde(default = "defaults::routes::blog_path")]
    #[educe(Default = defaults::routes::blog_path())]
    pub blog_path: String,

    /// Segment inserted between a blog route and an article handle.
    #[serde(default = "defaults::routes::article_path")]
    #[educe(Default = defaults::routes::article_path())]
    pub article_path: String,

    /// Leaf of the cart route.
    #[serde(default = "defaults::routes::cart_path")]
    #[educe(Default = defaults::routes::cart_path())]
    pub cart_path: String,
}

#[cfg(test)]
mod tests {
    use super::super::StoreConfig;

    #[test]
    fn test_routes_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();

        assert_eq!(config.routes.base_path, "");
        assert_eq!(config.routes.product_path, "product");
        assert_eq!(config.routes.collection_path, "collection");
        assert_eq!(config.routes.policy_path, "policy");
        assert_eq!(config.routes.page_path, "pages");
        assert_eq!(config.routes.blog_path, "blog");
        assert_eq!(config.routes.article_path, "article");
        assert_eq!(config.routes.cart_path, "cart");
    }

    #[test]
    fn test_routes_overrides() {
        let config: StoreConfig = toml::from_str(
            r#"
            [routes]
            base_path = "shop"
            product_path = "p"
            cart_path = "basket"
        "#,
        )
        .unwrap();

        assert_eq!(config.routes.base_path, "shop");
        assert_eq!(config.routes.product_path, "p");
        assert_eq!(config.routes.cart_path, "basket");
        // Untouched fields keep their defaults
        assert_eq!(config.routes.blog_path, "blog");
    }

    #[test]
    fn test_routes_unknown_field_rejection() {
        let result: Result<StoreConfig, _> = toml::from_str(
            r#"
            [routes]
            produkt_path = "p"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_routes_empty_segments_allowed() {
        let config: StoreConfig = toml::from_str(
            r#"
            [routes]
            blog_path = ""
            article_path = ""
        "#,
        )
        .unwrap();

        assert_eq!(config.routes.blog_path, "");
        assert_eq!(config.routes.article_path, "");
    }
}
