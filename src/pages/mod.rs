//! Page graph generation.
//!
//! Runs after ingestion has annotated every entity. Performs one bulk read
//! per entity kind and expands each into page descriptors:
//!
//! ```text
//! build_pages()
//!     │
//!     ├── cart            one static page
//!     ├── main            one page, flattened section handles
//!     ├── collections     one page per pagination window
//!     ├── products        one page per product
//!     ├── policies        one page per policy
//!     ├── pages           one page per static page      ┐
//!     ├── articles        one page per routed article   │ skipped on
//!     └── blogs           one page per pagination window┘ lite tier
//! ```
//!
//! The sections are independent read-only expansions, so the commerce and
//! editorial halves build concurrently; registration happens afterwards in
//! the fixed order above. Blog pagination joins against the fully
//! materialized article list, never a stream.

mod descriptor;

pub use descriptor::{Manifest, PageContext, PageDescriptor, PageRegistrar, TemplateKind};

use crate::catalog::CatalogQuery;
use crate::config::{MainPageEntry, MainPageKind, StoreConfig};
use crate::pagination;
use crate::utils::path::{theme_path, trim_slashes};
use anyhow::Result;

/// Expand the annotated catalog into page descriptors, in build order.
pub fn build_pages<C: CatalogQuery + Sync>(
    catalog: &C,
    config: &StoreConfig,
    registrar: &mut dyn PageRegistrar,
) -> Result<()> {
    let cart_path = theme_path(&config.routes.base_path, "", &config.routes.cart_path);

    let (commerce, editorial) = rayon::join(
        || {
            (
                collection_pages(catalog, config, &cart_path),
                product_pages(catalog, config, &cart_path),
                policy_pages(catalog, config, &cart_path),
            )
        },
        || {
            // Lite-tier catalogs have no pages, blogs or articles
            if config.catalog.lite {
                return (Vec::new(), Vec::new(), Vec::new());
            }
            (
                page_pages(catalog, config, &cart_path),
                article_pages(catalog, config, &cart_path),
                blog_pages(catalog, config, &cart_path),
            )
        },
    );
    let (collections, products, policies) = commerce;
    let (pages, articles, blogs) = editorial;

    registrar.register(PageDescriptor {
        path: cart_path.clone(),
        template: TemplateKind::Cart,
        context: PageContext::default(),
    })?;

    registrar.register(PageDescriptor {
        path: main_page_path(&config.routes.base_path),
        template: TemplateKind::Main,
        context: PageContext {
            handles: main_page_handles(&config.main_page),
            webp: Some(config.catalog.webp),
            ..Default::default()
        },
    })?;

    for page in [collections, products, policies, pages, articles, blogs]
        .into_iter()
        .flatten()
    {
        registrar.register(page)?;
    }

    Ok(())
}

/// Main page route: the base path with a trailing slash.
fn main_page_path(base: &str) -> String {
    let base = trim_slashes(base);
    if base.is_empty() {
        "/".to_owned()
    } else {
        format!("/{base}/")
    }
}

/// Flatten the configured main page tree into an ordered handle list.
///
/// `collection` and `product` sections contribute their own handle,
/// `carousel` and `header` sections contribute their children's handles.
fn main_page_handles(entries: &[MainPageEntry]) -> Vec<String> {
    let mut handles = Vec::new();
    for entry in entries {
        match entry.kind {
            MainPageKind::Collection | MainPageKind::Product => {
                handles.push(entry.handle.clone());
            }
            MainPageKind::Carousel | MainPageKind::Header => {
                handles.extend(entry.children.iter().map(|c| c.handle.clone()));
            }
            MainPageKind::Unknown => {}
        }
    }
    handles
}

/// One catalog page per pagination window of each collection.
fn collection_pages<C: CatalogQuery>(
    catalog: &C,
    config: &StoreConfig,
    cart_path: &str,
) -> Vec<PageDescriptor> {
    let titles = config.catalog.collection_title_list();
    let per_page = config.listing.products_per_collection_page;

    let mut out = Vec::new();
    for collection in catalog.collections() {
        if let Some(titles) = &titles {
            if !titles.iter().any(|t| t == &collection.title) {
                continue;
            }
        }
        let Some(route) = collection.theme_path.as_deref() else {
            continue;
        };

        for window in pagination::plan(collection.products.len(), per_page) {
            out.push(PageDescriptor {
                path: pagination::page_path(route, window.page),
                template: TemplateKind::Catalog,
                context: PageContext {
                    handle: Some(collection.handle.clone()),
                    theme_path: Some(route.to_owned()),
                    limit: Some(window.limit),
                    skip: Some(window.skip),
                    num_pages: Some(window.total_pages),
                    current_page: Some(window.page),
                    cart_path: Some(cart_path.to_owned()),
                    webp: Some(config.catalog.webp),
                    ..Default::default()
                },
            });
        }
    }
    out
}

/// One page per product, optionally restricted by the tag allow-list.
fn product_pages<C: CatalogQuery>(
    catalog: &C,
    config: &StoreConfig,
    cart_path: &str,
) -> Vec<PageDescriptor> {
    let tags = config.catalog.product_tag_list();

    let mut out = Vec::new();
    for product in catalog.products() {
        if let Some(tags) = &tags {
            if !product.tags.iter().any(|t| tags.contains(t)) {
                continue;
            }
        }
        let Some(route) = product.theme_path.as_deref() else {
            continue;
        };

        out.push(PageDescriptor {
            path: route.to_owned(),
            template: TemplateKind::Product,
            context: PageContext {
                handle: Some(product.handle.clone()),
                cart_path: Some(cart_path.to_owned()),
                webp: Some(config.catalog.webp),
                ..Default::default()
            },
        });
    }
    out
}

/// One page per shop policy.
fn policy_pages<C: CatalogQuery>(
    catalog: &C,
    _config: &StoreConfig,
    cart_path: &str,
) -> Vec<PageDescriptor> {
    let mut out = Vec::new();
    for policy in catalog.policies() {
        let Some(route) = policy.theme_path.as_deref() else {
            continue;
        };

        out.push(PageDescriptor {
            path: route.to_owned(),
            template: TemplateKind::Policy,
            context: PageContext {
                policy_type: Some(policy.policy_type.clone()),
                cart_path: Some(cart_path.to_owned()),
                ..Default::default()
            },
        });
    }
    out
}

/// One page per static content page.
fn page_pages<C: CatalogQuery>(
    catalog: &C,
    _config: &StoreConfig,
    cart_path: &str,
) -> Vec<PageDescriptor> {
    let mut out = Vec::new();
    for page in catalog.pages() {
        let Some(route) = page.theme_path.as_deref() else {
            continue;
        };

        out.push(PageDescriptor {
            path: route.to_owned(),
            template: TemplateKind::Page,
            context: PageContext {
                handle: Some(page.handle.clone()),
                cart_path: Some(cart_path.to_owned()),
                ..Default::default()
            },
        });
    }
    out
}

/// One page per article that resolved its parent blog during ingestion.
///
/// Articles without a route (registry misses) are omitted.
fn article_pages<C: CatalogQuery>(
    catalog: &C,
    _config: &StoreConfig,
    cart_path: &str,
) -> Vec<PageDescriptor> {
    let mut out = Vec::new();
    for article in catalog.articles() {
        let Some(route) = article.theme_path.as_deref() else {
            continue;
        };

        out.push(PageDescriptor {
            path: route.to_owned(),
            template: TemplateKind::Article,
            context: PageContext {
                id: Some(article.id.clone()),
                cart_path: Some(cart_path.to_owned()),
                ..Default::default()
            },
        });
    }
    out
}

/// One blog page per pagination window over the blog's articles.
///
/// The article list is fully materialized before this join; each blog
/// filters it by parent id in memory.
fn blog_pages<C: CatalogQuery>(
    catalog: &C,
    config: &StoreConfig,
    cart_path: &str,
) -> Vec<PageDescriptor> {
    let per_page = config.listing.articles_per_blog_page;
    let articles = catalog.articles();

    let mut out = Vec::new();
    for blog in catalog.blogs() {
        let Some(route) = blog.theme_path.as_deref() else {
            continue;
        };
        let article_count = articles.iter().filter(|a| a.blog_id == blog.id).count();

        for window in pagination::plan(article_count, per_page) {
            out.push(PageDescriptor {
                path: pagination::page_path(route, window.page),
                template: TemplateKind::Blog,
                context: PageContext {
                    id: Some(blog.id.clone()),
                    theme_path: Some(route.to_owned()),
                    limit: Some(window.limit),
                    skip: Some(window.skip),
                    num_pages: Some(window.total_pages),
                    current_page: Some(window.page),
                    cart_path: Some(cart_path.to_owned()),
                    ..Default::default()
                },
            });
        }
    }
    out
}
