//! Per-kind route assigners.
//!
//! Each entity gets its canonical route exactly once, as it streams through
//! ingestion. Product, collection, policy and page routes are pure path
//! composition. Blog and article routes go through the handle registry:
//! blogs record themselves, articles resolve their parent.
//!
//! An article whose parent blog is not yet resolvable is left without a
//! route. That is deliberate and non-fatal: the miss is logged here and
//! counted by the registry, and the article is omitted from page
//! generation.

use crate::catalog::{
    ArticleNode, BlogNode, CollectionNode, Entity, PageNode, PolicyNode, ProductNode,
};
use crate::config::RoutesConfig;
use crate::ingest::registry::BlogRegistry;
use crate::log;
use crate::utils::path::{handle_from_url, theme_path};
use anyhow::Result;

/// Assign the route for one entity, dispatching on its kind.
pub fn annotate(entity: &mut Entity, routes: &RoutesConfig, registry: &BlogRegistry) -> Result<()> {
    debug_assert!(
        entity.theme_path().is_none(),
        "route already assigned; entities are annotated exactly once"
    );

    match entity {
        Entity::Product(node) => assign_product(node, routes),
        Entity::Collection(node) => assign_collection(node, routes),
        Entity::Policy(node) => assign_policy(node, routes),
        Entity::Page(node) => assign_page(node, routes),
        Entity::Blog(node) => assign_blog(node, routes, registry)?,
        Entity::Article(node) => assign_article(node, routes, registry)?,
    }
    Ok(())
}

fn assign_product(node: &mut ProductNode, routes: &RoutesConfig) {
    node.theme_path = Some(theme_path(
        &routes.base_path,
        &routes.product_path,
        &node.handle,
    ));
    node.first_image = node.images.first().cloned();
}

fn assign_collection(node: &mut CollectionNode, routes: &RoutesConfig) {
    node.theme_path = Some(theme_path(
        &routes.base_path,
        &routes.collection_path,
        &node.handle,
    ));
}

fn assign_policy(node: &mut PolicyNode, routes: &RoutesConfig) {
    node.theme_path = Some(theme_path(
        &routes.base_path,
        &routes.policy_path,
        &node.policy_type,
    ));
}

fn assign_page(node: &mut PageNode, routes: &RoutesConfig) {
    node.theme_path = Some(theme_path(
        &routes.base_path,
        &routes.page_path,
        &node.handle,
    ));
}

/// Record the blog in the registry, make it durable, then assign the route.
///
/// Persisting after every record keeps the durable list current within the
/// pass, so any article processed next can already resolve this blog.
fn assign_blog(node: &mut BlogNode, routes: &RoutesConfig, registry: &BlogRegistry) -> Result<()> {
    let handle = handle_from_url(&node.url).to_owned();
    registry.record(&node.id, &handle);
    registry.persist()?;

    node.theme_path = Some(theme_path(&routes.base_path, &routes.blog_path, &handle));
    Ok(())
}

/// Resolve the parent blog and nest the article route under it.
///
/// On a registry miss nothing is assigned and ingestion continues.
fn assign_article(
    node: &mut ArticleNode,
    routes: &RoutesConfig,
    registry: &BlogRegistry,
) -> Result<()> {
    let handle = handle_from_url(&node.url).to_owned();

    match registry.lookup(&node.blog_id)? {
        Some(parent_handle) => {
            let blog_route = theme_path(&routes.base_path, &routes.blog_path, &parent_handle);
            let article_tail = theme_path("", &routes.article_path, &handle);
            node.theme_path = Some(format!("{blog_route}{article_tail}"));
        }
        None => {
            log!("warn"; "article `{}` references unknown blog `{}`, no route assigned", handle, node.blog_id);
        }
    }
    Ok(())
}
