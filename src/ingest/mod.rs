//! Ingestion phase: route annotation for every catalog entity.
//!
//! Entities stream through in arrival order, one assigner invocation at a
//! time. The order across kinds is unspecified; the blog handle registry
//! absorbs that (see [`registry`]). Ingestion must complete before page
//! generation reads the catalog.

pub mod assign;
pub mod registry;

use crate::catalog::{Catalog, EntityKind};
use crate::config::StoreConfig;
use crate::log;
use anyhow::Result;
use registry::BlogRegistry;

/// Counts from one ingestion pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub products: usize,
    pub collections: usize,
    pub policies: usize,
    pub pages: usize,
    pub blogs: usize,
    pub articles: usize,
    /// Articles left without a route because their parent blog was
    /// unresolvable.
    pub unresolved_articles: usize,
}

impl IngestStats {
    pub const fn total(&self) -> usize {
        self.products + self.collections + self.policies + self.pages + self.blogs + self.articles
    }
}

/// Annotate every entity in the catalog with its canonical route.
///
/// Sequential by design: the registry's append-then-persist-before-next-read
/// discipline relies on one assigner completing before the next begins.
pub fn annotate_catalog(
    catalog: &mut Catalog,
    config: &StoreConfig,
    registry: &BlogRegistry,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();

    for entity in catalog.entities_mut() {
        assign::annotate(entity, &config.routes, registry)?;
        match entity.kind() {
            EntityKind::Product => stats.products += 1,
            EntityKind::Collection => stats.collections += 1,
            EntityKind::Policy => stats.policies += 1,
            EntityKind::Page => stats.pages += 1,
            EntityKind::Blog => stats.blogs += 1,
            EntityKind::Article => stats.articles += 1,
        }
    }

    stats.unresolved_articles = registry.misses();
    log!("ingest"; "annotated {} entities ({} products, {} collections, {} policies, {} pages, {} blogs, {} articles)",
        stats.total(), stats.products, stats.collections, stats.policies, stats.pages,
        stats.blogs, stats.articles);
    if stats.unresolved_articles > 0 {
        log!("warn"; "{} articles could not resolve their blog and were skipped",
            stats.unresolved_articles);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    fn ingest(snapshot: &str, kv: &MemoryKv) -> (Catalog, IngestStats) {
        let mut catalog = Catalog::from_str(snapshot).unwrap();
        let config = StoreConfig::default();
        let registry = BlogRegistry::new(kv);
        let stats = annotate_catalog(&mut catalog, &config, &registry).unwrap();
        (catalog, stats)
    }

    #[test]
    fn test_annotates_all_kinds() {
        let kv = MemoryKv::new();
        let (catalog, stats) = ingest(
            r#"{
                "catalog": [
                    {"kind": "product", "id": "P1", "handle": "mug"},
                    {"kind": "collection", "id": "C1", "handle": "sale"},
                    {"kind": "policy", "id": "PO1", "type": "privacy-policy"},
                    {"kind": "page", "id": "G1", "handle": "about"},
                    {"kind": "blog", "id": "B1", "url": "u/news"},
                    {"kind": "article", "id": "A1", "url": "u/hello", "blog_id": "B1"}
                ]
            }"#,
            &kv,
        );

        assert_eq!(stats.total(), 6);
        assert_eq!(stats.unresolved_articles, 0);
        for entity in catalog.entities() {
            assert!(entity.theme_path().is_some(), "{:?} missing route", entity.kind());
        }
    }

    #[test]
    fn test_interleaved_article_before_blog_is_dropped() {
        let kv = MemoryKv::new();
        let (catalog, stats) = ingest(
            r#"{
                "catalog": [
                    {"kind": "article", "id": "A1", "url": "u/early", "blog_id": "B1"},
                    {"kind": "blog", "id": "B1", "url": "u/news"},
                    {"kind": "article", "id": "A2", "url": "u/late", "blog_id": "B1"}
                ]
            }"#,
            &kv,
        );

        assert_eq!(stats.articles, 2);
        assert_eq!(stats.unresolved_articles, 1);

        let articles = crate::catalog::CatalogQuery::articles(&catalog);
        assert!(articles[0].theme_path.is_none());
        assert_eq!(
            articles[1].theme_path.as_deref(),
            Some("/blog/news/article/late")
        );
    }

    #[test]
    fn test_second_pass_resolves_previously_dropped_article() {
        let kv = MemoryKv::new();

        // First pass: article arrives before any blog exists
        let (_, stats) = ingest(
            r#"{"catalog": [{"kind": "article", "id": "A1", "url": "u/hello", "blog_id": "B1"}]}"#,
            &kv,
        );
        assert_eq!(stats.unresolved_articles, 1);

        // The blog lands in a later pass, persisting its handle
        ingest(r#"{"catalog": [{"kind": "blog", "id": "B1", "url": "u/news"}]}"#, &kv);

        // Re-ingesting the article now resolves against the durable registry
        let (catalog, stats) = ingest(
            r#"{"catalog": [{"kind": "article", "id": "A1", "url": "u/hello", "blog_id": "B1"}]}"#,
            &kv,
        );
        assert_eq!(stats.unresolved_articles, 0);
        let articles = crate::catalog::CatalogQuery::articles(&catalog);
        assert_eq!(
            articles[0].theme_path.as_deref(),
            Some("/blog/news/article/hello")
        );
    }

    #[test]
    fn test_empty_catalog() {
        let kv = MemoryKv::new();
        let (_, stats) = ingest(r#"{"catalog": []}"#, &kv);
        assert_eq!(stats, IngestStats::default());
    }
}
