//! Catalog snapshot loading and per-kind queries.
//!
//! A snapshot is a single JSON document holding the entity stream in
//! arrival order:
//!
//! ```json
//! {
//!   "catalog": [
//!     { "kind": "article", "id": "A1", "url": "...", "blog_id": "B1" },
//!     { "kind": "blog", "id": "B1", "url": "..." }
//!   ]
//! }
//! ```
//!
//! Document order is ingestion order. Kinds may interleave arbitrarily, and
//! an article may well precede its parent blog; resolving that is the
//! registry's job, not the source's.
//!
//! [`CatalogQuery`] is the bulk-read interface used by page generation.
//! A kind with no entities yields an empty list, never an error.

use crate::catalog::types::{
    ArticleNode, BlogNode, CollectionNode, Entity, PageNode, PolicyNode, ProductNode,
};
use crate::log;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Raw snapshot document shape.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    catalog: Vec<serde_json::Value>,
}

/// Per-kind bulk reads over an ingested catalog.
///
/// This is the seam between page generation and the query engine: builders
/// only ever see materialized node lists.
pub trait CatalogQuery {
    fn products(&self) -> Vec<&ProductNode>;
    fn collections(&self) -> Vec<&CollectionNode>;
    fn policies(&self) -> Vec<&PolicyNode>;
    fn pages(&self) -> Vec<&PageNode>;
    fn blogs(&self) -> Vec<&BlogNode>;
    fn articles(&self) -> Vec<&ArticleNode>;
}

/// An in-memory catalog, entities kept in arrival order.
#[derive(Debug, Default)]
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    /// Load a snapshot file.
    ///
    /// Records that do not parse as a known entity kind are skipped with a
    /// log line; the rest of the snapshot still loads.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog snapshot: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_str(content: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(content).context("Malformed catalog snapshot")?;

        let mut entities = Vec::with_capacity(snapshot.catalog.len());
        let mut skipped = 0usize;
        for value in snapshot.catalog {
            match serde_json::from_value::<Entity>(value) {
                Ok(entity) => entities.push(entity),
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            log!("catalog"; "skipped {skipped} unrecognized records");
        }

        Ok(Self { entities })
    }

    /// Entities in arrival order, mutable for ingestion annotation.
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Entities in arrival order.
    #[allow(dead_code)]
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl CatalogQuery for Catalog {
    fn products(&self) -> Vec<&ProductNode> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                Entity::Product(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    fn collections(&self) -> Vec<&CollectionNode> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                Entity::Collection(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    fn policies(&self) -> Vec<&PolicyNode> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                Entity::Policy(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    fn pages(&self) -> Vec<&PageNode> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                Entity::Page(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    fn blogs(&self) -> Vec<&BlogNode> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                Entity::Blog(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    fn articles(&self) -> Vec<&ArticleNode> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                Entity::Article(node) => Some(node),
                _ => None,
            })
            .collect()
    }
}
