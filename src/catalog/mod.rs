//! Commerce catalog model: entity types and snapshot source.

mod source;
mod types;

pub use source::{Catalog, CatalogQuery};
pub use types::{
    ArticleNode, BlogNode, CollectionNode, Entity, EntityKind, Image, PageNode, PolicyNode,
    ProductNode,
};
