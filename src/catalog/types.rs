//! Catalog entity types.
//!
//! Every record in a catalog snapshot is one of six entity kinds, tagged by
//! a `kind` field. During ingestion each entity is annotated with its
//! canonical route (`theme_path`); entities are read-only afterwards.

use serde::{Deserialize, Serialize};

/// Entity kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
    Collection,
    Policy,
    Page,
    Blog,
    Article,
}

/// One catalog entity, tagged by `kind` in the snapshot JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Product(ProductNode),
    Collection(CollectionNode),
    Policy(PolicyNode),
    Page(PageNode),
    Blog(BlogNode),
    Article(ArticleNode),
}

impl Entity {
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Product(_) => EntityKind::Product,
            Self::Collection(_) => EntityKind::Collection,
            Self::Policy(_) => EntityKind::Policy,
            Self::Page(_) => EntityKind::Page,
            Self::Blog(_) => EntityKind::Blog,
            Self::Article(_) => EntityKind::Article,
        }
    }

    /// The canonical route, if one has been assigned.
    pub fn theme_path(&self) -> Option<&str> {
        match self {
            Self::Product(node) => node.theme_path.as_deref(),
            Self::Collection(node) => node.theme_path.as_deref(),
            Self::Policy(node) => node.theme_path.as_deref(),
            Self::Page(node) => node.theme_path.as_deref(),
            Self::Blog(node) => node.theme_path.as_deref(),
            Self::Article(node) => node.theme_path.as_deref(),
        }
    }
}

/// Product image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub src: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A purchasable product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductNode {
    pub id: String,
    pub handle: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub images: Vec<Image>,

    /// Assigned during ingestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,

    /// First associated image, denormalized for templates during ingestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_image: Option<Image>,
}

/// A curated group of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionNode {
    pub id: String,
    pub handle: String,

    #[serde(default)]
    pub title: String,

    /// Member product ids; only the count matters for pagination.
    #[serde(default)]
    pub products: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,
}

/// A shop policy document (refunds, privacy, terms of service).
///
/// Policies have no handle; the `type` discriminator doubles as the
/// route leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyNode {
    pub id: String,

    #[serde(rename = "type")]
    pub policy_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,
}

/// A static content page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageNode {
    pub id: String,
    pub handle: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,
}

/// A blog. The handle is the tail of the admin URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogNode {
    pub id: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,
}

/// An article belonging to a blog.
///
/// `blog_id` references the parent blog; the article's route is nested
/// under the parent's route and can only be assigned once the parent's
/// handle is resolvable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleNode {
    pub id: String,
    pub url: String,
    pub blog_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,
}
