//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [routes] Section Defaults
// ============================================================================

pub mod routes {
    pub fn product_path() -> String {
        "product".into()
    }

    pub fn collection_path() -> String {
        "collection".into()
    }

    pub fn policy_path() -> String {
        "policy".into()
    }

    pub fn page_path() -> String {
        "pages".into()
    }

    pub fn blog_path() -> String {
        "blog".into()
    }

    pub fn article_path() -> String {
        "article".into()
    }

    pub fn cart_path() -> String {
        "cart".into()
    }
}

// ============================================================================
// [listing] Section Defaults
// ============================================================================

pub mod listing {
    pub fn products_per_collection_page() -> usize {
        9
    }

    pub fn articles_per_blog_page() -> usize {
        6
    }
}

// ============================================================================
// [catalog] Section Defaults
// ============================================================================

pub mod catalog {
    pub fn webp() -> bool {
        true
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn catalog() -> PathBuf {
        "catalog.json".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn cache() -> PathBuf {
        ".storegen".into()
    }
}
