//! `[listing]` section configuration.
//!
//! Page sizes for the two paginated listing kinds.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[listing]` section in storegen.toml - pagination page sizes.
///
/// Both sizes must be positive; validation rejects zero before the
/// pagination planner can ever divide by it.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Products shown per collection listing page.
    #[serde(default = "defaults::listing::products_per_collection_page")]
    #[educe(Default = defaults::listing::products_per_collection_page())]
    pub products_per_collection_page: usize,

    /// Articles shown per blog listing page.
    #[serde(default = "defaults::listing::articles_per_blog_page")]
    #[educe(Default = defaults::listing::articles_per_blog_page())]
    pub articles_per_blog_page: usize,
}
