//! `[build]` section configuration.
//!
//! Filesystem locations: catalog snapshot, output directory and the cache
//! directory backing the durable handle registry.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in storegen.toml - build paths.
///
/// All paths are interpreted relative to the project root and normalized
/// to absolute paths after loading.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually supplied via CLI).
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Catalog snapshot file.
    #[serde(default = "defaults::build::catalog")]
    #[educe(Default = defaults::build::catalog())]
    pub catalog: PathBuf,

    /// Output directory for the route manifest.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Cache directory for durable state (blog handle registry).
    #[serde(default = "defaults::build::cache")]
    #[educe(Default = defaults::build::cache())]
    pub cache: PathBuf,

    /// Clear the output directory before writing.
    #[serde(default)]
    pub clean: bool,
}
