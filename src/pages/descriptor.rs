//! Page descriptors and the route manifest.
//!
//! A [`PageDescriptor`] describes one physically rendered page: its route,
//! the template that renders it, and the context the template receives.
//! Descriptors are handed one at a time to a [`PageRegistrar`]; the default
//! registrar is the [`Manifest`], which collects them and writes
//! `routes.json`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Template responsible for rendering a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Cart,
    Main,
    Catalog,
    Product,
    Policy,
    Page,
    Blog,
    Article,
}

/// Context handed to a page template.
///
/// Serializes to a JSON map with only the populated keys, so each template
/// kind sees exactly the fields it needs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Bare entity route; paginated pages keep it alongside their numbered
    /// path so templates can link back to page 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<usize>,

    /// Cart route, linked from every commerce page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webp: Option<bool>,

    /// Flattened main page handles (main template only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub handles: Vec<String>,
}

/// One physically rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct PageDescriptor {
    pub path: String,
    pub template: TemplateKind,
    pub context: PageContext,
}

/// Page registration collaborator.
///
/// Receives each descriptor exactly once, in build order. The core never
/// deduplicates routes; colliding paths are a configuration error on the
/// caller's side.
pub trait PageRegistrar {
    fn register(&mut self, page: PageDescriptor) -> Result<()>;
}

/// Collects descriptors and writes them as a `routes.json` manifest.
#[derive(Debug, Default)]
pub struct Manifest {
    pages: Vec<PageDescriptor>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.iter()
    }

    /// Write the manifest into `output_dir` and return the file path.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        let path = output_dir.join("routes.json");
        let json = serde_json::to_string_pretty(&self.pages)
            .context("Failed to serialize route manifest")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

        Ok(path)
    }
}

impl PageRegistrar for Manifest {
    fn register(&mut self, page: PageDescriptor) -> Result<()> {
        self.pages.push(page);
        Ok(())
    }
}
