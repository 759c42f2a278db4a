//! Category catalog with live listing counts.
//!
//! This module holds the fixed set of category metadata (display name, icon,
//! accent color, blurb) and derives per-category listing counts on demand.
//! The category *ids* are the closed [`Category`] enumeration; only the
//! display metadata is data-driven. Built-ins ship as an embedded TOML
//! document, and a deployment may supply an override file with the same
//! schema.
//!
//! # TOML Format
//!
//! ```toml
//! [[categories]]
//! id = "gift"
//! name = "Dons"
//! icon = "🎁"
//! color = "#10b981"
//! description = "Donnez ce dont vous n'avez plus besoin"
//! ```
//!
//! An override file must cover each of the four fixed ids exactly once.

use crate::domain::error::{DonLocalError, Result};
use crate::domain::Category;
use crate::store::ResourceStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The embedded built-in catalog.
const BUILTIN_CATALOG: &str = include_str!("../../data/categories.toml");

/// Icon shown when a category lookup falls outside the catalog.
const FALLBACK_ICON: &str = "📦";

/// Accent color used when a category lookup falls outside the catalog.
const FALLBACK_COLOR: &str = "#6b7280";

/// Display metadata for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    /// Category id within the closed set.
    pub id: Category,

    /// Human-readable display name.
    pub name: String,

    /// Icon glyph shown on chips and cards.
    pub icon: String,

    /// Accent color as a hex string.
    pub color: String,

    /// Short blurb shown on the category tiles.
    #[serde(default)]
    pub description: String,
}

/// A category annotated with its live listing count.
///
/// Produced by [`CategoryIndex::with_counts`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    /// The category's display metadata.
    pub meta: CategoryMeta,

    /// Number of listings currently in this category.
    pub count: usize,
}

/// On-disk catalog document shape.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryMeta>,
}

/// The fixed category catalog.
///
/// Holds one metadata record per [`Category`], in display order. Counts are
/// *not* part of the index: they are derived from the store on every
/// [`with_counts`](Self::with_counts) call, so there is no stored counter
/// that could drift from the actual listing population.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    entries: Vec<CategoryMeta>,
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryIndex {
    /// Returns the built-in catalog.
    ///
    /// The embedded document is validated at test time; a parse failure here
    /// would be a packaging defect, so the fallback is an empty catalog with
    /// lookups degrading to the fallback glyph and color.
    #[must_use]
    pub fn builtin() -> Self {
        match Self::parse(BUILTIN_CATALOG) {
            Ok(index) => index,
            Err(e) => {
                tracing::error!(error = %e, "embedded catalog invalid, using empty catalog");
                Self { entries: vec![] }
            }
        }
    }

    /// Loads a catalog override from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `Catalog` error if the file cannot be read, fails to parse,
    /// or does not cover each fixed category id exactly once.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path)
            .map_err(|e| DonLocalError::Catalog(format!("failed to read catalog file: {e}")))?;

        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| DonLocalError::Catalog(format!("failed to parse catalog TOML: {e}")))?;

        // The id set is closed: every category exactly once, nothing else.
        for category in Category::ALL {
            let occurrences = file.categories.iter().filter(|m| m.id == category).count();
            if occurrences != 1 {
                return Err(DonLocalError::Catalog(format!(
                    "catalog must define '{category}' exactly once (found {occurrences})"
                )));
            }
        }
        if file.categories.len() != Category::ALL.len() {
            return Err(DonLocalError::Catalog(format!(
                "catalog must define exactly {} categories (found {})",
                Category::ALL.len(),
                file.categories.len()
            )));
        }

        Ok(Self {
            entries: file.categories,
        })
    }

    /// Returns the metadata records in display order.
    #[must_use]
    pub fn entries(&self) -> &[CategoryMeta] {
        &self.entries
    }

    /// Returns the metadata record for a category, if the catalog has one.
    #[must_use]
    pub fn meta(&self, category: Category) -> Option<&CategoryMeta> {
        self.entries.iter().find(|m| m.id == category)
    }

    /// Returns the icon for a category, falling back to a neutral glyph.
    #[must_use]
    pub fn icon_for(&self, category: Category) -> &str {
        self.meta(category).map_or(FALLBACK_ICON, |m| &m.icon)
    }

    /// Returns the accent color for a category, falling back to neutral grey.
    #[must_use]
    pub fn color_for(&self, category: Category) -> &str {
        self.meta(category).map_or(FALLBACK_COLOR, |m| &m.color)
    }

    /// Returns the display name for a category, falling back to its slug.
    #[must_use]
    pub fn name_for(&self, category: Category) -> &str {
        self.meta(category).map_or_else(|| category.as_slug(), |m| m.name.as_str())
    }

    /// Annotates every category with its current listing count.
    ///
    /// The count is recomputed from the store on every invocation — there is
    /// no cache to invalidate, so the derived value always equals the actual
    /// population, including immediately after adds and removals.
    #[must_use]
    pub fn with_counts(&self, store: &ResourceStore) -> Vec<CategoryEntry> {
        self.entries
            .iter()
            .map(|meta| CategoryEntry {
                meta: meta.clone(),
                count: store
                    .listings()
                    .iter()
                    .filter(|l| l.category == meta.id)
                    .count(),
            })
            .collect()
    }
}
