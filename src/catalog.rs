//! Catalog of reference entries, grouped into named categories.
//!
//! The catalog is loaded once at startup from a JSON document and is
//! read-only afterwards. Parsing is tolerant: every entry field is optional
//! in the document and missing fields default to empty values, so a sparse
//! or hand-edited document still loads. Only malformed JSON is an error.

use serde::Deserialize;
use thiserror::Error;

/// Bundled demo catalog, used when no catalog path is configured.
const BUILTIN_CATALOG: &str = include_str!("../assets/quickref.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One reference entry as it appears in the catalog document.
///
/// All fields are optional in the document; [`Entry`] is the resolved form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub bullets: Option<Vec<String>>,
}

/// A category block in the catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    pub name: String,
    pub entries: Vec<RawEntry>,
}

/// Top-level shape of a catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
    categories: Vec<RawCategory>,
}

/// A fully resolved reference entry.
///
/// Fields are never absent, only possibly empty. Bullet text is carried
/// verbatim, including any inline markup the document author wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub icon: String,
    pub subtitle: String,
    pub description: String,
    pub reference: String,
    pub bullets: Vec<String>,
}

impl Entry {
    fn from_raw(raw: RawEntry) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            icon: raw.icon.unwrap_or_default(),
            subtitle: raw.subtitle.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            reference: raw.reference.unwrap_or_default(),
            bullets: raw.bullets.unwrap_or_default(),
        }
    }
}

/// A named, ordered group of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// The full set of categories, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Resolve raw categories into a catalog. Category and entry order is
    /// preserved exactly as given.
    pub fn load(raw: Vec<RawCategory>) -> Self {
        let categories = raw
            .into_iter()
            .map(|category| Category {
                name: category.name,
                entries: category.entries.into_iter().map(Entry::from_raw).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Parse a catalog document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        Ok(Self::load(document.categories))
    }

    /// The catalog bundled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Entries of the named category, or `None` if the catalog has no such
    /// category. An empty category is `Some(&[])`, not `None`.
    pub fn category(&self, name: &str) -> Option<&[Entry]> {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.entries.as_slice())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total entry count across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|category| category.entries.len()).sum()
    }
}
