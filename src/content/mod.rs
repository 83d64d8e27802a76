mod validate;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::*;

/// Errors raised while loading a content file.
///
/// Everything here is fatal: a page is never rendered from content that
/// failed to load.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported content format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Publication with title {0:?} has an empty id")]
    EmptyPublicationId(String),

    #[error("Invalid publication id {0:?}: ids are used as anchors and must contain no whitespace")]
    InvalidPublicationId(String),

    #[error("Duplicate publication id: {0}")]
    DuplicatePublication(String),

    #[error("No filter categories defined")]
    NoFilters,

    #[error("Invalid filter id {0:?}: ids must be non-empty and contain no whitespace")]
    InvalidFilterId(String),

    #[error("Duplicate filter id: {0}")]
    DuplicateFilter(String),

    #[error("No filter category uses rule \"all\"")]
    NoShowAllFilter,
}

/// The content file as written by the author, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Biography. A single line break is a soft wrap, a blank line starts a
    /// new paragraph.
    pub bio: String,
    pub site: SiteMeta,
    pub profile: Profile,
    pub filters: Vec<FilterCategory>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Validated, read-only page content.
///
/// Built once from a [`ContentDocument`]. Guarantees:
/// - publication ids are non-empty, unique and contain no whitespace,
/// - at least one filter category exists, ids are unique and contain no whitespace,
/// - at least one filter category matches everything.
#[derive(Debug)]
pub struct ContentStore {
    doc: ContentDocument,
    show_all: usize,
}

impl ContentStore {
    /// Load a `.toml` or `.json` content file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&raw)?,
            Some("json") => Self::from_json_str(&raw)?,
            other => {
                return Err(ContentError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        tracing::info!(
            "Loaded {} ({} publications, {} filters, {} news items)",
            path.display(),
            store.publications().len(),
            store.filters().len(),
            store.news().len()
        );
        Ok(store)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        Self::from_document(toml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        Self::from_document(serde_json::from_str(raw)?)
    }

    pub fn from_document(doc: ContentDocument) -> Result<Self, ContentError> {
        let show_all = validate::check(&doc)?;
        validate::warn_dangling_news(&doc);
        Ok(Self { doc, show_all })
    }

    pub fn site(&self) -> &SiteMeta {
        &self.doc.site
    }

    pub fn profile(&self) -> &Profile {
        &self.doc.profile
    }

    pub fn bio(&self) -> &str {
        &self.doc.bio
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.doc.news
    }

    pub fn filters(&self) -> &[FilterCategory] {
        &self.doc.filters
    }

    pub fn publications(&self) -> &[Publication] {
        &self.doc.publications
    }

    pub fn awards(&self) -> &[Award] {
        &self.doc.awards
    }

    pub fn services(&self) -> &[Service] {
        &self.doc.services
    }

    pub fn publication(&self, id: &str) -> Option<&Publication> {
        self.doc.publications.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, id: &str) -> Option<&FilterCategory> {
        self.doc.filters.iter().find(|f| f.id == id)
    }

    /// The first declared category, active when a page is first rendered.
    pub fn default_filter(&self) -> &FilterCategory {
        &self.doc.filters[0]
    }

    /// The first category whose rule is `all`.
    pub fn show_all_filter(&self) -> &FilterCategory {
        &self.doc.filters[self.show_all]
    }

    /// Ids of every category that includes `publication`, in declaration order.
    pub fn categories_of(&self, publication: &Publication) -> Vec<&str> {
        self.doc
            .filters
            .iter()
            .filter(|f| f.matches(publication))
            .map(|f| f.id.as_str())
            .collect()
    }
}
