use serde::{Deserialize, Serialize};

/// Document-level metadata: `<title>`, description and favicon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Free-text footer label, e.g. `"January 2026"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// The person the page is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// Name in native script, shown under the display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_scholar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
    pub photo: String,
    /// The spelling of the name to bold in author lists. Defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_author: Option<String>,
}

impl Profile {
    pub fn highlight_author(&self) -> &str {
        self.highlight_author.as_deref().unwrap_or(&self.name)
    }
}
