use serde::{Deserialize, Serialize};

/// A paper or project listed on the page.
///
/// The `id` is unique across all publications. It is written out as the
/// element id of the publication block, so it doubles as the `#anchor` that
/// news items and outside deep links point at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Publication {
    pub id: String,
    pub title: String,
    /// Free-text author list, e.g. `"A. Author, B. Author*"`.
    pub authors: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Opaque asset path, resolved by whatever serves the page.
    pub image: String,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Topic tags used by tag-based filter categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Marks the publication for the "selected publications" view.
    #[serde(default)]
    pub featured: bool,
}

impl Publication {
    /// Case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// An external resource attached to a publication.
///
/// Every variant except `Award` requires a `url`; a content file that omits
/// it fails to load. An award may be a plain badge with no link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Link {
    Project { url: String },
    Pdf { url: String },
    Code { url: String },
    Video { url: String },
    Demo { url: String },
    Award {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl Link {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project { .. } => "project",
            Self::Pdf { .. } => "pdf",
            Self::Code { .. } => "code",
            Self::Video { .. } => "video",
            Self::Demo { .. } => "demo",
            Self::Award { .. } => "award",
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Project { url }
            | Self::Pdf { url }
            | Self::Code { url }
            | Self::Video { url }
            | Self::Demo { url } => Some(url),
            Self::Award { url, .. } => url.as_deref(),
        }
    }
}
