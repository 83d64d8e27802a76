use serde::{Deserialize, Serialize};

/// A dated entry in the "Recent News" list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    /// Display label such as `"Dec 2024"`. Never parsed as a date.
    pub date: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<NewsLink>,
}

/// Where a news item points.
///
/// In content files this is a plain string: `"#quark"` targets the
/// publication with id `quark`, anything else is an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NewsLink {
    Anchor(String),
    External(String),
}

impl NewsLink {
    /// The link as it appeared in the content file.
    pub fn href(&self) -> String {
        match self {
            Self::Anchor(id) => format!("#{}", id),
            Self::External(url) => url.clone(),
        }
    }
}

impl From<String> for NewsLink {
    fn from(raw: String) -> Self {
        match raw.strip_prefix('#') {
            Some(id) => Self::Anchor(id.to_string()),
            None => Self::External(raw),
        }
    }
}

impl From<NewsLink> for String {
    fn from(link: NewsLink) -> Self {
        link.href()
    }
}
