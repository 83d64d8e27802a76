//! The page's only mutable state: which filter category is active.
//!
//! A [`FilterSession`] borrows the immutable [`ContentStore`] and owns the
//! active filter id. Every derived view (visible publications, news link
//! targets) is recomputed from those two on demand.

use serde::Serialize;

use crate::content::ContentStore;
use crate::models::{FilterCategory, NewsItem, NewsLink, Publication};

/// What the page should do when a link is followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Navigation {
    /// The item has no link.
    Inert,
    /// Let the browser follow `href` as-is.
    External { href: String },
    /// The target is already visible; a plain anchor jump suffices.
    Jump { anchor: String },
    /// The active filter was switched to `filter`. Scroll to `anchor` once the
    /// re-filtered list has rendered; skip silently if it is not there.
    RevealThenScroll { filter: String, anchor: String },
}

#[derive(Debug, Clone)]
pub struct FilterSession<'a> {
    store: &'a ContentStore,
    active: String,
}

impl<'a> FilterSession<'a> {
    /// Start on the first declared filter category.
    pub fn new(store: &'a ContentStore) -> Self {
        Self {
            store,
            active: store.default_filter().id.clone(),
        }
    }

    /// Start on `filter` if given, otherwise on the default category.
    pub fn with_filter(store: &'a ContentStore, filter: Option<&str>) -> Self {
        let mut session = Self::new(store);
        if let Some(id) = filter {
            session.set_active_filter(id);
        }
        session
    }

    pub fn store(&self) -> &'a ContentStore {
        self.store
    }

    pub fn active_filter_id(&self) -> &str {
        &self.active
    }

    /// Replace the active filter id. Unknown ids are accepted and show every
    /// publication.
    pub fn set_active_filter(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.store.filter(&id).is_none() {
            tracing::debug!("Unknown filter {:?}, showing all publications", id);
        }
        self.active = id;
    }

    pub fn active_category(&self) -> Option<&'a FilterCategory> {
        self.store.filter(&self.active)
    }

    pub fn is_visible(&self, publication: &Publication) -> bool {
        self.active_category()
            .map_or(true, |category| category.matches(publication))
    }

    /// Publications passing the active filter, in declaration order.
    pub fn visible_publications(&self) -> Vec<&'a Publication> {
        self.store
            .publications()
            .iter()
            .filter(|p| self.is_visible(p))
            .collect()
    }

    /// Make sure the publication `anchor` is visible before navigating to it.
    ///
    /// If it is hidden by the active filter, switches to the show-all
    /// category. Unknown anchors fall back to ordinary link navigation.
    pub fn reveal(&mut self, anchor: &str) -> Navigation {
        let Some(publication) = self.store.publication(anchor) else {
            return Navigation::External {
                href: format!("#{}", anchor),
            };
        };

        if self.is_visible(publication) {
            return Navigation::Jump {
                anchor: anchor.to_string(),
            };
        }

        let filter = self.store.show_all_filter().id.clone();
        tracing::debug!("Switching to {:?} to reveal #{}", filter, anchor);
        self.active = filter.clone();
        Navigation::RevealThenScroll {
            filter,
            anchor: anchor.to_string(),
        }
    }

    /// Handle a click on a news item.
    pub fn follow_news_link(&mut self, item: &NewsItem) -> Navigation {
        match &item.link {
            None => Navigation::Inert,
            Some(NewsLink::External(url)) => Navigation::External { href: url.clone() },
            Some(NewsLink::Anchor(id)) => self.reveal(id),
        }
    }

    /// The `href` to write for a news link under the current filter.
    ///
    /// Anchors hidden by the active filter carry a `?filter=` query for the
    /// show-all category so the link also works without script.
    pub fn news_href(&self, link: &NewsLink) -> String {
        match link {
            NewsLink::External(url) => url.clone(),
            NewsLink::Anchor(id) => match self.store.publication(id) {
                Some(publication) if !self.is_visible(publication) => format!(
                    "?filter={}#{}",
                    urlencoding::encode(&self.store.show_all_filter().id),
                    id
                ),
                _ => format!("#{}", id),
            },
        }
    }
}
