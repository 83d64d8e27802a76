use std::collections::HashSet;

use super::{ContentDocument, ContentError};
use crate::models::NewsLink;

/// Check the structural invariants of a document.
///
/// Returns the index of the first `all` filter category.
pub(super) fn check(doc: &ContentDocument) -> Result<usize, ContentError> {
    let mut ids = HashSet::new();
    for publication in &doc.publications {
        if publication.id.trim().is_empty() {
            return Err(ContentError::EmptyPublicationId(publication.title.clone()));
        }
        if publication.id.chars().any(char::is_whitespace) {
            return Err(ContentError::InvalidPublicationId(publication.id.clone()));
        }
        if !ids.insert(publication.id.as_str()) {
            return Err(ContentError::DuplicatePublication(publication.id.clone()));
        }
    }

    if doc.filters.is_empty() {
        return Err(ContentError::NoFilters);
    }

    let mut filter_ids = HashSet::new();
    for filter in &doc.filters {
        if filter.id.is_empty() || filter.id.chars().any(char::is_whitespace) {
            return Err(ContentError::InvalidFilterId(filter.id.clone()));
        }
        if !filter_ids.insert(filter.id.as_str()) {
            return Err(ContentError::DuplicateFilter(filter.id.clone()));
        }
    }

    doc.filters
        .iter()
        .position(|f| f.rule.is_all())
        .ok_or(ContentError::NoShowAllFilter)
}

/// News anchors without a matching publication fall back to plain link
/// navigation at click time, so they are reported but not rejected.
pub(super) fn warn_dangling_news(doc: &ContentDocument) {
    for item in &doc.news {
        if let Some(NewsLink::Anchor(id)) = &item.link {
            if !doc.publications.iter().any(|p| &p.id == id) {
                tracing::warn!(
                    "News item {:?} links to unknown publication #{}",
                    item.date,
                    id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn document() -> ContentDocument {
        ContentDocument {
            bio: "Bio".to_string(),
            site: SiteMeta {
                title: "Site".to_string(),
                description: None,
                icon: None,
                last_updated: None,
            },
            profile: Profile {
                name: "Ada".to_string(),
                native_name: None,
                email: "ada@example.org".to_string(),
                google_scholar: None,
                cv: None,
                photo: "/me.jpg".to_string(),
                highlight_author: None,
            },
            filters: vec![
                FilterCategory {
                    id: "featured".to_string(),
                    label: "Featured".to_string(),
                    rule: FilterRule::Featured,
                },
                FilterCategory {
                    id: "all".to_string(),
                    label: "All".to_string(),
                    rule: FilterRule::All,
                },
            ],
            news: vec![],
            publications: vec![],
            awards: vec![],
            services: vec![],
        }
    }

    fn publication(id: &str) -> Publication {
        Publication {
            id: id.to_string(),
            title: format!("Paper {}", id),
            authors: "Ada".to_string(),
            venue: "V".to_string(),
            year: None,
            image: "/p.png".to_string(),
            links: vec![],
            tags: vec![],
            featured: false,
        }
    }

    #[test]
    fn returns_index_of_first_all_filter() {
        assert_eq!(check(&document()).unwrap(), 1);
    }

    #[test]
    fn rejects_duplicate_publication_ids() {
        let mut doc = document();
        doc.publications = vec![publication("a"), publication("b"), publication("a")];
        assert!(matches!(
            check(&doc),
            Err(ContentError::DuplicatePublication(id)) if id == "a"
        ));
    }

    #[test]
    fn rejects_blank_publication_id() {
        let mut doc = document();
        doc.publications = vec![publication("  ")];
        assert!(matches!(check(&doc), Err(ContentError::EmptyPublicationId(_))));
    }

    #[test]
    fn rejects_publication_ids_with_whitespace() {
        let mut doc = document();
        doc.publications = vec![publication("my paper")];
        assert!(matches!(
            check(&doc),
            Err(ContentError::InvalidPublicationId(id)) if id == "my paper"
        ));
    }

    #[test]
    fn rejects_empty_filter_list() {
        let mut doc = document();
        doc.filters.clear();
        assert!(matches!(check(&doc), Err(ContentError::NoFilters)));
    }

    #[test]
    fn rejects_filter_ids_with_whitespace() {
        let mut doc = document();
        doc.filters[0].id = "view synthesis".to_string();
        assert!(matches!(check(&doc), Err(ContentError::InvalidFilterId(_))));
    }

    #[test]
    fn rejects_duplicate_filter_ids() {
        let mut doc = document();
        doc.filters[0].id = "all".to_string();
        assert!(matches!(check(&doc), Err(ContentError::DuplicateFilter(id)) if id == "all"));
    }

    #[test]
    fn requires_a_show_all_filter() {
        let mut doc = document();
        doc.filters.truncate(1);
        assert!(matches!(check(&doc), Err(ContentError::NoShowAllFilter)));
    }
}
