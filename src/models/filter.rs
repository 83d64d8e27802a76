use serde::{Deserialize, Serialize};

use super::publication::Publication;

/// A publication filter shown as a button above the publication list.
///
/// The first category declared in the content file is active when the page
/// loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCategory {
    pub id: String,
    pub label: String,
    pub rule: FilterRule,
}

impl FilterCategory {
    pub fn matches(&self, publication: &Publication) -> bool {
        self.rule.matches(publication)
    }
}

/// The predicate a filter category applies to each publication.
///
/// In TOML: `rule = "all"`, `rule = "featured"` or `rule = { tag = "relighting" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    All,
    Featured,
    Tag(String),
}

impl FilterRule {
    pub fn matches(&self, publication: &Publication) -> bool {
        match self {
            Self::All => true,
            Self::Featured => publication.featured,
            Self::Tag(tag) => publication.has_tag(tag),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(featured: bool, tags: &[&str]) -> Publication {
        Publication {
            id: "p".to_string(),
            title: "Title".to_string(),
            authors: "A".to_string(),
            venue: "V".to_string(),
            year: None,
            image: "/p.png".to_string(),
            links: vec![],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured,
        }
    }

    #[test]
    fn all_matches_everything() {
        assert!(FilterRule::All.matches(&publication(false, &[])));
    }

    #[test]
    fn featured_follows_flag() {
        assert!(FilterRule::Featured.matches(&publication(true, &[])));
        assert!(!FilterRule::Featured.matches(&publication(false, &["relighting"])));
    }

    #[test]
    fn tag_requires_membership() {
        let rule = FilterRule::Tag("view synthesis".to_string());
        assert!(rule.matches(&publication(false, &["relighting", "view synthesis"])));
        assert!(!rule.matches(&publication(true, &["relighting"])));
        assert!(!rule.matches(&publication(false, &[])));
    }

    #[test]
    fn rule_parses_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            rule: FilterRule,
        }
        let all: Wrapper = toml::from_str(r#"rule = "all""#).unwrap();
        assert_eq!(all.rule, FilterRule::All);
        let tag: Wrapper = toml::from_str(r#"rule = { tag = "relighting" }"#).unwrap();
        assert_eq!(tag.rule, FilterRule::Tag("relighting".to_string()));
    }
}
