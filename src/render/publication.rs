//! Publication blocks: title, highlighted authors, venue and links.

use maud::{html, Markup};

use crate::models::{Link, Publication};
use crate::session::FilterSession;

const TROPHY: &str = "🏆";

/// A run of an author list, either plain text or the highlighted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorSegment<'a> {
    Plain(&'a str),
    Highlight(&'a str),
}

/// Split `authors` around every exact, case-sensitive occurrence of `name`.
///
/// Plain runs are returned unmodified, so concatenating all segments gives
/// back `authors`.
pub fn split_authors<'a>(authors: &'a str, name: &str) -> Vec<AuthorSegment<'a>> {
    if name.is_empty() {
        return if authors.is_empty() {
            vec![]
        } else {
            vec![AuthorSegment::Plain(authors)]
        };
    }

    let mut segments = Vec::new();
    let mut rest = authors;
    while let Some(pos) = rest.find(name) {
        if pos > 0 {
            segments.push(AuthorSegment::Plain(&rest[..pos]));
        }
        let end = pos + name.len();
        segments.push(AuthorSegment::Highlight(&rest[pos..end]));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push(AuthorSegment::Plain(rest));
    }
    segments
}

pub fn render_authors(authors: &str, name: &str) -> Markup {
    html! {
        @for segment in split_authors(authors, name) {
            @match segment {
                AuthorSegment::Plain(text) => { (text) }
                AuthorSegment::Highlight(text) => { strong { (text) } }
            }
        }
    }
}

/// Render one link. Awards get the trophy treatment and are only clickable
/// when they carry a url; everything else opens in a new tab.
pub fn render_link(link: &Link) -> Markup {
    match link {
        Link::Award {
            text,
            url: Some(url),
        } => html! {
            a class="award" href=(url) target="_blank" rel="noopener noreferrer" {
                (TROPHY) " " (text)
            }
        },
        Link::Award { text, url: None } => html! {
            span class="award" { (TROPHY) " " (text) }
        },
        Link::Project { url }
        | Link::Pdf { url }
        | Link::Code { url }
        | Link::Video { url }
        | Link::Demo { url } => html! {
            a class="link-hover" href=(url) target="_blank" rel="noopener noreferrer" {
                "[" (link.as_str()) "]"
            }
        },
    }
}

/// Render a publication block.
///
/// Every publication is emitted so its anchor always exists; those outside
/// the active filter are `hidden`. `data-filters` lists the categories the
/// publication belongs to so the page script can re-filter without a reload.
pub fn render_publication(publication: &Publication, session: &FilterSession<'_>) -> Markup {
    let store = session.store();
    let categories = store.categories_of(publication).join(" ");
    let visible = session.is_visible(publication);

    html! {
        div class="publication" id=(publication.id) data-filters=(categories) hidden[!visible] {
            div class="publication-image" {
                img src=(publication.image) alt=(publication.title) width="180" height="120" loading="lazy";
            }
            div class="publication-details" {
                h3 { (publication.title) }
                p class="authors" {
                    (render_authors(&publication.authors, store.profile().highlight_author()))
                }
                p class="venue" {
                    (publication.venue)
                    @if let Some(year) = &publication.year {
                        " " (year)
                    }
                }
                div class="links" {
                    @for link in &publication.links {
                        (render_link(link))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AuthorSegment::*;

    #[test]
    fn highlights_every_occurrence() {
        assert_eq!(
            split_authors("A, Tiancheng Sun, B, Tiancheng Sun", "Tiancheng Sun"),
            vec![
                Plain("A, "),
                Highlight("Tiancheng Sun"),
                Plain(", B, "),
                Highlight("Tiancheng Sun"),
            ]
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(
            split_authors("tiancheng sun, B", "Tiancheng Sun"),
            vec![Plain("tiancheng sun, B")]
        );
    }

    #[test]
    fn name_with_marker_suffix_keeps_marker_plain() {
        assert_eq!(
            split_authors("Tiancheng Sun*, Kai-En Lin*", "Tiancheng Sun"),
            vec![Highlight("Tiancheng Sun"), Plain("*, Kai-En Lin*")]
        );
    }

    #[test]
    fn empty_name_highlights_nothing() {
        assert_eq!(split_authors("A, B", ""), vec![Plain("A, B")]);
        assert!(split_authors("", "").is_empty());
    }

    #[test]
    fn authors_are_escaped_and_bolded() {
        let html = render_authors("A & B, Ada", "Ada").into_string();
        assert_eq!(html, "A &amp; B, <strong>Ada</strong>");
    }

    #[test]
    fn award_without_url_is_plain_text() {
        let html = render_link(&Link::Award {
            text: "Best Paper Award".to_string(),
            url: None,
        })
        .into_string();
        assert_eq!(html, "<span class=\"award\">🏆 Best Paper Award</span>");
    }

    #[test]
    fn award_with_url_is_external_link() {
        let html = render_link(&Link::Award {
            text: "Best Paper Award".to_string(),
            url: Some("https://example.org/award".to_string()),
        })
        .into_string();
        assert!(html.starts_with("<a class=\"award\" href=\"https://example.org/award\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("🏆 Best Paper Award"));
    }

    #[test]
    fn other_links_are_labelled_by_kind() {
        let html = render_link(&Link::Code {
            url: "https://github.com/x/y".to_string(),
        })
        .into_string();
        assert_eq!(
            html,
            "<a class=\"link-hover\" href=\"https://github.com/x/y\" target=\"_blank\" \
             rel=\"noopener noreferrer\">[code]</a>"
        );
    }
}
