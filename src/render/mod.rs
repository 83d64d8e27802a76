//! HTML rendering of the whole page.
//!
//! Pure functions from a [`ContentStore`] and a [`FilterSession`] to
//! [`Markup`]. The same output is written by `folio build` and served by
//! the preview server.

mod assets;
mod publication;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::bio::render_bio;
use crate::content::ContentStore;
use crate::models::NewsLink;
use crate::session::FilterSession;

pub use assets::{SCRIPT, STYLE};
pub use publication::{render_authors, render_link, render_publication, split_authors, AuthorSegment};

/// Render the full document with the given filter active.
pub fn render_document(session: &FilterSession<'_>) -> String {
    render_page(session).into_string()
}

pub fn render_page(session: &FilterSession<'_>) -> Markup {
    let store = session.store();
    let site = store.site();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site.title) }
                @if let Some(description) = &site.description {
                    meta name="description" content=(description);
                }
                @if let Some(icon) = &site.icon {
                    link rel="icon" href=(icon);
                }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main id="folio"
                    data-show-all=(store.show_all_filter().id)
                    data-active-filter=(session.active_filter_id()) {
                    (hero(session))
                    div class="section-divider" {}
                    (publications(session))
                    div class="section-divider" {}
                    (honors(store))
                    @if let Some(updated) = &site.last_updated {
                        footer { p { "Last updated: " (updated) } }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn hero(session: &FilterSession<'_>) -> Markup {
    let store = session.store();
    let profile = store.profile();

    html! {
        section class="hero" {
            div {
                img src=(profile.photo) alt=(profile.name) width="220" height="220";
                div class="contact" {
                    a class="link-hover" href={ "mailto:" (profile.email) } { "Email" }
                    @if let Some(scholar) = &profile.google_scholar {
                        a class="link-hover" href=(scholar) target="_blank" rel="noopener noreferrer" {
                            "Google Scholar"
                        }
                    }
                    @if let Some(cv) = &profile.cv {
                        a class="link-hover" href=(cv) { "CV" }
                    }
                }
            }
            div {
                h1 { (profile.name) }
                @if let Some(native) = &profile.native_name {
                    p class="native-name" { (native) }
                }
                div class="bio-content" { (render_bio(store.bio())) }
                @if !store.news().is_empty() {
                    (news(session))
                }
            }
        }
    }
}

fn news(session: &FilterSession<'_>) -> Markup {
    let store = session.store();

    html! {
        div {
            h3 { "Recent News" }
            ul class="news" {
                @for item in store.news() {
                    li {
                        span class="news-date" { (item.date) }
                        span {
                            @if let Some(link) = &item.link {
                                a class="link-hover"
                                    href=(session.news_href(link))
                                    data-anchor=[known_anchor(store, link)] {
                                    (item.text)
                                }
                            } @else {
                                (item.text)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The publication id a news link targets, if that publication exists.
fn known_anchor<'s>(store: &'s ContentStore, link: &NewsLink) -> Option<&'s str> {
    match link {
        NewsLink::Anchor(id) => store.publication(id).map(|p| p.id.as_str()),
        NewsLink::External(_) => None,
    }
}

fn publications(session: &FilterSession<'_>) -> Markup {
    let store = session.store();

    html! {
        section class="publications" {
            div class="publications-header" {
                h2 { "Publications" }
                div class="filters" {
                    @for category in store.filters() {
                        @let active = category.id == session.active_filter_id();
                        a class=(if active { "filter-button active" } else { "filter-button" })
                            href={ "?filter=" (urlencoding::encode(&category.id)) }
                            data-filter=(category.id) {
                            (category.label)
                        }
                    }
                }
            }
            div class="publication-list" {
                @for publication in store.publications() {
                    (render_publication(publication, session))
                }
            }
        }
    }
}

fn honors(store: &ContentStore) -> Markup {
    html! {
        section class="honors" {
            div {
                h2 { "Awards & Honors" }
                ul {
                    @for award in store.awards() {
                        li { span class="news-date" { (award.year) } " — " (award.text) }
                    }
                }
            }
            div {
                h2 { "Professional Services" }
                ul {
                    @for service in store.services() {
                        li {
                            (service.role) ", " (service.venue)
                            @if let Some(year) = &service.year {
                                " (" (year) ")"
                            }
                        }
                    }
                }
            }
        }
    }
}
