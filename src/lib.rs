//! # folio
//!
//! Generates a single-page academic homepage (bio, news, filterable
//! publications, awards and services) from one content file.
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Loads and validates the content file into an immutable [`content::ContentStore`] |
//! | [`models`] | Publication, link, news, filter and profile types |
//! | [`bio`] | Bio text to paragraph markup |
//! | [`session`] | Active filter state, visible publications, news link reconciliation |
//! | [`render`] | HTML rendering with Maud |
//! | [`generate`] | `folio build`: writes `index.html` and copies assets |
//! | [`api`] | Local preview server |
//! | [`config`] | Environment-derived paths and port |

pub mod api;
pub mod bio;
pub mod config;
pub mod content;
pub mod generate;
pub mod models;
pub mod render;
pub mod session;
