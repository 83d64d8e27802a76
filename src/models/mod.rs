//! Content models for the homepage.
//!
//! # Core Concepts
//!
//! - [`Publication`]: A paper with its authors, venue, [`Link`]s and topic tags.
//!   Its `id` is the in-page anchor.
//! - [`FilterCategory`]: A named [`FilterRule`] selecting which publications are shown.
//! - [`NewsItem`]: A dated line of text, optionally pointing at a publication
//!   anchor or an external page through a [`NewsLink`].
//! - [`Profile`] and [`SiteMeta`]: Who the page is about and how the document is titled.
//! - [`Award`] and [`Service`]: Flat lists with no cross-references.
//!
//! All of these are built once by the content loader and never mutated.

mod filter;
mod honors;
mod news;
mod profile;
mod publication;

pub use filter::*;
pub use honors::*;
pub use news::*;
pub use profile::*;
pub use publication::*;
