//! Hypermedia links module
//!
//! Builds the `self`, `next` and `previous` links of a page.
//!
//! # Overview
//!
//! A [`LinkSynthesizer`] reads pagination values through a
//! [`PaginationAdapter`](crate::pagination::PaginationAdapter) and hands
//! `page`/`per_page` arguments to a caller-supplied [`UrlBuilder`]. Links are
//! built fresh on every call and always come out in `self`, `next`,
//! `previous` order.

mod builders;
mod synthesizer;
mod types;

pub use builders::QueryUrlBuilder;
pub use synthesizer::{page_args, LinkSynthesizer, PAGE_ARG, PER_PAGE_ARG};
pub use types::{Link, Relation, UrlBuilder};
