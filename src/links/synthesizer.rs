//! Link synthesis from pagination state

use super::types::{Link, Relation, UrlBuilder};
use crate::error::{Error, Result};
use crate::pagination::{PaginatedCollection, PaginationAdapter};
use crate::types::LinkArgs;
use serde_json::json;
use tracing::{debug, trace};

/// Argument key carrying the page number
pub const PAGE_ARG: &str = "page";

/// Argument key carrying the page size
pub const PER_PAGE_ARG: &str = "per_page";

/// Merge `page` and `per_page` over the base arguments.
///
/// The pagination values replace same-named base arguments.
pub fn page_args(base_args: &LinkArgs, page: i64, per_page: i64) -> LinkArgs {
    let mut args = base_args.clone();
    for (key, value) in [(PAGE_ARG, page), (PER_PAGE_ARG, per_page)] {
        if let Some(previous) = args.insert(key.to_string(), json!(value)) {
            debug!(key, overridden = %previous, value, "Base argument replaced by pagination value");
        }
    }
    args
}

/// Builds page links through a URL builder
pub struct LinkSynthesizer<U: ?Sized> {
    url_builder: Box<U>,
}

impl<U: UrlBuilder> LinkSynthesizer<U> {
    pub fn new(url_builder: U) -> Self {
        Self {
            url_builder: Box::new(url_builder),
        }
    }

    /// Create a synthesizer from an optional URL builder
    pub fn try_new(url_builder: Option<U>) -> Result<Self> {
        url_builder.map(Self::new).ok_or(Error::MissingUrlBuilder)
    }
}

impl<U: UrlBuilder + ?Sized> LinkSynthesizer<U> {
    /// Create a synthesizer from a boxed, possibly unsized, URL builder
    pub fn from_boxed(url_builder: Box<U>) -> Self {
        Self { url_builder }
    }

    pub fn url_builder(&self) -> &U {
        &self.url_builder
    }

    /// All links for the page, in `self`, `next`, `previous` order
    pub fn links<C: PaginatedCollection + ?Sized>(
        &self,
        pages: &PaginationAdapter<'_, C>,
        base_args: &LinkArgs,
    ) -> Result<Vec<Link>> {
        let mut links = Vec::with_capacity(Relation::ALL.len());
        for relation in Relation::ALL {
            if let Some(link) = self.link(relation, pages, base_args)? {
                links.push(link);
            }
        }
        Ok(links)
    }

    /// The link for one relation, `None` when the page does not exist
    pub fn link<C: PaginatedCollection + ?Sized>(
        &self,
        relation: Relation,
        pages: &PaginationAdapter<'_, C>,
        base_args: &LinkArgs,
    ) -> Result<Option<Link>> {
        let page = match relation {
            Relation::SelfRef => Some(pages.current_page()),
            Relation::Next => pages.next_page(),
            Relation::Previous => pages.previous_page()?,
        };
        let Some(page) = page else {
            trace!(%relation, "No page for relation, link omitted");
            return Ok(None);
        };

        let args = page_args(base_args, page, pages.per_page()?);
        let href = self.url_builder.build_url(&args);
        trace!(%relation, %href, "Built page link");
        Ok(Some(Link::new(relation, href)))
    }
}

impl<U: ?Sized> std::fmt::Debug for LinkSynthesizer<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkSynthesizer").finish_non_exhaustive()
    }
}
