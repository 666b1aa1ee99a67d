//! Page representer
//!
//! Renders a paginated collection as
//! `{"total_entries": N, "links": [...], "<collection>": [...]}`.

use super::types::{
    decorate_items, serialize_item, ItemDecorator, LinkFormat, DEFAULT_TOTAL_FIELD,
};
use crate::error::{Error, Result};
use crate::links::{Link, LinkSynthesizer, Relation, UrlBuilder};
use crate::naming::CollectionName;
use crate::pagination::{resolve_total_count, PaginatedCollection, PaginationAdapter};
use crate::types::{JsonObject, JsonValue, LinkArgs};
use serde::Serialize;
use tracing::debug;

type DynUrlBuilder = dyn UrlBuilder + Send + Sync;

/// Decorates a paginated collection with a total count and page links
pub struct PageRepresenter<T> {
    synthesizer: LinkSynthesizer<DynUrlBuilder>,
    collection: CollectionName,
    link_format: LinkFormat,
    total_field: String,
    base_args: LinkArgs,
    item_decorator: ItemDecorator<T>,
}

impl<T: Serialize + 'static> PageRepresenter<T> {
    /// Builder whose items are serialized with serde
    pub fn builder() -> PageRepresenterBuilder<T> {
        PageRepresenterBuilder::with_item_decorator(serialize_item::<T>)
    }
}

impl<T> PageRepresenter<T> {
    pub fn collection_name(&self) -> &CollectionName {
        &self.collection
    }

    pub fn link_format(&self) -> LinkFormat {
        self.link_format
    }

    pub fn total_field(&self) -> &str {
        &self.total_field
    }

    pub fn base_args(&self) -> &LinkArgs {
        &self.base_args
    }

    /// Value of the total-count field, reading only the total-count accessors
    pub fn total_entries<C>(&self, collection: &C) -> Result<i64>
    where
        C: PaginatedCollection<Item = T> + ?Sized,
    {
        resolve_total_count(collection)
    }

    /// The link for one relation, with per-call arguments over the base arguments.
    ///
    /// Only the accessors the relation needs are read.
    pub fn link<C>(
        &self,
        relation: Relation,
        collection: &C,
        args: &LinkArgs,
    ) -> Result<Option<Link>>
    where
        C: PaginatedCollection<Item = T> + ?Sized,
    {
        let pages = PaginationAdapter::unplanned(collection);
        self.synthesizer.link(relation, &pages, &self.merged_args(args))
    }

    /// All page links, in `self`, `next`, `previous` order
    pub fn links<C>(&self, collection: &C, args: &LinkArgs) -> Result<Vec<Link>>
    where
        C: PaginatedCollection<Item = T> + ?Sized,
    {
        let pages = PaginationAdapter::new(collection)?;
        self.synthesizer.links(&pages, &self.merged_args(args))
    }

    /// Render the collection as a JSON value
    pub fn to_value<C>(&self, collection: &C) -> Result<JsonValue>
    where
        C: PaginatedCollection<Item = T> + ?Sized,
    {
        self.to_value_with_args(collection, &LinkArgs::new())
    }

    /// Render the collection, adding per-call link arguments.
    ///
    /// Any failure aborts the whole document.
    pub fn to_value_with_args<C>(&self, collection: &C, args: &LinkArgs) -> Result<JsonValue>
    where
        C: PaginatedCollection<Item = T> + ?Sized,
    {
        let pages = PaginationAdapter::new(collection)?;
        let total = pages.total_count()?;
        let links = self.synthesizer.links(&pages, &self.merged_args(args))?;
        let items = decorate_items(collection.items(), &*self.item_decorator)?;

        debug!(
            collection = %self.collection,
            total,
            links = links.len(),
            items = items.len(),
            "Rendered page"
        );

        let mut doc = JsonObject::new();
        doc.insert(self.total_field.clone(), JsonValue::from(total));
        doc.insert(
            self.link_format.key().to_string(),
            self.link_format.render(&links),
        );
        doc.insert(self.collection.to_string(), JsonValue::Array(items));
        Ok(JsonValue::Object(doc))
    }

    /// Render the collection as a compact JSON string
    pub fn to_json<C>(&self, collection: &C) -> Result<String>
    where
        C: PaginatedCollection<Item = T> + ?Sized,
    {
        Ok(serde_json::to_string(&self.to_value(collection)?)?)
    }

    /// Render the collection as an indented JSON string
    pub fn to_json_pretty<C>(&self, collection: &C) -> Result<String>
    where
        C: PaginatedCollection<Item = T> + ?Sized,
    {
        Ok(serde_json::to_string_pretty(&self.to_value(collection)?)?)
    }

    fn merged_args(&self, args: &LinkArgs) -> LinkArgs {
        let mut merged = self.base_args.clone();
        merged.extend(args.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

impl<T> std::fmt::Debug for PageRepresenter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRepresenter")
            .field("collection", &self.collection)
            .field("link_format", &self.link_format)
            .field("total_field", &self.total_field)
            .field("base_args", &self.base_args)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`PageRepresenter`]
pub struct PageRepresenterBuilder<T> {
    url_builder: Option<Box<DynUrlBuilder>>,
    collection: Option<CollectionName>,
    link_format: LinkFormat,
    total_field: String,
    base_args: LinkArgs,
    item_decorator: ItemDecorator<T>,
}

impl<T> PageRepresenterBuilder<T> {
    /// Builder with a custom item decorator
    pub fn with_item_decorator(
        decorator: impl Fn(&T) -> Result<JsonValue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            url_builder: None,
            collection: None,
            link_format: LinkFormat::default(),
            total_field: DEFAULT_TOTAL_FIELD.to_string(),
            base_args: LinkArgs::new(),
            item_decorator: Box::new(decorator),
        }
    }

    /// URL builder for page links (required)
    pub fn url_builder(mut self, url_builder: impl UrlBuilder + Send + Sync + 'static) -> Self {
        self.url_builder = Some(Box::new(url_builder));
        self
    }

    /// Nest items under an explicit field name
    pub fn collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection = Some(CollectionName::new(name));
        self
    }

    /// Nest items under the name derived from a representer type name
    pub fn collection_name_from_type(mut self, type_name: &str) -> Self {
        self.collection = Some(CollectionName::from_type_name(type_name));
        self
    }

    pub fn link_format(mut self, link_format: LinkFormat) -> Self {
        self.link_format = link_format;
        self
    }

    pub fn total_field(mut self, total_field: impl Into<String>) -> Self {
        self.total_field = total_field.into();
        self
    }

    /// Arguments passed to every link, below `page` and `per_page`
    pub fn base_args(mut self, base_args: LinkArgs) -> Self {
        self.base_args = base_args;
        self
    }

    pub fn base_arg(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.base_args.insert(key.into(), value.into());
        self
    }

    pub fn item_decorator(
        mut self,
        decorator: impl Fn(&T) -> Result<JsonValue> + Send + Sync + 'static,
    ) -> Self {
        self.item_decorator = Box::new(decorator);
        self
    }

    /// Build the representer
    ///
    /// Fails with [`Error::MissingUrlBuilder`] when no URL builder was given.
    pub fn build(self) -> Result<PageRepresenter<T>> {
        let url_builder = self.url_builder.ok_or(Error::MissingUrlBuilder)?;
        let collection = self
            .collection
            .ok_or_else(|| Error::missing_field("collection"))?;

        Ok(PageRepresenter {
            synthesizer: LinkSynthesizer::from_boxed(url_builder),
            collection,
            link_format: self.link_format,
            total_field: self.total_field,
            base_args: self.base_args,
            item_decorator: self.item_decorator,
        })
    }
}
