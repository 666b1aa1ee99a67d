//! Collection representer
//!
//! Renders a plain sequence of items as `{"<collection>": [...]}`, with no
//! pagination metadata.

use super::types::{decorate_items, serialize_item, ItemDecorator};
use crate::error::Result;
use crate::naming::CollectionName;
use crate::types::{JsonObject, JsonValue};
use serde::Serialize;

pub struct CollectionRepresenter<T> {
    collection: CollectionName,
    item_decorator: ItemDecorator<T>,
}

impl<T: Serialize + 'static> CollectionRepresenter<T> {
    /// Items serialized with serde under `collection`
    pub fn new(collection: CollectionName) -> Self {
        Self::with_item_decorator(collection, serialize_item::<T>)
    }

    /// Items serialized with serde under the name derived from `type_name`
    pub fn for_type_name(type_name: &str) -> Self {
        Self::new(CollectionName::from_type_name(type_name))
    }
}

impl<T> CollectionRepresenter<T> {
    pub fn with_item_decorator(
        collection: CollectionName,
        decorator: impl Fn(&T) -> Result<JsonValue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            collection,
            item_decorator: Box::new(decorator),
        }
    }

    pub fn collection_name(&self) -> &CollectionName {
        &self.collection
    }

    pub fn to_value(&self, items: &[T]) -> Result<JsonValue> {
        let items = decorate_items(items, &*self.item_decorator)?;
        let mut doc = JsonObject::new();
        doc.insert(self.collection.to_string(), JsonValue::Array(items));
        Ok(JsonValue::Object(doc))
    }

    pub fn to_json(&self, items: &[T]) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value(items)?)?)
    }
}

impl<T> std::fmt::Debug for CollectionRepresenter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionRepresenter")
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}
