//! Representer types and link rendering

use crate::error::{Error, Result};
use crate::links::Link;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Default name of the total-count field
pub const DEFAULT_TOTAL_FIELD: &str = "total_entries";

/// How links are rendered into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LinkFormat {
    /// `"links": [{"rel": "self", "href": "..."}]`
    #[default]
    Array,
    /// `"_links": {"self": {"href": "..."}}`
    Hal,
}

impl LinkFormat {
    /// Document key the links are stored under
    pub fn key(self) -> &'static str {
        match self {
            LinkFormat::Array => "links",
            LinkFormat::Hal => "_links",
        }
    }

    /// Render links in this format, preserving their order
    pub fn render(self, links: &[Link]) -> JsonValue {
        match self {
            LinkFormat::Array => JsonValue::Array(
                links
                    .iter()
                    .map(|link| json!({ "rel": link.rel, "href": link.href }))
                    .collect(),
            ),
            LinkFormat::Hal => {
                let mut map = JsonObject::new();
                for link in links {
                    map.insert(link.rel.to_string(), json!({ "href": link.href }));
                }
                JsonValue::Object(map)
            }
        }
    }
}

/// Turns one item into its JSON representation
pub type ItemDecorator<T> = Box<dyn Fn(&T) -> Result<JsonValue> + Send + Sync>;

/// Item decorator that serializes with serde
pub fn serialize_item<T: Serialize>(item: &T) -> Result<JsonValue> {
    Ok(serde_json::to_value(item)?)
}

/// Decorate every item, tagging failures with the item's position
pub(crate) fn decorate_items<T>(
    items: &[T],
    decorator: &(dyn Fn(&T) -> Result<JsonValue> + Send + Sync),
) -> Result<Vec<JsonValue>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decorator(item).map_err(|e| Error::item(index, e)))
        .collect()
}
