//! JSON page source
//!
//! A [`PaginatedCollection`] read from a JSON document that carries its own
//! pagination metadata, in either naming convention:
//!
//! ```json
//! {"current_page": 2, "limit_value": 1, "total_count": 3,
//!  "next_page": 3, "prev_page": 1, "items": [{"name": "One More Time"}]}
//! ```
//!
//! An accessor is supported when its key is present. `null` is accepted only
//! for `next_page`, `previous_page` and `prev_page`, where it means "no such
//! page".

use crate::error::{Error, Result, ResultExt};
use crate::pagination::{Accessor, PaginatedCollection, Probe};
use crate::types::{JsonObject, JsonValue};
use std::collections::BTreeMap;
use std::path::Path;

/// Default key holding the page's items
pub const DEFAULT_ITEMS_KEY: &str = "items";

/// A page deserialized from JSON
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPage {
    items: Vec<JsonValue>,
    current_page: i64,
    values: BTreeMap<Accessor, Option<i64>>,
}

impl JsonPage {
    /// Parse a page whose items live under `items`
    pub fn from_value(value: JsonValue) -> Result<Self> {
        Self::from_value_with_items_key(value, DEFAULT_ITEMS_KEY)
    }

    /// Parse a page whose items live under `items_key`
    pub fn from_value_with_items_key(value: JsonValue, items_key: &str) -> Result<Self> {
        let JsonValue::Object(mut object) = value else {
            return Err(Error::config("Page document must be a JSON object"));
        };

        let items = match object.remove(items_key) {
            Some(JsonValue::Array(items)) => items,
            Some(_) => {
                return Err(Error::config(format!(
                    "Page field '{items_key}' must be an array"
                )))
            }
            None => Vec::new(),
        };

        let values = read_accessors(&object)?;
        let current_page = values
            .get(&Accessor::CurrentPage)
            .copied()
            .flatten()
            .ok_or_else(|| Error::missing_field("current_page"))?;

        Ok(Self {
            items,
            current_page,
            values,
        })
    }

    /// Parse a page from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Read a page from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file '{}'", path.display()))?;
        Self::from_json(&content)
    }

    fn number(&self, accessor: Accessor) -> Probe<i64> {
        match self.values.get(&accessor) {
            Some(Some(value)) => Probe::Supported(*value),
            _ => Probe::Unsupported,
        }
    }

    fn page(&self, accessor: Accessor) -> Probe<Option<i64>> {
        match self.values.get(&accessor) {
            Some(value) => Probe::Supported(*value),
            None => Probe::Unsupported,
        }
    }
}

/// Collect every known accessor key present in the document
fn read_accessors(object: &JsonObject) -> Result<BTreeMap<Accessor, Option<i64>>> {
    let mut values = BTreeMap::new();
    for accessor in Accessor::ALL {
        let Some(value) = object.get(accessor.name()) else {
            continue;
        };
        let number = match value {
            JsonValue::Null if is_page_number(accessor) => None,
            JsonValue::Null => {
                return Err(Error::config(format!(
                    "Page field '{accessor}' cannot be null"
                )))
            }
            JsonValue::Number(n) => Some(n.as_i64().ok_or_else(|| {
                Error::config(format!("Page field '{accessor}' must be an integer"))
            })?),
            _ => {
                return Err(Error::config(format!(
                    "Page field '{accessor}' must be an integer or null"
                )))
            }
        };
        values.insert(accessor, number);
    }
    Ok(values)
}

/// Accessors whose `null` means "no such page"
fn is_page_number(accessor: Accessor) -> bool {
    matches!(
        accessor,
        Accessor::NextPage | Accessor::PreviousPage | Accessor::PrevPage
    )
}

impl PaginatedCollection for JsonPage {
    type Item = JsonValue;

    fn items(&self) -> &[JsonValue] {
        &self.items
    }

    fn current_page(&self) -> i64 {
        self.current_page
    }

    fn next_page(&self) -> Option<i64> {
        self.values.get(&Accessor::NextPage).copied().flatten()
    }

    fn per_page(&self) -> Probe<i64> {
        self.number(Accessor::PerPage)
    }

    fn limit_value(&self) -> Probe<i64> {
        self.number(Accessor::LimitValue)
    }

    fn total_entries(&self) -> Probe<i64> {
        self.number(Accessor::TotalEntries)
    }

    fn total_count(&self) -> Probe<i64> {
        self.number(Accessor::TotalCount)
    }

    fn previous_page(&self) -> Probe<Option<i64>> {
        self.page(Accessor::PreviousPage)
    }

    fn prev_page(&self) -> Probe<Option<i64>> {
        self.page(Accessor::PrevPage)
    }
}
