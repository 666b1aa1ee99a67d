//! Collection naming module
//!
//! Derives the field name a representer nests its items under from the
//! representer's type name: `TopSongsRepresenter` becomes `top_songs`.

mod inflector;

pub use inflector::{EnglishInflector, Inflector};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffixes stripped from a representer type name
pub const REPRESENTER_SUFFIXES: [&str; 2] = ["Representer", "Decorator"];

/// Field name for a representer type, using English inflection
pub fn collection_field_name(type_name: &str) -> String {
    collection_field_name_with(type_name, &EnglishInflector)
}

/// Field name for a representer type, using the given inflector.
///
/// Module path and generic arguments are dropped, a representer suffix is
/// stripped, the rest is underscored and its last word pluralized.
pub fn collection_field_name_with(type_name: &str, inflector: &impl Inflector) -> String {
    let stem = strip_suffix(demodulize(type_name));
    let underscored = inflector.underscore(stem);
    match underscored.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", inflector.pluralize(last)),
        None => inflector.pluralize(&underscored),
    }
}

fn demodulize(type_name: &str) -> &str {
    let path = type_name.split('<').next().unwrap_or(type_name);
    path.rsplit("::").next().unwrap_or(path)
}

fn strip_suffix(name: &str) -> &str {
    REPRESENTER_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix).filter(|stem| !stem.is_empty()))
        .unwrap_or(name)
}

/// Field name a collection's items are nested under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionName(String);

impl CollectionName {
    /// Use a field name as given
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the field name from a representer type name
    pub fn from_type_name(type_name: &str) -> Self {
        Self(collection_field_name(type_name))
    }

    /// Derive the field name from a representer type
    pub fn of<T: ?Sized>() -> Self {
        Self::from_type_name(std::any::type_name::<T>())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}
