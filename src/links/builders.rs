//! URL builder implementations

use super::types::UrlBuilder;
use crate::error::Result;
use crate::types::{JsonValue, LinkArgs};
use url::form_urlencoded::Serializer;
use url::Url;

/// Appends link arguments to a base URL as a query string.
///
/// Keys come out sorted, after any base query pairs the arguments do not
/// replace. Arrays expand to `key[]=v` pairs and objects to
/// `key[sub]=v` pairs; `null` encodes as an empty value.
///
/// ```
/// use pagelinks::links::{QueryUrlBuilder, UrlBuilder};
/// use pagelinks::LinkArgs;
/// use serde_json::json;
///
/// let builder = QueryUrlBuilder::new("http://www.example.com/songs").unwrap();
/// let mut args = LinkArgs::new();
/// args.insert("per_page".into(), json!(1));
/// args.insert("page".into(), json!(2));
/// assert_eq!(builder.build_url(&args), "http://www.example.com/songs?page=2&per_page=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrlBuilder {
    base: Url,
}

impl QueryUrlBuilder {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl From<Url> for QueryUrlBuilder {
    fn from(base: Url) -> Self {
        Self { base }
    }
}

impl UrlBuilder for QueryUrlBuilder {
    fn build_url(&self, args: &LinkArgs) -> String {
        let mut pairs = Vec::new();
        for (key, value) in args {
            flatten(key.clone(), value, &mut pairs);
        }
        if pairs.is_empty() {
            return self.base.to_string();
        }

        let mut query = Serializer::new(String::new());
        query.extend_pairs(
            self.base
                .query_pairs()
                .filter(|(key, _)| !pairs.iter().any(|(arg, _)| arg == key)),
        );
        query.extend_pairs(pairs);

        let mut url = self.base.clone();
        url.set_query(Some(&query.finish()));
        url.to_string()
    }
}

/// Flatten a JSON argument into `key=value` query pairs
fn flatten(key: String, value: &JsonValue, pairs: &mut Vec<(String, String)>) {
    match value {
        JsonValue::Null => pairs.push((key, String::new())),
        JsonValue::String(s) => pairs.push((key, s.clone())),
        JsonValue::Array(values) => {
            for v in values {
                flatten(format!("{key}[]"), v, pairs);
            }
        }
        JsonValue::Object(map) => {
            for (sub, v) in map {
                flatten(format!("{key}[{sub}]"), v, pairs);
            }
        }
        other => pairs.push((key, other.to_string())),
    }
}
