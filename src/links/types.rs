//! Link types and the URL builder seam

use crate::types::LinkArgs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Link relation of a page link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The page being rendered
    #[serde(rename = "self")]
    SelfRef,
    /// The following page
    Next,
    /// The preceding page
    Previous,
}

impl Relation {
    /// Relations in emission order
    pub const ALL: [Relation; 3] = [Relation::SelfRef, Relation::Next, Relation::Previous];

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::SelfRef => "self",
            Relation::Next => "next",
            Relation::Previous => "previous",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation and its target URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: Relation,
    pub href: String,
}

impl Link {
    pub fn new(rel: Relation, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
        }
    }
}

/// Turns link arguments into a URL.
///
/// Implementations must be deterministic and must make `page` and
/// `per_page` observable in the returned URL.
pub trait UrlBuilder {
    fn build_url(&self, args: &LinkArgs) -> String;
}

impl<F> UrlBuilder for F
where
    F: Fn(&LinkArgs) -> String,
{
    fn build_url(&self, args: &LinkArgs) -> String {
        self(args)
    }
}
