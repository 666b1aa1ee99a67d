//! Representer configuration
//!
//! A page representer can be described in YAML (or JSON) instead of code:
//!
//! ```yaml
//! base_url: http://www.example.com/songs
//! decorator: TopSongsRepresenter   # or `collection: top_songs`
//! link_format: hal                 # array (default) or hal
//! total_field: total_entries
//! base_args:
//!   genre: house
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::links::QueryUrlBuilder;
use crate::naming::CollectionName;
use crate::representer::{LinkFormat, PageRepresenter, DEFAULT_TOTAL_FIELD};
use crate::types::LinkArgs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a [`PageRepresenter`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresenterConfig {
    /// URL page links are built on
    pub base_url: String,

    /// Representer type name the collection field is derived from
    #[serde(default)]
    pub decorator: Option<String>,

    /// Explicit collection field name (wins over `decorator`)
    #[serde(default)]
    pub collection: Option<String>,

    /// Link rendering format
    #[serde(default)]
    pub link_format: LinkFormat,

    /// Name of the total-count field
    #[serde(default = "default_total_field")]
    pub total_field: String,

    /// Arguments added to every link
    #[serde(default)]
    pub base_args: LinkArgs,
}

fn default_total_field() -> String {
    DEFAULT_TOTAL_FIELD.to_string()
}

impl RepresenterConfig {
    /// Create a config with defaults for everything but the URL and collection
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            decorator: None,
            collection: Some(collection.into()),
            link_format: LinkFormat::default(),
            total_field: default_total_field(),
            base_args: LinkArgs::new(),
        }
    }

    /// Collection field name, explicit or derived
    pub fn collection_name(&self) -> Result<CollectionName> {
        match (&self.collection, &self.decorator) {
            (Some(name), _) => Ok(CollectionName::new(name.clone())),
            (None, Some(decorator)) => Ok(CollectionName::from_type_name(decorator)),
            (None, None) => Err(Error::missing_field("collection")),
        }
    }

    pub fn url_builder(&self) -> Result<QueryUrlBuilder> {
        QueryUrlBuilder::new(&self.base_url)
    }

    /// Build a page representer whose items are serialized with serde
    pub fn page_representer<T: Serialize + 'static>(&self) -> Result<PageRepresenter<T>> {
        PageRepresenter::builder()
            .url_builder(self.url_builder()?)
            .collection_name(self.collection_name()?)
            .link_format(self.link_format)
            .total_field(self.total_field.clone())
            .base_args(self.base_args.clone())
            .build()
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("Representer base_url cannot be empty"));
        }
        self.url_builder()?;

        if self.total_field.is_empty() {
            return Err(Error::config("Representer total_field cannot be empty"));
        }

        let collection = self.collection_name()?;
        if collection.as_str().is_empty() {
            return Err(Error::config("Representer collection name cannot be empty"));
        }
        Ok(())
    }
}

/// Load a representer config from a YAML or JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<RepresenterConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read representer config '{}'", path.display()))?;
    load_config_from_str(&content)
}

/// Load a representer config from a YAML or JSON string
pub fn load_config_from_str(yaml: &str) -> Result<RepresenterConfig> {
    let config: RepresenterConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse representer config: {e}")))?;

    config.validate()?;
    Ok(config)
}
