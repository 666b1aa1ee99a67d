//! Error types for pagelinks
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagelinks
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Contract Errors
    // ============================================================================
    /// None of the known accessor names for a pagination field are supported
    #[error("Unsupported pagination provider: no accessor for '{field}' (tried: {})", .tried.join(", "))]
    UnsupportedPaginationProvider {
        field: &'static str,
        tried: Vec<&'static str>,
    },

    /// The representer was built without a URL builder
    #[error("Missing URL builder: a page representer must be given a URL builder before rendering links")]
    MissingUrlBuilder,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Rendering Errors
    // ============================================================================
    #[error("Failed to serialize item {index}: {source}")]
    ItemSerialization {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an unsupported provider error
    pub fn unsupported(field: &'static str, tried: &[&'static str]) -> Self {
        Self::UnsupportedPaginationProvider {
            field,
            tried: tried.to_vec(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an item serialization error wrapping the decorator's error
    pub fn item(index: usize, source: Error) -> Self {
        Self::ItemSerialization {
            index,
            source: Box::new(source),
        }
    }

    /// Check if this error is a violated integration contract.
    ///
    /// These are never transient: retrying the same render yields the same error.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedPaginationProvider { .. } | Error::MissingUrlBuilder
        )
    }
}

/// Result type alias for pagelinks
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
