//! # pagelinks
//!
//! Hypermedia navigation links and total counts for serialized paginated
//! collections.
//!
//! ## Features
//!
//! - **Provider-agnostic pagination**: `per_page`/`total_entries`/`previous_page`
//!   and `limit_value`/`total_count`/`prev_page` style collections read alike
//! - **Page links**: `self`, `next` and `previous` links built by your own URL builder
//! - **Collection naming**: `TopSongsRepresenter` nests its items under `top_songs`
//! - **Link formats**: plain `links` array or HAL `_links` map
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagelinks::{PageRepresenter, QueryUrlBuilder, Result};
//!
//! fn render(page: &MySongPage) -> Result<String> {
//!     let representer = PageRepresenter::builder()
//!         .url_builder(QueryUrlBuilder::new("http://www.example.com/songs")?)
//!         .collection_name_from_type("TopSongsRepresenter")
//!         .build()?;
//!
//!     // {"total_entries":3,"links":[{"rel":"self","href":"...?page=1&per_page=30"}],"top_songs":[...]}
//!     representer.to_json(page)
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       PageRepresenter                        │
//! │   total_entries        links (array | HAL)      <collection> │
//! └───────┬──────────────────────┬──────────────────────┬────────┘
//!         │                      │                      │
//! ┌───────┴────────┐   ┌─────────┴─────────┐   ┌────────┴────────┐
//! │   Pagination   │◄──│  LinkSynthesizer  │   │     Naming      │
//! │    Adapter     │   │  + UrlBuilder     │   │   + Inflector   │
//! └───────┬────────┘   └───────────────────┘   └─────────────────┘
//!         │
//! ┌───────┴──────────────────────────────┐
//! │ PaginatedCollection (any provider)   │
//! └──────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination accessor adapter
pub mod pagination;

/// Page link synthesis
pub mod links;

/// Collection field naming
pub mod naming;

/// Document rendering
pub mod representer;

/// Representer configuration loader
pub mod config;

/// JSON page source
pub mod source;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use links::{Link, LinkSynthesizer, QueryUrlBuilder, Relation, UrlBuilder};
pub use naming::{collection_field_name, CollectionName};
pub use pagination::{PaginatedCollection, PaginationAdapter, PaginationState, Probe};
pub use representer::{CollectionRepresenter, LinkFormat, PageRepresenter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
