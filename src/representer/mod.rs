//! Representer module
//!
//! Glue between the pagination adapter, the link synthesizer and the
//! serialized document.
//!
//! # Document shape
//!
//! A [`PageRepresenter`] emits, in order, the total-count field, the links
//! (as an array or as a HAL `_links` map) and the decorated items:
//!
//! ```text
//! {"total_entries":3,"links":[{"rel":"self","href":"..."}],"songs":[...]}
//! ```

mod collection;
mod page;
mod types;

pub use collection::CollectionRepresenter;
pub use page::{PageRepresenter, PageRepresenterBuilder};
pub use types::{serialize_item, ItemDecorator, LinkFormat, DEFAULT_TOTAL_FIELD};
