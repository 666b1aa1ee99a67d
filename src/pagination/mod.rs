//! Pagination module
//!
//! Supports: `per_page` style and `limit_value` style providers
//!
//! # Overview
//!
//! Pagination providers expose the same five values under different names.
//! This module resolves current page, per-page size, total count and the
//! next/previous page numbers from whichever names a collection implements.
//! It never computes pagination itself: every value is read from the
//! collection and passed through unchanged.

mod adapter;
mod types;

pub use adapter::{
    resolve_current_page, resolve_next_page, resolve_per_page, resolve_previous_page,
    resolve_total_count, supports, AccessorPlan, PaginationAdapter,
};
pub use types::{
    Accessor, Convention, Field, PaginatedCollection, PaginationState, Probe, ProviderConvention,
};
