//! Pagination types and traits
//!
//! Defines the accessor vocabulary shared by every pagination provider and
//! the trait a paginated collection implements to expose it.

use serde::Serialize;
use std::fmt;

// ============================================================================
// Accessors
// ============================================================================

/// Every accessor name known across the supported provider conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Accessor {
    /// `current_page` (shared)
    CurrentPage,
    /// `next_page` (shared)
    NextPage,
    /// `per_page` ([`Convention::PerPage`])
    PerPage,
    /// `limit_value` ([`Convention::LimitValue`])
    LimitValue,
    /// `total_entries` ([`Convention::PerPage`])
    TotalEntries,
    /// `total_count` ([`Convention::LimitValue`])
    TotalCount,
    /// `previous_page` ([`Convention::PerPage`])
    PreviousPage,
    /// `prev_page` ([`Convention::LimitValue`])
    PrevPage,
}

impl Accessor {
    /// All accessors, shared ones first
    pub const ALL: [Accessor; 8] = [
        Accessor::CurrentPage,
        Accessor::NextPage,
        Accessor::PerPage,
        Accessor::LimitValue,
        Accessor::TotalEntries,
        Accessor::TotalCount,
        Accessor::PreviousPage,
        Accessor::PrevPage,
    ];

    /// The accessor's name as the provider spells it
    pub fn name(self) -> &'static str {
        match self {
            Accessor::CurrentPage => "current_page",
            Accessor::NextPage => "next_page",
            Accessor::PerPage => "per_page",
            Accessor::LimitValue => "limit_value",
            Accessor::TotalEntries => "total_entries",
            Accessor::TotalCount => "total_count",
            Accessor::PreviousPage => "previous_page",
            Accessor::PrevPage => "prev_page",
        }
    }

    /// The convention this accessor belongs to, `None` for shared accessors
    pub fn convention(self) -> Option<Convention> {
        match self {
            Accessor::CurrentPage | Accessor::NextPage => None,
            Accessor::PerPage | Accessor::TotalEntries | Accessor::PreviousPage => {
                Some(Convention::PerPage)
            }
            Accessor::LimitValue | Accessor::TotalCount | Accessor::PrevPage => {
                Some(Convention::LimitValue)
            }
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Provider naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// `per_page` / `total_entries` / `previous_page`
    PerPage,
    /// `limit_value` / `total_count` / `prev_page`
    LimitValue,
}

/// The convention a wrapped collection resolved to, across all fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderConvention {
    /// Every field resolved through the same convention
    Uniform(Convention),
    /// Fields resolved through different conventions
    Mixed,
}

// ============================================================================
// Fields
// ============================================================================

/// A logical pagination value whose accessor name differs between conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PerPage,
    TotalCount,
    PreviousPage,
}

impl Field {
    /// Field name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Field::PerPage => "per_page",
            Field::TotalCount => "total_count",
            Field::PreviousPage => "previous_page",
        }
    }

    /// Candidate accessors in resolution order
    pub fn candidates(self) -> [Accessor; 2] {
        match self {
            Field::PerPage => [Accessor::PerPage, Accessor::LimitValue],
            Field::TotalCount => [Accessor::TotalEntries, Accessor::TotalCount],
            Field::PreviousPage => [Accessor::PreviousPage, Accessor::PrevPage],
        }
    }

    /// Candidate accessor names in resolution order
    pub fn candidate_names(self) -> [&'static str; 2] {
        self.candidates().map(Accessor::name)
    }
}

// ============================================================================
// Probe
// ============================================================================

/// Outcome of asking a collection for an accessor it may not implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Probe<T> {
    /// The collection implements the accessor and returned this value
    Supported(T),
    /// The collection does not implement the accessor
    #[default]
    Unsupported,
}

impl<T> Probe<T> {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    pub fn supported(self) -> Option<T> {
        match self {
            Self::Supported(value) => Some(value),
            Self::Unsupported => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        match self {
            Self::Supported(value) => Probe::Supported(f(value)),
            Self::Unsupported => Probe::Unsupported,
        }
    }
}

// ============================================================================
// PaginatedCollection
// ============================================================================

/// A page of items plus the metadata its pagination provider computed.
///
/// `current_page` and `next_page` are shared by every provider. The remaining
/// accessors belong to one convention each and report [`Probe::Unsupported`]
/// unless overridden. Values are passed through unvalidated.
pub trait PaginatedCollection {
    /// Item type on this page
    type Item;

    /// Items on the current page
    fn items(&self) -> &[Self::Item];

    /// Current page number
    fn current_page(&self) -> i64;

    /// Next page number, `None` on the last page
    fn next_page(&self) -> Option<i64>;

    fn per_page(&self) -> Probe<i64> {
        Probe::Unsupported
    }

    fn limit_value(&self) -> Probe<i64> {
        Probe::Unsupported
    }

    fn total_entries(&self) -> Probe<i64> {
        Probe::Unsupported
    }

    fn total_count(&self) -> Probe<i64> {
        Probe::Unsupported
    }

    fn previous_page(&self) -> Probe<Option<i64>> {
        Probe::Unsupported
    }

    fn prev_page(&self) -> Probe<Option<i64>> {
        Probe::Unsupported
    }
}

// ============================================================================
// PaginationState
// ============================================================================

/// Snapshot of the five logical pagination values of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// Current page number
    pub current_page: i64,
    /// Items per page
    pub per_page: i64,
    /// Total items across all pages
    pub total_count: i64,
    /// Next page, as reported by the provider
    pub next_page: Option<i64>,
    /// Previous page, as reported by the provider
    pub previous_page: Option<i64>,
}

impl PaginationState {
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn has_previous_page(&self) -> bool {
        self.previous_page.is_some()
    }
}
