//! Accessor resolution over heterogeneous pagination providers
//!
//! The `resolve_*` functions probe the collection on every call. A
//! [`PaginationAdapter`] probes once when the collection is wrapped and keeps
//! the chosen accessor for each field in an [`AccessorPlan`].

use super::types::{
    Accessor, Convention, Field, PaginatedCollection, PaginationState, Probe, ProviderConvention,
};
use crate::error::{Error, Result};
use tracing::debug;

// ============================================================================
// Accessor dispatch
// ============================================================================

fn read_number<C: PaginatedCollection + ?Sized>(collection: &C, accessor: Accessor) -> Probe<i64> {
    match accessor {
        Accessor::CurrentPage => Probe::Supported(collection.current_page()),
        Accessor::PerPage => collection.per_page(),
        Accessor::LimitValue => collection.limit_value(),
        Accessor::TotalEntries => collection.total_entries(),
        Accessor::TotalCount => collection.total_count(),
        _ => Probe::Unsupported,
    }
}

fn read_page<C: PaginatedCollection + ?Sized>(
    collection: &C,
    accessor: Accessor,
) -> Probe<Option<i64>> {
    match accessor {
        Accessor::NextPage => Probe::Supported(collection.next_page()),
        Accessor::PreviousPage => collection.previous_page(),
        Accessor::PrevPage => collection.prev_page(),
        _ => Probe::Unsupported,
    }
}

/// Check whether the collection implements an accessor
pub fn supports<C: PaginatedCollection + ?Sized>(collection: &C, accessor: Accessor) -> bool {
    match accessor {
        Accessor::CurrentPage | Accessor::NextPage => true,
        Accessor::PreviousPage | Accessor::PrevPage => {
            read_page(collection, accessor).is_supported()
        }
        _ => read_number(collection, accessor).is_supported(),
    }
}

/// Pick the first candidate accessor of `field` the collection implements
fn select<C: PaginatedCollection + ?Sized>(collection: &C, field: Field) -> Result<Accessor> {
    field
        .candidates()
        .into_iter()
        .find(|accessor| supports(collection, *accessor))
        .ok_or_else(|| Error::unsupported(field.name(), &field.candidate_names()))
}

fn first_number<C: PaginatedCollection + ?Sized>(collection: &C, field: Field) -> Result<i64> {
    field
        .candidates()
        .into_iter()
        .find_map(|accessor| read_number(collection, accessor).supported())
        .ok_or_else(|| Error::unsupported(field.name(), &field.candidate_names()))
}

// ============================================================================
// Per-call resolution
// ============================================================================

/// Current page number
pub fn resolve_current_page<C: PaginatedCollection + ?Sized>(collection: &C) -> i64 {
    collection.current_page()
}

/// Next page number, `None` on the last page
pub fn resolve_next_page<C: PaginatedCollection + ?Sized>(collection: &C) -> Option<i64> {
    collection.next_page()
}

/// Items per page: `per_page`, falling back to `limit_value`
pub fn resolve_per_page<C: PaginatedCollection + ?Sized>(collection: &C) -> Result<i64> {
    first_number(collection, Field::PerPage)
}

/// Total item count: `total_entries`, falling back to `total_count`
pub fn resolve_total_count<C: PaginatedCollection + ?Sized>(collection: &C) -> Result<i64> {
    first_number(collection, Field::TotalCount)
}

/// Previous page number: `previous_page`, falling back to `prev_page`
pub fn resolve_previous_page<C: PaginatedCollection + ?Sized>(
    collection: &C,
) -> Result<Option<i64>> {
    Field::PreviousPage
        .candidates()
        .into_iter()
        .find_map(|accessor| read_page(collection, accessor).supported())
        .ok_or_else(|| {
            Error::unsupported(
                Field::PreviousPage.name(),
                &Field::PreviousPage.candidate_names(),
            )
        })
}

impl PaginationState {
    /// Resolve every field of the collection, probing on each access
    pub fn from_collection<C: PaginatedCollection + ?Sized>(collection: &C) -> Result<Self> {
        Ok(Self {
            current_page: resolve_current_page(collection),
            per_page: resolve_per_page(collection)?,
            total_count: resolve_total_count(collection)?,
            next_page: resolve_next_page(collection),
            previous_page: resolve_previous_page(collection)?,
        })
    }
}

// ============================================================================
// AccessorPlan
// ============================================================================

/// Accessor chosen for each convention-specific field.
///
/// Each field is chosen independently, so a collection mixing conventions
/// (say `total_entries` with `prev_page`) is accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorPlan {
    pub per_page: Accessor,
    pub total_count: Accessor,
    pub previous_page: Accessor,
}

impl AccessorPlan {
    /// Plan for a provider following one convention throughout
    pub fn for_convention(convention: Convention) -> Self {
        match convention {
            Convention::PerPage => Self {
                per_page: Accessor::PerPage,
                total_count: Accessor::TotalEntries,
                previous_page: Accessor::PreviousPage,
            },
            Convention::LimitValue => Self {
                per_page: Accessor::LimitValue,
                total_count: Accessor::TotalCount,
                previous_page: Accessor::PrevPage,
            },
        }
    }

    /// Probe the collection once per field
    pub fn probe<C: PaginatedCollection + ?Sized>(collection: &C) -> Result<Self> {
        Ok(Self {
            per_page: select(collection, Field::PerPage)?,
            total_count: select(collection, Field::TotalCount)?,
            previous_page: select(collection, Field::PreviousPage)?,
        })
    }

    /// Accessor this plan reads for `field`
    pub fn accessor(&self, field: Field) -> Accessor {
        match field {
            Field::PerPage => self.per_page,
            Field::TotalCount => self.total_count,
            Field::PreviousPage => self.previous_page,
        }
    }

    /// Overall convention of the plan
    pub fn convention(&self) -> ProviderConvention {
        let conventions = [
            self.per_page.convention(),
            self.total_count.convention(),
            self.previous_page.convention(),
        ];
        match conventions {
            [Some(a), Some(b), Some(c)] if a == b && b == c => ProviderConvention::Uniform(a),
            _ => ProviderConvention::Mixed,
        }
    }
}

// ============================================================================
// PaginationAdapter
// ============================================================================

/// A paginated collection paired with the accessors selected for it.
///
/// A planned adapter (from [`PaginationAdapter::new`]) probes every field up
/// front. An unplanned one (from [`PaginationAdapter::unplanned`]) resolves
/// each field on access, so reading one field never depends on another.
#[derive(Debug)]
pub struct PaginationAdapter<'a, C: ?Sized> {
    collection: &'a C,
    plan: Option<AccessorPlan>,
}

impl<C: ?Sized> Clone for PaginationAdapter<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for PaginationAdapter<'_, C> {}

impl<'a, C: PaginatedCollection + ?Sized> PaginationAdapter<'a, C> {
    /// Wrap a collection, probing which accessors it implements
    pub fn new(collection: &'a C) -> Result<Self> {
        let plan = AccessorPlan::probe(collection)?;
        debug!(
            per_page = %plan.per_page,
            total_count = %plan.total_count,
            previous_page = %plan.previous_page,
            "Selected pagination accessors"
        );
        Ok(Self {
            collection,
            plan: Some(plan),
        })
    }

    /// Wrap a collection with an explicit plan, skipping the probe
    pub fn with_plan(collection: &'a C, plan: AccessorPlan) -> Self {
        Self {
            collection,
            plan: Some(plan),
        }
    }

    /// Wrap a collection without probing; each field is resolved when read
    pub fn unplanned(collection: &'a C) -> Self {
        Self {
            collection,
            plan: None,
        }
    }

    pub fn collection(&self) -> &'a C {
        self.collection
    }

    pub fn plan(&self) -> Option<&AccessorPlan> {
        self.plan.as_ref()
    }

    /// Overall convention, `None` for an unplanned adapter
    pub fn convention(&self) -> Option<ProviderConvention> {
        self.plan.map(|plan| plan.convention())
    }

    pub fn current_page(&self) -> i64 {
        resolve_current_page(self.collection)
    }

    pub fn next_page(&self) -> Option<i64> {
        resolve_next_page(self.collection)
    }

    pub fn per_page(&self) -> Result<i64> {
        match self.plan {
            Some(plan) => self.number(plan, Field::PerPage),
            None => resolve_per_page(self.collection),
        }
    }

    pub fn total_count(&self) -> Result<i64> {
        match self.plan {
            Some(plan) => self.number(plan, Field::TotalCount),
            None => resolve_total_count(self.collection),
        }
    }

    pub fn previous_page(&self) -> Result<Option<i64>> {
        let Some(plan) = self.plan else {
            return resolve_previous_page(self.collection);
        };
        let accessor = plan.previous_page;
        read_page(self.collection, accessor)
            .supported()
            .ok_or_else(|| Error::unsupported(Field::PreviousPage.name(), &[accessor.name()]))
    }

    /// Snapshot every field through the selected accessors
    pub fn state(&self) -> Result<PaginationState> {
        Ok(PaginationState {
            current_page: self.current_page(),
            per_page: self.per_page()?,
            total_count: self.total_count()?,
            next_page: self.next_page(),
            previous_page: self.previous_page()?,
        })
    }

    fn number(&self, plan: AccessorPlan, field: Field) -> Result<i64> {
        let accessor = plan.accessor(field);
        read_number(self.collection, accessor)
            .supported()
            .ok_or_else(|| Error::unsupported(field.name(), &[accessor.name()]))
    }
}
