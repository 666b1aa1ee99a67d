//! Shared test providers
//!
//! Two in-memory paginators over a slice, one per naming convention, with
//! the page-size defaults of their respective providers.

#![allow(dead_code)]

use pagelinks::{PaginatedCollection, Probe};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub name: &'static str,
}

pub fn songs() -> Vec<Song> {
    vec![
        Song { name: "Thriller" },
        Song {
            name: "One More Time",
        },
        Song {
            name: "Good Vibrations",
        },
    ]
}

fn total_pages(total: usize, per_page: usize) -> i64 {
    total.div_ceil(per_page.max(1)) as i64
}

fn slice<T: Clone>(items: &[T], page: i64, per_page: usize) -> Vec<T> {
    let offset = (page.max(1) as usize - 1) * per_page;
    items.iter().skip(offset).take(per_page).cloned().collect()
}

// ============================================================================
// per_page / total_entries / previous_page
// ============================================================================

/// Array paginator speaking `per_page`, `total_entries` and `previous_page`
pub struct EntriesPage<T> {
    items: Vec<T>,
    page: i64,
    per_page: usize,
    total: usize,
}

impl<T: Clone> EntriesPage<T> {
    pub const DEFAULT_PER_PAGE: usize = 30;

    pub fn paginate(all: &[T]) -> Self {
        Self::paginate_with(all, 1, Self::DEFAULT_PER_PAGE)
    }

    pub fn paginate_with(all: &[T], page: i64, per_page: usize) -> Self {
        Self {
            items: slice(all, page, per_page),
            page,
            per_page,
            total: all.len(),
        }
    }
}

impl<T> PaginatedCollection for EntriesPage<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn current_page(&self) -> i64 {
        self.page
    }

    fn next_page(&self) -> Option<i64> {
        (self.page < total_pages(self.total, self.per_page)).then(|| self.page + 1)
    }

    fn per_page(&self) -> Probe<i64> {
        Probe::Supported(self.per_page as i64)
    }

    fn total_entries(&self) -> Probe<i64> {
        Probe::Supported(self.total as i64)
    }

    fn previous_page(&self) -> Probe<Option<i64>> {
        Probe::Supported((self.page > 1).then(|| self.page - 1))
    }
}

// ============================================================================
// limit_value / total_count / prev_page
// ============================================================================

/// Array paginator speaking `limit_value`, `total_count` and `prev_page`
pub struct LimitPage<T> {
    all: Vec<T>,
    items: Vec<T>,
    page: i64,
    limit: usize,
}

impl<T: Clone> LimitPage<T> {
    pub const DEFAULT_PER_PAGE: usize = 25;

    pub fn paginate_array(all: &[T]) -> Self {
        Self {
            all: all.to_vec(),
            items: Vec::new(),
            page: 1,
            limit: Self::DEFAULT_PER_PAGE,
        }
        .refresh()
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self.refresh()
    }

    pub fn per(mut self, limit: usize) -> Self {
        self.limit = limit;
        self.refresh()
    }

    fn refresh(mut self) -> Self {
        self.items = slice(&self.all, self.page, self.limit);
        self
    }
}

impl<T> PaginatedCollection for LimitPage<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn current_page(&self) -> i64 {
        self.page
    }

    fn next_page(&self) -> Option<i64> {
        (self.page < total_pages(self.all.len(), self.limit)).then(|| self.page + 1)
    }

    fn limit_value(&self) -> Probe<i64> {
        Probe::Supported(self.limit as i64)
    }

    fn total_count(&self) -> Probe<i64> {
        Probe::Supported(self.all.len() as i64)
    }

    fn prev_page(&self) -> Probe<Option<i64>> {
        Probe::Supported((self.page > 1).then(|| self.page - 1))
    }
}
