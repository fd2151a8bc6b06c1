//! Fixed-size page windows over a ranked sequence.
//!
//! Pagination state is a small caller-owned value. The only coupling between
//! its fields is that changing the page size sends the view back to page 1,
//! so a (page, size) pair observed by a caller was always chosen together.
//!
//! Asking for a page past the end is not an error; it yields an empty window.
//!
//! ```
//! use follower_rank::pagination::{PaginationState, paginate};
//!
//! let ranked = ["Lisa", "Emma", "Sarah", "Mike", "Alex", "John"];
//! let state = PaginationState::new(2, 4).unwrap();
//!
//! let page = paginate(&ranked, state);
//! assert_eq!(page.items, ["Alex", "John"]);
//! assert_eq!(page.total_pages, 2);
//! ```

mod error;

pub use error::PaginationError;

use std::ops::{Range, RangeInclusive};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Page size used when the caller has not chosen one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// A 1-based page number.
pub type PageNumber = Constrained<usize, StrictlyPositive>;

/// Number of items shown per page; at least one.
pub type PageSize = Constrained<usize, StrictlyPositive>;

/// Current page and page size of a paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationState {
    current_page: PageNumber,
    items_per_page: PageSize,
}

impl PaginationState {
    /// Creates a state from raw numbers.
    ///
    /// # Errors
    ///
    /// Returns a [`PaginationError`] if either value is zero.
    pub fn new(current_page: usize, items_per_page: usize) -> Result<Self, PaginationError> {
        Ok(Self {
            current_page: StrictlyPositive::new(current_page)
                .map_err(PaginationError::CurrentPage)?,
            items_per_page: StrictlyPositive::new(items_per_page)
                .map_err(PaginationError::ItemsPerPage)?,
        })
    }

    /// Creates a state on the first page with the given page size.
    #[must_use]
    pub fn with_items_per_page(items_per_page: PageSize) -> Self {
        Self {
            current_page: StrictlyPositive::one(),
            items_per_page,
        }
    }

    /// The 1-based current page.
    #[must_use]
    pub fn current_page(self) -> usize {
        self.current_page.into_inner()
    }

    /// Number of items per page.
    #[must_use]
    pub fn items_per_page(self) -> usize {
        self.items_per_page.into_inner()
    }

    /// Moves to `page`, leaving the page size unchanged.
    pub fn set_current_page(&mut self, page: PageNumber) {
        self.current_page = page;
    }

    /// Changes the page size and returns to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: PageSize) {
        *self = Self::with_items_per_page(items_per_page);
    }

    /// Advances one page, stopping at the last page of `total_pages`.
    ///
    /// A current page already past the end is pulled back to the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        let last = total_pages.max(1);
        let next = self.current_page().saturating_add(1).min(last);
        self.current_page = StrictlyPositive::at_least_one(next);
    }

    /// Steps back one page, stopping at page 1.
    pub fn previous_page(&mut self) {
        let previous = self.current_page().saturating_sub(1);
        self.current_page = StrictlyPositive::at_least_one(previous);
    }

    /// Number of pages needed for `total_items` at the current page size.
    #[must_use]
    pub fn total_pages(self, total_items: usize) -> usize {
        total_pages(total_items, self.items_per_page)
    }

    /// Index range of the current page within a sequence of `total_items`.
    ///
    /// Empty (and positioned at `total_items`) when the page is past the end.
    pub(crate) fn window(self, total_items: usize) -> Range<usize> {
        let per_page = self.items_per_page();
        let start = (self.current_page() - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);
        start.min(total_items)..end.min(total_items)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::with_items_per_page(StrictlyPositive::at_least_one(DEFAULT_ITEMS_PER_PAGE))
    }
}

/// `ceil(total_items / items_per_page)`; zero for an empty sequence.
#[must_use]
pub fn total_pages(total_items: usize, items_per_page: PageSize) -> usize {
    total_items.div_ceil(items_per_page.into_inner())
}

/// One page of a ranked sequence.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    /// Entities visible on this page, in ranked order.
    pub items: &'a [T],

    /// Number of pages in the whole sequence.
    pub total_pages: usize,

    /// The 1-based page this window shows.
    pub current_page: usize,

    /// Page size the window was computed with.
    pub items_per_page: usize,

    /// Length of the whole sequence.
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    pub(crate) fn from_window(
        ordered: &'a [T],
        window: Range<usize>,
        state: PaginationState,
    ) -> Self {
        Self {
            items: &ordered[window],
            total_pages: state.total_pages(ordered.len()),
            current_page: state.current_page(),
            items_per_page: state.items_per_page(),
            total_items: ordered.len(),
        }
    }

    /// Returns `true` if no entities fall on this page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if a page precedes this one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` if a page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based positions of the first and last visible entities, for captions
    /// like "showing 11-20 of 42". `None` for an empty page.
    #[must_use]
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.items_per_page + 1;
        Some(first..=first + self.items.len() - 1)
    }
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

/// Slices the page described by `state` out of `ordered`.
#[must_use]
pub fn paginate<T>(ordered: &[T], state: PaginationState) -> Page<'_, T> {
    Page::from_window(ordered, state.window(ordered.len()), state)
}
