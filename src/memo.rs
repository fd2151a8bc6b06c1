//! Recompute-on-change caches for the sort and pagination stages.
//!
//! A dashboard asks for the same ranking over and over while its inputs sit
//! still: every redraw, every hover. These caches hold the last result and
//! return it until a key changes.
//!
//! - [`SortCache`] is keyed by the identity of the entity list (an
//!   `Arc<[T]>`) and the [`SortOrder`]. It stores a [`Ranking`], which is a
//!   permutation over the shared list, so entities are never cloned.
//! - [`PageCache`] is keyed by the identity of that permutation and the
//!   [`PaginationState`].
//!
//! Identity means pointer identity: handing in a new `Arc` with the same
//! contents triggers a recomputation, which is correct, just not free.

use std::{
    ops::{Range, RangeInclusive},
    sync::Arc,
};

use tracing::trace;

use crate::{
    pagination::{Page, PaginationState},
    ranking::{Ranked, Ranking, SortOrder},
};

/// Caches the most recent ranking of an entity list.
pub struct SortCache<T> {
    entry: Option<Ranking<T>>,
}

impl<T> SortCache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Drops the cached ranking.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

impl<T: Ranked> SortCache<T> {
    /// Returns `source` ranked in `order`, reusing the previous ranking when
    /// both the list and the order are unchanged.
    pub fn sorted(&mut self, source: &Arc<[T]>, order: SortOrder) -> Ranking<T> {
        if let Some(ranking) = self
            .entry
            .as_ref()
            .filter(|ranking| {
                ranking.order() == order && Arc::ptr_eq(ranking.source(), source)
            })
        {
            trace!(len = source.len(), ?order, "sort cache hit");
            return ranking.clone();
        }

        trace!(len = source.len(), ?order, "ranking entities");
        self.entry
            .insert(Ranking::new(Arc::clone(source), order))
            .clone()
    }
}

impl<T> Default for SortCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct PageEntry<T> {
    ranking: Ranking<T>,
    state: PaginationState,
    window: Range<usize>,
}

/// Caches the most recent page window of a ranking.
pub struct PageCache<T> {
    entry: Option<PageEntry<T>>,
}

impl<T> PageCache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the page of `ranking` described by `state`, reusing the
    /// previous window when the ranking and state are unchanged.
    ///
    /// The cache keeps `ranking` alive; the returned page borrows from it.
    pub fn page(&mut self, ranking: Ranking<T>, state: PaginationState) -> RankedPage<'_, T> {
        let entry = match self.entry.take() {
            Some(entry) if entry.state == state && Ranking::ptr_eq(&entry.ranking, &ranking) => {
                trace!(page = state.current_page(), "page cache hit");
                entry
            }
            _ => {
                trace!(
                    page = state.current_page(),
                    items_per_page = state.items_per_page(),
                    "computing page window"
                );
                let window = state.window(ranking.len());
                PageEntry {
                    ranking,
                    state,
                    window,
                }
            }
        };

        let entry = &*self.entry.insert(entry);
        RankedPage {
            source: entry.ranking.source(),
            positions: Page::from_window(
                entry.ranking.indices(),
                entry.window.clone(),
                entry.state,
            ),
        }
    }

    /// Drops the cached window.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

impl<T> Default for PageCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One page of a [`Ranking`].
///
/// Wraps the page of ranked positions together with the list they index.
#[derive(Debug)]
pub struct RankedPage<'a, T> {
    source: &'a [T],
    positions: Page<'a, usize>,
}

impl<'a, T> RankedPage<'a, T> {
    /// Entities visible on this page, in ranked order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &'a T> + use<'a, T> {
        let source = self.source;
        self.positions.items.iter().map(move |&index| &source[index])
    }

    /// Positions of the visible entities in the unsorted list.
    #[must_use]
    pub fn indices(&self) -> &'a [usize] {
        self.positions.items
    }

    /// Number of entities on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.positions.total_pages
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.positions.current_page
    }

    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.positions.items_per_page
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.positions.total_items
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.positions.has_previous()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.positions.has_next()
    }

    /// See [`Page::range`].
    #[must_use]
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        self.positions.range()
    }
}

impl<T> Clone for RankedPage<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RankedPage<'_, T> {}
