//! Ranked, paginated view over an entity list.
//!
//! [`RankedPager`] ties the stages together for a display layer: it owns the
//! current entity list, sort order, and pagination state, and serves the
//! visible page through the [`memo`](crate::memo) caches so repeated reads
//! with unchanged inputs cost nothing.
//!
//! ```
//! use std::sync::Arc;
//!
//! use follower_rank::{
//!     pager::{PagerConfig, RankedPager},
//!     ranking::Ranked,
//!     support::constraint::StrictlyPositive,
//! };
//!
//! struct Influencer(&'static str, &'static str);
//!
//! impl Ranked for Influencer {
//!     fn followers(&self) -> Option<&str> {
//!         Some(self.1)
//!     }
//! }
//!
//! let mut pager = RankedPager::new(vec![
//!     Influencer("Sarah", "2.4M"),
//!     Influencer("Alex", "980K"),
//!     Influencer("Lisa", "1.2B"),
//! ]);
//! pager.set_items_per_page(StrictlyPositive::new(2).unwrap());
//!
//! let page = pager.page();
//! let names: Vec<_> = page.items().map(|i| i.0).collect();
//! assert_eq!(names, ["Lisa", "Sarah"]);
//! assert!(page.has_next());
//! ```

mod config;

pub use config::PagerConfig;

use std::sync::Arc;

use crate::{
    memo::{PageCache, RankedPage, SortCache},
    pagination::{PageNumber, PageSize, PaginationState},
    ranking::{Ranked, Ranking, SortOrder},
};

/// A sorted, paginated view over a shared entity list.
pub struct RankedPager<T> {
    entities: Arc<[T]>,
    order: SortOrder,
    state: PaginationState,
    sorts: SortCache<T>,
    pages: PageCache<T>,
}

impl<T: Ranked> RankedPager<T> {
    /// Creates a pager with the default configuration.
    pub fn new(entities: impl Into<Arc<[T]>>) -> Self {
        Self::with_config(entities, PagerConfig::default())
    }

    /// Creates a pager on page 1 with the given configuration.
    pub fn with_config(entities: impl Into<Arc<[T]>>, config: PagerConfig) -> Self {
        Self {
            entities: entities.into(),
            order: config.order,
            state: PaginationState::with_items_per_page(config.items_per_page),
            sorts: SortCache::new(),
            pages: PageCache::new(),
        }
    }

    /// The unsorted entity list.
    #[must_use]
    pub fn entities(&self) -> &Arc<[T]> {
        &self.entities
    }

    /// Replaces the entity list.
    ///
    /// The current page is kept; if the new list is shorter the page may
    /// come back empty until the caller navigates.
    pub fn set_entities(&mut self, entities: impl Into<Arc<[T]>>) {
        self.entities = entities.into();
    }

    /// The current sort order.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Changes the sort order. The current page is kept.
    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Flips between ascending and descending.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// The current pagination state.
    #[must_use]
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Moves to `page`.
    pub fn set_current_page(&mut self, page: PageNumber) {
        self.state.set_current_page(page);
    }

    /// Changes the page size and returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: PageSize) {
        self.state.set_items_per_page(items_per_page);
    }

    /// Number of pages for the current list and page size.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.state.total_pages(self.entities.len())
    }

    /// Advances one page, stopping at the last page.
    pub fn next_page(&mut self) {
        let total_pages = self.total_pages();
        self.state.next_page(total_pages);
    }

    /// Steps back one page, stopping at page 1.
    pub fn previous_page(&mut self) {
        self.state.previous_page();
    }

    /// The full ranking for the current list and order.
    pub fn sorted(&mut self) -> Ranking<T> {
        self.sorts.sorted(&self.entities, self.order)
    }

    /// The visible page.
    pub fn page(&mut self) -> RankedPage<'_, T> {
        let ranking = self.sorts.sorted(&self.entities, self.order);
        self.pages.page(ranking, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        ranking::test_support::{influencer, names, sample},
        support::constraint::StrictlyPositive,
    };

    fn two_per_page() -> PagerConfig {
        PagerConfig {
            items_per_page: StrictlyPositive::new(2).unwrap(),
            ..PagerConfig::default()
        }
    }

    #[test]
    fn walks_the_sample_ranking() {
        let mut pager = RankedPager::with_config(sample(), two_per_page());
        assert_eq!(pager.total_pages(), 3);

        assert_eq!(names(pager.page().items()), ["Lisa", "Emma"]);
        pager.next_page();
        assert_eq!(names(pager.page().items()), ["Sarah", "Mike"]);
        pager.next_page();
        assert_eq!(names(pager.page().items()), ["Alex", "John"]);
        pager.next_page();
        assert_eq!(pager.state().current_page(), 3);

        pager.toggle_order();
        assert_eq!(names(pager.page().items()), ["Emma", "Lisa"]);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut pager = RankedPager::with_config(sample(), two_per_page());
        pager.set_current_page(StrictlyPositive::new(3).unwrap());

        pager.set_items_per_page(StrictlyPositive::new(4).unwrap());
        assert_eq!(pager.state().current_page(), 1);
        assert_eq!(names(pager.page().items()), ["Lisa", "Emma", "Sarah", "Mike"]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let mut pager = RankedPager::with_config(sample(), two_per_page());
        pager.set_current_page(StrictlyPositive::new(10).unwrap());

        let page = pager.page();
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn unchanged_inputs_reuse_the_ranking() {
        let mut pager = RankedPager::new(sample());
        let first = pager.sorted();
        assert!(Ranking::ptr_eq(&first, &pager.sorted()));

        pager.set_current_page(StrictlyPositive::new(2).unwrap());
        assert!(Ranking::ptr_eq(&first, &pager.sorted()));

        pager.set_order(SortOrder::Ascending);
        assert!(!Ranking::ptr_eq(&first, &pager.sorted()));
    }

    #[test]
    fn replacing_entities_reranks() {
        let mut pager = RankedPager::new(sample());
        pager.set_entities(vec![influencer("Zoe", "10"), influencer("Yan", "20")]);

        let page = pager.page();
        assert_eq!(names(page.items()), ["Yan", "Zoe"]);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(pager.entities().len(), 2);
    }

    #[test]
    fn caller_list_is_never_reordered() {
        let leads: Arc<[_]> = sample().into();
        let mut pager = RankedPager::new(Arc::clone(&leads));
        let _ = pager.page();

        assert_eq!(
            names(leads.iter()),
            ["Sarah", "Mike", "Alex", "Emma", "John", "Lisa"]
        );
    }

    #[test]
    fn entities_without_clone_can_be_paged() {
        struct Account {
            handle: String,
            followers: String,
        }

        impl Ranked for Account {
            fn followers(&self) -> Option<&str> {
                Some(&self.followers)
            }
        }

        let accounts: Vec<_> = [("@a", "12K"), ("@b", "3.4M"), ("@c", "700")]
            .into_iter()
            .map(|(handle, followers)| Account {
                handle: handle.to_owned(),
                followers: followers.to_owned(),
            })
            .collect();
        let mut pager = RankedPager::with_config(accounts, two_per_page());

        let page = pager.page();
        let handles: Vec<_> = page.items().map(|a| a.handle.as_str()).collect();
        assert_eq!(handles, ["@b", "@a"]);
        assert_eq!(page.indices(), [1, 0]);
        assert!(page.has_next());
    }
}
