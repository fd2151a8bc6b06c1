use crate::{
    pagination::{DEFAULT_ITEMS_PER_PAGE, PageSize},
    ranking::SortOrder,
    support::constraint::StrictlyPositive,
};

/// Initial view settings for a [`RankedPager`](super::RankedPager).
///
/// With the `serde` feature enabled this can be loaded from external
/// configuration; missing fields fall back to the defaults and a zero page
/// size is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    /// Number of entities shown per page.
    pub items_per_page: PageSize,

    /// Initial ranking direction.
    pub order: SortOrder,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            items_per_page: StrictlyPositive::at_least_one(DEFAULT_ITEMS_PER_PAGE),
            order: SortOrder::Descending,
        }
    }
}
