//! # Follower Rank
//!
//! Follower-count normalization, ranking, and pagination for analytics
//! dashboards.
//!
//! Leads and influencers arrive from upstream services with follower counts
//! as display text (`"2.4M"`, `"980K"`, `"12,300"`). This crate turns that
//! text into numbers, orders entities by it, and slices the ordering into
//! pages for display.
//!
//! ## Crate layout
//!
//! Data flows one way, leaf modules first:
//!
//! - [`magnitude`]: parses follower-count text into a [`Magnitude`].
//! - [`ranking`]: the [`Ranked`] trait and stable magnitude sorting.
//! - [`pagination`]: page state and page windows.
//! - [`memo`]: caches that recompute a stage only when its inputs change.
//! - [`pager`]: [`RankedPager`], the stages wired together for a view.
//! - [`support`]: numeric constraint types used in public signatures.
//!
//! ## Failure policy
//!
//! Nothing on the ranking path fails. Missing or malformed follower counts
//! rank as zero (see [`Magnitude::try_parse`] for diagnostics) and pages past
//! the end are empty. The only fallible constructors reject values that
//! would make a page state meaningless, such as a page size of zero.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! degraded follower counts at `debug`, cache activity at `trace`.

pub mod magnitude;
pub mod memo;
pub mod pager;
pub mod pagination;
pub mod ranking;
pub mod support;

pub use magnitude::{Magnitude, parse_magnitude};
pub use memo::RankedPage;
pub use pager::{PagerConfig, RankedPager};
pub use pagination::{Page, PaginationState, paginate};
pub use ranking::{Ranked, Ranking, SortOrder, sort_by_magnitude};
