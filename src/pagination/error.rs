use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors constructing a [`PaginationState`](super::PaginationState) from raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page numbers are 1-based.
    #[error("invalid current page")]
    CurrentPage(#[source] ConstraintError),

    /// A page must hold at least one item.
    #[error("invalid items per page")]
    ItemsPerPage(#[source] ConstraintError),
}
