use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Page numbers are 1-based and a page must hold at least one item, so both
/// fields of the pagination state carry this constraint. A zero page size
/// is unrepresentable rather than a runtime hazard.
///
/// # Examples
///
/// ```
/// use follower_rank::support::constraint::{Constrained, StrictlyPositive};
///
/// let per_page = Constrained::<usize, StrictlyPositive>::new(10).unwrap();
/// assert_eq!(per_page.into_inner(), 10);
///
/// assert!(StrictlyPositive::new(0_usize).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }

    /// Returns `1` as a strictly positive value; the first page.
    #[must_use]
    pub fn one() -> Constrained<usize, StrictlyPositive> {
        Self::at_least_one(1)
    }

    /// Raises `0` to `1` and wraps any other count unchanged.
    #[must_use]
    pub fn at_least_one(value: usize) -> Constrained<usize, StrictlyPositive> {
        Constrained {
            value: value.max(1),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
