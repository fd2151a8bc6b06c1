//! Type-level numeric constraints checked once at construction.
//!
//! The engine leans on two invariants that are easy to lose track of when
//! values are passed around as bare numbers:
//!
//! - [`NonNegative`]: zero or greater (follower magnitudes)
//! - [`StrictlyPositive`]: greater than zero (page numbers and page sizes)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//! Once a value is wrapped, downstream code can rely on the invariant
//! without re-checking it.
//!
//! For convenience, each marker also provides an associated `new()`
//! constructor (e.g., `StrictlyPositive::new(25_usize)`).
//!
//! # Extending
//!
//! Custom invariants can be expressed by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use follower_rank::support::constraint::{Constrained, StrictlyPositive};
///
/// let page_size = Constrained::<usize, StrictlyPositive>::new(25).unwrap();
/// assert_eq!(page_size.into_inner(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Deserializes the inner value and then checks the constraint, so invalid
/// configuration is rejected at load time rather than at first use.
#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for Constrained<T, C>
where
    T: serde::Deserialize<'de>,
    C: Constraint<T>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for Constrained<T, C>
where
    T: serde::Serialize,
    C: Constraint<T>,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
