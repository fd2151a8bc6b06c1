//! Follower-count parsing.
//!
//! Dashboards receive follower counts as display strings such as `"2.4M"`,
//! `"980K"`, or `"12,300"`. This module recovers their numeric [`Magnitude`].
//!
//! # Grammar
//!
//! After trimming surrounding whitespace (and any byte-order mark) and uppercasing, the entire input
//! must match:
//!
//! ```text
//! COUNT  := NUMBER SUFFIX
//! NUMBER := (DIGITS | GROUPED) ('.' DIGITS)?
//! GROUPED:= [0-9]{1,3} (',' [0-9]{3})+
//! SUFFIX := '' | 'K' | 'M' | 'B' | 'T'
//! ```
//!
//! # Degrading to zero
//!
//! [`parse_magnitude`] and [`Magnitude::parse`] are total: missing, empty, or
//! malformed input yields [`Magnitude::zero`] instead of an error, so one bad
//! record cannot break a ranking. Use [`Magnitude::try_parse`] to find out
//! *why* an input degraded.
//!
//! ```
//! use follower_rank::magnitude::{Magnitude, parse_magnitude};
//!
//! assert_eq!(parse_magnitude(Some("2.4M")).value(), 2_400_000.0);
//! assert_eq!(parse_magnitude(Some("12,300")).value(), 12_300.0);
//! assert_eq!(parse_magnitude(Some("1MM")).value(), 0.0);
//! assert_eq!(parse_magnitude(None).value(), 0.0);
//!
//! assert!(Magnitude::try_parse("1MM").is_err());
//! ```

mod error;
mod suffix;

pub use error::ParseMagnitudeError;
pub use suffix::Suffix;

use std::{cmp::Ordering, str::FromStr, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, NonNegative};

/// Stripped along with whitespace; exported spreadsheets often lead with it.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

static FOLLOWER_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<number>(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?)(?P<suffix>[KMBT])?$")
        .expect("follower count pattern should compile")
});

/// Canonical numeric value of a follower count.
///
/// Always finite and non-negative.
///
/// # Precision
///
/// Magnitudes are `f64`. Integers are exact only up to `2^53`
/// (about `9.007e15`), so large `T`-suffixed counts such as `"12,345.678T"`
/// round to the nearest representable value. This is accepted: rankings
/// only need relative order, and counts of that size are not real data.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Magnitude(Constrained<f64, NonNegative>);

impl Magnitude {
    /// Wraps a raw value.
    ///
    /// Negative zero is normalized to zero.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value is negative, `NaN`, or infinite.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        if value.is_infinite() {
            return Err(ConstraintError::NotFinite);
        }
        Ok(Self(NonNegative::new(value + 0.0)?))
    }

    /// The magnitude of a missing or unparseable follower count.
    #[must_use]
    pub fn zero() -> Self {
        Self(NonNegative::zero())
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }

    /// Parses a follower count, degrading invalid input to zero.
    ///
    /// Rejected input is reported as a `debug` tracing event.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::try_parse(input).unwrap_or_else(|err| {
            debug!(%err, "follower count degraded to zero");
            Self::zero()
        })
    }

    /// Parses a follower count, reporting why invalid input was rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseMagnitudeError`] if the input is empty, does not
    /// match the follower-count grammar, or overflows `f64`.
    pub fn try_parse(input: &str) -> Result<Self, ParseMagnitudeError> {
        let normalized = input
            .trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
            .to_uppercase();
        if normalized.is_empty() {
            return Err(ParseMagnitudeError::Empty);
        }

        let (number, suffix) = {
            let Some(captures) = FOLLOWER_COUNT.captures(&normalized) else {
                return Err(ParseMagnitudeError::Malformed {
                    input: normalized.clone(),
                });
            };
            let number = captures
                .name("number")
                .map_or("", |m| m.as_str())
                .replace(',', "");
            let suffix = captures
                .name("suffix")
                .and_then(|m| m.as_str().chars().next())
                .and_then(Suffix::from_letter)
                .unwrap_or_default();
            (number, suffix)
        };

        let Ok(base) = number.parse::<f64>() else {
            return Err(ParseMagnitudeError::Malformed { input: normalized });
        };

        let value = base * suffix.multiplier();
        if !value.is_finite() {
            return Err(ParseMagnitudeError::NotFinite { input: normalized });
        }

        Self::new(value).map_err(|_| ParseMagnitudeError::Malformed { input: normalized })
    }

    /// Total order over magnitudes.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Magnitude {
    type Err = ParseMagnitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

/// Parses an optional follower count, degrading missing input to zero.
///
/// `None` stands in for an absent (null or undefined) `followers` field.
#[must_use]
pub fn parse_magnitude(input: Option<&str>) -> Magnitude {
    input.map_or_else(Magnitude::zero, Magnitude::parse)
}
