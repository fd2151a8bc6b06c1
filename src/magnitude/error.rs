use thiserror::Error;

/// Reasons a follower-count string was degraded to zero.
///
/// The total parser never surfaces these; they are available through
/// [`Magnitude::try_parse`](super::Magnitude::try_parse) for callers that
/// want to report data-quality problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMagnitudeError {
    /// The input was empty or contained only whitespace.
    #[error("follower count is empty")]
    Empty,

    /// The input does not match the follower-count grammar.
    #[error("malformed follower count: {input:?}")]
    Malformed {
        /// Normalized (trimmed, uppercased) input.
        input: String,
    },

    /// The input is well-formed but its value does not fit in an `f64`.
    #[error("follower count out of range: {input:?}")]
    NotFinite {
        /// Normalized (trimmed, uppercased) input.
        input: String,
    },
}
