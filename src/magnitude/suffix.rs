/// Magnitude suffix trailing a follower count (`"2.4M"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suffix {
    /// No suffix; the number is taken as written.
    #[default]
    None,
    /// Thousands (`10^3`).
    K,
    /// Millions (`10^6`).
    M,
    /// Billions (`10^9`).
    B,
    /// Trillions (`10^12`).
    T,
}

impl Suffix {
    /// Parses a single uppercase suffix letter.
    ///
    /// Returns `None` for anything other than `K`, `M`, `B`, or `T`.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            'B' => Some(Self::B),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Scale factor applied to the numeric part.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::K => 1e3,
            Self::M => 1e6,
            Self::B => 1e9,
            Self::T => 1e12,
        }
    }
}
