//! Unit count bookkeeping.
//!
//! A state built from a null unit (zero rows) cannot know how many units
//! it holds. [`UnitCount`] makes that state explicit instead of folding it
//! into a signed integer.

use std::fmt;

/// Number of units held by a state, or `Uncounted` for a null unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitCount {
    /// A definite, non-negative number of units.
    Counted(usize),
    /// The count is indeterminate because the unit has zero rows.
    Uncounted,
}

impl UnitCount {
    /// An empty, counted state.
    pub const ZERO: Self = Self::Counted(0);

    /// Interpret a signed count, mapping any negative value to `Uncounted`.
    pub fn from_signed(count: isize) -> Self {
        if count < 0 {
            Self::Uncounted
        } else {
            Self::Counted(count.unsigned_abs())
        }
    }

    /// Signed view of the count: `-1` when uncounted.
    ///
    /// Counts beyond `isize::MAX` saturate.
    pub fn as_signed(self) -> isize {
        match self {
            Self::Counted(n) => isize::try_from(n).unwrap_or(isize::MAX),
            Self::Uncounted => -1,
        }
    }

    /// The definite count, if there is one.
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Counted(n) => Some(n),
            Self::Uncounted => None,
        }
    }

    /// Returns `true` if the count is definite.
    pub fn is_counted(self) -> bool {
        matches!(self, Self::Counted(_))
    }

    /// Whether `index` addresses a unit under this count.
    ///
    /// Always `true` when uncounted: there is nothing to bound against.
    pub fn admits(self, index: usize) -> bool {
        match self {
            Self::Counted(n) => index < n,
            Self::Uncounted => true,
        }
    }
}

impl Default for UnitCount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<usize> for UnitCount {
    fn from(n: usize) -> Self {
        Self::Counted(n)
    }
}

impl fmt::Display for UnitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counted(n) => write!(f, "{n}"),
            Self::Uncounted => write!(f, "uncounted"),
        }
    }
}
