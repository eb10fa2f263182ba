//! Error types for N-ary state operations.
//!
//! Every variant signals caller misuse. Operations validate before they
//! write, so an `Err` always leaves the container unchanged.

use std::error::Error;
use std::fmt;

/// Errors from unit/row bookkeeping and indexed access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NAryError {
    /// `get`/`set` index is not below the current unit count.
    ///
    /// Only raised for non-null unit types; a null unit has no count to
    /// check against.
    OutOfRange {
        /// The requested unit index.
        index: usize,
        /// The unit count at the time of the request.
        count: usize,
    },
    /// A flat row count is not an exact multiple of a non-null unit size.
    NonMultipleRowCount {
        /// Length of the offending flat vector.
        rows: usize,
        /// Row length of one unit.
        unit_size: usize,
    },
    /// An uncounted (negative) unit count was requested for a unit type
    /// that has a non-zero size.
    NegativeCountForNonNullUnit {
        /// Row length of one unit.
        unit_size: usize,
    },
    /// The rows needed for a requested unit count do not fit in `usize`.
    RowCountOverflow {
        /// The requested unit count.
        count: usize,
        /// Row length of one unit.
        unit_size: usize,
    },
}

impl NAryError {
    /// Returns `true` for the row/count domain errors, as opposed to an
    /// index range error.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::NonMultipleRowCount { .. }
                | Self::NegativeCountForNonNullUnit { .. }
                | Self::RowCountOverflow { .. }
        )
    }
}

impl fmt::Display for NAryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, count } => {
                write!(f, "unit index {index} out of range for unit count {count}")
            }
            Self::NonMultipleRowCount { rows, unit_size } => {
                write!(
                    f,
                    "row count {rows} is not a multiple of non-null unit size {unit_size}"
                )
            }
            Self::NegativeCountForNonNullUnit { unit_size } => {
                write!(f, "negative count for non-null unit of size {unit_size}")
            }
            Self::RowCountOverflow { count, unit_size } => {
                write!(f, "{count} units of size {unit_size} overflow the row count")
            }
        }
    }
}

impl Error for NAryError {}
