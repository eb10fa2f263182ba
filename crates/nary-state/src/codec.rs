//! Unit size resolution and the row/count codec.
//!
//! [`UnitCodec`] converts between "number of units" and "number of flat
//! rows" for one unit type. The two directions are intended inverses,
//! but not a bijection: a null unit (zero rows) maps every row count to
//! [`UnitCount::Uncounted`], and `Uncounted` maps back to zero rows.

use std::ops::Range;

use nary_core::{NAryError, Scalar, UnitCount, UnitVector};

/// Row/count conversion for a unit type of fixed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitCodec {
    unit_size: usize,
}

impl UnitCodec {
    /// Resolve the unit size of `U` by default-constructing one instance.
    ///
    /// The size is assumed identical for every instance of `U`.
    pub fn of<S: Scalar, U: UnitVector<S>>() -> Self {
        Self::new(U::default().size())
    }

    /// Codec for a unit of `unit_size` rows.
    pub fn new(unit_size: usize) -> Self {
        Self { unit_size }
    }

    /// Rows per unit.
    pub fn unit_size(&self) -> usize {
        self.unit_size
    }

    /// Returns `true` if the unit has zero rows.
    pub fn is_null(&self) -> bool {
        self.unit_size == 0
    }

    /// Count for empty storage: zero units, or `Uncounted` for a null unit.
    ///
    /// Equal to `unit_count_from_rows(0)`, which cannot fail.
    pub fn empty_count(&self) -> UnitCount {
        if self.is_null() {
            UnitCount::Uncounted
        } else {
            UnitCount::ZERO
        }
    }

    /// Number of units decoded from a flat column of `rows` rows.
    ///
    /// Always `Uncounted` for a null unit.
    ///
    /// # Errors
    ///
    /// [`NAryError::NonMultipleRowCount`] if the unit is not null and
    /// `rows` is not a multiple of the unit size.
    pub fn unit_count_from_rows(&self, rows: usize) -> Result<UnitCount, NAryError> {
        if self.is_null() {
            return Ok(UnitCount::Uncounted);
        }
        if rows % self.unit_size != 0 {
            return Err(NAryError::NonMultipleRowCount {
                rows,
                unit_size: self.unit_size,
            });
        }
        Ok(UnitCount::Counted(rows / self.unit_size))
    }

    /// Number of flat rows needed to hold `count` units.
    ///
    /// `Counted(n)` needs `n * unit_size` rows (zero for a null unit).
    /// `Uncounted` needs zero rows.
    ///
    /// # Errors
    ///
    /// [`NAryError::NegativeCountForNonNullUnit`] if `count` is
    /// `Uncounted` and the unit is not null.
    /// [`NAryError::RowCountOverflow`] if `n * unit_size` overflows.
    pub fn rows_from_unit_count(&self, count: UnitCount) -> Result<usize, NAryError> {
        match count {
            UnitCount::Counted(n) => {
                n.checked_mul(self.unit_size)
                    .ok_or(NAryError::RowCountOverflow {
                        count: n,
                        unit_size: self.unit_size,
                    })
            }
            UnitCount::Uncounted if self.is_null() => Ok(0),
            UnitCount::Uncounted => Err(NAryError::NegativeCountForNonNullUnit {
                unit_size: self.unit_size,
            }),
        }
    }

    /// Canonical form of a requested count: rows and back again.
    ///
    /// Leaves a valid count unchanged for a non-null unit and forces
    /// `Uncounted` for a null unit.
    pub fn normalize(&self, count: UnitCount) -> Result<UnitCount, NAryError> {
        self.unit_count_from_rows(self.rows_from_unit_count(count)?)
    }

    /// Row range occupied by the unit at `index`.
    pub fn block(&self, index: usize) -> Range<usize> {
        let row0 = index * self.unit_size;
        row0..row0 + self.unit_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nary_test_utils::{NullUnit, Triple};
    use proptest::prelude::*;

    #[test]
    fn resolves_size_from_default_instance() {
        assert_eq!(UnitCodec::of::<f64, Triple<f64>>().unit_size(), 3);
        assert!(UnitCodec::of::<f32, NullUnit<f32>>().is_null());
    }

    #[test]
    fn non_multiple_rows_rejected() {
        let codec = UnitCodec::new(2);
        assert_eq!(
            codec.unit_count_from_rows(7),
            Err(NAryError::NonMultipleRowCount {
                rows: 7,
                unit_size: 2
            })
        );
    }

    #[test]
    fn null_unit_is_always_uncounted() {
        let codec = UnitCodec::new(0);
        assert_eq!(codec.unit_count_from_rows(0), Ok(UnitCount::Uncounted));
        assert_eq!(codec.unit_count_from_rows(7), Ok(UnitCount::Uncounted));
        assert_eq!(codec.empty_count(), UnitCount::Uncounted);
    }

    #[test]
    fn uncounted_requires_null_unit() {
        assert_eq!(UnitCodec::new(0).rows_from_unit_count(UnitCount::Uncounted), Ok(0));
        assert_eq!(
            UnitCodec::new(4).rows_from_unit_count(UnitCount::Uncounted),
            Err(NAryError::NegativeCountForNonNullUnit { unit_size: 4 })
        );
    }

    #[test]
    fn oversized_count_is_an_error_not_a_wrap() {
        let codec = UnitCodec::new(3);
        assert_eq!(
            codec.rows_from_unit_count(UnitCount::Counted(usize::MAX / 2)),
            Err(NAryError::RowCountOverflow {
                count: usize::MAX / 2,
                unit_size: 3
            })
        );
        assert_eq!(
            UnitCodec::new(0).rows_from_unit_count(UnitCount::Counted(usize::MAX)),
            Ok(0)
        );
    }

    #[test]
    fn null_unit_rows_are_zero_for_any_count() {
        let codec = UnitCodec::new(0);
        assert_eq!(codec.rows_from_unit_count(UnitCount::Counted(12)), Ok(0));
        assert_eq!(
            codec.normalize(UnitCount::Counted(12)),
            Ok(UnitCount::Uncounted)
        );
    }

    #[test]
    fn block_addresses_contiguous_rows() {
        let codec = UnitCodec::new(3);
        assert_eq!(codec.block(0), 0..3);
        assert_eq!(codec.block(2), 6..9);
        assert_eq!(UnitCodec::new(0).block(5), 0..0);
    }

    proptest! {
        #[test]
        fn empty_count_matches_zero_rows(unit_size in 0usize..16) {
            let codec = UnitCodec::new(unit_size);
            prop_assert_eq!(codec.unit_count_from_rows(0), Ok(codec.empty_count()));
        }

        #[test]
        fn counted_roundtrip_for_non_null(unit_size in 1usize..16, n in 0usize..4096) {
            let codec = UnitCodec::new(unit_size);
            let rows = codec.rows_from_unit_count(UnitCount::Counted(n)).unwrap();
            prop_assert_eq!(rows, n * unit_size);
            prop_assert_eq!(codec.unit_count_from_rows(rows), Ok(UnitCount::Counted(n)));
            prop_assert_eq!(codec.normalize(UnitCount::Counted(n)), Ok(UnitCount::Counted(n)));
        }

        #[test]
        fn rows_accepted_iff_multiple(unit_size in 1usize..16, rows in 0usize..4096) {
            let codec = UnitCodec::new(unit_size);
            prop_assert_eq!(codec.unit_count_from_rows(rows).is_ok(), rows % unit_size == 0);
        }
    }
}
