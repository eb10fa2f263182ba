//! Combined flat storage for all units of a state.
//!
//! [`CombinedStorage`] wraps one [`DenseVector`] and an occupied-row
//! cursor. Under exact growth the backing vector is always exactly the
//! occupied length; under amortised growth it may carry spare rows past
//! the cursor, which are never observable through the public API.

use std::ops::Range;

use nary_core::{DenseVector, Scalar};
use tracing::{debug, trace};

use crate::config::{GrowthPolicy, StateConfig};

/// Contiguous column of scalars holding units back to back.
#[derive(Clone, Debug)]
pub struct CombinedStorage<S: Scalar> {
    /// Backing column. `data.len() >= rows`.
    data: DenseVector<S>,
    /// Occupied rows, from the top of `data`.
    rows: usize,
    config: StateConfig,
    /// Number of times growth reallocated the backing column.
    reallocations: u64,
}

impl<S: Scalar> CombinedStorage<S> {
    /// Empty storage.
    pub fn new(config: StateConfig) -> Self {
        Self {
            data: DenseVector::from_vec(Vec::new()),
            rows: 0,
            config,
            reallocations: 0,
        }
    }

    /// Storage of `rows` rows, each set to `value`.
    pub fn filled(rows: usize, value: S, config: StateConfig) -> Self {
        Self {
            data: DenseVector::from_element(rows, value),
            rows,
            config,
            reallocations: 0,
        }
    }

    /// Adopt an existing flat column as storage, unchanged.
    pub fn from_dense(flat: DenseVector<S>, config: StateConfig) -> Self {
        let rows = flat.len();
        Self {
            data: flat,
            rows,
            config,
            reallocations: 0,
        }
    }

    /// Occupied rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Rows held by the backing allocation, occupied or not.
    pub fn capacity_rows(&self) -> usize {
        self.data.len()
    }

    /// Memory usage of the backing allocation in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<S>()
    }

    /// Number of growth reallocations since construction or the last
    /// [`replace`](Self::replace).
    pub fn reallocations(&self) -> u64 {
        self.reallocations
    }

    /// The storage configuration.
    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    /// Occupied rows as a slice.
    pub fn as_slice(&self) -> &[S] {
        &self.data.as_slice()[..self.rows]
    }

    /// Extend the occupied region by `extra` rows, preserving every
    /// existing row, and return the new tail range.
    ///
    /// The new rows hold NaN until written.
    pub fn grow(&mut self, extra: usize) -> Range<usize> {
        let start = self.rows;
        let end = start + extra;
        let capacity = self.data.len();
        if end > capacity {
            let new_capacity = self.config.next_capacity(capacity, end);
            if self.config.growth == GrowthPolicy::Amortized {
                debug!(
                    from = capacity,
                    to = new_capacity,
                    "reserving combined storage rows"
                );
            }
            trace!(
                from = capacity,
                to = new_capacity,
                "reallocating combined storage"
            );
            self.data.resize_vertically_mut(new_capacity, S::nan());
            self.reallocations += 1;
        }
        self.rows = end;
        start..end
    }

    /// Read the rows in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past the occupied rows.
    pub fn block(&self, range: Range<usize>) -> &[S] {
        &self.as_slice()[range]
    }

    /// Overwrite rows starting at `row0` with `src`.
    ///
    /// # Panics
    ///
    /// Panics if `row0 + src.len()` exceeds the occupied rows.
    pub fn write_block(&mut self, row0: usize, src: &DenseVector<S>) {
        assert!(
            row0 + src.len() <= self.rows,
            "block {row0}..{} exceeds {} occupied rows",
            row0 + src.len(),
            self.rows
        );
        self.data.rows_mut(row0, src.len()).copy_from(src);
    }

    /// Replace the whole storage with `flat`.
    pub fn replace(&mut self, flat: DenseVector<S>) {
        trace!(
            old_rows = self.rows,
            new_rows = flat.len(),
            "replacing combined storage"
        );
        self.rows = flat.len();
        self.data = flat;
        self.reallocations = 0;
    }

    /// Copy of the occupied rows.
    pub fn to_dense(&self) -> DenseVector<S> {
        self.data.rows(0, self.rows).into_owned()
    }

    /// Consume the storage, returning the occupied rows.
    pub fn into_dense(self) -> DenseVector<S> {
        if self.data.len() == self.rows {
            self.data
        } else {
            self.data.resize_vertically(self.rows, S::nan())
        }
    }
}

impl<S: Scalar> PartialEq for CombinedStorage<S> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
