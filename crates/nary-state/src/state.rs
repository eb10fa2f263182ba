//! The N-ary state container.

use std::fmt;
use std::marker::PhantomData;
use std::slice::ChunksExact;

use nary_core::{DenseVector, FlatVector, NAryError, Scalar, UnitCount, UnitVector};

use crate::codec::UnitCodec;
use crate::config::StateConfig;
use crate::storage::CombinedStorage;

/// An ordered sequence of `U` units stored as one flat column.
///
/// The flat representation is the concatenation of each unit's flat
/// representation, in index order. Units are materialised on [`get`]
/// and flattened on [`append`]/[`set`]; the flat column is the only
/// copy of the data.
///
/// If `U` is a null unit (zero rows), the unit count is
/// [`UnitCount::Uncounted`] for the lifetime of the state, `append` does
/// nothing, and `get`/`set` skip their bound check.
///
/// [`get`]: NAryState::get
/// [`append`]: NAryState::append
/// [`set`]: NAryState::set
pub struct NAryState<S: Scalar, U: UnitVector<S>> {
    codec: UnitCodec,
    count: UnitCount,
    storage: CombinedStorage<S>,
    _unit: PhantomData<fn() -> U>,
}

impl<S: Scalar, U: UnitVector<S>> NAryState<S, U> {
    /// Create an empty state.
    ///
    /// The count is zero, or `Uncounted` for a null unit.
    pub fn new() -> Self {
        Self::with_config(StateConfig::default())
    }

    /// Create an empty state with the given storage configuration.
    pub fn with_config(config: StateConfig) -> Self {
        let codec = UnitCodec::of::<S, U>();
        Self {
            count: codec.empty_count(),
            codec,
            storage: CombinedStorage::new(config),
            _unit: PhantomData,
        }
    }

    /// Create a state sized for `count` units, every row set to NaN.
    ///
    /// NaN marks rows that were never written. For a null unit the stored
    /// count is `Uncounted` whatever was requested.
    ///
    /// # Errors
    ///
    /// [`NAryError::NegativeCountForNonNullUnit`] if `count` is
    /// `Uncounted` and the unit is not null, or
    /// [`NAryError::RowCountOverflow`] if the rows for `count` units do
    /// not fit in `usize`.
    pub fn with_count(count: UnitCount) -> Result<Self, NAryError> {
        Self::with_count_and_config(count, StateConfig::default())
    }

    /// [`with_count`](Self::with_count) with a storage configuration.
    pub fn with_count_and_config(count: UnitCount, config: StateConfig) -> Result<Self, NAryError> {
        let codec = UnitCodec::of::<S, U>();
        let rows = codec.rows_from_unit_count(count)?;
        Ok(Self {
            count: codec.normalize(count)?,
            codec,
            storage: CombinedStorage::filled(rows, S::nan(), config),
            _unit: PhantomData,
        })
    }

    /// Adopt `flat` as storage and derive the unit count from its length.
    ///
    /// # Errors
    ///
    /// [`NAryError::NonMultipleRowCount`] if the unit is not null and the
    /// length of `flat` is not a multiple of the unit size.
    pub fn from_flat(flat: DenseVector<S>) -> Result<Self, NAryError> {
        Self::from_flat_with_config(flat, StateConfig::default())
    }

    /// [`from_flat`](Self::from_flat) with a storage configuration.
    pub fn from_flat_with_config(
        flat: DenseVector<S>,
        config: StateConfig,
    ) -> Result<Self, NAryError> {
        let codec = UnitCodec::of::<S, U>();
        Ok(Self {
            count: codec.unit_count_from_rows(flat.len())?,
            codec,
            storage: CombinedStorage::from_dense(flat, config),
            _unit: PhantomData,
        })
    }

    /// Number of units held, or `Uncounted` for a null unit.
    pub fn count(&self) -> UnitCount {
        self.count
    }

    /// Rows per unit, resolved once at construction.
    pub fn unit_size(&self) -> usize {
        self.codec.unit_size()
    }

    /// Total rows of flat storage.
    ///
    /// This is `count * unit_size` for a non-null unit, not the unit count.
    pub fn size(&self) -> usize {
        self.storage.rows()
    }

    /// Rows held by the backing allocation, including spare rows reserved
    /// by amortised growth.
    pub fn capacity_rows(&self) -> usize {
        self.storage.capacity_rows()
    }

    /// Memory usage of the backing allocation in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage.memory_bytes()
    }

    /// The storage configuration.
    pub fn config(&self) -> &StateConfig {
        self.storage.config()
    }

    /// Flat storage as a slice.
    pub fn as_slice(&self) -> &[S] {
        self.storage.as_slice()
    }

    /// Append `unit` after the last unit.
    ///
    /// A null unit has nothing to store and the call does nothing.
    pub fn append(&mut self, unit: &U) {
        if self.codec.is_null() {
            debug_assert_eq!(self.count, UnitCount::Uncounted);
            return;
        }
        let flat = unit.to_flat();
        debug_assert_eq!(flat.len(), self.codec.unit_size(), "unit size changed");
        let tail = self.storage.grow(self.codec.unit_size());
        self.storage.write_block(tail.start, &flat);
        if let UnitCount::Counted(n) = self.count {
            self.count = UnitCount::Counted(n + 1);
        }
    }

    /// Copy of the unit at `index`.
    ///
    /// # Errors
    ///
    /// [`NAryError::OutOfRange`] if the unit is not null and `index` is
    /// not below the unit count.
    pub fn get(&self, index: usize) -> Result<U, NAryError> {
        self.check_index(index)?;
        Ok(U::from_block(self.storage.block(self.codec.block(index))))
    }

    /// Overwrite the unit at `index` with `unit`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get). Nothing is written on error.
    pub fn set(&mut self, index: usize, unit: &U) -> Result<(), NAryError> {
        self.check_index(index)?;
        let flat = unit.to_flat();
        debug_assert_eq!(flat.len(), self.codec.unit_size(), "unit size changed");
        self.storage.write_block(self.codec.block(index).start, &flat);
        Ok(())
    }

    /// Copy of the flat storage.
    pub fn to_flat(&self) -> DenseVector<S> {
        self.storage.to_dense()
    }

    /// Replace storage with `flat` and recompute the unit count.
    ///
    /// # Errors
    ///
    /// [`NAryError::NonMultipleRowCount`] under the same condition as
    /// [`from_flat`](Self::from_flat). The state is unchanged on error.
    pub fn assign_flat(&mut self, flat: DenseVector<S>) -> Result<(), NAryError> {
        let count = self.codec.unit_count_from_rows(flat.len())?;
        self.storage.replace(flat);
        self.count = count;
        Ok(())
    }

    /// Iterate over copies of the units in index order.
    ///
    /// Yields nothing for a null unit, whose count is indeterminate.
    pub fn iter(&self) -> Units<'_, S, U> {
        let chunks = (!self.codec.is_null())
            .then(|| self.storage.as_slice().chunks_exact(self.codec.unit_size()));
        Units {
            chunks,
            _unit: PhantomData,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), NAryError> {
        if self.count.admits(index) {
            return Ok(());
        }
        Err(NAryError::OutOfRange {
            index,
            count: self.count.get().unwrap_or(0),
        })
    }
}

impl<S: Scalar, U: UnitVector<S>> Default for NAryState<S, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar, U: UnitVector<S>> Clone for NAryState<S, U> {
    fn clone(&self) -> Self {
        Self {
            codec: self.codec,
            count: self.count,
            storage: self.storage.clone(),
            _unit: PhantomData,
        }
    }
}

impl<S: Scalar, U: UnitVector<S>> fmt::Debug for NAryState<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NAryState")
            .field("unit_size", &self.codec.unit_size())
            .field("count", &self.count)
            .field("rows", &self.storage.as_slice())
            .finish()
    }
}

impl<S: Scalar, U: UnitVector<S>> PartialEq for NAryState<S, U> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.storage == other.storage
    }
}

impl<S: Scalar, U: UnitVector<S>> FlatVector<S> for NAryState<S, U> {
    fn size(&self) -> usize {
        NAryState::size(self)
    }

    fn to_flat(&self) -> DenseVector<S> {
        NAryState::to_flat(self)
    }

    fn from_flat(flat: DenseVector<S>) -> Result<Self, NAryError> {
        NAryState::from_flat(flat)
    }

    fn assign_flat(&mut self, flat: DenseVector<S>) -> Result<(), NAryError> {
        NAryState::assign_flat(self, flat)
    }
}

impl<S: Scalar, U: UnitVector<S>> TryFrom<DenseVector<S>> for NAryState<S, U> {
    type Error = NAryError;

    fn try_from(flat: DenseVector<S>) -> Result<Self, Self::Error> {
        Self::from_flat(flat)
    }
}

impl<S: Scalar, U: UnitVector<S>> From<NAryState<S, U>> for DenseVector<S> {
    fn from(state: NAryState<S, U>) -> Self {
        state.storage.into_dense()
    }
}

impl<S: Scalar, U: UnitVector<S>> Extend<U> for NAryState<S, U> {
    fn extend<I: IntoIterator<Item = U>>(&mut self, iter: I) {
        for unit in iter {
            self.append(&unit);
        }
    }
}

impl<S: Scalar, U: UnitVector<S>> FromIterator<U> for NAryState<S, U> {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        let mut state = Self::new();
        state.extend(iter);
        state
    }
}

impl<'a, S: Scalar, U: UnitVector<S>> IntoIterator for &'a NAryState<S, U> {
    type Item = U;
    type IntoIter = Units<'a, S, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over copies of the units in an [`NAryState`].
pub struct Units<'a, S: Scalar, U> {
    chunks: Option<ChunksExact<'a, S>>,
    _unit: PhantomData<fn() -> U>,
}

impl<S: Scalar, U: UnitVector<S>> Iterator for Units<'_, S, U> {
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.as_mut()?.next().map(U::from_block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.chunks {
            Some(chunks) => chunks.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<S: Scalar, U: UnitVector<S>> ExactSizeIterator for Units<'_, S, U> {}
