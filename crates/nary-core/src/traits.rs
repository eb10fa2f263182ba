//! Capability traits for scalars, unit vectors, and flat vectors.

use crate::error::NAryError;

/// Dynamically sized numeric column vector backing all flat storage.
pub type DenseVector<S> = nalgebra::DVector<S>;

/// Numeric field type stored in every row.
///
/// Blanket-implemented for any floating-point type `nalgebra` can store,
/// which in practice means `f32` and `f64`. `Float` supplies the NaN used
/// to poison freshly sized storage.
pub trait Scalar: nalgebra::Scalar + num_traits::Float {}

impl<T> Scalar for T where T: nalgebra::Scalar + num_traits::Float {}

/// A fixed-length vector that can be stored as one unit of an N-ary state.
///
/// Implementors must report the same [`size`](UnitVector::size) for every
/// instance of the type. Containers query it once from a default instance
/// and cache it; a type whose length varies per instance breaks that
/// assumption and is not detected.
///
/// A type whose size is zero is a *null unit*.
pub trait UnitVector<S: Scalar>: Default {
    /// Number of rows this unit occupies in a flat vector.
    fn size(&self) -> usize;

    /// Flatten this unit into a column of exactly `size()` rows.
    fn to_flat(&self) -> DenseVector<S>;

    /// Build a unit from a contiguous block of `size()` rows.
    fn from_block(block: &[S]) -> Self;
}

/// The flat vector contract a state must satisfy to be driven by a
/// numeric framework: report its length, round-trip through a flat
/// column, and accept whole-buffer assignment.
pub trait FlatVector<S: Scalar>: Sized {
    /// Total number of rows in the flat representation.
    fn size(&self) -> usize;

    /// Copy of the flat representation.
    fn to_flat(&self) -> DenseVector<S>;

    /// Construct from a flat column, taking ownership of it as storage.
    ///
    /// # Errors
    ///
    /// Returns [`NAryError::NonMultipleRowCount`] if the length is not
    /// compatible with the vector's structure.
    fn from_flat(flat: DenseVector<S>) -> Result<Self, NAryError>;

    /// Replace the contents with a flat column.
    ///
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Same conditions as [`from_flat`](FlatVector::from_flat).
    fn assign_flat(&mut self, flat: DenseVector<S>) -> Result<(), NAryError>;
}
