//! FlatVector contract checks.
//!
//! Reused by the container's unit tests and the integration tests. The
//! checks compare values exactly, so inputs must not contain NaN.

use std::fmt::Debug;

use nary_core::{DenseVector, FlatVector, Scalar, UnitVector};

/// Assert that `to_flat().len() == size()`.
pub fn assert_size_matches_flat<S: Scalar, V: FlatVector<S>>(v: &V) {
    let flat = v.to_flat();
    assert_eq!(
        flat.len(),
        v.size(),
        "to_flat length ({}) != size ({})",
        flat.len(),
        v.size()
    );
}

/// Assert that two calls to `to_flat` return the same column.
pub fn assert_to_flat_pure<S: Scalar, V: FlatVector<S>>(v: &V) {
    assert_eq!(v.to_flat(), v.to_flat(), "to_flat is not repeatable");
}

/// Assert that rebuilding from the flat representation reproduces `v`.
pub fn assert_rebuilds_from_flat<S: Scalar, V: FlatVector<S> + PartialEq + Debug>(v: &V) {
    let rebuilt = V::from_flat(v.to_flat()).expect("from_flat(to_flat()) should succeed");
    assert_eq!(&rebuilt, v, "from_flat(to_flat()) differs from the input");
}

/// Assert that assigning the flat representation onto a copy is a no-op.
pub fn assert_assign_own_flat_is_identity<S: Scalar, V: FlatVector<S> + PartialEq + Debug>(
    v: &V,
) {
    let mut copy = V::from_flat(v.to_flat()).expect("from_flat(to_flat()) should succeed");
    copy.assign_flat(v.to_flat())
        .expect("assign_flat(to_flat()) should succeed");
    assert_eq!(&copy, v, "assign_flat(to_flat()) changed the value");
}

/// Run every contract check on `v`.
pub fn assert_flat_vector_contract<S: Scalar, V: FlatVector<S> + PartialEq + Debug>(v: &V) {
    assert_size_matches_flat(v);
    assert_to_flat_pure(v);
    assert_rebuilds_from_flat(v);
    assert_assign_own_flat_is_identity(v);
}

/// Assert that `flat` is the in-order concatenation of each unit's flat
/// representation.
pub fn assert_units_concatenate<S: Scalar, U: UnitVector<S>>(units: &[U], flat: &DenseVector<S>) {
    let expected: Vec<S> = units
        .iter()
        .flat_map(|u| u.to_flat().iter().cloned().collect::<Vec<_>>())
        .collect();
    assert_eq!(
        flat.as_slice(),
        expected.as_slice(),
        "flat column is not the concatenation of its units"
    );
}
