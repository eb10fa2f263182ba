//! Test utilities and fixture unit types for nary development.
//!
//! Provides concrete [`UnitVector`](nary_core::UnitVector) implementations
//! of several sizes, including the zero-row [`NullUnit`], and contract
//! checks for [`FlatVector`](nary_core::FlatVector) implementations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

pub use compliance::{assert_flat_vector_contract, assert_units_concatenate};
pub use fixtures::{NullUnit, Pair, RigidBodyState, Triple};
