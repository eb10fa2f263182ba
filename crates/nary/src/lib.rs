//! nary: N identical unit vectors stored as one flat numeric column.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the nary sub-crates. For most users, adding `nary` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use nary::prelude::*;
//!
//! // A 2D point as a unit vector.
//! #[derive(Default, Debug, PartialEq)]
//! struct Point { x: f64, y: f64 }
//!
//! impl UnitVector<f64> for Point {
//!     fn size(&self) -> usize { 2 }
//!     fn to_flat(&self) -> DenseVector<f64> {
//!         DenseVector::from_vec(vec![self.x, self.y])
//!     }
//!     fn from_block(block: &[f64]) -> Self {
//!         Point { x: block[0], y: block[1] }
//!     }
//! }
//!
//! let mut points = NAryState::<f64, Point>::new();
//! points.append(&Point { x: 1.0, y: 2.0 });
//! points.append(&Point { x: 3.0, y: 4.0 });
//!
//! assert_eq!(points.count(), UnitCount::Counted(2));
//! assert_eq!(points.size(), 4);
//! assert_eq!(points.to_flat().as_slice(), &[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(points.get(1).unwrap(), Point { x: 3.0, y: 4.0 });
//!
//! // Flat columns with a partial unit are rejected.
//! let err = points.assign_flat(DenseVector::from_vec(vec![0.0; 3])).unwrap_err();
//! assert!(matches!(err, NAryError::NonMultipleRowCount { rows: 3, unit_size: 2 }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nary-core` | `Scalar`, `UnitVector`, `FlatVector`, `UnitCount`, `DenseVector` |
//! | [`state`] | `nary-state` | `NAryState`, `UnitCodec`, `CombinedStorage`, `StateConfig` |
//! | [`error`] | `nary-core` | `NAryError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits and bookkeeping types.
pub mod types {
    pub use nary_core::count::*;
    pub use nary_core::traits::*;
}

/// The container, its codec, storage, and configuration.
pub mod state {
    pub use nary_state::codec::*;
    pub use nary_state::config::*;
    pub use nary_state::state::*;
    pub use nary_state::storage::*;
}

/// Error types.
pub mod error {
    pub use nary_core::error::*;
}

/// Common imports for working with N-ary states.
pub mod prelude {
    pub use nary_core::{DenseVector, FlatVector, NAryError, Scalar, UnitCount, UnitVector};
    pub use nary_state::{GrowthPolicy, NAryState, StateConfig};
}
