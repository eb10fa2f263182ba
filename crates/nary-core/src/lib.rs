//! Core types and traits for N-ary state vectors.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the capability sets the container is built against: the numeric
//! [`Scalar`], the fixed-length [`UnitVector`], the flat
//! [`FlatVector`] contract, the [`UnitCount`] bookkeeping type, and
//! [`NAryError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod count;
pub mod error;
pub mod traits;

pub use count::UnitCount;
pub use error::NAryError;
pub use traits::{DenseVector, FlatVector, Scalar, UnitVector};
