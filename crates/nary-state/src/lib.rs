//! Flat-buffer container of homogeneous unit vectors.
//!
//! [`NAryState`] holds zero or more units of one [`UnitVector`] type as a
//! single flat column, so a numeric framework can treat the concatenated
//! state of N identical sub-objects as one [`FlatVector`].
//!
//! # Architecture
//!
//! ```text
//! NAryState<S, U>
//! ├── UnitCodec (unit size, rows <-> count, block addressing)
//! ├── UnitCount (Counted(n) | Uncounted for null units)
//! └── CombinedStorage (DenseVector<S> + occupied-row cursor)
//! ```
//!
//! Every operation validates through the codec before touching storage,
//! so a returned error never leaves a partial write behind.
//!
//! # Null units
//!
//! A unit type with zero rows cannot be counted. Such a state reports
//! [`UnitCount::Uncounted`], ignores `append`, and skips index checks.
//!
//! [`UnitVector`]: nary_core::UnitVector
//! [`FlatVector`]: nary_core::FlatVector
//! [`UnitCount::Uncounted`]: nary_core::UnitCount::Uncounted

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod state;
pub mod storage;

pub use codec::UnitCodec;
pub use config::{GrowthPolicy, StateConfig};
pub use state::{NAryState, Units};
pub use storage::CombinedStorage;
