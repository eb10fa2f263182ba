//! Benchmark profiles for N-ary state vectors.
//!
//! - [`rigid_body_fleet`]: a state of `n` rigid bodies with deterministic,
//!   seed-derived positions.
//! - [`body_positions`]: the deterministic position generator itself.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nary_state::{NAryState, StateConfig};
use nary_test_utils::RigidBodyState;

/// A fleet of rigid bodies, the reference workload for the benches.
pub type Fleet = NAryState<f64, RigidBodyState<f64>>;

/// Build a fleet of `n` bodies by sequential `append`.
pub fn rigid_body_fleet(n: usize, seed: u64, config: StateConfig) -> Fleet {
    let mut fleet = Fleet::with_config(config);
    for position in body_positions(n, seed) {
        fleet.append(&RigidBodyState::at_rest(position));
    }
    fleet
}

/// Generate `n` deterministic positions in `[0, 100)³`.
///
/// Uses a 64-bit LCG so benches replay identically without an RNG crate.
pub fn body_positions(n: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64 * 100.0
    };
    (0..n).map(|_| [next(), next(), next()]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nary_core::UnitCount;

    #[test]
    fn positions_are_deterministic_and_bounded() {
        let a = body_positions(64, 7);
        let b = body_positions(64, 7);
        assert_eq!(a, b);
        assert!(a.iter().flatten().all(|&v| (0.0..100.0).contains(&v)));
        assert_ne!(a, body_positions(64, 8));
    }

    #[test]
    fn fleet_has_requested_count() {
        let fleet = rigid_body_fleet(10, 42, StateConfig::default());
        assert_eq!(fleet.count(), UnitCount::Counted(10));
        assert_eq!(fleet.size(), 130);
    }
}
