//! Fixture unit vectors.
//!
//! - [`Pair`]: 2 rows.
//! - [`Triple`]: 3 rows.
//! - [`RigidBodyState`]: 13 rows: position, orientation quaternion,
//!   linear and angular velocity.
//! - [`NullUnit`]: 0 rows.

use std::marker::PhantomData;

use nary_core::{DenseVector, Scalar, UnitVector};

/// Two-component unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pair<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Pair<S> {
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

impl<S: Scalar> Default for Pair<S> {
    fn default() -> Self {
        Self::new(S::zero(), S::zero())
    }
}

impl<S: Scalar> UnitVector<S> for Pair<S> {
    fn size(&self) -> usize {
        2
    }

    fn to_flat(&self) -> DenseVector<S> {
        DenseVector::from_vec(vec![self.x, self.y])
    }

    fn from_block(block: &[S]) -> Self {
        Self::new(block[0], block[1])
    }
}

/// Three-component unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triple<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Triple<S> {
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }
}

impl<S: Scalar> Default for Triple<S> {
    fn default() -> Self {
        Self::new(S::zero(), S::zero(), S::zero())
    }
}

impl<S: Scalar> UnitVector<S> for Triple<S> {
    fn size(&self) -> usize {
        3
    }

    fn to_flat(&self) -> DenseVector<S> {
        DenseVector::from_vec(vec![self.x, self.y, self.z])
    }

    fn from_block(block: &[S]) -> Self {
        Self::new(block[0], block[1], block[2])
    }
}

/// Kinematic state of one rigid body.
///
/// Flat layout: `[px, py, pz, qw, qx, qy, qz, vx, vy, vz, wx, wy, wz]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBodyState<S> {
    pub position: [S; 3],
    /// Unit quaternion, scalar first.
    pub orientation: [S; 4],
    pub linear_velocity: [S; 3],
    pub angular_velocity: [S; 3],
}

impl<S: Scalar> RigidBodyState<S> {
    pub const ROWS: usize = 13;

    /// A body at rest at `position` with identity orientation.
    pub fn at_rest(position: [S; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl<S: Scalar> Default for RigidBodyState<S> {
    fn default() -> Self {
        let z = S::zero();
        Self {
            position: [z; 3],
            orientation: [S::one(), z, z, z],
            linear_velocity: [z; 3],
            angular_velocity: [z; 3],
        }
    }
}

impl<S: Scalar> UnitVector<S> for RigidBodyState<S> {
    fn size(&self) -> usize {
        Self::ROWS
    }

    fn to_flat(&self) -> DenseVector<S> {
        let mut rows = Vec::with_capacity(Self::ROWS);
        rows.extend_from_slice(&self.position);
        rows.extend_from_slice(&self.orientation);
        rows.extend_from_slice(&self.linear_velocity);
        rows.extend_from_slice(&self.angular_velocity);
        DenseVector::from_vec(rows)
    }

    fn from_block(block: &[S]) -> Self {
        Self {
            position: [block[0], block[1], block[2]],
            orientation: [block[3], block[4], block[5], block[6]],
            linear_velocity: [block[7], block[8], block[9]],
            angular_velocity: [block[10], block[11], block[12]],
        }
    }
}

/// Zero-row unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NullUnit<S>(PhantomData<S>);

impl<S> Default for NullUnit<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<S: Scalar> UnitVector<S> for NullUnit<S> {
    fn size(&self) -> usize {
        0
    }

    fn to_flat(&self) -> DenseVector<S> {
        DenseVector::from_vec(Vec::new())
    }

    fn from_block(_block: &[S]) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_length_matches_size() {
        assert_eq!(Pair::<f64>::default().to_flat().len(), 2);
        assert_eq!(Triple::<f32>::default().to_flat().len(), 3);
        assert_eq!(RigidBodyState::<f64>::default().to_flat().len(), 13);
        assert_eq!(NullUnit::<f64>::default().to_flat().len(), 0);
    }

    #[test]
    fn rigid_body_layout() {
        let body = RigidBodyState::at_rest([1.0f64, 2.0, 3.0]);
        let flat = body.to_flat();
        assert_eq!(&flat.as_slice()[..4], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(RigidBodyState::from_block(flat.as_slice()), body);
    }
}
