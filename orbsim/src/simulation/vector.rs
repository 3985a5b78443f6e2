//! Value-type 3D vector used for positions, velocities and forces.
//!
//! `Vector3` wraps an `nalgebra` vector and only exposes a checked
//! normalization, so a zero-length direction can never turn into NaN
//! components.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::simulation::error::SimError;

pub type NVec3 = nalgebra::Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3(NVec3);

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(NVec3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(NVec3::zeros())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Euclidean norm, `sqrt(x² + y² + z²)`.
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.0.dot(&other.0)
    }

    /// Componentwise product with `k`.
    pub fn scale(&self, k: f64) -> Self {
        Self(self.0 * k)
    }

    /// Unit vector pointing the same way as `self`.
    ///
    /// Fails with [`SimError::ZeroMagnitude`] for the zero vector instead of
    /// dividing by zero.
    pub fn normalize(&self) -> Result<Self, SimError> {
        self.0
            .try_normalize(0.0)
            .map(Self)
            .ok_or(SimError::ZeroMagnitude)
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    pub fn as_nalgebra(&self) -> &NVec3 {
        &self.0
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<NVec3> for Vector3 {
    fn from(v: NVec3) -> Self {
        Self(v)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, k: f64) -> Vector3 {
        self.scale(k)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v.scale(self)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, k: f64) -> Vector3 {
        Self(self.0 / k)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.0 -= rhs.0;
    }
}
