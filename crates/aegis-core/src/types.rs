//! Fundamental geometric types and identifiers.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D vector in simulation space (meters, Cartesian, origin = defended position).
///
/// Used for both positions and per-tick velocities. Arithmetic goes through
/// `glam::DVec3`; only `+=` mutates in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vector3) -> f64 {
        DVec3::from(*self).distance(DVec3::from(*other))
    }

    /// Magnitude.
    pub fn length(&self) -> f64 {
        DVec3::from(*self).length()
    }

    /// Unit vector with the same direction. The zero vector normalizes to zero.
    pub fn normalize(&self) -> Vector3 {
        DVec3::from(*self).normalize_or_zero().into()
    }

    /// Uniformly scaled copy.
    pub fn multiply(&self, scalar: f64) -> Vector3 {
        (DVec3::from(*self) * scalar).into()
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        DVec3::from(*self).is_finite()
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        (DVec3::from(self) + DVec3::from(rhs)).into()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        (DVec3::from(self) - DVec3::from(rhs)).into()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.multiply(scalar)
    }
}

impl fmt::Display for Vector3 {
    /// Whole meters, truncated toward zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x:{} y:{} z:{}]",
            self.x as i64, self.y as i64, self.z as i64
        )
    }
}

/// Identity of a hostile contact, assigned from 1 in spawn order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(pub u32);

/// Identity of an interceptor, assigned from 1 in launch order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InterceptorId(pub u32);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for InterceptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M-{}", self.0)
    }
}
