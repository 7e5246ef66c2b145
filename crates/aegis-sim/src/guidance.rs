//! Guidance law for interceptors.

use aegis_core::types::Vector3;

/// Pure pursuit: velocity pointing at the target's current position at
/// constant speed. Coincident positions give a zero velocity.
pub fn pure_pursuit(from: &Vector3, to: &Vector3, speed: f64) -> Vector3 {
    (*to - *from).normalize().multiply(speed)
}
