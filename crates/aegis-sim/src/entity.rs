//! Shared kinematic capability of everything that flies.

use aegis_core::types::Vector3;

/// Position, per-tick velocity and lifecycle flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vector3,
    pub velocity: Vector3,
    pub active: bool,
}

impl Kinematics {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self {
            position,
            velocity,
            active: true,
        }
    }
}

/// Advance / report / deactivate, implemented by contacts and interceptors.
///
/// Once `destroy` has been called the entity never moves again.
pub trait AerialEntity {
    fn kinematics(&self) -> &Kinematics;
    fn kinematics_mut(&mut self) -> &mut Kinematics;

    /// One discrete step: position += velocity. No-op when inactive.
    fn update_physics(&mut self) {
        let k = self.kinematics_mut();
        if k.active {
            let velocity = k.velocity;
            k.position += velocity;
        }
    }

    fn destroy(&mut self) {
        self.kinematics_mut().active = false;
    }

    fn is_active(&self) -> bool {
        self.kinematics().active
    }

    fn position(&self) -> Vector3 {
        self.kinematics().position
    }

    fn velocity(&self) -> Vector3 {
        self.kinematics().velocity
    }

    /// Distance from the defended position at the origin.
    fn range_from_origin(&self) -> f64 {
        self.position().distance_to(&Vector3::ZERO)
    }
}
