//! Hostile aerial contacts.

use std::fmt;

use aegis_core::enums::ContactCategory;
use aegis_core::types::{ContactId, Vector3};

use crate::entity::{AerialEntity, Kinematics};

/// A hostile flying a straight line at constant velocity.
#[derive(Debug, Clone)]
pub struct Contact {
    id: ContactId,
    category: ContactCategory,
    kinematics: Kinematics,
}

impl Contact {
    pub fn new(
        id: ContactId,
        position: Vector3,
        velocity: Vector3,
        category: ContactCategory,
    ) -> Self {
        Self {
            id,
            category,
            kinematics: Kinematics::new(position, velocity),
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn category(&self) -> ContactCategory {
        self.category
    }
}

impl AerialEntity for Contact {
    fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    fn kinematics_mut(&mut self) -> &mut Kinematics {
        &mut self.kinematics
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HOSTILE {} ({}) {}",
            self.id,
            self.category,
            self.position()
        )
    }
}
