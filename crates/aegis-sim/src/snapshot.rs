//! Serializable view of the controller state after a tick.

use serde::{Deserialize, Serialize};

use aegis_core::enums::{ContactCategory, GuidanceState};
use aegis_core::events::EngagementStats;
use aegis_core::types::{ContactId, InterceptorId, Vector3};

use crate::engine::EngagementController;
use crate::entity::AerialEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactView {
    pub id: ContactId,
    pub category: ContactCategory,
    pub position: Vector3,
    pub velocity: Vector3,
    /// Range from the defended position.
    pub range: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: InterceptorId,
    pub target: ContactId,
    pub position: Vector3,
    pub velocity: Vector3,
    pub fuel: u32,
    pub state: GuidanceState,
}

/// Complete picture of the engagement, built on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub tick: u64,
    pub contacts: Vec<ContactView>,
    pub interceptors: Vec<InterceptorView>,
    pub stats: EngagementStats,
}

impl EngagementSnapshot {
    pub fn capture(controller: &EngagementController) -> Self {
        let contacts = controller
            .contacts()
            .iter()
            .map(|c| ContactView {
                id: c.id(),
                category: c.category(),
                position: c.position(),
                velocity: c.velocity(),
                range: c.range_from_origin(),
            })
            .collect();

        let interceptors = controller
            .interceptors()
            .iter()
            .map(|i| InterceptorView {
                id: i.id(),
                target: i.target(),
                position: i.position(),
                velocity: i.velocity(),
                fuel: i.fuel(),
                state: i.state(),
            })
            .collect();

        Self {
            tick: controller.tick_count(),
            contacts,
            interceptors,
            stats: *controller.stats(),
        }
    }
}
