//! Events emitted by the simulation for narration and logging.

use serde::{Deserialize, Serialize};

use crate::enums::ContactCategory;
use crate::types::{ContactId, InterceptorId, Vector3};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngagementEvent {
    /// A hostile contact entered the simulation.
    ContactSpawned {
        contact: ContactId,
        category: ContactCategory,
        position: Vector3,
    },
    /// A contact left the world boundary.
    ContactEscaped {
        contact: ContactId,
        category: ContactCategory,
        position: Vector3,
    },
    /// An interceptor left the launcher toward a contact inside radar range.
    InterceptorLaunched {
        interceptor: InterceptorId,
        target: ContactId,
        category: ContactCategory,
        target_position: Vector3,
    },
    /// Guidance update completed with the target still alive.
    InterceptorPursuing {
        interceptor: InterceptorId,
        target: ContactId,
        fuel_remaining: u32,
    },
    /// The bound target went inactive; the interceptor self-destructed.
    InterceptorLostTarget {
        interceptor: InterceptorId,
        target: ContactId,
    },
    /// The interceptor ran out of fuel.
    InterceptorFuelExhausted {
        interceptor: InterceptorId,
        target: ContactId,
    },
    /// Hit confirmed: target and interceptor destroyed.
    TargetDestroyed {
        interceptor: InterceptorId,
        target: ContactId,
        category: ContactCategory,
        position: Vector3,
    },
    /// No contacts or interceptors remain.
    EngagementComplete { ticks: u64, stats: EngagementStats },
}

/// Running tallies of engagement outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStats {
    pub contacts_spawned: u32,
    pub contacts_escaped: u32,
    pub contacts_destroyed: u32,
    pub interceptors_launched: u32,
    pub interceptors_lost_target: u32,
    pub interceptors_out_of_fuel: u32,
}

impl EngagementStats {
    /// Fold one event into the tallies.
    pub fn record(&mut self, event: &EngagementEvent) {
        match event {
            EngagementEvent::ContactSpawned { .. } => self.contacts_spawned += 1,
            EngagementEvent::ContactEscaped { .. } => self.contacts_escaped += 1,
            EngagementEvent::InterceptorLaunched { .. } => self.interceptors_launched += 1,
            EngagementEvent::InterceptorLostTarget { .. } => self.interceptors_lost_target += 1,
            EngagementEvent::InterceptorFuelExhausted { .. } => {
                self.interceptors_out_of_fuel += 1
            }
            EngagementEvent::TargetDestroyed { .. } => self.contacts_destroyed += 1,
            EngagementEvent::InterceptorPursuing { .. }
            | EngagementEvent::EngagementComplete { .. } => {}
        }
    }

    /// Contacts neither destroyed nor escaped yet.
    pub fn contacts_unresolved(&self) -> u32 {
        self.contacts_spawned
            .saturating_sub(self.contacts_escaped + self.contacts_destroyed)
    }
}
