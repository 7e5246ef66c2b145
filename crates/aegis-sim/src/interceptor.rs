//! Homing interceptor and its guidance state machine.

use aegis_core::config::EngagementConfig;
use aegis_core::enums::GuidanceState;
use aegis_core::types::{ContactId, InterceptorId, Vector3};

use crate::contact::Contact;
use crate::entity::{AerialEntity, Kinematics};
use crate::guidance;

/// A guided munition bound to one contact for its whole flight.
#[derive(Debug, Clone)]
pub struct Interceptor {
    id: InterceptorId,
    /// Non-owning reference, resolved through the controller each update.
    target: ContactId,
    fuel: u32,
    state: GuidanceState,
    kinematics: Kinematics,
}

impl Interceptor {
    /// A stationary interceptor at `launch_point` with a full tank.
    pub fn new(id: InterceptorId, launch_point: Vector3, target: ContactId, fuel: u32) -> Self {
        Self {
            id,
            target,
            fuel,
            state: GuidanceState::Pursuing,
            kinematics: Kinematics::new(launch_point, Vector3::ZERO),
        }
    }

    pub fn id(&self) -> InterceptorId {
        self.id
    }

    pub fn target(&self) -> ContactId {
        self.target
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    pub fn state(&self) -> GuidanceState {
        self.state
    }

    /// Run one guidance update against the bound target.
    ///
    /// `target` is `None` when the contact is no longer tracked at all.
    /// Order: lost-target check, fuel burn, pursuit velocity, hit check.
    /// The hit check uses the position from before this tick's movement.
    pub fn update_guidance(
        &mut self,
        target: Option<&mut Contact>,
        config: &EngagementConfig,
    ) -> GuidanceState {
        if !self.is_active() {
            return self.state;
        }

        let target = match target {
            Some(t) if t.is_active() => t,
            _ => return self.terminate(GuidanceState::LostTarget),
        };

        self.fuel = self.fuel.saturating_sub(1);
        if self.fuel == 0 {
            return self.terminate(GuidanceState::FuelExhausted);
        }

        let target_pos = target.position();
        self.kinematics.velocity =
            guidance::pure_pursuit(&self.kinematics.position, &target_pos, config.interceptor_speed);

        if self.kinematics.position.distance_to(&target_pos) < config.explosion_radius {
            target.destroy();
            return self.terminate(GuidanceState::Hit);
        }

        GuidanceState::Pursuing
    }

    fn terminate(&mut self, state: GuidanceState) -> GuidanceState {
        self.state = state;
        self.destroy();
        state
    }
}

impl AerialEntity for Interceptor {
    fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    fn kinematics_mut(&mut self) -> &mut Kinematics {
        &mut self.kinematics
    }
}
