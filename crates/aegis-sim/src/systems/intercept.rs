//! Interceptor guidance and movement.

use tracing::debug;

use aegis_core::config::EngagementConfig;
use aegis_core::enums::GuidanceState;
use aegis_core::events::EngagementEvent;

use crate::contact::Contact;
use crate::entity::AerialEntity;
use crate::interceptor::Interceptor;

/// Run guidance then the physics step for every active interceptor.
///
/// `contacts` must be sorted by id; targets are found by binary search.
pub fn run(
    contacts: &mut [Contact],
    interceptors: &mut [Interceptor],
    config: &EngagementConfig,
    events: &mut Vec<EngagementEvent>,
) {
    for interceptor in interceptors.iter_mut().filter(|i| i.is_active()) {
        let target_id = interceptor.target();
        let target = contacts
            .binary_search_by_key(&target_id, |c| c.id())
            .ok()
            .map(|idx| &mut contacts[idx]);
        // Captured before guidance since a hit deactivates the target.
        let target_info = target.as_ref().map(|t| (t.category(), t.position()));

        let state = interceptor.update_guidance(target, config);
        interceptor.update_physics();

        let event = match state {
            GuidanceState::Pursuing => EngagementEvent::InterceptorPursuing {
                interceptor: interceptor.id(),
                target: target_id,
                fuel_remaining: interceptor.fuel(),
            },
            GuidanceState::LostTarget => {
                debug!(interceptor = interceptor.id().0, target = target_id.0, "target lost");
                EngagementEvent::InterceptorLostTarget {
                    interceptor: interceptor.id(),
                    target: target_id,
                }
            }
            GuidanceState::FuelExhausted => {
                debug!(interceptor = interceptor.id().0, target = target_id.0, "out of fuel");
                EngagementEvent::InterceptorFuelExhausted {
                    interceptor: interceptor.id(),
                    target: target_id,
                }
            }
            GuidanceState::Hit => {
                debug!(interceptor = interceptor.id().0, target = target_id.0, "hit confirmed");
                // A hit implies the target was resolved above.
                let Some((category, position)) = target_info else {
                    continue;
                };
                EngagementEvent::TargetDestroyed {
                    interceptor: interceptor.id(),
                    target: target_id,
                    category,
                    position,
                }
            }
        };
        events.push(event);
    }
}
