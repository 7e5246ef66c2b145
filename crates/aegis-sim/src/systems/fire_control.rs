//! Radar scan and launch decisions.

use tracing::debug;

use aegis_core::config::EngagementConfig;
use aegis_core::events::EngagementEvent;
use aegis_core::types::{ContactId, InterceptorId, Vector3};

use crate::contact::Contact;
use crate::entity::AerialEntity;
use crate::interceptor::Interceptor;

/// Launch one interceptor from the origin at every active contact inside
/// radar range that no active interceptor is already bound to.
pub fn run(
    contacts: &[Contact],
    interceptors: &mut Vec<Interceptor>,
    next_interceptor_id: &mut u32,
    config: &EngagementConfig,
    events: &mut Vec<EngagementEvent>,
) {
    for contact in contacts.iter().filter(|c| c.is_active()) {
        if contact.range_from_origin() > config.radar_range {
            continue;
        }
        if is_engaged(interceptors, contact.id()) {
            continue;
        }

        *next_interceptor_id += 1;
        let id = InterceptorId(*next_interceptor_id);
        debug!(interceptor = id.0, target = contact.id().0, "launching interceptor");
        interceptors.push(Interceptor::new(
            id,
            Vector3::ZERO,
            contact.id(),
            config.interceptor_fuel,
        ));
        events.push(EngagementEvent::InterceptorLaunched {
            interceptor: id,
            target: contact.id(),
            category: contact.category(),
            target_position: contact.position(),
        });
    }
}

/// Whether an active interceptor is currently bound to `target`.
pub fn is_engaged(interceptors: &[Interceptor], target: ContactId) -> bool {
    interceptors
        .iter()
        .any(|i| i.is_active() && i.target() == target)
}
