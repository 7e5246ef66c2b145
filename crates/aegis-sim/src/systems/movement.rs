//! Contact movement and world-boundary culling.

use tracing::debug;

use aegis_core::config::EngagementConfig;
use aegis_core::events::EngagementEvent;

use crate::contact::Contact;
use crate::entity::AerialEntity;

/// Advance every active contact one step, then destroy those that ended the
/// step outside the world boundary.
pub fn run(contacts: &mut [Contact], config: &EngagementConfig, events: &mut Vec<EngagementEvent>) {
    for contact in contacts.iter_mut().filter(|c| c.is_active()) {
        contact.update_physics();

        if contact.range_from_origin() > config.max_world_range {
            debug!(contact = contact.id().0, "contact left the world boundary");
            contact.destroy();
            events.push(EngagementEvent::ContactEscaped {
                contact: contact.id(),
                category: contact.category(),
                position: contact.position(),
            });
        }
    }
}
