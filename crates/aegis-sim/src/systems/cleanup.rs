//! Reaping of inactive entities at the end of a tick.

use crate::contact::Contact;
use crate::entity::AerialEntity;
use crate::interceptor::Interceptor;

/// Drop inactive contacts and interceptors, keeping survivors in order.
/// Returns the number of entities removed.
pub fn run(contacts: &mut Vec<Contact>, interceptors: &mut Vec<Interceptor>) -> usize {
    let before = contacts.len() + interceptors.len();
    contacts.retain(|c| c.is_active());
    interceptors.retain(|i| i.is_active());
    before - (contacts.len() + interceptors.len())
}
