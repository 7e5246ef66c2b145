//! Engagement controller — the command authority.
//!
//! `EngagementController` owns every contact and interceptor, runs the tick
//! systems in a fixed order and buffers the events they produce. Completely
//! headless: the driver decides how to pace ticks and present events.

use tracing::trace;

use aegis_core::config::EngagementConfig;
use aegis_core::enums::ContactCategory;
use aegis_core::events::{EngagementEvent, EngagementStats};
use aegis_core::types::{ContactId, Vector3};

use crate::contact::Contact;
use crate::entity::AerialEntity;
use crate::interceptor::Interceptor;
use crate::scenario::ContactSeed;
use crate::snapshot::EngagementSnapshot;
use crate::systems;

/// Result of one tick.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// 1-based number of the tick just run.
    pub tick: u64,
    /// Events produced by this tick, in emission order.
    pub events: Vec<EngagementEvent>,
}

/// Owns all simulation state and is the only mutator of collection membership.
pub struct EngagementController {
    config: EngagementConfig,
    /// Sorted by id: spawns append increasing ids and reaping keeps order.
    contacts: Vec<Contact>,
    interceptors: Vec<Interceptor>,
    next_contact_id: u32,
    next_interceptor_id: u32,
    tick: u64,
    events: Vec<EngagementEvent>,
    stats: EngagementStats,
    completed: bool,
}

impl EngagementController {
    pub fn new(config: EngagementConfig) -> Self {
        Self {
            config,
            contacts: Vec::new(),
            interceptors: Vec::new(),
            next_contact_id: 0,
            next_interceptor_id: 0,
            tick: 0,
            events: Vec::new(),
            stats: EngagementStats::default(),
            completed: false,
        }
    }

    /// Add a hostile contact with the next identity.
    pub fn spawn_contact(
        &mut self,
        position: Vector3,
        velocity: Vector3,
        category: ContactCategory,
    ) -> ContactId {
        self.next_contact_id += 1;
        let id = ContactId(self.next_contact_id);
        self.contacts.push(Contact::new(id, position, velocity, category));
        self.emit(EngagementEvent::ContactSpawned {
            contact: id,
            category,
            position,
        });
        id
    }

    /// Spawn a batch of contacts in order.
    pub fn seed(&mut self, seeds: impl IntoIterator<Item = ContactSeed>) -> Vec<ContactId> {
        seeds
            .into_iter()
            .map(|s| self.spawn_contact(s.position, s.velocity, s.category))
            .collect()
    }

    /// True while either collection still holds entities.
    pub fn has_active_entities(&self) -> bool {
        !self.contacts.is_empty() || !self.interceptors.is_empty()
    }

    /// Run one tick and return the events it produced, together with any
    /// spawn events buffered since the previous tick.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let first_new = self.events.len();

        // 1. Contact advance + boundary cull
        systems::movement::run(&mut self.contacts, &self.config, &mut self.events);
        // 2. Radar scan + launch
        systems::fire_control::run(
            &self.contacts,
            &mut self.interceptors,
            &mut self.next_interceptor_id,
            &self.config,
            &mut self.events,
        );
        // 3. Guidance + interceptor advance
        systems::intercept::run(
            &mut self.contacts,
            &mut self.interceptors,
            &self.config,
            &mut self.events,
        );
        // 4. Reap
        let reaped = systems::cleanup::run(&mut self.contacts, &mut self.interceptors);

        for event in &self.events[first_new..] {
            self.stats.record(event);
        }

        if !self.completed && !self.has_active_entities() {
            self.completed = true;
            self.events.push(EngagementEvent::EngagementComplete {
                ticks: self.tick,
                stats: self.stats,
            });
        }

        trace!(
            tick = self.tick,
            contacts = self.contacts.len(),
            interceptors = self.interceptors.len(),
            reaped,
            "tick complete"
        );

        TickReport {
            tick: self.tick,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Take events buffered outside of a tick (spawns).
    pub fn drain_events(&mut self) -> Vec<EngagementEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &EngagementConfig {
        &self.config
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn interceptors(&self) -> &[Interceptor] {
        &self.interceptors
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts
            .binary_search_by_key(&id, |c| c.id())
            .ok()
            .map(|idx| &self.contacts[idx])
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn stats(&self) -> &EngagementStats {
        &self.stats
    }

    /// Active contacts currently tracked.
    pub fn active_contacts(&self) -> usize {
        self.contacts.iter().filter(|c| c.is_active()).count()
    }

    pub fn snapshot(&self) -> EngagementSnapshot {
        EngagementSnapshot::capture(self)
    }

    /// Insert a pre-built interceptor (for tests needing custom fuel or launch points).
    #[cfg(test)]
    pub(crate) fn insert_interceptor(&mut self, interceptor: Interceptor) {
        self.next_interceptor_id = self.next_interceptor_id.max(interceptor.id().0);
        self.interceptors.push(interceptor);
    }

    fn emit(&mut self, event: EngagementEvent) {
        self.stats.record(&event);
        self.events.push(event);
    }
}
