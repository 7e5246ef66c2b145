use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aegis_sim::core::config::EngagementConfig;
use aegis_sim::core::events::EngagementEvent;
use aegis_sim::core::types::ContactId;
use aegis_sim::scenario::ContactSeed;
use aegis_sim::{procgen, scenario, EngagementController};

/// Run to completion, returning every event and the tick count.
fn run_to_completion(
    config: EngagementConfig,
    seeds: Vec<ContactSeed>,
    max_ticks: u64,
) -> (Vec<EngagementEvent>, u64) {
    let mut engine = EngagementController::new(config);
    engine.seed(seeds);

    let mut events = Vec::new();
    while engine.has_active_entities() {
        assert!(
            engine.tick_count() < max_ticks,
            "simulation did not converge within {max_ticks} ticks"
        );
        events.extend(engine.tick().events);
    }
    (events, engine.tick_count())
}

/// Count how often each contact was resolved (escaped or destroyed).
fn resolutions(events: &[EngagementEvent]) -> HashMap<ContactId, u32> {
    let mut counts = HashMap::new();
    for event in events {
        match event {
            EngagementEvent::ContactEscaped { contact, .. } => {
                *counts.entry(*contact).or_insert(0) += 1;
            }
            EngagementEvent::TargetDestroyed { target, .. } => {
                *counts.entry(*target).or_insert(0) += 1;
            }
            _ => {}
        }
    }
    counts
}

#[test]
fn test_standard_scenario_terminates_with_every_contact_resolved_once() {
    let (events, ticks) =
        run_to_completion(EngagementConfig::default(), scenario::standard(), 10_000);

    let counts = resolutions(&events);
    for id in 1..=3 {
        assert_eq!(
            counts.get(&ContactId(id)),
            Some(&1),
            "contact #{id} must be resolved exactly once"
        );
    }
    assert_eq!(counts.len(), 3);

    match events.last() {
        Some(EngagementEvent::EngagementComplete { ticks: t, stats }) => {
            assert_eq!(*t, ticks);
            assert_eq!(stats.contacts_spawned, 3);
            assert_eq!(stats.contacts_escaped + stats.contacts_destroyed, 3);
            assert_eq!(stats.contacts_unresolved(), 0);
        }
        other => panic!("expected final summary, got {other:?}"),
    }
}

#[test]
fn test_standard_scenario_outcome() {
    let (events, ticks) =
        run_to_completion(EngagementConfig::default(), scenario::standard(), 10_000);

    let Some(EngagementEvent::EngagementComplete { stats, .. }) = events.last() else {
        panic!("missing final summary");
    };
    // The fighter outruns its first interceptor's fuel and is re-engaged.
    assert_eq!(stats.contacts_destroyed, 3);
    assert_eq!(stats.contacts_escaped, 0);
    assert_eq!(stats.interceptors_launched, 4);
    assert_eq!(stats.interceptors_out_of_fuel, 1);
    assert_eq!(stats.interceptors_lost_target, 0);
    assert_eq!(ticks, 56);
}

#[test]
fn test_zero_delay_config_gives_identical_outcome() {
    let slow = EngagementConfig::default();
    let fast = EngagementConfig {
        tick_delay_ms: 0,
        ..slow
    };
    let (events_slow, ticks_slow) = run_to_completion(slow, scenario::standard(), 10_000);
    let (events_fast, ticks_fast) = run_to_completion(fast, scenario::standard(), 10_000);
    assert_eq!(ticks_slow, ticks_fast);
    assert_eq!(events_slow, events_fast);
}

#[test]
fn test_random_raids_converge() {
    let config = EngagementConfig::default();
    for seed in [1_u64, 7, 42, 1234] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let raid = procgen::random_raid(&mut rng, 25, &config);
        let (events, _) = run_to_completion(config, raid, 10_000);

        let counts = resolutions(&events);
        assert_eq!(counts.len(), 25, "seed {seed}: every contact resolves");
        assert!(counts.values().all(|&n| n == 1), "seed {seed}: resolved twice");
    }
}
