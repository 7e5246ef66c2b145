//! Procedural raid generation from a seeded RNG.
//!
//! Same seed, same raid. Contacts start between the radar envelope and the
//! world boundary and fly toward a point near the defended position.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use aegis_core::config::EngagementConfig;
use aegis_core::enums::ContactCategory;
use aegis_core::types::Vector3;

use crate::scenario::ContactSeed;

/// Speed band in meters per tick for a category.
fn speed_band(category: ContactCategory) -> (f64, f64) {
    match category {
        ContactCategory::Fighter => (80.0, 150.0),
        ContactCategory::KamikazeDrone => (30.0, 60.0),
        ContactCategory::Missile => (150.0, 250.0),
    }
}

/// Generate `count` contacts with random categories, bearings and elevations.
pub fn random_raid(
    rng: &mut ChaCha8Rng,
    count: usize,
    config: &EngagementConfig,
) -> Vec<ContactSeed> {
    (0..count).map(|_| random_contact(rng, config)).collect()
}

/// A single contact inbound toward the defended area.
pub fn random_contact(rng: &mut ChaCha8Rng, config: &EngagementConfig) -> ContactSeed {
    let category = ContactCategory::ALL[rng.gen_range(0..ContactCategory::ALL.len())];

    // Start in the shell between radar range and 90% of world range.
    let inner = config.radar_range.min(config.max_world_range * 0.5);
    let outer = (config.max_world_range * 0.9).max(inner + 1.0);
    let range: f64 = rng.gen_range(inner..outer);
    let bearing: f64 = rng.gen_range(0.0..TAU);
    let elevation: f64 = rng.gen_range(0.05..FRAC_PI_2 * 0.5);

    let position = Vector3::new(
        range * elevation.cos() * bearing.sin(),
        range * elevation.cos() * bearing.cos(),
        range * elevation.sin(),
    );

    // Aim somewhere inside half the radar envelope.
    let spread = config.radar_range * 0.5;
    let aim = Vector3::new(
        rng.gen_range(-spread..=spread),
        rng.gen_range(-spread..=spread),
        0.0,
    );

    let (min_speed, max_speed) = speed_band(category);
    let speed: f64 = rng.gen_range(min_speed..max_speed);
    let velocity = (aim - position).normalize().multiply(speed);

    ContactSeed::new(position, velocity, category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_raid() {
        let config = EngagementConfig::default();
        let a = random_raid(&mut ChaCha8Rng::seed_from_u64(9), 12, &config);
        let b = random_raid(&mut ChaCha8Rng::seed_from_u64(9), 12, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_raid_starts_inside_world_and_closes() {
        let config = EngagementConfig::default();
        let raid = random_raid(&mut ChaCha8Rng::seed_from_u64(3), 50, &config);
        assert_eq!(raid.len(), 50);

        for seed in &raid {
            let range = seed.position.length();
            assert!(range < config.max_world_range, "spawned outside world: {range}");
            assert!(range >= config.radar_range * 0.99);

            let (min_speed, max_speed) = speed_band(seed.category);
            let speed = seed.velocity.length();
            assert!(speed >= min_speed - 1e-9 && speed <= max_speed + 1e-9);

            let next = seed.position + seed.velocity;
            assert!(next.length() < range, "contact should be inbound");
        }
    }
}
