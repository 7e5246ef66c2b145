//! Scenario definitions — initial contact lists handed to the controller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use aegis_core::enums::ContactCategory;
use aegis_core::types::Vector3;

/// Initial state of one hostile contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactSeed {
    pub position: Vector3,
    /// Meters per tick.
    pub velocity: Vector3,
    pub category: ContactCategory,
}

impl ContactSeed {
    pub fn new(position: Vector3, velocity: Vector3, category: ContactCategory) -> Self {
        Self {
            position,
            velocity,
            category,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid scenario document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reference raid: a close drone, a long-range fighter and a fast missile.
pub fn standard() -> Vec<ContactSeed> {
    vec![
        ContactSeed::new(
            Vector3::new(2000.0, 2000.0, 1000.0),
            Vector3::new(-50.0, -50.0, -20.0),
            ContactCategory::KamikazeDrone,
        ),
        ContactSeed::new(
            Vector3::new(-4000.0, 3000.0, 2000.0),
            Vector3::new(100.0, -20.0, 10.0),
            ContactCategory::Fighter,
        ),
        ContactSeed::new(
            Vector3::new(1000.0, 5000.0, 5000.0),
            Vector3::new(0.0, -200.0, -100.0),
            ContactCategory::Missile,
        ),
    ]
}

/// Parse a JSON array of contact seeds.
pub fn from_json_str(raw: &str) -> Result<Vec<ContactSeed>, ScenarioError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scenario_contents() {
        let seeds = standard();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].category, ContactCategory::KamikazeDrone);
        assert_eq!(seeds[1].category, ContactCategory::Fighter);
        assert_eq!(seeds[2].velocity, Vector3::new(0.0, -200.0, -100.0));
    }

    #[test]
    fn test_json_scenario() {
        let raw = r#"[
            {
                "position": { "x": 100.0, "y": 0.0, "z": 50.0 },
                "velocity": { "x": -1.0, "y": 0.0, "z": 0.0 },
                "category": "Fighter"
            }
        ]"#;
        let seeds = from_json_str(raw).unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].position, Vector3::new(100.0, 0.0, 50.0));
    }

    #[test]
    fn test_json_scenario_unknown_category() {
        let raw = r#"[{ "position": { "x": 0, "y": 0, "z": 0 },
                        "velocity": { "x": 0, "y": 0, "z": 0 },
                        "category": "Balloon" }]"#;
        assert!(matches!(from_json_str(raw), Err(ScenarioError::Parse(_))));
    }
}
