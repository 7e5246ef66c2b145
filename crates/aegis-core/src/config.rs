//! Engagement parameters passed to the controller at construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Tunable parameters for one simulation run.
///
/// Distances are meters, speeds are meters per tick. Fields missing from a
/// JSON document fall back to the defaults in `constants`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    /// Contacts at or inside this range from the origin are engaged.
    pub radar_range: f64,
    /// Contacts beyond this range from the origin have escaped.
    pub max_world_range: f64,
    /// Interceptor speed along the pursuit line.
    pub interceptor_speed: f64,
    /// Kill distance between an interceptor and its target.
    pub explosion_radius: f64,
    /// Guidance updates available to each interceptor.
    pub interceptor_fuel: u32,
    /// Pause between ticks in the driver. Has no effect on outcomes.
    pub tick_delay_ms: u64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            radar_range: RADAR_RANGE,
            max_world_range: MAX_WORLD_RANGE,
            interceptor_speed: INTERCEPTOR_SPEED,
            explosion_radius: EXPLOSION_RADIUS,
            interceptor_fuel: INTERCEPTOR_FUEL,
            tick_delay_ms: TICK_DELAY_MS,
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EngagementConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngagementConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("radar_range", self.radar_range)?;
        positive("max_world_range", self.max_world_range)?;
        non_negative("interceptor_speed", self.interceptor_speed)?;
        non_negative("explosion_radius", self.explosion_radius)?;
        Ok(())
    }

    /// Driver pacing delay.
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
