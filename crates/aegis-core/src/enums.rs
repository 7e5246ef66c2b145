//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hostile contact category.
///
/// Descriptive metadata only: every category flies the same straight-line
/// kinematics and is engaged the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactCategory {
    /// Manned fighter aircraft.
    Fighter,
    /// Loitering one-way attack drone.
    KamikazeDrone,
    /// Cruise or ballistic missile.
    Missile,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 3] = [
        ContactCategory::Fighter,
        ContactCategory::KamikazeDrone,
        ContactCategory::Missile,
    ];

    /// Short upper-case label used in narration.
    pub fn label(self) -> &'static str {
        match self {
            ContactCategory::Fighter => "FIGHTER",
            ContactCategory::KamikazeDrone => "KAMIKAZE_DRONE",
            ContactCategory::Missile => "MISSILE",
        }
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interceptor guidance state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidanceState {
    /// Flying toward the target's current position.
    #[default]
    Pursuing,
    /// Target destroyed inside the explosion radius.
    Hit,
    /// Target went inactive before the interceptor reached it.
    LostTarget,
    /// Fuel ran out before reaching the target.
    FuelExhausted,
}

impl GuidanceState {
    /// Whether this state ends the interceptor's flight.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GuidanceState::Pursuing)
    }
}
