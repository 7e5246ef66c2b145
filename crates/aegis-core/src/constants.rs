//! Default simulation parameters.
//!
//! These seed `EngagementConfig::default()`. The engine itself only reads
//! the config it was constructed with.

// --- Sensors ---

/// Radar envelope radius around the defended position (meters).
pub const RADAR_RANGE: f64 = 4_000.0;

/// Distance from the origin beyond which a contact has escaped (meters).
pub const MAX_WORLD_RANGE: f64 = 9_000.0;

// --- Interceptors ---

/// Interceptor speed (meters per tick).
pub const INTERCEPTOR_SPEED: f64 = 550.0;

/// Proximity at which an interceptor destroys its target (meters).
pub const EXPLOSION_RADIUS: f64 = 100.0;

/// Guidance updates an interceptor can perform before its motor burns out.
pub const INTERCEPTOR_FUEL: u32 = 25;

// --- Driver ---

/// Pause between ticks for human-readable pacing (milliseconds).
pub const TICK_DELAY_MS: u64 = 300;

/// Safety cap on the number of ticks a driver will run.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;
