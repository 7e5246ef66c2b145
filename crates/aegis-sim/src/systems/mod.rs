//! Per-tick systems run by the engagement controller.
//!
//! Systems are free functions over the controller's collections. They push
//! events into the tick's buffer and never add or remove collection members,
//! except `fire_control` (launches) and `cleanup` (reaping).

pub mod cleanup;
pub mod fire_control;
pub mod intercept;
pub mod movement;
