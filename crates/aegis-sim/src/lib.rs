//! Simulation engine for AEGIS.
//!
//! Owns the contacts and interceptors, runs the tick systems in order and
//! reports engagement events to whatever drives it.

pub mod contact;
pub mod engine;
pub mod entity;
pub mod guidance;
pub mod interceptor;
pub mod procgen;
pub mod scenario;
pub mod snapshot;
pub mod systems;

pub use aegis_core as core;
pub use engine::{EngagementController, TickReport};
