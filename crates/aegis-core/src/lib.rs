//! Core types and definitions for the AEGIS engagement simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vector math, identifiers, engagement events, constants and configuration.
//! It has no dependency on the simulation engine or the terminal driver.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod types;
