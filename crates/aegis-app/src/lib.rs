//! Terminal driver for the AEGIS engagement simulation.
//!
//! Parses the command line, shows the start menu, seeds the controller and
//! runs the paced tick loop, narrating events to stdout.

pub mod cli;
pub mod game_loop;
pub mod menu;
pub mod narration;
