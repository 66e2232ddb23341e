//! Core game module containing shared components, resources, events, and constants.

mod components;
mod config;
mod constants;
mod events;
mod resources;
mod session;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
pub use session::*;

use bevy::prelude::SystemSet;

/// Ordering of the per-frame work; configured as a chain in `main`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard and restart button
    Input,
    /// The tick of the game loop
    Simulate,
    /// Mirroring the session onto the canvas
    Draw,
    /// Score label and game over overlay
    Ui,
}
