//! Game events (messages).

use bevy::prelude::*;

use super::{Cell, TickOutcome};

/// Message triggered when a new round begins, before its first tick.
#[derive(Message, Debug, Clone)]
pub struct RoundStarted {
    pub snake: Vec<Cell>,
    pub food: Cell,
}

/// Message triggered after every tick of the game loop.
#[derive(Message, Debug, Clone, Copy)]
pub struct Ticked(pub TickOutcome);
