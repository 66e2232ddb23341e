//! Game resources (singleton state besides the session).

use bevy::prelude::*;
use std::collections::VecDeque;
use std::time::Duration;

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

/// One-shot timer for the next tick. Each surviving tick re-arms it; game over leaves it spent.
#[derive(Resource)]
pub struct TickTimer {
    pub timer: Timer,
}

impl TickTimer {
    pub fn new(period: Duration) -> Self {
        TickTimer {
            timer: Timer::new(period, TimerMode::Once),
        }
    }

    /// Schedules the next tick one full period from now.
    pub fn rearm(&mut self) {
        self.timer.reset();
    }
}

/// Drawn squares of the snake, head first, paired 1:1 with the session's snake cells.
#[derive(Resource, Default, Debug)]
pub struct SnakeSquares {
    squares: VecDeque<Entity>,
}

impl SnakeSquares {
    /// Replaces every handle with the squares of a fresh snake.
    pub fn reset(&mut self, squares: impl IntoIterator<Item = Entity>) {
        self.squares = squares.into_iter().collect();
    }

    /// Puts the new head square in front and, unless the snake grew, hands back
    /// the tail square that has to be erased.
    pub fn advance(&mut self, head: Entity, grew: bool) -> Option<Entity> {
        self.squares.push_front(head);
        if grew { None } else { self.squares.pop_back() }
    }

    /// Removes and returns every handle.
    pub fn take_all(&mut self) -> Vec<Entity> {
        self.squares.drain(..).collect()
    }
}
