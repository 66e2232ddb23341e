//! Playfield and timing configuration.

use bevy::prelude::Resource;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use super::{BODY_PARTS, Cell, GAME_HEIGHT, GAME_WIDTH, SPACE_SIZE, SPEED};

/// Rules configuration shared by the session and the drawing systems.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the playfield in canvas units
    pub width: i32,
    /// Height of the playfield in canvas units
    pub height: i32,
    /// Edge length of one cell
    pub cell_size: i32,
    /// Initial length of the snake
    pub body_parts: usize,
    /// Time between two ticks
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            cell_size: SPACE_SIZE,
            body_parts: BODY_PARTS,
            tick_interval: SPEED,
        }
    }
}

impl GameConfig {
    /// Number of cells along the x axis.
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells along the y axis.
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Whether `cell` lies on the playfield.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        for (axis, extent) in [("width", self.width), ("height", self.height)] {
            if extent < self.cell_size || extent % self.cell_size != 0 {
                return Err(ConfigError::Extent {
                    axis,
                    extent,
                    cell_size: self.cell_size,
                });
            }
        }
        if self.body_parts == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::TickInterval);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    CellSize(i32),
    Extent {
        axis: &'static str,
        extent: i32,
        cell_size: i32,
    },
    EmptySnake,
    TickInterval,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CellSize(size) => write!(f, "cell size must be positive, got {size}"),
            ConfigError::Extent {
                axis,
                extent,
                cell_size,
            } => write!(
                f,
                "playfield {axis} {extent} is not a positive multiple of the cell size {cell_size}"
            ),
            ConfigError::EmptySnake => write!(f, "the snake needs at least one body part"),
            ConfigError::TickInterval => write!(f, "tick interval must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}
