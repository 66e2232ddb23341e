//! ECS components and the grid value types they carry.

use bevy::prelude::*;

/// Grid-aligned position on the canvas, in canvas units (multiples of the cell size).
///
/// The origin is the top-left corner of the playfield and `y` grows downwards.
#[derive(Component, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Returns the neighbouring cell one `step` away in `direction`.
    pub fn step(self, direction: Direction, step: i32) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx * step,
            y: self.y + dy * step,
        }
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit offset in canvas orientation (up is negative `y`).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Maps an arrow key to a direction. Any other key yields `None`.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::ArrowUp => Some(Direction::Up),
            KeyCode::ArrowDown => Some(Direction::Down),
            KeyCode::ArrowLeft => Some(Direction::Left),
            KeyCode::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Anything drawn on the playfield; cleared wholesale on restart.
#[derive(Component)]
pub struct CanvasItem;

/// Component to mark one square of the snake's body.
#[derive(Component)]
pub struct SnakeSquare;

/// Component to mark the food oval.
#[derive(Component)]
pub struct FoodOval;

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the centered "GAME OVER" text.
#[derive(Component)]
pub struct GameOverText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the restart control.
#[derive(Component)]
pub struct RestartButton;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn step_uses_canvas_orientation() {
        let cell = Cell::new(100, 100);
        assert_eq!(cell.step(Direction::Up, 50), Cell::new(100, 50));
        assert_eq!(cell.step(Direction::Down, 50), Cell::new(100, 150));
        assert_eq!(cell.step(Direction::Left, 50), Cell::new(50, 100));
        assert_eq!(cell.step(Direction::Right, 50), Cell::new(150, 100));
    }

    #[test]
    fn only_arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::ArrowDown), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::ArrowRight), Some(Direction::Right));
        assert_eq!(Direction::from_key(KeyCode::KeyW), None);
        assert_eq!(Direction::from_key(KeyCode::Space), None);
    }

    #[test]
    fn default_direction_is_down() {
        assert_eq!(Direction::default(), Direction::Down);
    }
}
