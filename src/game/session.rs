//! The game loop controller: snake, food, direction and score, advanced one tick at a time.

use bevy::prelude::Resource;
use rand::Rng;
use std::collections::VecDeque;

use super::{Cell, Direction, GameConfig, GamePhase};

/// The snake's body, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    coordinates: VecDeque<Cell>,
}

impl Snake {
    /// A snake of `body_parts` segments stacked on the origin cell.
    pub fn new(body_parts: usize) -> Self {
        Snake {
            coordinates: std::iter::repeat_n(Cell::ORIGIN, body_parts.max(1)).collect(),
        }
    }

    pub fn head(&self) -> Cell {
        // A snake is never empty: construction keeps one segment and a tick
        // always prepends before it removes.
        self.coordinates[0]
    }

    pub fn coordinates(&self) -> &VecDeque<Cell> {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether `cell` is covered by any segment behind the head.
    pub fn body_contains(&self, cell: Cell) -> bool {
        self.coordinates.iter().skip(1).any(|part| *part == cell)
    }
}

/// The single piece of food on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    /// Picks a grid-aligned cell uniformly at random. The snake's body is not avoided.
    pub fn spawn<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let x = rng.random_range(0..config.columns()) * config.cell_size;
        let y = rng.random_range(0..config.rows()) * config.cell_size;
        Food {
            cell: Cell::new(x, y),
        }
    }
}

/// What ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Result of a single tick, enough for the drawing side to mirror the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The freshly prepended head
    pub head: Cell,
    /// Replacement food when the old one was eaten; the tail stays in that case
    pub new_food: Option<Food>,
    /// Score after the tick
    pub score: u32,
    pub collision: Option<Collision>,
}

impl TickOutcome {
    pub fn ate_food(&self) -> bool {
        self.new_food.is_some()
    }
}

/// All mutable game state. Persists across restarts.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    config: GameConfig,
    snake: Snake,
    food: Food,
    direction: Direction,
    score: u32,
    phase: GamePhase,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Session {
            snake: Snake::new(config.body_parts),
            food: Food::spawn(&config, rng),
            config,
            direction: Direction::Down,
            score: 0,
            phase: GamePhase::Running,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Adopts `direction` for the next tick unless it reverses the current one.
    ///
    /// Returns whether the direction was accepted.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advances the snake by one cell. Does nothing once the game is over.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<TickOutcome> {
        if self.phase != GamePhase::Running {
            return None;
        }

        let head = self.snake.head().step(self.direction, self.config.cell_size);
        self.snake.coordinates.push_front(head);

        let new_food = if head == self.food.cell {
            self.score += 1;
            self.food = Food::spawn(&self.config, rng);
            Some(self.food)
        } else {
            self.snake.coordinates.pop_back();
            None
        };

        let collision = self.check_collisions();
        if collision.is_some() {
            self.phase = GamePhase::GameOver;
        }

        Some(TickOutcome {
            head,
            new_food,
            score: self.score,
            collision,
        })
    }

    /// Checks the current head against the walls and the rest of the body.
    pub fn check_collisions(&self) -> Option<Collision> {
        let head = self.snake.head();
        if !self.config.contains(head) {
            Some(Collision::Wall)
        } else if self.snake.body_contains(head) {
            Some(Collision::SelfCollision)
        } else {
            None
        }
    }

    /// Starts a new round with a fresh snake and food. The first tick is left to the caller.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = 0;
        self.direction = Direction::Down;
        self.snake = Snake::new(self.config.body_parts);
        self.food = Food::spawn(&self.config, rng);
        self.phase = GamePhase::Running;
    }
}
