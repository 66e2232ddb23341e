//! Game constants for playfield size, colors, timing, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Playfield dimensions, in canvas units
pub const GAME_WIDTH: i32 = 700;
pub const GAME_HEIGHT: i32 = 700;
pub const SPACE_SIZE: i32 = 50;

// Snake
pub const BODY_PARTS: usize = 3;

// Timing
pub const SPEED: Duration = Duration::from_millis(100);

// Score bar above the playfield
pub const SCORE_BAR_HEIGHT: f32 = 70.0;
pub const SCORE_FONT_SIZE: f32 = 40.0;
pub const GAME_OVER_FONT_SIZE: f32 = 70.0;
pub const RESTART_FONT_SIZE: f32 = 20.0;

// Colors
pub const SNAKE_COLOR: Color = Color::srgb(0.502, 0.0, 0.502);
pub const FOOD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const WINDOW_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
pub const SCORE_TEXT_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const GAME_OVER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const BUTTON_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const BUTTON_HOVER_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE: f32 = 2.0;
pub const Z_TEXT: f32 = 3.0;
