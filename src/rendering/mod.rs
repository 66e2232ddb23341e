//! Rendering plugin - camera, the playfield canvas, and cell to world translation.

use bevy::prelude::*;

use crate::game::{BACKGROUND_COLOR, Cell, GameConfig, SCORE_BAR_HEIGHT, Z_BACKGROUND};

/// Plugin for the canvas the game is drawn on.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_canvas);
    }
}

/// Window size needed for the playfield plus the score bar above it.
pub fn window_size(config: &GameConfig) -> UVec2 {
    UVec2::new(
        config.width as u32,
        config.height as u32 + SCORE_BAR_HEIGHT as u32,
    )
}

/// World position of the playfield's center. The camera is centered on the window,
/// and the score bar pushes the playfield down by half its height.
pub fn playfield_center() -> Vec2 {
    Vec2::new(0.0, -SCORE_BAR_HEIGHT / 2.0)
}

/// Translates a canvas cell (top-left origin, `y` down) to the world-space center of that cell.
pub fn cell_translation(config: &GameConfig, cell: Cell, z: f32) -> Vec3 {
    let half = config.cell_size as f32 / 2.0;
    let center = playfield_center();
    Vec3::new(
        center.x + cell.x as f32 + half - config.width as f32 / 2.0,
        center.y + config.height as f32 / 2.0 - cell.y as f32 - half,
        z,
    )
}

/// Camera and black playfield background.
fn setup_canvas(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn(Camera2d);

    commands.spawn((
        Sprite {
            color: BACKGROUND_COLOR,
            custom_size: Some(Vec2::new(config.width as f32, config.height as f32)),
            ..default()
        },
        Transform::from_translation(playfield_center().extend(Z_BACKGROUND)),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_inside_the_playfield() {
        let config = GameConfig::default();
        let top_left = cell_translation(&config, Cell::ORIGIN, 1.0);
        assert_eq!(top_left, Vec3::new(-325.0, 325.0 - SCORE_BAR_HEIGHT / 2.0, 1.0));

        let bottom_right = cell_translation(&config, Cell::new(650, 650), 1.0);
        assert_eq!(
            bottom_right,
            Vec3::new(325.0, -325.0 - SCORE_BAR_HEIGHT / 2.0, 1.0)
        );
    }

    #[test]
    fn moving_down_the_canvas_moves_down_the_world() {
        let config = GameConfig::default();
        let a = cell_translation(&config, Cell::new(0, 0), 0.0);
        let b = cell_translation(&config, Cell::new(0, 50), 0.0);
        assert_eq!(a.y - b.y, 50.0);
    }

    #[test]
    fn window_fits_score_bar() {
        let size = window_size(&GameConfig::default());
        assert_eq!(size, UVec2::new(700, 700 + SCORE_BAR_HEIGHT as u32));
    }
}
