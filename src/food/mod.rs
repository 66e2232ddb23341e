//! Food plugin - draws the food and swaps it out whenever it is eaten.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    CanvasItem, Cell, FOOD_COLOR, FoodOval, GameConfig, GameSet, RoundStarted, Ticked, Z_FOOD,
};
use crate::rendering::cell_translation;

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_food.in_set(GameSet::Draw));
    }
}

/// Spawns the food oval at the given cell.
pub fn spawn_food_oval(commands: &mut Commands, config: &GameConfig, cell: Cell) -> Entity {
    commands
        .spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: FOOD_COLOR,
                    transform: Transform::from_translation(cell_translation(config, cell, Z_FOOD)),
                    ..ShapeConfig::default_2d()
                },
                config.cell_size as f32 / 2.0,
            ),
            FoodOval,
            CanvasItem,
            cell,
        ))
        .id()
}

/// System to keep exactly one food oval on the canvas while a round is running.
pub fn draw_food(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut rounds: MessageReader<RoundStarted>,
    mut ticks: MessageReader<Ticked>,
    ovals: Query<Entity, With<FoodOval>>,
) {
    // Ovals spawned below are not visible to the query until commands are applied
    let mut drawn: Vec<Entity> = ovals.iter().collect();

    for round in rounds.read() {
        drawn.push(spawn_food_oval(&mut commands, &config, round.food));
    }

    for Ticked(outcome) in ticks.read() {
        if outcome.ate_food() || outcome.collision.is_some() {
            for oval in drawn.drain(..) {
                commands.entity(oval).despawn();
            }
        }
        if outcome.collision.is_none()
            && let Some(food) = outcome.new_food
        {
            drawn.push(spawn_food_oval(&mut commands, &config, food.cell));
        }
    }
}
