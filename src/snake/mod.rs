//! Snake plugin - handles direction input, the tick of the game loop, and the snake's squares.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    CanvasItem, Cell, Direction, GameConfig, GamePhase, GameSet, RoundStarted, SNAKE_COLOR,
    Session, SnakeSquare, SnakeSquares, TickTimer, Ticked, Z_SNAKE,
};
use crate::rendering::cell_translation;

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_first_round)
            .add_systems(Update, change_direction.in_set(GameSet::Input))
            .add_systems(Update, next_turn.in_set(GameSet::Simulate))
            .add_systems(Update, draw_snake.in_set(GameSet::Draw));
    }
}

/// Announces the round to the drawing side and runs its first tick right away.
pub fn begin_round(
    session: &mut Session,
    tick_timer: &mut TickTimer,
    rounds: &mut MessageWriter<RoundStarted>,
    ticks: &mut MessageWriter<Ticked>,
) {
    info!("New round, food at {:?}", session.food().cell);
    rounds.write(RoundStarted {
        snake: session.snake().coordinates().iter().copied().collect(),
        food: session.food().cell,
    });
    run_tick(session, tick_timer, ticks);
}

/// Advances the session once and schedules the next tick unless the game ended.
pub fn run_tick(
    session: &mut Session,
    tick_timer: &mut TickTimer,
    ticks: &mut MessageWriter<Ticked>,
) {
    let Some(outcome) = session.tick(&mut rand::rng()) else {
        return;
    };

    if let Some(food) = outcome.new_food {
        debug!("Food eaten, score {}, next food at {:?}", outcome.score, food.cell);
    }

    match outcome.collision {
        Some(collision) => info!(
            "Game Over ({:?})! Final score: {}, snake length {}",
            collision,
            outcome.score,
            session.snake().len()
        ),
        None => tick_timer.rearm(),
    }

    ticks.write(Ticked(outcome));
}

/// Spawns one square of the snake's body at the given cell.
pub fn spawn_snake_square(commands: &mut Commands, config: &GameConfig, cell: Cell) -> Entity {
    commands
        .spawn((
            ShapeBundle::rect(
                &ShapeConfig {
                    color: SNAKE_COLOR,
                    transform: Transform::from_translation(cell_translation(config, cell, Z_SNAKE)),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(config.cell_size as f32),
            ),
            SnakeSquare,
            CanvasItem,
            cell,
        ))
        .id()
}

pub fn start_first_round(
    mut session: ResMut<Session>,
    mut tick_timer: ResMut<TickTimer>,
    mut rounds: MessageWriter<RoundStarted>,
    mut ticks: MessageWriter<Ticked>,
) {
    begin_round(&mut session, &mut tick_timer, &mut rounds, &mut ticks);
}

/// System to turn arrow key presses into the pending direction.
pub fn change_direction(mut keys: MessageReader<KeyboardInput>, mut session: ResMut<Session>) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        let Some(direction) = Direction::from_key(key.key_code) else {
            continue;
        };
        if session.change_direction(direction) {
            debug!("Direction changed to {:?}", direction);
        }
    }
}

/// System to run the tick once its timer has expired.
fn next_turn(
    time: Res<Time>,
    mut tick_timer: ResMut<TickTimer>,
    mut session: ResMut<Session>,
    mut ticks: MessageWriter<Ticked>,
) {
    if session.phase() != GamePhase::Running {
        return;
    }

    tick_timer.timer.tick(time.delta());
    if tick_timer.timer.is_finished() {
        run_tick(&mut session, &mut tick_timer, &mut ticks);
    }
}

/// System to mirror the session's snake with squares on the canvas.
pub fn draw_snake(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut squares: ResMut<SnakeSquares>,
    mut rounds: MessageReader<RoundStarted>,
    mut ticks: MessageReader<Ticked>,
) {
    for round in rounds.read() {
        let fresh: Vec<Entity> = round
            .snake
            .iter()
            .map(|cell| spawn_snake_square(&mut commands, &config, *cell))
            .collect();
        squares.reset(fresh);
    }

    for Ticked(outcome) in ticks.read() {
        let head = spawn_snake_square(&mut commands, &config, outcome.head);
        if let Some(tail) = squares.advance(head, outcome.ate_food()) {
            commands.entity(tail).despawn();
        }

        // Game over clears the canvas
        if outcome.collision.is_some() {
            for square in squares.take_all() {
                commands.entity(square).despawn();
            }
        }
    }
}
