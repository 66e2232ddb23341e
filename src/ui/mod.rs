//! UI plugin - handles the score label, the game over screen, and the restart flow.

use bevy::prelude::*;

use crate::game::{
    BUTTON_COLOR, BUTTON_HOVER_COLOR, CanvasItem, GAME_OVER_COLOR, GAME_OVER_FONT_SIZE,
    GamePhase, GameOverText, GameOverUI, GameSet, RESTART_FONT_SIZE, RestartButton,
    RoundStarted, SCORE_BAR_HEIGHT, SCORE_FONT_SIZE, SCORE_TEXT_COLOR, ScoreText, Session,
    SnakeSquares, TickTimer, Ticked, Z_TEXT,
};
use crate::rendering::playfield_center;
use crate::snake::{begin_round, change_direction};

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_score_bar)
            .add_systems(
                Update,
                restart_game.in_set(GameSet::Input).before(change_direction),
            )
            .add_systems(
                Update,
                (update_score_text, spawn_game_over_screen_system)
                    .chain()
                    .in_set(GameSet::Ui),
            );
    }
}

type RestartInteractionQuery<'w, 's> = Query<
    'w,
    's,
    (&'static Interaction, &'static mut BackgroundColor),
    (Changed<Interaction>, With<RestartButton>),
>;

/// Score label in a bar above the playfield.
fn setup_score_bar(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Px(SCORE_BAR_HEIGHT),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::from("Score: 0"),
                TextFont {
                    font_size: SCORE_FONT_SIZE,
                    ..default()
                },
                TextColor(SCORE_TEXT_COLOR),
                ScoreText,
            ));
        });
}

/// Spawns the centered "GAME OVER" text on the canvas and the restart control.
fn spawn_game_over_screen(commands: &mut Commands) {
    commands.spawn((
        Text2d::new("GAME OVER"),
        TextFont {
            font_size: GAME_OVER_FONT_SIZE,
            ..default()
        },
        TextColor(GAME_OVER_COLOR),
        Transform::from_translation(playfield_center().extend(Z_TEXT)),
        GameOverText,
        CanvasItem,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::FlexEnd,
                padding: UiRect::bottom(Val::Px(120.0)),
                ..default()
            },
            GameOverUI,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(8.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_COLOR),
                    RestartButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::from("Restart"),
                        TextFont {
                            font_size: RESTART_FONT_SIZE,
                            ..default()
                        },
                        TextColor(Color::BLACK),
                    ));
                });
        });
}

/// System to spawn the game over screen when the game ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    session: Res<Session>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    // Only spawn if the game just ended and no UI exists yet
    if session.is_changed() && session.phase() == GamePhase::GameOver && game_over_ui.is_empty()
    {
        spawn_game_over_screen(&mut commands);
    }
}

/// System to restart the game when the restart control is clicked.
#[allow(clippy::too_many_arguments)]
fn restart_game(
    mut commands: Commands,
    mut interactions: RestartInteractionQuery,
    mut session: ResMut<Session>,
    mut tick_timer: ResMut<TickTimer>,
    mut squares: ResMut<SnakeSquares>,
    mut rounds: MessageWriter<RoundStarted>,
    mut ticks: MessageWriter<Ticked>,
    canvas: Query<Entity, With<CanvasItem>>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    let mut pressed = false;
    for (interaction, mut background) in interactions.iter_mut() {
        match interaction {
            Interaction::Pressed => pressed = true,
            Interaction::Hovered => background.0 = BUTTON_HOVER_COLOR,
            Interaction::None => background.0 = BUTTON_COLOR,
        }
    }

    if !pressed || session.phase() != GamePhase::GameOver {
        return;
    }

    // Clear the canvas and the overlay
    for entity in canvas.iter().chain(game_over_ui.iter()) {
        commands.entity(entity).despawn();
    }
    squares.take_all();

    session.restart(&mut rand::rng());
    begin_round(&mut session, &mut tick_timer, &mut rounds, &mut ticks);
}

/// System to update the score display.
fn update_score_text(
    session: Res<Session>,
    mut query: Query<&mut Text, With<ScoreText>>,
) -> Result {
    if session.is_changed() {
        let mut text = query.single_mut()?;
        *text = Text::from(format!("Score: {}", session.score()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use bevy::ecs::schedule::ExecutorKind;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::input::ButtonState;
    use bevy::input::keyboard::{Key, KeyboardInput};

    use crate::food::draw_food;
    use crate::game::{Cell, FoodOval, GameConfig, SnakeSquare};
    use crate::snake::{draw_snake, run_tick, start_first_round};

    fn game_world() -> World {
        let mut world = World::new();
        let config = GameConfig::default();
        world.insert_resource(config);
        world.insert_resource(Session::new(config, &mut rand::rng()));
        world.insert_resource(TickTimer::new(config.tick_interval));
        world.init_resource::<SnakeSquares>();
        world.init_resource::<Messages<RoundStarted>>();
        world.init_resource::<Messages<Ticked>>();
        world.init_resource::<Messages<KeyboardInput>>();
        world.run_system_once(setup_score_bar).unwrap();
        world
    }

    /// One frame of the input, drawing and UI systems, in plugin order.
    fn frame_schedule() -> Schedule {
        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems(
            (
                restart_game,
                change_direction,
                draw_snake,
                draw_food,
                update_score_text,
                spawn_game_over_screen_system,
            )
                .chain(),
        );
        schedule
    }

    fn count<F: bevy::ecs::query::QueryFilter>(world: &mut World) -> usize {
        world.query_filtered::<Entity, F>().iter(world).count()
    }

    fn score_label(world: &mut World) -> String {
        let mut labels = world.query_filtered::<&Text, With<ScoreText>>();
        labels.single(world).unwrap().0.clone()
    }

    fn square_cells(world: &mut World) -> Vec<Cell> {
        let mut cells = world.query_filtered::<&Cell, With<SnakeSquare>>();
        cells.iter(world).copied().collect()
    }

    fn assert_round_drawn(world: &mut World) {
        let session = world.resource::<Session>().clone();
        // The first tick may already have eaten food placed right below the origin
        assert_eq!(session.snake().len(), 3 + session.score() as usize);
        assert_eq!(session.snake().head(), Cell::new(0, 50));

        assert_eq!(count::<With<SnakeSquare>>(world), session.snake().len());
        let cells = square_cells(world);
        assert!(cells.contains(&Cell::new(0, 50)));
        assert!(cells.iter().all(|cell| session.snake().coordinates().contains(cell)));

        assert_eq!(count::<With<FoodOval>>(world), 1);
        let mut ovals = world.query_filtered::<&Cell, With<FoodOval>>();
        assert_eq!(*ovals.single(world).unwrap(), session.food().cell);

        assert_eq!(count::<With<GameOverUI>>(world), 0);
        assert_eq!(count::<With<GameOverText>>(world), 0);
        assert_eq!(score_label(world), format!("Score: {}", session.score()));
    }

    #[test]
    fn game_over_and_restart_redraw_the_canvas() {
        let mut world = game_world();
        let mut schedule = frame_schedule();

        world.run_system_once(start_first_round).unwrap();
        schedule.run(&mut world);
        assert_round_drawn(&mut world);

        // Turning left from the left edge runs into the wall
        world
            .resource_mut::<Messages<KeyboardInput>>()
            .write(KeyboardInput {
                key_code: KeyCode::ArrowLeft,
                logical_key: Key::ArrowLeft,
                state: ButtonState::Pressed,
                text: None,
                repeat: false,
                window: Entity::PLACEHOLDER,
            });
        schedule.run(&mut world);
        world
            .run_system_once(
                |mut session: ResMut<Session>,
                 mut tick_timer: ResMut<TickTimer>,
                 mut ticks: MessageWriter<Ticked>| {
                    run_tick(&mut session, &mut tick_timer, &mut ticks);
                },
            )
            .unwrap();
        schedule.run(&mut world);

        assert_eq!(world.resource::<Session>().phase(), GamePhase::GameOver);
        assert_eq!(count::<With<SnakeSquare>>(&mut world), 0);
        assert_eq!(count::<With<FoodOval>>(&mut world), 0);
        assert_eq!(count::<With<GameOverUI>>(&mut world), 1);
        assert_eq!(count::<With<GameOverText>>(&mut world), 1);
        assert_eq!(count::<With<RestartButton>>(&mut world), 1);

        let button = world
            .query_filtered::<Entity, With<RestartButton>>()
            .single(&world)
            .unwrap();
        world.entity_mut(button).insert(Interaction::Pressed);
        schedule.run(&mut world);

        assert_eq!(world.resource::<Session>().phase(), GamePhase::Running);
        assert_eq!(count::<With<RestartButton>>(&mut world), 0);
        assert_round_drawn(&mut world);
    }

    #[test]
    fn restart_button_is_ignored_while_running() {
        let mut world = game_world();
        let mut schedule = frame_schedule();

        world.run_system_once(start_first_round).unwrap();
        schedule.run(&mut world);

        // A stray restart control must not reset a running round
        world.spawn((Interaction::Pressed, BackgroundColor(BUTTON_COLOR), RestartButton));
        schedule.run(&mut world);

        assert_eq!(world.resource::<Messages<RoundStarted>>().len(), 1);
        assert_eq!(world.resource::<Session>().phase(), GamePhase::Running);
        assert_round_drawn(&mut world);
    }
}
