mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use bevy::{
    prelude::*,
    window::{MonitorSelection, WindowPosition, WindowResolution},
};
use bevy_vector_shapes::prelude::*;

use food::FoodPlugin;
use game::{
    ConfigError, GameConfig, GameSet, RoundStarted, Session, SnakeSquares, TickTimer, Ticked,
    WINDOW_COLOR,
};
use rendering::{RenderingPlugin, window_size};
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> Result<(), ConfigError> {
    let config = GameConfig::default();
    config.validate()?;

    let size = window_size(&config);

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(size.x, size.y),
                    title: "Snake Game".to_string(),
                    resizable: false,
                    position: WindowPosition::Centered(MonitorSelection::Primary),
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(WINDOW_COLOR))
        .insert_resource(config)
        .insert_resource(Session::new(config, &mut rand::rng()))
        .insert_resource(TickTimer::new(config.tick_interval))
        .init_resource::<SnakeSquares>()
        .add_message::<RoundStarted>()
        .add_message::<Ticked>()
        .configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Simulate,
                GameSet::Draw,
                GameSet::Ui,
            )
                .chain(),
        )
        .add_plugins((RenderingPlugin, SnakePlugin, FoodPlugin, UiPlugin))
        .run();

    Ok(())
}
