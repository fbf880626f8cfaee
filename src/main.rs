mod assets;
mod bundles;
mod constants;
mod game_loop;
mod input;
mod render;
mod state;

use bevy::{
    prelude::*,
    render::{
        RenderPlugin,
        settings::{Backends, RenderCreation, WgpuSettings},
    },
    window::PrimaryWindow,
};
use constants::{ASSET_DIR, BACKGROUND_COLOR, BOARD_HEIGHT, BOARD_WIDTH, WINDOW_TITLE};
use game_loop::{GameLoop, Phase, TickTimer, run_tick};

fn main() -> AppExit {
    if let Err(err) = assets::verify_assets(&assets::asset_root()) {
        eprintln!("error: {err:#}");
        return AppExit::error();
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(RenderPlugin {
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        backends: Some(Backends::VULKAN),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: ASSET_DIR.to_string(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .init_state::<Phase>()
        .init_resource::<GameLoop>()
        .init_resource::<TickTimer>()
        .add_systems(
            Startup,
            (
                setup_window,
                setup_camera,
                assets::load_images,
                render::spawn_score_label,
                log_start,
            ),
        )
        .add_systems(Update, assets::exit_on_load_failure)
        .add_systems(
            Update,
            (input::snake_movement_input, run_tick)
                .chain()
                .run_if(in_state(Phase::Running)),
        )
        .add_systems(
            PostUpdate,
            (render::render_score, render::render_board)
                .run_if(in_state(Phase::Running).and(resource_changed::<GameLoop>)),
        )
        .add_systems(OnEnter(Phase::GameOver), render::show_game_over)
        .run()
}

fn setup_window(mut primary_query: Query<&mut Window, With<PrimaryWindow>>) -> Result {
    let mut window = primary_query.single_mut()?;

    window.title = WINDOW_TITLE.to_string();
    window.resolution = (BOARD_WIDTH as u32, BOARD_HEIGHT as u32).into();
    window.resizable = false;

    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn log_start(game: Res<GameLoop>) {
    let state = game.state();
    info!(
        head = ?state.snake().head(),
        length = state.snake().len(),
        direction = ?state.snake().direction(),
        apple = ?state.apple(),
        "game started"
    );
}
