//! SetorZero: single‑screen platformer
//!
//! Grab the coins, fetch the key from the top floor and get out through the
//! door without running out of lives. The simulation lives in plain structs
//! (`game`, `player`, `enemy`, …); Bevy only polls input, ticks the `Game`
//! resource and draws what it reports.
//! Works with **Bevy 0.15**.

mod animation;
mod audio;
mod body;
mod collision;
mod components;
mod config;
mod constants;
mod enemy;
mod events;
mod game;
mod geometry;
mod input;
mod level;
mod particles;
mod player;
mod render;

use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;

use constants::{WORLD_HEIGHT, WORLD_WIDTH};
use events::GameEvent;
use game::Game;
use input::{gather_input_system, InputSnapshot};

/* ------------------------------------------------------------------------ */
/* camera                                                                   */
/* ------------------------------------------------------------------------ */
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/* ------------------------------------------------------------------------ */
/* one simulation step per frame                                            */
/* ------------------------------------------------------------------------ */
fn tick_game_system(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    mut game: ResMut<Game>,
    mut events: EventWriter<GameEvent>,
) {
    let frame_events = game.update(time.delta_secs(), &input);
    events.send_batch(frame_events);
}

fn exit_on_request_system(mut events: EventReader<GameEvent>, mut exit: EventWriter<AppExit>) {
    if events.read().any(|e| *e == GameEvent::ExitRequested) {
        exit.send(AppExit::Success);
    }
}

/* ------------------------------------------------------------------------ */
/* main                                                                     */
/* ------------------------------------------------------------------------ */
fn main() {
    let config = config::load_config();

    App::new()
        /* diagnostics ----------------------------------------------------- */
        .add_plugins((
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
        ))

        /* bevy core ------------------------------------------------------- */
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: render::TITLE.into(),
                resolution: WindowResolution::new(WORLD_WIDTH, WORLD_HEIGHT),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        /* game state ------------------------------------------------------ */
        .insert_resource(Game::new(config))
        .init_resource::<InputSnapshot>()
        .add_event::<GameEvent>()

        /* startup systems ------------------------------------------------- */
        .add_systems(Startup, (setup_camera, audio::start_music))

        /* frame‑update systems ------------------------------------------- */
        .add_systems(
            Update,
            (
                gather_input_system,                 // keys / mouse → snapshot
                tick_game_system,                    // physics, AI, collisions
                (
                    render::draw_system,             // sprites, HUD, screens
                    audio::music_system,             // pause / resume music
                    audio::sound_effects_system,     // one‑shot cues
                    particles::spawn_sparkles_system,
                    particles::sparkle_update_system,
                    exit_on_request_system,
                ),
            )
                .chain(),
        )
        .run();
}
