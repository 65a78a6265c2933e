//! background music + one‑shot sound effects driven by `GameEvent`s
use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::prelude::*;

use crate::components::MusicTrack;
use crate::events::GameEvent;
use crate::game::Game;

const MUSIC_VOLUME: f32 = 0.5;

pub fn sound_path(name: &str) -> String {
    format!("sounds/{name}.ogg")
}

pub fn start_music(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        AudioPlayer::<AudioSource>(asset_server.load("music/background_music.ogg")),
        PlaybackSettings::LOOP.with_volume(Volume::new(MUSIC_VOLUME)),
        MusicTrack,
    ));
}

/// Pause / resume the music to match the game state.
pub fn music_system(game: Res<Game>, sinks: Query<&AudioSink, With<MusicTrack>>) {
    let want = game.music_should_play();
    for sink in &sinks {
        if want && sink.is_paused() {
            sink.play();
        } else if !want && !sink.is_paused() {
            sink.pause();
        }
    }
}

pub fn sound_effects_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut events: EventReader<GameEvent>,
) {
    for name in events.read().filter_map(GameEvent::sound) {
        commands.spawn((
            AudioPlayer::<AudioSource>(asset_server.load(sound_path(name))),
            PlaybackSettings::DESPAWN,
        ));
    }
}
