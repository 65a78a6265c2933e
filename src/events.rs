//! discrete notifications raised by the simulation during a frame
//!
//! The core never plays sounds or spawns effects itself; it returns these and
//! the shell forwards them into Bevy's event queue for the audio and
//! particle systems.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    GameStarted,
    CoinCollected { at: Vec2, score: u32 },
    KeyCollected { at: Vec2 },
    PlayerDamaged { lives_left: u32 },
    PlayerFell,
    DoorOpened,
    LevelComplete,
    GameOver,
    ReturnedToMenu,
    MusicToggled { on: bool },
    ExitRequested,
}

impl GameEvent {
    /// Sound effect to play, if any.
    pub fn sound(&self) -> Option<&'static str> {
        match self {
            GameEvent::CoinCollected { .. } => Some("coin_sound"),
            GameEvent::KeyCollected { .. } => Some("key_sound"),
            GameEvent::PlayerDamaged { .. } => Some("hit_sound"),
            GameEvent::DoorOpened => Some("door_open_sound"),
            GameEvent::LevelComplete => Some("level_up_sound"),
            GameEvent::GameOver => Some("game_over_sound"),
            _ => None,
        }
    }
}
