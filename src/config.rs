//! tunables, loadable from TOML
//!
//! Looks at `$SETOR_ZERO_CONFIG`, then `config.toml`; anything missing or
//! unreadable falls back to the defaults in `constants`.

use bevy::log::{info, warn};
use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::constants::*;

pub const CONFIG_ENV: &str = "SETOR_ZERO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsCfg {
    pub gravity: f32,
    /// larger frame times are clamped to this
    pub max_step_secs: f32,
}

impl Default for PhysicsCfg {
    fn default() -> Self {
        Self { gravity: GRAVITY, max_step_secs: MAX_STEP_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerCfg {
    pub speed: f32,
    /// negative = upwards
    pub jump_strength: f32,
    pub invulnerability_secs: f32,
}

impl Default for PlayerCfg {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            jump_strength: JUMP_STRENGTH,
            invulnerability_secs: INVULNERABILITY_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyCfg {
    pub speed: f32,
    pub chase_speed: f32,
    pub detection_range: f32,
}

impl Default for EnemyCfg {
    fn default() -> Self {
        Self {
            speed: ENEMY_SPEED,
            chase_speed: ENEMY_CHASE_SPEED,
            detection_range: DETECTION_RANGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Resource)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsCfg,
    pub player: PlayerCfg,
    pub enemy: EnemyCfg,
    pub animation_interval: f32,
    pub starting_lives: u32,
    pub coin_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsCfg::default(),
            player: PlayerCfg::default(),
            enemy: EnemyCfg::default(),
            animation_interval: ANIMATION_INTERVAL,
            starting_lives: STARTING_LIVES,
            coin_value: COIN_VALUE,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; errors fall back to defaults.
    pub fn from_toml(src: &str) -> Self {
        match toml::from_str::<GameConfig>(src) {
            Ok(cfg) => cfg.sanitized(),
            Err(e) => {
                warn!("failed to parse config: {e}, using defaults");
                GameConfig::default()
            }
        }
    }

    /// Fix values the simulation cannot run with.
    pub fn sanitized(mut self) -> Self {
        let defaults = GameConfig::default();

        if !(self.physics.max_step_secs > 0.0) {
            warn!("physics.max_step_secs must be positive, using {MAX_STEP_SECS}");
            self.physics.max_step_secs = defaults.physics.max_step_secs;
        }
        if !(self.animation_interval > 0.0) {
            warn!("animation_interval must be positive, using {ANIMATION_INTERVAL}");
            self.animation_interval = defaults.animation_interval;
        }
        if !(self.player.invulnerability_secs > 0.0) {
            warn!("player.invulnerability_secs must be positive, using {INVULNERABILITY_SECS}");
            self.player.invulnerability_secs = defaults.player.invulnerability_secs;
        }
        if self.starting_lives == 0 {
            warn!("starting_lives must be at least 1, using {STARTING_LIVES}");
            self.starting_lives = defaults.starting_lives;
        }
        // chasing has to be faster than patrolling
        if self.enemy.chase_speed <= self.enemy.speed {
            let fixed = self.enemy.speed * (ENEMY_CHASE_SPEED / ENEMY_SPEED);
            warn!(
                "enemy.chase_speed ({}) must exceed enemy.speed ({}), using {fixed}",
                self.enemy.chase_speed, self.enemy.speed
            );
            self.enemy.chase_speed = fixed;
        }
        self
    }
}

pub fn load_config() -> GameConfig {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    match fs::read_to_string(&path) {
        Ok(content) => {
            info!("loading config from {path}");
            GameConfig::from_toml(&content)
        }
        Err(_) => GameConfig::default(),
    }
}
