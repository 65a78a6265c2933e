use bevy::prelude::*;

/// -------- screen / world --------
/// world space is y‑down: (0,0) is the top‑left corner of the screen
pub const WORLD_WIDTH: f32  = 1200.0;
pub const WORLD_HEIGHT: f32 =  800.0;

/// below this y the player counts as fallen out of the world
pub const FALL_LIMIT_Y: f32 = WORLD_HEIGHT + 100.0;

/// spawn / respawn point
pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, WORLD_HEIGHT - 100.0);

/// -------- entity sizes --------
pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 56.0);
pub const ENEMY_SIZE: Vec2  = Vec2::new(48.0, 54.0);
pub const COIN_SIZE: Vec2   = Vec2::new(32.0, 32.0);
pub const KEY_SIZE: Vec2    = Vec2::new(32.0, 32.0);
pub const DOOR_SIZE: Vec2   = Vec2::new(64.0, 96.0);

/// -------- platform blocks --------
pub const GROUND_BLOCK: Vec2 = Vec2::new(192.0, 64.0);
pub const LEDGE_BLOCK: Vec2  = Vec2::new(192.0, 37.0);

/// -------- menu --------
pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);

/// -------- defaults for the tunables in `GameConfig` --------
pub const GRAVITY: f32             = 800.0;
pub const MAX_STEP_SECS: f32       = 0.1;
pub const PLAYER_SPEED: f32        = 200.0;
pub const JUMP_STRENGTH: f32       = -450.0;
pub const INVULNERABILITY_SECS: f32 = 5.0;
pub const ENEMY_SPEED: f32         = 80.0;
pub const ENEMY_CHASE_SPEED: f32   = 100.0;
pub const DETECTION_RANGE: f32     = 150.0;
pub const ANIMATION_INTERVAL: f32  = 0.1;
pub const STARTING_LIVES: u32      = 3;
pub const COIN_VALUE: u32          = 10;

/// opacity used for the player sprite while invulnerable
pub const INVULNERABLE_OPACITY: f32 = 0.5;
