use bevy::prelude::*;

/* ===========================================================
   shared components
   =========================================================== */
#[derive(Component)]
pub struct Velocity(pub Vec2);

/* ===========================================================
   per‑frame drawing
   =========================================================== */

/// tag for sprites / text redrawn from the game state every frame
#[derive(Component)]
pub struct Redrawn;

/* ===========================================================
   audio
   =========================================================== */
#[derive(Component)]
pub struct MusicTrack;

/* ===========================================================
   particles
   =========================================================== */
#[derive(Component)]
pub struct Sparkle {
    pub life: f32,
}
