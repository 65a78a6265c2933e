//! player: input‑driven movement, jumping, invulnerability window
use bevy::prelude::*;

use crate::animation::{Animator, Facing, Motion, PLAYER_SHEET};
use crate::body::{Body, Ceiling};
use crate::config::GameConfig;
use crate::constants::*;
use crate::input::InputSnapshot;
use crate::level::Platform;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub anim: Animator,
    pub score: u32,
    pub has_key: bool,
    pub invulnerable: bool,
    /// seconds left in the invulnerability window
    pub invulnerable_for: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, PLAYER_SIZE),
            anim: Animator::new(PLAYER_SHEET),
            score: 0,
            has_key: false,
            invulnerable: false,
            invulnerable_for: 0.0,
        }
    }

    /// One frame of movement.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot, platforms: &[Platform], cfg: &GameConfig) {
        let mut moving = false;
        // still airborne from last frame?
        let mut jumping = !self.body.grounded;

        /* ---- horizontal: both directions may apply ---- */
        let step = cfg.player.speed * dt;
        if input.move_left {
            self.body.pos.x -= step;
            moving = true;
            self.anim.facing = Facing::Left;
        }
        if input.move_right {
            self.body.pos.x += step;
            moving = true;
            self.anim.facing = Facing::Right;
        }

        /* ---- vertical ---- */
        let contact =
            self.body
                .apply_gravity_and_move(dt, cfg.physics.gravity, platforms, Ceiling::PassThrough);
        if contact.grounded {
            jumping = false;
        }

        if input.jump && self.body.grounded {
            self.body.velocity_y = cfg.player.jump_strength;
            jumping = true;
        }

        /* ---- keep inside the screen ---- */
        let half_w = self.body.half_width();
        self.body.pos.x = self.body.pos.x.clamp(half_w, WORLD_WIDTH - half_w);

        self.anim.motion = Motion::from_flags(jumping, moving);
        self.anim.advance(dt, cfg.animation_interval);
    }

    /// Start (or restart) the invulnerability window.
    pub fn make_invulnerable(&mut self, secs: f32) {
        self.invulnerable = true;
        self.invulnerable_for = secs;
    }

    /// Count the window down; clears the flag on expiry.
    pub fn tick_invulnerability(&mut self, dt: f32) {
        if !self.invulnerable {
            return;
        }
        self.invulnerable_for -= dt;
        if self.invulnerable_for <= 0.0 {
            self.invulnerable = false;
            self.invulnerable_for = 0.0;
        }
    }

    pub fn opacity(&self) -> f32 {
        if self.invulnerable { INVULNERABLE_OPACITY } else { 1.0 }
    }

    /// Back to the level start after falling out of the world. Score stays.
    pub fn respawn(&mut self) {
        self.body.pos = PLAYER_SPAWN;
        self.body.velocity_y = 0.0;
        self.body.grounded = false;
        self.has_key = false;
    }
}
