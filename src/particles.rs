//! pickup sparkles: a short burst where a coin or the key was taken
use bevy::prelude::*;
use rand::Rng;
use std::ops::Range;

use crate::components::{Sparkle, Velocity};
use crate::events::GameEvent;
use crate::input::world_to_bevy;

const SPARKLE_LIFETIME: f32 = 0.5;
const SPARKLE_SIZE: f32 = 4.0;
const SPARKLE_SPEED: Range<f32> = 40.0..140.0;
const COIN_SPARKLES: usize = 10;
const KEY_SPARKLES: usize = 24;
const COIN_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
const KEY_COLOR: Color = Color::srgb(0.6, 0.8, 1.0);

pub fn spawn_sparkles_system(mut commands: Commands, mut events: EventReader<GameEvent>) {
    let mut rng = rand::thread_rng();
    for ev in events.read() {
        let (at, count, color) = match *ev {
            GameEvent::CoinCollected { at, .. } => (at, COIN_SPARKLES, COIN_COLOR),
            GameEvent::KeyCollected { at } => (at, KEY_SPARKLES, KEY_COLOR),
            _ => continue,
        };
        let origin = world_to_bevy(at);
        for _ in 0..count {
            let dir = Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU));
            commands.spawn((
                Sprite {
                    color,
                    custom_size: Some(Vec2::splat(SPARKLE_SIZE)),
                    ..default()
                },
                Transform::from_translation(origin.extend(20.0)),
                Velocity(dir * rng.gen_range(SPARKLE_SPEED)),
                Sparkle { life: SPARKLE_LIFETIME },
            ));
        }
    }
}

/* ---------- drift, fade, despawn ---------- */
pub fn sparkle_update_system(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Transform, &mut Sprite, &Velocity, &mut Sparkle)>,
) {
    let dt = time.delta_secs();
    for (e, mut tf, mut spr, vel, mut sparkle) in &mut q {
        tf.translation += (vel.0 * dt).extend(0.0);
        sparkle.life -= dt;
        spr.color.set_alpha((sparkle.life / SPARKLE_LIFETIME).max(0.0));
        if sparkle.life <= 0.0 {
            commands.entity(e).despawn();
        }
    }
}
