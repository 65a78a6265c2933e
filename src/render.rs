//! draws the game state: sprites, HUD, menu and end screens
//!
//! Everything is rebuilt from `Game` each frame; the game screen holds a few
//! dozen sprites, so there is no pooling.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::components::Redrawn;
use crate::constants::*;
use crate::game::{Game, GameState, RenderKind};
use crate::input::world_to_bevy;

const WHITE: Color  = Color::srgb(1.0, 1.0, 1.0);
const GRAY: Color   = Color::srgb(0.59, 0.59, 0.59);
const GOLD: Color   = Color::srgb(1.0, 0.84, 0.0);
const GREEN: Color  = Color::srgb(0.0, 0.78, 0.0);
const RED: Color    = Color::srgb(0.78, 0.0, 0.0);
const BLUE: Color   = Color::srgb(0.0, 0.0, 0.78);
const YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);

pub const TITLE: &str = "SetorZero: The Game";
const SUBTITLE: &str = "Collect the coins, grab the key, open the door";

/// Draw depth per kind; later entries of the same kind stack on top.
fn layer(kind: RenderKind) -> f32 {
    match kind {
        RenderKind::Platform | RenderKind::Button => 0.0,
        RenderKind::Coin | RenderKind::Key | RenderKind::Door => 1.0,
        RenderKind::Enemy => 2.0,
        RenderKind::Player => 3.0,
    }
}

/// Asset path for a sprite id.
pub fn image_path(id: &str) -> String {
    format!("images/{id}.png")
}

pub fn draw_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    game: Res<Game>,
    old: Query<Entity, With<Redrawn>>,
) {
    for e in &old {
        commands.entity(e).despawn();
    }

    /* ---- sprites, back to front ---- */
    for (i, r) in game.renderables().iter().enumerate() {
        commands.spawn((
            Sprite {
                image: asset_server.load(image_path(&r.sprite.to_string())),
                custom_size: Some(r.size),
                flip_x: r.flip_x,
                color: Color::srgba(1.0, 1.0, 1.0, r.opacity),
                ..default()
            },
            Transform::from_translation(world_to_bevy(r.pos).extend(layer(r.kind) + i as f32 * 0.001)),
            Redrawn,
        ));
    }

    /* ---- text ---- */
    let mut text = |s: String, at: Vec2, size: f32, color: Color, anchor: Anchor| {
        commands.spawn((
            Text2d::new(s),
            TextFont { font_size: size, ..default() },
            TextColor(color),
            anchor,
            Transform::from_translation(world_to_bevy(at).extend(10.0)),
            Redrawn,
        ));
    };
    let centre = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);

    match game.state() {
        GameState::Menu => {
            text(TITLE.into(), centre - Vec2::Y * 160.0, 60.0, BLUE, Anchor::Center);
            text(SUBTITLE.into(), centre - Vec2::Y * 120.0, 30.0, WHITE, Anchor::Center);
        }
        GameState::Playing => {
            let key = if game.has_key() { "YES" } else { "NO" };
            text(format!("Coins: {}", game.score()), Vec2::new(10.0, 10.0), 30.0, GOLD, Anchor::TopLeft);
            text(format!("Key: {key}"), Vec2::new(10.0, 40.0), 30.0, BLUE, Anchor::TopLeft);
            text(format!("Lives: {}", game.lives()), Vec2::new(10.0, 70.0), 30.0, RED, Anchor::TopLeft);

            if game.show_door_prompt() {
                if let Some(door) = game.session().map(|s| s.door.pos) {
                    text("Press F to open the door!".into(), door, 40.0, YELLOW, Anchor::Center);
                }
            }
        }
        GameState::LevelComplete => {
            text("YOU WON!".into(), centre - Vec2::Y * 100.0, 80.0, GREEN, Anchor::Center);
            text(format!("Final score: {}", game.score()), centre, 50.0, GOLD, Anchor::Center);
            text(format!("Lives left: {}", game.lives()), centre + Vec2::Y * 60.0, 40.0, RED, Anchor::Center);
            text(
                "Press SPACE to continue".into(),
                Vec2::new(centre.x, WORLD_HEIGHT - 100.0),
                30.0,
                GRAY,
                Anchor::Center,
            );
        }
        GameState::GameOver => {
            text("GAME OVER".into(), centre - Vec2::Y * 50.0, 70.0, RED, Anchor::Center);
            text(format!("Your score: {}", game.score()), centre + Vec2::Y * 10.0, 40.0, GOLD, Anchor::Center);
            text("Press SPACE to try again".into(), centre + Vec2::Y * 80.0, 30.0, GRAY, Anchor::Center);
        }
    }
}
