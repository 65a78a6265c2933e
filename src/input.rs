//! per‑frame input snapshot + the system that fills it from Bevy
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};

/// Everything the simulation reads from the player in one frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    /// held
    pub jump: bool,
    /// pressed this frame
    pub interact: bool,
    /// pressed this frame; leaves the win / game‑over screens
    pub acknowledge: bool,
    /// left click this frame, in world coordinates
    pub click: Option<Vec2>,
}

/// Bevy world space (y‑up, origin at screen centre) → game space
/// (y‑down, origin top‑left).
pub fn bevy_to_world(p: Vec2) -> Vec2 {
    Vec2::new(p.x + WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0 - p.y)
}

/// Inverse of [`bevy_to_world`].
pub fn world_to_bevy(p: Vec2) -> Vec2 {
    Vec2::new(p.x - WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0 - p.y)
}

/* ===========================================================
   keyboard / mouse → snapshot
   =========================================================== */
pub fn gather_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    window_q: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    let held = |a, b| keys.pressed(a) || keys.pressed(b);

    snapshot.move_left = held(KeyCode::ArrowLeft, KeyCode::KeyA);
    snapshot.move_right = held(KeyCode::ArrowRight, KeyCode::KeyD);
    snapshot.jump = held(KeyCode::Space, KeyCode::KeyW);
    snapshot.interact = keys.just_pressed(KeyCode::KeyF);
    snapshot.acknowledge = keys.just_pressed(KeyCode::Space);

    snapshot.click = None;
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = window_q.get_single() else { return };
    let Ok((camera, cam_tf)) = camera_q.get_single() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    if let Ok(p) = camera.viewport_to_world_2d(cam_tf, cursor) {
        snapshot.click = Some(bevy_to_world(p));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_corners_map_to_world_corners() {
        assert_eq!(bevy_to_world(Vec2::new(-600.0, 400.0)), Vec2::ZERO);
        assert_eq!(bevy_to_world(Vec2::new(600.0, -400.0)), Vec2::new(WORLD_WIDTH, WORLD_HEIGHT));
    }

    #[test]
    fn conversions_are_inverse() {
        let p = Vec2::new(123.0, 456.0);
        assert_eq!(bevy_to_world(world_to_bevy(p)), p);
    }
}
