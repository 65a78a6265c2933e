//! gravity + platform landing shared by the player and the enemies
use bevy::prelude::*;

use crate::geometry::{bottom, overlaps, rect_at, top};
use crate::level::Platform;

/// Longest vertical move resolved in one go; thinner than any ledge.
const MAX_SLICE: f32 = 16.0;
const MAX_SLICES: usize = 64;

/// What to do when the body rises into a platform from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ceiling {
    /// fly through (player)
    PassThrough,
    /// stop and sit just under the platform (enemies)
    Bump,
}

/// Result of one vertical step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub grounded: bool,
    pub bumped_head: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// centre, world space (y‑down)
    pub pos: Vec2,
    pub size: Vec2,
    /// positive = falling
    pub velocity_y: f32,
    pub grounded: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size, velocity_y: 0.0, grounded: false }
    }

    pub fn rect(&self) -> Rect {
        rect_at(self.pos, self.size)
    }

    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }

    /// Integrate gravity, move, then resolve against every platform.
    ///
    /// There is no early exit; platforms are visited in order and each one
    /// sees the position left behind by the previous. Long moves are split
    /// into slices no taller than [`MAX_SLICE`] and resolved slice by slice
    /// until something stops the body.
    pub fn apply_gravity_and_move(
        &mut self,
        dt: f32,
        gravity: f32,
        platforms: &[Platform],
        ceiling: Ceiling,
    ) -> Contact {
        self.velocity_y += gravity * dt;

        let travel = self.velocity_y * dt;
        let slices = ((travel.abs() / MAX_SLICE).ceil() as usize).clamp(1, MAX_SLICES);
        let step = travel / slices as f32;

        let mut contact = Contact::default();
        for _ in 0..slices {
            self.pos.y += step;
            self.resolve_platforms(platforms, ceiling, &mut contact);
            if contact.grounded || contact.bumped_head {
                break;
            }
        }

        self.grounded = contact.grounded;
        contact
    }

    fn resolve_platforms(&mut self, platforms: &[Platform], ceiling: Ceiling, contact: &mut Contact) {
        let half_h = self.size.y * 0.5;

        for platform in platforms {
            let me = self.rect();
            let plat = platform.rect();
            if !overlaps(&me, &plat) {
                continue;
            }

            /* ---- landing from above ---- */
            if self.velocity_y > 0.0 && bottom(&me) <= bottom(&plat) {
                self.pos.y = top(&plat) - half_h;
                self.velocity_y = 0.0;
                contact.grounded = true;
            /* ---- head bump ---- */
            } else if ceiling == Ceiling::Bump
                && self.velocity_y < 0.0
                && top(&me) >= top(&plat)
            {
                self.pos.y = bottom(&plat) + half_h;
                self.velocity_y = 0.0;
                contact.bumped_head = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Tier;

    const DT: f32 = 1.0 / 60.0;
    const G: f32 = 800.0;

    fn ledge(x: f32, y: f32) -> Platform {
        Platform::new(Vec2::new(x, y), Vec2::new(192.0, 37.0), Tier(1))
    }

    #[test]
    fn free_fall_accelerates_downwards() {
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 56.0));
        let contact = body.apply_gravity_and_move(DT, G, &[], Ceiling::PassThrough);
        assert!(!contact.grounded);
        assert!(body.velocity_y > 0.0);
        assert!(body.pos.y > 100.0);
    }

    #[test]
    fn lands_on_platform_top() {
        let platform = ledge(100.0, 300.0);
        let plat_top = top(&platform.rect());
        // feet one pixel above the top, already falling
        let mut body = Body::new(Vec2::new(100.0, plat_top - 28.0 - 1.0), Vec2::new(40.0, 56.0));
        body.velocity_y = 200.0;

        let contact = body.apply_gravity_and_move(DT, G, &[platform], Ceiling::PassThrough);
        assert!(contact.grounded);
        assert!(body.grounded);
        assert_eq!(body.velocity_y, 0.0);
        assert!((bottom(&body.rect()) - plat_top).abs() < 1e-3);
    }

    #[test]
    fn resting_body_stays_grounded() {
        let platform = ledge(100.0, 300.0);
        let plat_top = top(&platform.rect());
        let mut body = Body::new(Vec2::new(100.0, plat_top - 28.0), Vec2::new(40.0, 56.0));
        for _ in 0..120 {
            let contact =
                body.apply_gravity_and_move(DT, G, std::slice::from_ref(&platform), Ceiling::PassThrough);
            assert!(contact.grounded);
            assert!((bottom(&body.rect()) - plat_top).abs() < 1e-3);
        }
    }

    #[test]
    fn player_passes_up_through_platform() {
        let platform = ledge(100.0, 300.0);
        let mut body = Body::new(Vec2::new(100.0, 330.0), Vec2::new(40.0, 56.0));
        body.velocity_y = -450.0;
        let before = body.pos.y;
        let contact = body.apply_gravity_and_move(DT, G, &[platform], Ceiling::PassThrough);
        assert!(!contact.grounded && !contact.bumped_head);
        assert!(body.pos.y < before);
        assert!(body.velocity_y < 0.0);
    }

    #[test]
    fn enemy_bumps_head_from_below() {
        let platform = ledge(100.0, 300.0);
        let plat_bottom = bottom(&platform.rect());
        // top edge just below the platform bottom, rising
        let mut body = Body::new(Vec2::new(100.0, plat_bottom + 27.0 + 1.0), Vec2::new(48.0, 54.0));
        body.velocity_y = -300.0;

        let contact = body.apply_gravity_and_move(DT, G, &[platform], Ceiling::Bump);
        assert!(contact.bumped_head);
        assert_eq!(body.velocity_y, 0.0);
        assert!((top(&body.rect()) - plat_bottom).abs() < 1e-3);
    }

    #[test]
    fn side_contact_below_platform_bottom_is_ignored() {
        let platform = ledge(100.0, 300.0);
        // body mostly below the platform, falling, feet under its bottom edge
        let mut body = Body::new(Vec2::new(100.0 + 96.0 + 10.0, 330.0), Vec2::new(40.0, 56.0));
        body.velocity_y = 100.0;
        let contact = body.apply_gravity_and_move(DT, G, &[platform], Ceiling::PassThrough);
        assert!(!contact.grounded);
        assert!(body.velocity_y > 0.0);
    }

    #[test]
    fn first_landing_zeroes_velocity_for_later_platforms() {
        let a = ledge(100.0, 300.0);
        // overlapping slab slightly lower, later in iteration order
        let b = Platform::new(Vec2::new(100.0, 305.0), Vec2::new(192.0, 37.0), Tier(1));
        let mut body = Body::new(Vec2::new(100.0, top(&a.rect()) - 28.0 + 2.0), Vec2::new(40.0, 56.0));
        body.velocity_y = 50.0;
        body.apply_gravity_and_move(DT, G, &[a.clone(), b], Ceiling::PassThrough);
        assert!((bottom(&body.rect()) - top(&a.rect())).abs() < 1e-3);
    }

    #[test]
    fn fast_fall_does_not_tunnel_through_a_ledge() {
        let platform = ledge(100.0, 300.0);
        let plat_top = top(&platform.rect());
        // feet just above the top; one step travels far more than the ledge is thick
        let mut body = Body::new(Vec2::new(100.0, plat_top - 28.0 - 2.0), Vec2::new(40.0, 56.0));
        body.velocity_y = 1050.0;

        let contact = body.apply_gravity_and_move(0.1, G, &[platform], Ceiling::PassThrough);
        assert!(contact.grounded);
        assert_eq!(body.velocity_y, 0.0);
        assert!((bottom(&body.rect()) - plat_top).abs() < 1e-3);
    }

    #[test]
    fn long_free_fall_covers_full_distance() {
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 56.0));
        body.velocity_y = 1000.0;
        body.apply_gravity_and_move(0.1, G, &[], Ceiling::PassThrough);
        assert!((body.pos.y - (100.0 + 1080.0 * 0.1)).abs() < 1e-3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn landing_snaps_to_top_with_zero_velocity(
                x in 20.0f32..180.0,
                height_above in 0.0f32..200.0,
                dt in 0.001f32..0.05,
            ) {
                let platform = ledge(100.0, 500.0);
                let plat_top = top(&platform.rect());
                let mut body = Body::new(
                    Vec2::new(x, plat_top - 28.0 - height_above),
                    Vec2::new(40.0, 56.0),
                );
                for _ in 0..2000 {
                    let contact = body.apply_gravity_and_move(
                        dt, G, std::slice::from_ref(&platform), Ceiling::PassThrough,
                    );
                    if contact.grounded {
                        prop_assert_eq!(body.velocity_y, 0.0);
                        prop_assert!((bottom(&body.rect()) - plat_top).abs() < 1e-3);
                    }
                }
                prop_assert!(body.grounded);
            }
        }
    }
}
