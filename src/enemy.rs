//! enemies: patrol a ledge, chase the player when close
use bevy::log::debug;
use bevy::prelude::*;

use crate::animation::{Animator, Facing, Motion, ENEMY_SHEET};
use crate::body::{Body, Ceiling};
use crate::config::{EnemyCfg, GameConfig};
use crate::constants::ENEMY_SIZE;
use crate::level::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behaviour {
    #[default]
    Patrol,
    Chase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub anim: Animator,
    pub speed: f32,
    pub chase_speed: f32,
    pub detection_range: f32,
    pub patrol_min: f32,
    pub patrol_max: f32,
    /// heading for `patrol_max` (else `patrol_min`)
    pub moving_to_max: bool,
    pub behaviour: Behaviour,
}

impl Enemy {
    pub fn new(pos: Vec2, patrol_min: f32, patrol_max: f32, cfg: &EnemyCfg) -> Self {
        Self {
            body: Body::new(pos, ENEMY_SIZE),
            anim: Animator::new(ENEMY_SHEET),
            speed: cfg.speed,
            chase_speed: cfg.chase_speed,
            detection_range: cfg.detection_range,
            patrol_min,
            patrol_max,
            moving_to_max: true,
            behaviour: Behaviour::Patrol,
        }
    }

    /// One frame: fall/land, then patrol or chase depending on how far the
    /// player is.
    pub fn update(&mut self, dt: f32, player_pos: Vec2, platforms: &[Platform], cfg: &GameConfig) {
        let mut jumping = !self.body.grounded;

        let contact =
            self.body
                .apply_gravity_and_move(dt, cfg.physics.gravity, platforms, Ceiling::Bump);
        if contact.grounded || contact.bumped_head {
            jumping = false;
        }

        let to_player = player_pos - self.body.pos;
        let behaviour = if to_player.length() < self.detection_range {
            Behaviour::Chase
        } else {
            Behaviour::Patrol
        };
        if behaviour != self.behaviour {
            debug!("enemy at x={:.0} now {:?}", self.body.pos.x, behaviour);
            self.behaviour = behaviour;
        }
        match behaviour {
            Behaviour::Chase => self.chase(dt, to_player.x),
            Behaviour::Patrol => self.patrol(dt),
        }

        // always walking, whichever behaviour
        self.anim.motion = Motion::from_flags(jumping, true);
        self.anim.advance(dt, cfg.animation_interval);
    }

    /* ---------- chase: straight at the player, bounds ignored ---------- */
    fn chase(&mut self, dt: f32, dx: f32) {
        if dx > 0.0 {
            self.body.pos.x += self.chase_speed * dt;
            self.anim.facing = Facing::Right;
        } else if dx < 0.0 {
            self.body.pos.x -= self.chase_speed * dt;
            self.anim.facing = Facing::Left;
        }
    }

    /* ---------- patrol: min ↔ max, snapping onto each bound ---------- */
    fn patrol(&mut self, dt: f32) {
        // a chase can leave us outside the range; resume from the nearest bound
        if self.body.pos.x > self.patrol_max {
            self.body.pos.x = self.patrol_max;
            self.moving_to_max = false;
        } else if self.body.pos.x < self.patrol_min {
            self.body.pos.x = self.patrol_min;
            self.moving_to_max = true;
        }

        if self.moving_to_max {
            self.body.pos.x += self.speed * dt;
            self.anim.facing = Facing::Right;
            if self.body.pos.x >= self.patrol_max {
                self.body.pos.x = self.patrol_max;
                self.moving_to_max = false;
            }
        } else {
            self.body.pos.x -= self.speed * dt;
            self.anim.facing = Facing::Left;
            if self.body.pos.x <= self.patrol_min {
                self.body.pos.x = self.patrol_min;
                self.moving_to_max = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Tier;

    const DT: f32 = 1.0 / 60.0;

    fn ledge() -> Vec<Platform> {
        vec![Platform::new(Vec2::new(500.0, 400.0), Vec2::new(600.0, 37.0), Tier(1))]
    }

    fn enemy_on_ledge() -> Enemy {
        // feet on the ledge top (381.5)
        Enemy::new(Vec2::new(500.0, 381.5 - 27.0), 404.0, 596.0, &EnemyCfg::default())
    }

    /// far enough that chase never triggers
    const FAR: Vec2 = Vec2::new(10_000.0, 10_000.0);

    #[test]
    fn patrol_reverses_exactly_at_bounds() {
        let cfg = GameConfig::default();
        let platforms = ledge();
        let mut e = enemy_on_ledge();
        let mut hit_max = false;
        let mut hit_min = false;
        for _ in 0..600 {
            e.update(DT, FAR, &platforms, &cfg);
            assert_eq!(e.behaviour, Behaviour::Patrol);
            hit_max |= e.body.pos.x == e.patrol_max;
            hit_min |= e.body.pos.x == e.patrol_min;
        }
        assert!(hit_max && hit_min);
    }

    #[test]
    fn chase_moves_toward_player_past_bounds() {
        let cfg = GameConfig::default();
        let platforms = ledge();
        let mut e = enemy_on_ledge();
        e.body.pos.x = 590.0;
        for _ in 0..30 {
            let player = Vec2::new(e.body.pos.x + 100.0, e.body.pos.y);
            e.update(DT, player, &platforms, &cfg);
            assert_eq!(e.behaviour, Behaviour::Chase);
            assert_eq!(e.anim.facing, Facing::Right);
        }
        assert!(e.body.pos.x > e.patrol_max);
    }

    #[test]
    fn chase_is_faster_than_patrol() {
        let cfg = GameConfig::default();
        let platforms = ledge();

        let mut patrolling = enemy_on_ledge();
        let x0 = patrolling.body.pos.x;
        patrolling.update(DT, FAR, &platforms, &cfg);
        let patrol_step = (patrolling.body.pos.x - x0).abs();

        let mut chasing = enemy_on_ledge();
        chasing.update(DT, Vec2::new(x0 + 50.0, chasing.body.pos.y), &platforms, &cfg);
        let chase_step = (chasing.body.pos.x - x0).abs();

        assert!(chase_step > patrol_step);
    }

    #[test]
    fn player_straight_above_does_not_move_enemy_sideways() {
        let cfg = GameConfig::default();
        let platforms = ledge();
        let mut e = enemy_on_ledge();
        let x0 = e.body.pos.x;
        e.update(DT, Vec2::new(x0, e.body.pos.y - 100.0), &platforms, &cfg);
        assert_eq!(e.behaviour, Behaviour::Chase);
        assert_eq!(e.body.pos.x, x0);
    }

    #[test]
    fn patrol_resumes_inside_bounds_after_chase() {
        let cfg = GameConfig::default();
        let platforms = ledge();
        let mut e = enemy_on_ledge();
        e.body.pos.x = 590.0;
        e.moving_to_max = false;
        for _ in 0..60 {
            let player = Vec2::new(e.body.pos.x + 100.0, e.body.pos.y);
            e.update(DT, player, &platforms, &cfg);
        }
        assert!(e.body.pos.x > e.patrol_max);

        e.update(DT, FAR, &platforms, &cfg);
        assert_eq!(e.behaviour, Behaviour::Patrol);
        assert!(e.body.pos.x <= e.patrol_max && e.body.pos.x >= e.patrol_min);
        assert!(!e.moving_to_max);

        // and from the other side
        e.body.pos.x = 300.0;
        e.moving_to_max = false;
        e.update(DT, FAR, &platforms, &cfg);
        assert!(e.body.pos.x >= e.patrol_min);
        assert!(e.moving_to_max);
    }

    #[test]
    fn enemy_jump_state_shows_idle_frame() {
        let cfg = GameConfig::default();
        // nothing to land on
        let mut e = Enemy::new(Vec2::new(100.0, 100.0), 50.0, 150.0, &EnemyCfg::default());
        e.update(DT, FAR, &[], &cfg);
        e.update(0.1, FAR, &[], &cfg);
        assert_eq!(e.anim.motion, Motion::Jumping);
        assert_eq!(e.anim.current().motion, Motion::Idle);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn chase_iff_within_detection_range(
                dx in -400.0f32..400.0,
                dy in -400.0f32..400.0,
            ) {
                let cfg = GameConfig::default();
                let platforms = ledge();
                let mut e = enemy_on_ledge();
                // distance is measured after the vertical step
                e.update(DT, FAR, &platforms, &cfg);
                let player = e.body.pos + Vec2::new(dx, dy);
                let mut probe = e.clone();
                probe.body.apply_gravity_and_move(DT, cfg.physics.gravity, &platforms, Ceiling::Bump);
                let expected = if player.distance(probe.body.pos) < e.detection_range {
                    Behaviour::Chase
                } else {
                    Behaviour::Patrol
                };
                e.update(DT, player, &platforms, &cfg);
                prop_assert_eq!(e.behaviour, expected);
            }

            #[test]
            fn patrol_stays_within_bounds(
                steps in proptest::collection::vec(
                    (0.001f32..0.1, prop_oneof![Just(0.0f32), Just(100.0), Just(-100.0)]),
                    1..400,
                )
            ) {
                let cfg = GameConfig::default();
                let platforms = ledge();
                let mut e = enemy_on_ledge();
                for (dt, lure) in steps {
                    // lure != 0 puts the player in range, sideways
                    let player = if lure == 0.0 {
                        FAR
                    } else {
                        e.body.pos + Vec2::new(lure, 0.0)
                    };
                    e.update(dt, player, &platforms, &cfg);
                    if e.behaviour == Behaviour::Patrol {
                        prop_assert!(e.body.pos.x >= e.patrol_min);
                        prop_assert!(e.body.pos.x <= e.patrol_max);
                    }
                }
            }
        }
    }
}
