//! level layouts: platforms, pickups, enemies, key & door
use bevy::log::warn;
use bevy::prelude::*;

use crate::config::EnemyCfg;
use crate::constants::*;
use crate::enemy::Enemy;
use crate::geometry::rect_at;

/// Row index; 0 is the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(pub u8);

impl Tier {
    pub const GROUND: Tier = Tier(0);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub tier: Tier,
}

impl Platform {
    pub fn new(pos: Vec2, size: Vec2, tier: Tier) -> Self {
        Self { pos, size, tier }
    }

    pub fn rect(&self) -> Rect {
        rect_at(self.pos, self.size)
    }

    pub fn sprite(&self) -> &'static str {
        if self.tier == Tier::GROUND {
            "tilesets/platform"
        } else {
            "tilesets/platform_two"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        rect_at(self.pos, COIN_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub pos: Vec2,
    pub collected: bool,
}

impl Key {
    pub fn rect(&self) -> Rect {
        rect_at(self.pos, KEY_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub pos: Vec2,
    pub is_open: bool,
}

impl Door {
    pub fn rect(&self) -> Rect {
        rect_at(self.pos, DOOR_SIZE)
    }

    /// Returns `true` only on the closed → open transition.
    pub fn open_door(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        true
    }

    pub fn sprite(&self) -> &'static str {
        if self.is_open { "door_open" } else { "door_closed" }
    }
}

/// Everything a freshly built level contains.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub key: Key,
    pub door: Door,
}

/* ===========================================================
   static layout tables
   =========================================================== */
struct Row {
    tier: Tier,
    /// centre y of the row
    y: f32,
    block: Vec2,
    xs: &'static [f32],
}

struct EnemySpawn {
    x: f32,
    tier: Tier,
}

struct Layout {
    rows: &'static [Row],
    coins: &'static [(f32, f32)],
    enemies: &'static [EnemySpawn],
    key: (f32, f32),
    door: (f32, f32),
}

const fn ledge_y(offset: f32) -> f32 {
    WORLD_HEIGHT - offset - LEDGE_BLOCK.y / 2.0
}

const LEVEL_ONE_ROWS: &[Row] = &[
    Row {
        tier: Tier::GROUND,
        y: WORLD_HEIGHT - GROUND_BLOCK.y / 2.0,
        block: GROUND_BLOCK,
        // gap between the second and third block
        xs: &[96.0, 288.0, 672.0, 864.0, 1056.0, 1248.0],
    },
    Row {
        tier: Tier(1),
        y: ledge_y(150.0),
        block: LEDGE_BLOCK,
        xs: &[146.0, 338.0, 530.0, 722.0, 1106.0, 1298.0],
    },
    Row {
        tier: Tier(2),
        y: ledge_y(280.0),
        block: LEDGE_BLOCK,
        xs: &[312.0, 504.0, 696.0, 888.0, 1272.0, 1054.0],
    },
    Row {
        tier: Tier(3),
        y: ledge_y(400.0),
        block: LEDGE_BLOCK,
        xs: &[246.0, 438.0, 630.0, 954.0],
    },
    Row {
        tier: Tier(4),
        y: ledge_y(520.0),
        block: LEDGE_BLOCK,
        xs: &[296.0, 488.0, WORLD_WIDTH / 1.77, 1054.0],
    },
    Row {
        tier: Tier(5),
        y: ledge_y(640.0),
        block: LEDGE_BLOCK,
        xs: &[404.0, 596.0, 980.0, 15.0],
    },
];

const LEVEL_ONE: Layout = Layout {
    rows: LEVEL_ONE_ROWS,
    coins: &[
        (35.0, 90.0),
        (560.0, 90.0),
        (400.0, 210.0),
        (1000.0, 330.0),
        (340.0, 450.0),
        (500.0, 580.0),
        (1100.0, 700.0),
    ],
    enemies: &[
        EnemySpawn { x: 800.0, tier: Tier::GROUND },
        EnemySpawn { x: 300.0, tier: Tier(1) },
        EnemySpawn { x: 700.0, tier: Tier(2) },
        EnemySpawn { x: 450.0, tier: Tier(3) },
        EnemySpawn { x: 500.0, tier: Tier(5) },
    ],
    key: (WORLD_WIDTH - 220.0, WORLD_HEIGHT - 710.0),
    door: (WORLD_WIDTH - 280.0, WORLD_HEIGHT - 120.0),
};

/// Index 0 is level 1.
const LEVELS: &[Layout] = &[LEVEL_ONE];

pub fn level_count() -> usize {
    LEVELS.len()
}

/* ===========================================================
   build
   =========================================================== */

/// Build a fresh copy of level `index` (1‑based). Pure: the same index
/// always yields the same layout.
pub fn build(index: usize, enemy_cfg: &EnemyCfg) -> Option<Level> {
    let Some(layout) = index.checked_sub(1).and_then(|i| LEVELS.get(i)) else {
        warn!("no layout for level {index}, {} level(s) available", level_count());
        return None;
    };

    let platforms = layout
        .rows
        .iter()
        .flat_map(|row| {
            row.xs
                .iter()
                .map(move |&x| Platform::new(Vec2::new(x, row.y), row.block, row.tier))
        })
        .collect();

    let coins = layout
        .coins
        .iter()
        .map(|&(x, y)| Coin { pos: Vec2::new(x, y) })
        .collect();

    let enemies = layout
        .enemies
        .iter()
        .filter_map(|spawn| {
            let row = layout.rows.iter().find(|r| r.tier == spawn.tier)?;
            // patrol range is one block wide, centred on the spawn
            let half = row.block.x / 2.0;
            // start partly sunk into the row so the first step settles on it
            let y = row.y + row.block.y / 3.0 - ENEMY_SIZE.y / 2.0;
            Some(Enemy::new(Vec2::new(spawn.x, y), spawn.x - half, spawn.x + half, enemy_cfg))
        })
        .collect();

    Some(Level {
        platforms,
        coins,
        enemies,
        key: Key { pos: Vec2::from(layout.key), collected: false },
        door: Door { pos: Vec2::from(layout.door), is_open: false },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_one() -> Level {
        build(1, &EnemyCfg::default()).expect("level 1 exists")
    }

    #[test]
    fn level_one_has_six_tiers_and_expected_contents() {
        let level = level_one();
        assert_eq!(level.platforms.len(), 30);
        let mut tiers: Vec<Tier> = level.platforms.iter().map(|p| p.tier).collect();
        tiers.dedup();
        assert_eq!(tiers, (0..6).map(Tier).collect::<Vec<_>>());
        assert_eq!(level.coins.len(), 7);
        assert_eq!(level.enemies.len(), 5);
        assert!(!level.key.collected);
        assert!(!level.door.is_open);
    }

    #[test]
    fn ground_row_has_fixed_offsets() {
        let level = level_one();
        let ground: Vec<f32> = level
            .platforms
            .iter()
            .filter(|p| p.tier == Tier::GROUND)
            .map(|p| p.pos.x)
            .collect();
        assert_eq!(ground, [96.0, 288.0, 672.0, 864.0, 1056.0, 1248.0]);
        assert!(level.platforms.iter().filter(|p| p.tier == Tier::GROUND).all(|p| p.pos.y == 768.0));
    }

    #[test]
    fn rebuilding_is_idempotent() {
        assert_eq!(level_one(), level_one());
    }

    #[test]
    fn enemies_patrol_one_block_around_spawn() {
        for enemy in level_one().enemies {
            let x = enemy.body.pos.x;
            assert_eq!(enemy.patrol_min, x - 96.0);
            assert_eq!(enemy.patrol_max, x + 96.0);
        }
    }

    #[test]
    fn key_sits_above_top_row_and_door_near_ground() {
        let level = level_one();
        assert_eq!(level.key.pos, Vec2::new(980.0, 90.0));
        assert_eq!(level.door.pos, Vec2::new(920.0, 680.0));
        let top_row = level
            .platforms
            .iter()
            .find(|p| p.tier == Tier(5) && p.rect().contains(Vec2::new(980.0, p.pos.y)));
        assert!(top_row.is_some());
    }

    #[test]
    fn unknown_level_is_none() {
        assert!(build(0, &EnemyCfg::default()).is_none());
        assert!(build(level_count() + 1, &EnemyCfg::default()).is_none());
    }

    #[test]
    fn door_opens_once() {
        let mut door = level_one().door;
        assert!(door.open_door());
        assert!(!door.open_door());
        assert!(door.is_open);
    }
}
