//! player‑vs‑world interactions, evaluated once per frame after movement
//!
//! Order matters: damage, falling, coins, key, door.

use bevy::log::debug;

use crate::config::GameConfig;
use crate::constants::FALL_LIMIT_Y;
use crate::events::GameEvent;
use crate::game::GameSession;
use crate::geometry::overlaps;
use crate::input::InputSnapshot;

pub fn resolve(
    session: &mut GameSession,
    input: &InputSnapshot,
    cfg: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    resolve_enemy_hits(session, cfg, events);
    resolve_fall(session, cfg, events);
    collect_coins(session, cfg, events);
    collect_key(session, events);
    check_door(session, input, events);
}

/// Take one life and open the invulnerability window.
/// Ignored while already invulnerable.
fn lose_life(session: &mut GameSession, cfg: &GameConfig, events: &mut Vec<GameEvent>) {
    if session.player.invulnerable {
        return;
    }
    session.lives = session.lives.saturating_sub(1);
    session.player.make_invulnerable(cfg.player.invulnerability_secs);
    debug!("player hit, {} lives left", session.lives);
    events.push(GameEvent::PlayerDamaged { lives_left: session.lives });
}

/* ---------- (1) enemies: at most one life per frame ---------- */
fn resolve_enemy_hits(session: &mut GameSession, cfg: &GameConfig, events: &mut Vec<GameEvent>) {
    let me = session.player.body.rect();
    let touching = session.enemies.iter().any(|e| overlaps(&me, &e.body.rect()));
    if touching {
        lose_life(session, cfg, events);
    }
}

/* ---------- (2) fell out of the world ---------- */
fn resolve_fall(session: &mut GameSession, cfg: &GameConfig, events: &mut Vec<GameEvent>) {
    if session.player.body.pos.y <= FALL_LIMIT_Y || session.player.invulnerable {
        return;
    }
    lose_life(session, cfg, events);
    if session.lives > 0 {
        debug!("player fell, respawning");
        session.player.respawn();
        events.push(GameEvent::PlayerFell);
    }
}

/* ---------- (3) coins: mark, then remove ---------- */
fn collect_coins(session: &mut GameSession, cfg: &GameConfig, events: &mut Vec<GameEvent>) {
    let me = session.player.body.rect();
    let hit: Vec<usize> = session
        .coins
        .iter()
        .enumerate()
        .filter(|(_, c)| overlaps(&me, &c.rect()))
        .map(|(i, _)| i)
        .collect();

    for &i in hit.iter().rev() {
        let coin = session.coins.remove(i);
        session.player.score += cfg.coin_value;
        debug!("coin at {:?}, score {}", coin.pos, session.player.score);
        events.push(GameEvent::CoinCollected { at: coin.pos, score: session.player.score });
    }
}

/* ---------- (4) key ---------- */
fn collect_key(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    if session.key.collected || !overlaps(&session.player.body.rect(), &session.key.rect()) {
        return;
    }
    session.key.collected = true;
    session.player.has_key = true;
    debug!("key collected");
    events.push(GameEvent::KeyCollected { at: session.key.pos });
}

/* ---------- (5) door: prompt flag is per frame ---------- */
fn check_door(session: &mut GameSession, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
    session.show_door_prompt = overlaps(&session.player.body.rect(), &session.door.rect());
    if !session.show_door_prompt || !input.interact || !session.player.has_key {
        return;
    }
    if session.door.open_door() {
        session.level_complete = true;
        events.push(GameEvent::DoorOpened);
    }
}
