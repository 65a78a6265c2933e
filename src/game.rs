//! game session + top‑level state machine (menu → playing → win / game over)
//!
//! [`Game`] is the single owned piece of mutable state. The Bevy shell feeds
//! it one [`InputSnapshot`] and a frame time per tick and reads back the
//! events and the renderable list.

use bevy::log::{info, warn};
use bevy::prelude::*;

use crate::animation::SpriteFrame;
use crate::collision;
use crate::config::GameConfig;
use crate::constants::*;
use crate::enemy::Enemy;
use crate::events::GameEvent;
use crate::geometry::rect_at;
use crate::input::InputSnapshot;
use crate::level::{self, Coin, Door, Key, Level, Platform};
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    LevelComplete,
    GameOver,
}

/* ===========================================================
   session: everything that lives for one run
   =========================================================== */
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub level: usize,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub key: Key,
    pub door: Door,
    pub lives: u32,
    /// player stands at the door this frame
    pub show_door_prompt: bool,
    /// door opened with the key
    pub level_complete: bool,
}

impl GameSession {
    pub fn new(level_index: usize, cfg: &GameConfig) -> Option<Self> {
        let Level { platforms, coins, enemies, key, door } = level::build(level_index, &cfg.enemy)?;
        Some(Self {
            level: level_index,
            player: Player::new(PLAYER_SPAWN),
            enemies,
            platforms,
            coins,
            key,
            door,
            lives: cfg.starting_lives,
            show_door_prompt: false,
            level_complete: false,
        })
    }

    /// Tick timers, move everything, then resolve interactions.
    pub fn step(&mut self, dt: f32, input: &InputSnapshot, cfg: &GameConfig, events: &mut Vec<GameEvent>) {
        self.player.tick_invulnerability(dt);
        self.player.update(dt, input, &self.platforms, cfg);

        let player_pos = self.player.body.pos;
        for enemy in &mut self.enemies {
            enemy.update(dt, player_pos, &self.platforms, cfg);
        }

        collision::resolve(self, input, cfg, events);
    }

    /// Draw list, back to front.
    pub fn renderables(&self) -> Vec<Renderable> {
        let mut out = Vec::with_capacity(
            self.platforms.len() + self.coins.len() + self.enemies.len() + 3,
        );

        out.extend(self.platforms.iter().map(|p| Renderable::still(
            RenderKind::Platform,
            p.pos,
            p.size,
            p.sprite(),
        )));
        out.extend(
            self.coins
                .iter()
                .map(|c| Renderable::still(RenderKind::Coin, c.pos, COIN_SIZE, "coin")),
        );
        if !self.key.collected {
            out.push(Renderable::still(RenderKind::Key, self.key.pos, KEY_SIZE, "key"));
        }
        out.push(Renderable::still(RenderKind::Door, self.door.pos, DOOR_SIZE, self.door.sprite()));
        out.extend(self.enemies.iter().map(|e| {
            Renderable::animated(RenderKind::Enemy, e.body.pos, e.body.size, e.anim.current(), 1.0)
        }));

        let p = &self.player;
        out.push(Renderable::animated(
            RenderKind::Player,
            p.body.pos,
            p.body.size,
            p.anim.current(),
            p.opacity(),
        ));
        out
    }
}

/* ===========================================================
   render hand‑off
   =========================================================== */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Platform,
    Coin,
    Key,
    Door,
    Enemy,
    Player,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteRef {
    Frame(SpriteFrame),
    Still(&'static str),
}

impl std::fmt::Display for SpriteRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpriteRef::Frame(frame) => std::fmt::Display::fmt(frame, f),
            SpriteRef::Still(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub kind: RenderKind,
    /// centre, world space
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: SpriteRef,
    pub flip_x: bool,
    pub opacity: f32,
}

impl Renderable {
    fn still(kind: RenderKind, pos: Vec2, size: Vec2, name: &'static str) -> Self {
        Self { kind, pos, size, sprite: SpriteRef::Still(name), flip_x: false, opacity: 1.0 }
    }

    fn animated(kind: RenderKind, pos: Vec2, size: Vec2, frame: SpriteFrame, opacity: f32) -> Self {
        Self { kind, pos, size, sprite: SpriteRef::Frame(frame), flip_x: frame.flip_x, opacity }
    }
}

/* ===========================================================
   menu buttons
   =========================================================== */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    ToggleMusic,
    Exit,
}

pub const MENU_BUTTONS: [(MenuAction, Vec2); 3] = [
    (MenuAction::Start, Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0 - 30.0)),
    (MenuAction::ToggleMusic, Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0 + 30.0)),
    (MenuAction::Exit, Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0 + 90.0)),
];

/// First button under `point`, if any.
pub fn button_at(point: Vec2) -> Option<MenuAction> {
    MENU_BUTTONS
        .iter()
        .find(|(_, center)| rect_at(*center, BUTTON_SIZE).contains(point))
        .map(|(action, _)| *action)
}

/* ===========================================================
   game: state machine around an optional session
   =========================================================== */
#[derive(Resource, Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    state: GameState,
    /// kept through the win / game‑over screens so they can show the score
    session: Option<GameSession>,
    music_on: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self { config, state: GameState::Menu, session: None, music_on: true }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    /// Background music plays on the menu and in game, never on the end
    /// screens.
    pub fn music_should_play(&self) -> bool {
        self.music_on && matches!(self.state, GameState::Menu | GameState::Playing)
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.player.score)
    }

    pub fn lives(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.lives)
    }

    pub fn has_key(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.player.has_key)
    }

    pub fn show_door_prompt(&self) -> bool {
        self.state == GameState::Playing && self.session.as_ref().is_some_and(|s| s.show_door_prompt)
    }

    /// Everything to draw for the current state.
    pub fn renderables(&self) -> Vec<Renderable> {
        match (self.state, &self.session) {
            (GameState::Menu, _) => MENU_BUTTONS
                .iter()
                .map(|&(action, pos)| {
                    let name = match action {
                        MenuAction::Start => "menu/button_start",
                        MenuAction::ToggleMusic if self.music_on => "menu/button_music_on",
                        MenuAction::ToggleMusic => "menu/button_music_off",
                        MenuAction::Exit => "menu/button_exit",
                    };
                    Renderable::still(RenderKind::Button, pos, BUTTON_SIZE, name)
                })
                .collect(),
            (GameState::Playing, Some(session)) => session.renderables(),
            _ => Vec::new(),
        }
    }

    /// Advance one frame.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.state {
            GameState::Menu => {
                if let Some(action) = input.click.and_then(button_at) {
                    self.menu_action(action, &mut events);
                }
            }
            GameState::Playing => self.step_playing(dt, input, &mut events),
            GameState::LevelComplete | GameState::GameOver => {
                if input.acknowledge {
                    self.return_to_menu(&mut events);
                }
            }
        }
        events
    }

    pub fn menu_action(&mut self, action: MenuAction, events: &mut Vec<GameEvent>) {
        match action {
            MenuAction::Start => self.start(events),
            MenuAction::ToggleMusic => {
                self.music_on = !self.music_on;
                info!("music {}", if self.music_on { "on" } else { "off" });
                events.push(GameEvent::MusicToggled { on: self.music_on });
            }
            MenuAction::Exit => {
                info!("exit requested");
                events.push(GameEvent::ExitRequested);
            }
        }
    }

    /// Fresh session on level 1 with full lives and zero score.
    pub fn start(&mut self, events: &mut Vec<GameEvent>) {
        let Some(session) = GameSession::new(1, &self.config) else {
            return;
        };
        info!("starting level {} with {} lives", session.level, session.lives);
        self.session = Some(session);
        self.state = GameState::Playing;
        events.push(GameEvent::GameStarted);
    }

    fn step_playing(&mut self, dt: f32, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
        if !dt.is_finite() {
            warn!("ignoring non‑finite frame time {dt}");
            return;
        }
        if dt <= 0.0 {
            return;
        }
        let dt = dt.min(self.config.physics.max_step_secs);

        let Some(session) = self.session.as_mut() else {
            warn!("playing without a session, back to menu");
            self.state = GameState::Menu;
            return;
        };
        session.step(dt, input, &self.config, events);

        if session.lives == 0 {
            info!("game over with score {}", session.player.score);
            self.state = GameState::GameOver;
            events.push(GameEvent::GameOver);
        } else if session.level_complete {
            info!("level {} complete with score {}", session.level, session.player.score);
            self.state = GameState::LevelComplete;
            events.push(GameEvent::LevelComplete);
        }
    }

    fn return_to_menu(&mut self, events: &mut Vec<GameEvent>) {
        info!("back to menu");
        self.session = None;
        self.state = GameState::Menu;
        events.push(GameEvent::ReturnedToMenu);
    }
}
