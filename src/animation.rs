//! sprite‑frame selection for animated entities
//!
//! Each entity carries an [`Animator`]; the controllers tell it which way the
//! entity faces and how it moves, and the animator flips to the next frame of
//! the matching sequence once every `interval` seconds.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    fn as_str(self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Idle,
    Running,
    Jumping,
}

impl Motion {
    /// Jumping beats running beats idling.
    pub fn from_flags(jumping: bool, moving: bool) -> Self {
        if jumping {
            Motion::Jumping
        } else if moving {
            Motion::Running
        } else {
            Motion::Idle
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Motion::Idle => "idle",
            Motion::Running => "run",
            Motion::Jumping => "jump",
        }
    }
}

/// Number of frames drawn for each direction of one motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounts {
    pub right: usize,
    pub left: usize,
}

/// Frame inventory of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    pub prefix: &'static str,
    pub idle: FrameCounts,
    pub run: FrameCounts,
    pub jump: FrameCounts,
}

pub const PLAYER_SHEET: SpriteSheet = SpriteSheet {
    prefix: "player",
    idle: FrameCounts { right: 2, left: 2 },
    run: FrameCounts { right: 4, left: 4 },
    jump: FrameCounts { right: 1, left: 1 },
};

pub const ENEMY_SHEET: SpriteSheet = SpriteSheet {
    prefix: "enemy",
    idle: FrameCounts { right: 2, left: 2 },
    run: FrameCounts { right: 2, left: 2 },
    jump: FrameCounts { right: 0, left: 0 },
};

/// One drawable frame; `Display` yields the asset id,
/// e.g. `sprites/run/player_run_left_3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub prefix: &'static str,
    pub motion: Motion,
    /// which direction the *asset* was drawn facing
    pub drawn: Facing,
    /// zero based
    pub index: usize,
    /// mirror horizontally when drawing
    pub flip_x: bool,
}

impl fmt::Display for SpriteFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.motion.as_str();
        write!(
            f,
            "sprites/{m}/{}_{m}_{}_{}",
            self.prefix,
            self.drawn.as_str(),
            self.index + 1
        )
    }
}

/// A resolved sequence: which asset direction to use, how many frames it
/// has and whether it must be mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sequence {
    drawn: Facing,
    len: usize,
    flip_x: bool,
}

impl SpriteSheet {
    fn counts(&self, motion: Motion) -> FrameCounts {
        match motion {
            Motion::Idle => self.idle,
            Motion::Running => self.run,
            Motion::Jumping => self.jump,
        }
    }

    /// Left without its own frames borrows the right ones, mirrored.
    fn sequence(&self, motion: Motion, facing: Facing) -> Sequence {
        let counts = self.counts(motion);
        match facing {
            Facing::Right => Sequence { drawn: Facing::Right, len: counts.right, flip_x: false },
            Facing::Left if counts.left > 0 => {
                Sequence { drawn: Facing::Left, len: counts.left, flip_x: false }
            }
            Facing::Left => Sequence { drawn: Facing::Right, len: counts.right, flip_x: true },
        }
    }

    fn frame(&self, motion: Motion, seq: Sequence, index: usize) -> SpriteFrame {
        SpriteFrame {
            prefix: self.prefix,
            motion,
            drawn: seq.drawn,
            index,
            flip_x: seq.flip_x,
        }
    }

    /// First idle frame for `facing`; also what shows when a motion has no
    /// frames at all.
    pub fn rest_frame(&self, facing: Facing) -> SpriteFrame {
        let seq = self.sequence(Motion::Idle, facing);
        self.frame(Motion::Idle, seq, 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    pub sheet: SpriteSheet,
    pub facing: Facing,
    pub motion: Motion,
    frame: usize,
    timer: f32,
    current: SpriteFrame,
}

impl Animator {
    pub fn new(sheet: SpriteSheet) -> Self {
        Self {
            sheet,
            facing: Facing::Right,
            motion: Motion::Idle,
            frame: 0,
            timer: 0.0,
            current: sheet.rest_frame(Facing::Right),
        }
    }

    pub fn current(&self) -> SpriteFrame {
        self.current
    }

    #[cfg(test)]
    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Accumulate `dt`; on reaching `interval` step the shared frame counter
    /// within the active sequence.
    pub fn advance(&mut self, dt: f32, interval: f32) {
        self.timer += dt;
        if self.timer < interval {
            return;
        }
        self.timer = 0.0;

        let seq = self.sheet.sequence(self.motion, self.facing);
        if seq.len == 0 {
            self.current = self.sheet.rest_frame(self.facing);
            return;
        }
        self.frame = (self.frame + 1) % seq.len;
        self.current = self.sheet.frame(self.motion, seq, self.frame);
    }
}
