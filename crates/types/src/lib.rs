//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless replay).
//!
//! # Board Dimensions
//!
//! The classic 2048 playfield is a 4x4 grid addressed as `(row, col)`, with
//! row 0 at the top and col 0 on the left.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `ANIMATION_MS` | 80 | Slide/merge animation length |
//! | `INPUT_COOLDOWN_MS` | 100 | Minimum interval between two accepted inputs |
//! | `KEY_RELEASE_MS` | 90 | Auto-release for terminals without key-release events |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Pos, GRID_SIZE};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! let pos = Pos::new(3, 0);
//! assert_eq!(pos.index(), 12);
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Board side length in cells.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game.
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed on an empty board by a new game.
pub const START_TILES: usize = 2;

/// Chance, in percent, that a spawned tile is a 4 instead of a 2.
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Length of the slide/merge animation that follows every changed move.
pub const ANIMATION_MS: u32 = 80;

/// Minimum time between two accepted inputs.
pub const INPUT_COOLDOWN_MS: u32 = 100;

/// Held-key timeout for terminals that never report key releases.
///
/// Kept below [`INPUT_COOLDOWN_MS`] so a single tap yields a single move.
pub const KEY_RELEASE_MS: u32 = 90;

/// Fraction of the animation after which merge pulses and spawn grow-ins start.
pub const EFFECT_START: f32 = 0.3;

/// Peak extra scale of a merge pulse (1.0 + PULSE_AMPLITUDE at the top of the bump).
pub const PULSE_AMPLITUDE: f32 = 0.1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(ANIMATION_MS, 80);
        assert_eq!(INPUT_COOLDOWN_MS, 100);
        assert!(KEY_RELEASE_MS < INPUT_COOLDOWN_MS);
    }

    #[test]
    fn direction_axes() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());

        assert!(Direction::Left.toward_start());
        assert!(Direction::Up.toward_start());
        assert!(!Direction::Right.toward_start());
        assert!(!Direction::Down.toward_start());
    }

    #[test]
    fn direction_letters_parse() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_char(dir.as_char()), Some(dir));
        }
        assert_eq!(Direction::from_char('l'), Some(Direction::Left));
        assert_eq!(Direction::from_char('x'), None);
    }

    #[test]
    fn pos_index_roundtrip_covers_grid() {
        for i in 0..CELL_COUNT {
            assert_eq!(Pos::from_index(i).index(), i);
        }
    }

    #[test]
    fn game_action_parse() {
        assert_eq!(GameAction::from_str("MOVEUP"), Some(GameAction::MoveUp));
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("hardDrop"), None);
        assert_eq!(GameAction::Restart.direction(), None);
    }
}

/// Slide direction for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in input priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// True for Left/Right (moves operate on rows).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when tiles travel toward index 0 of their line (Left, Up).
    pub fn toward_start(&self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    /// Single-letter form used by replay scripts.
    pub fn as_char(&self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    /// Parse a single letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major flat index.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        }
    }
}

/// Game actions produced by input and consumed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// Confirm; starts a new game once the current one is lost
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Restart => "restart",
        }
    }

    /// The slide direction of a move action.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}

/// Per-frame pressed state of the logical buttons.
///
/// This is what an input source hands to the driver once per tick; it does
/// not know about keyboards or gamepads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
}

impl Buttons {
    /// First pressed direction in priority order Left, Right, Up, Down.
    pub fn direction(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down || self.confirm
    }

    /// Buttons with exactly one action pressed.
    pub fn from_action(action: GameAction) -> Self {
        let mut b = Self::default();
        match action {
            GameAction::MoveLeft => b.left = true,
            GameAction::MoveRight => b.right = true,
            GameAction::MoveUp => b.up = true,
            GameAction::MoveDown => b.down = true,
            GameAction::Restart => b.confirm = true,
        }
        b
    }
}

/// Coarse game status, derived from the independent won/lost flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// 2048 was reached; play continues.
    Won,
    /// No move is possible; only a new game leaves this state.
    Lost,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// A tile that changed position during one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub from: Pos,
    pub to: Pos,
    /// Value the tile carries while travelling (before any merge at `to`).
    pub value: u32,
}

/// A tile that should get a scale effect after a move.
///
/// Merge results pulse; freshly spawned tiles grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    pub cell: Pos,
    /// Value of the tile at `cell` after the move.
    pub value: u32,
    pub is_newly_spawned: bool,
}
