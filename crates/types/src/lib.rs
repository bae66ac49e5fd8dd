//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine timing, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a toroidal grid: leaving one edge re-enters on the opposite edge.
//!
//! - **Width**: 15 columns (indexed 0-14)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Start position**: (7, 7), facing up
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_SPEED_MS` | 1000 | Movement interval at the start of a game |
//! | `SPEED_STEP_MS` | 50 | Interval reduction per burger eaten |
//! | `SPEED_FLOOR_MS` | 250 | Fastest possible movement interval |
//! | `FOOD_INTERVAL_MS` | 3000 | Food spawn attempt period |
//! | `ROTATION_MS` | 500 | Head rotation animation (turn lock) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Position, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Directions know their opposite
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Positions wrap around the grid
//! let p = Position::new(-1, 15).wrapped(DEFAULT_COLS, DEFAULT_ROWS);
//! assert_eq!(p, Position::new(14, 0));
//!
//! // Parse game action
//! let action = GameAction::from_str("left").unwrap();
//! assert_eq!(action, GameAction::Turn(Direction::Left));
//! ```

/// Grid width in cells (15 columns)
pub const DEFAULT_COLS: u16 = 15;

/// Grid height in cells (15 rows)
pub const DEFAULT_ROWS: u16 = 15;

/// Start column of the snake head
pub const START_X: i32 = 7;

/// Start row of the snake head
pub const START_Y: i32 = 7;

/// Movement interval at the start of a game (1000ms = 1 cell per second)
pub const START_SPEED_MS: u32 = 1000;

/// Movement interval reduction per burger eaten
pub const SPEED_STEP_MS: u32 = 50;

/// Movement interval floor; eating never makes the snake faster than this
pub const SPEED_FLOOR_MS: u32 = 250;

/// Food spawn attempt period
pub const FOOD_INTERVAL_MS: u32 = 3000;

/// Duration of the head rotation animation; no new turn starts before it ends
pub const ROTATION_MS: u32 = 500;

/// Semantic value of a single grid cell
///
/// The numeric codes (0, 1, 100, 101) are stable and used by
/// [`CellValue::as_u8`] for compact grid dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Food,
    SnakeHead,
    SnakeBody,
}

impl CellValue {
    pub fn as_u8(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Food => 1,
            CellValue::SnakeHead => 100,
            CellValue::SnakeBody => 101,
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(CellValue::Empty),
            1 => Some(CellValue::Food),
            100 => Some(CellValue::SnakeHead),
            101 => Some(CellValue::SnakeBody),
            _ => None,
        }
    }

    /// True for head and body cells
    pub fn is_snake(&self) -> bool {
        matches!(self, CellValue::SnakeHead | CellValue::SnakeBody)
    }
}

/// A grid position
///
/// Coordinates are signed so that `head + vector` can step off the grid
/// before being wrapped back with [`Position::wrapped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One step in the given direction, without wrapping
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.vector();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Normalize into `[0, cols) x [0, rows)`
    pub fn wrapped(&self, cols: u16, rows: u16) -> Self {
        wrap(self.x, self.y, cols, rows)
    }
}

/// Toroidal normalization of a coordinate pair
///
/// Uses Euclidean remainder, so any integer input (not only off-by-one
/// overshoots) lands inside the grid.
///
/// # Examples
///
/// ```
/// use tui_snake_types::{wrap, Position};
///
/// assert_eq!(wrap(15, 7, 15, 15), Position::new(0, 7));
/// assert_eq!(wrap(7, -1, 15, 15), Position::new(7, 14));
/// ```
pub fn wrap(x: i32, y: i32, cols: u16, rows: u16) -> Position {
    debug_assert!(cols > 0 && rows > 0, "grid dimensions must be positive");
    Position {
        x: x.rem_euclid(cols as i32),
        y: y.rem_euclid(rows as i32),
    }
}

/// Movement direction of the snake
///
/// Each direction carries a unit vector, an opposite (turning into it is
/// forbidden), the key codes that select it and a small set of candidate
/// head angles. The candidates let a turn pick the on-screen rotation closest
/// to the current angle, so the head never spins the long way round.
///
/// | Direction | Vector | Angles |
/// |-----------|--------|--------|
/// | Up | (0, -1) | 0, 360, -360 |
/// | Down | (0, 1) | -180, 180 |
/// | Left | (-1, 0) | -90, 270 |
/// | Right | (1, 0) | -270, 90 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit movement vector `(dx, dy)`; y grows downwards
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Candidate head angles in degrees, in preference order
    pub fn angles(&self) -> &'static [i32] {
        match self {
            Direction::Up => &[0, 360, -360],
            Direction::Down => &[-180, 180],
            Direction::Left => &[-90, 270],
            Direction::Right => &[-270, 90],
        }
    }

    /// Pick the candidate angle nearest to `current`
    ///
    /// Ties go to the earlier candidate in [`Direction::angles`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Right.closest_angle(0), 90);
    /// assert_eq!(Direction::Left.closest_angle(0), -90);
    /// ```
    pub fn closest_angle(&self, current: i32) -> i32 {
        let angles = self.angles();
        let mut best = angles[0];
        for &angle in &angles[1..] {
            if (angle - current).abs() < (best - current).abs() {
                best = angle;
            }
        }
        best
    }

    /// The two key codes that select this direction (DOM `KeyboardEvent.code` names)
    pub fn key_names(&self) -> [&'static str; 2] {
        match self {
            Direction::Up => ["ArrowUp", "KeyW"],
            Direction::Down => ["ArrowDown", "KeyS"],
            Direction::Left => ["ArrowLeft", "KeyA"],
            Direction::Right => ["ArrowRight", "KeyD"],
        }
    }

    /// Reverse lookup of [`Direction::key_names`]
    pub fn from_key_name(code: &str) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.key_names().contains(&code))
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions produced by input and applied to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn the snake (ignored for reversals, no-op turns and during rotation)
    Turn(Direction),
    /// Start a fresh game; only honoured after game over
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Turn)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
