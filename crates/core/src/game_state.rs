//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the snake and the RNG. It owns every
//! rule of the game: movement with toroidal wrap, growth, speed-up, collision,
//! turning with the rotation lock, food spawning and restart. It knows nothing
//! about time; the engine decides when each operation runs.

use std::collections::VecDeque;

use crate::{snapshot::GameSnapshot, Grid, SimpleRng};
use crate::types::*;

/// What a single movement tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game is over; nothing happened
    Idle,
    /// Head advanced onto an empty cell
    Moved,
    /// Head advanced onto food; the snake grew and sped up
    Ate,
    /// Target cell was snake body; the game is now over
    Collided,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    head: Position,
    /// Body segments, nearest to the head first.
    tail: VecDeque<Position>,
    dir: Direction,
    prev_dir: Direction,
    /// Head rotation in degrees, as picked by [`Direction::closest_angle`].
    dir_angle: i32,
    is_rotating: bool,
    speed_ms: u32,
    burgers: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game on a `cols x rows` grid with the given RNG seed
    pub fn new(cols: u16, rows: u16, seed: u32) -> Self {
        Self::with_rng(cols, rows, SimpleRng::new(seed))
    }

    fn with_rng(cols: u16, rows: u16, rng: SimpleRng) -> Self {
        let mut grid = Grid::new(cols, rows);
        let head = grid.wrap(Position::new(START_X, START_Y));
        grid.set(head, CellValue::SnakeHead);

        Self {
            grid,
            head,
            tail: VecDeque::new(),
            dir: Direction::Up,
            prev_dir: Direction::Up,
            dir_angle: 0,
            is_rotating: false,
            speed_ms: START_SPEED_MS,
            burgers: 0,
            game_over: false,
            episode_id: 0,
            rng,
        }
    }

    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn tail(&self) -> &VecDeque<Position> {
        &self.tail
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn prev_dir(&self) -> Direction {
        self.prev_dir
    }

    pub fn dir_angle(&self) -> i32 {
        self.dir_angle
    }

    pub fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn burgers(&self) -> u32 {
        self.burgers
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.grid.cols();
        out.rows = self.grid.rows();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        out.head = self.head;
        out.tail_len = self.tail.len();
        out.dir = self.dir;
        out.prev_dir = self.prev_dir;
        out.dir_angle = self.dir_angle;
        out.is_rotating = self.is_rotating;
        out.speed_ms = self.speed_ms;
        out.burgers = self.burgers;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the snake one cell in the current direction
    ///
    /// The target cell is inspected before the tail moves, so stepping onto
    /// the segment that is about to retreat this very tick still counts as a
    /// collision.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        let from = self.head;
        let to = self.grid.wrap(from.step(self.dir));

        let outcome = match self.grid.get(to) {
            CellValue::Food => {
                // Old head becomes the new last segment; the shift below
                // immediately moves it to the front.
                self.tail.push_back(from);
                self.speed_ms = self
                    .speed_ms
                    .saturating_sub(SPEED_STEP_MS)
                    .max(SPEED_FLOOR_MS);
                self.burgers += 1;
                TickOutcome::Ate
            }
            CellValue::SnakeBody => {
                self.game_over = true;
                return TickOutcome::Collided;
            }
            // Only reachable on a grid one cell wide or tall, where a
            // sideways step wraps onto the head itself.
            CellValue::SnakeHead => return TickOutcome::Moved,
            CellValue::Empty => {
                self.grid.set(from, CellValue::Empty);
                TickOutcome::Moved
            }
        };

        if let Some(last) = self.tail.pop_back() {
            self.tail.push_front(from);
            self.grid.set(last, CellValue::Empty);
            self.grid.set(from, CellValue::SnakeBody);
        }

        self.grid.set(to, CellValue::SnakeHead);
        self.head = to;

        debug_assert!(self.is_consistent());
        outcome
    }

    /// Start turning towards `dir`
    ///
    /// Ignored after game over, while a rotation is in progress, for the
    /// current direction and for its opposite. Movement uses the new direction
    /// from the next tick on; the rotation flag only gates further turns until
    /// [`GameState::finish_rotation`].
    pub fn request_turn(&mut self, dir: Direction) -> bool {
        if self.game_over || self.is_rotating || dir == self.dir || dir == self.dir.opposite() {
            return false;
        }

        self.prev_dir = self.dir;
        self.dir = dir;
        self.dir_angle = dir.closest_angle(self.dir_angle);
        self.is_rotating = true;
        true
    }

    /// End the rotation animation
    ///
    /// Folds a full turn (±360) back to 0 so angles stay bounded.
    /// Returns false if nothing changed.
    pub fn finish_rotation(&mut self) -> bool {
        let angle = if self.dir_angle.abs() == 360 {
            0
        } else {
            self.dir_angle
        };
        let changed = self.is_rotating || angle != self.dir_angle;
        self.is_rotating = false;
        self.dir_angle = angle;
        changed
    }

    /// Try to drop a burger on a uniformly random cell
    ///
    /// A single attempt: if the drawn cell is occupied nothing is placed.
    pub fn spawn_food(&mut self) -> Option<Position> {
        if self.game_over {
            return None;
        }

        let x = self.rng.next_range(self.grid.cols() as u32) as i32;
        let y = self.rng.next_range(self.grid.rows() as u32) as i32;
        let pos = Position::new(x, y);
        self.place_food(pos).then_some(pos)
    }

    /// Put food on `pos` if that cell is empty
    pub fn place_food(&mut self, pos: Position) -> bool {
        if !self.grid.is_empty_at(pos) {
            return false;
        }
        self.grid.set(pos, CellValue::Food);
        true
    }

    /// Replace the whole state with a fresh game
    ///
    /// The RNG keeps running so consecutive episodes see different food.
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        let rng = self.rng.clone();
        *self = Self::with_rng(self.grid.cols(), self.grid.rows(), rng);
        self.episode_id = next_episode;
    }

    /// Apply an input action
    ///
    /// While the game is over only [`GameAction::Restart`] does anything; while
    /// playing, restart is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.request_turn(dir),
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.restart();
                true
            }
        }
    }

    /// Check that the grid marks exactly the snake's cells
    pub fn is_consistent(&self) -> bool {
        if self.grid.get(self.head) != CellValue::SnakeHead {
            return false;
        }
        if self.grid.count(CellValue::SnakeHead) != 1 {
            return false;
        }
        if self.grid.count(CellValue::SnakeBody) != self.tail.len() {
            return false;
        }
        self.tail
            .iter()
            .all(|&p| self.grid.get(p) == CellValue::SnakeBody)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS, 1)
    }
}
