use crate::types::{CellValue, Direction, Position, START_SPEED_MS};

/// Read-only copy of everything a renderer needs
///
/// Produced by [`crate::GameState::snapshot`] after each mutation. Renderers
/// never write back into the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cols: u16,
    pub rows: u16,
    /// Row-major cell values, `cols * rows` long.
    pub grid: Vec<CellValue>,
    pub head: Position,
    pub tail_len: usize,
    pub dir: Direction,
    pub prev_dir: Direction,
    pub dir_angle: i32,
    pub is_rotating: bool,
    pub speed_ms: u32,
    pub burgers: u32,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cols = 0;
        self.rows = 0;
        self.grid.clear();
        self.head = Position::default();
        self.tail_len = 0;
        self.dir = Direction::Up;
        self.prev_dir = Direction::Up;
        self.dir_angle = 0;
        self.is_rotating = false;
        self.speed_ms = START_SPEED_MS;
        self.burgers = 0;
        self.game_over = false;
        self.episode_id = 0;
    }

    /// Cell value at `(x, y)`; empty outside the grid
    pub fn cell(&self, x: u16, y: u16) -> CellValue {
        if x >= self.cols || y >= self.rows {
            return CellValue::Empty;
        }
        self.grid
            .get(x as usize + y as usize * self.cols as usize)
            .copied()
            .unwrap_or_default()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cols: 0,
            rows: 0,
            grid: Vec::new(),
            head: Position::default(),
            tail_len: 0,
            dir: Direction::Up,
            prev_dir: Direction::Up,
            dir_angle: 0,
            is_rotating: false,
            speed_ms: START_SPEED_MS,
            burgers: 0,
            game_over: false,
            episode_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    #[test]
    fn snapshot_into_reuses_buffer() {
        let mut state = GameState::default();
        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        let cap = snap.grid.capacity();

        state.tick();
        state.snapshot_into(&mut snap);
        assert_eq!(snap.grid.capacity(), cap);
        assert_eq!(snap.head, Position::new(7, 6));
    }

    #[test]
    fn cell_outside_grid_is_empty() {
        let snap = GameState::default().snapshot();
        assert_eq!(snap.cell(7, 7), CellValue::SnakeHead);
        assert_eq!(snap.cell(15, 0), CellValue::Empty);
    }

    #[test]
    fn clear_resets_to_default() {
        let mut snap = GameState::default().snapshot();
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
