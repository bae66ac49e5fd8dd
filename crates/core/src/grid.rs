//! Grid module - the toroidal playfield
//!
//! The grid is `cols x rows` cells stored as a flat row-major vector, indexed by
//! `col + row * cols`. Every lookup goes through [`Grid::wrap`], so callers
//! never see an out-of-range coordinate; an index outside the vector after
//! wrapping is an invariant violation, not a recoverable error.

use crate::types::{wrap, CellValue, Position};

/// The game grid - flat vector of cell values, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u16,
    rows: u16,
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(cols: u16, rows: u16) -> Self {
        assert!(cols > 0 && rows > 0, "grid must be at least 1x1");
        Self {
            cols,
            rows,
            cells: vec![CellValue::Empty; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Normalize a position into the grid
    #[inline]
    pub fn wrap(&self, pos: Position) -> Position {
        wrap(pos.x, pos.y, self.cols, self.rows)
    }

    /// Flat index of a wrapped position
    #[inline(always)]
    pub fn index(&self, col: i32, row: i32) -> usize {
        debug_assert!(
            (0..self.cols as i32).contains(&col) && (0..self.rows as i32).contains(&row),
            "({col}, {row}) outside {}x{} grid",
            self.cols,
            self.rows
        );
        col as usize + row as usize * self.cols as usize
    }

    pub fn get(&self, pos: Position) -> CellValue {
        let pos = self.wrap(pos);
        self.cells[self.index(pos.x, pos.y)]
    }

    pub fn set(&mut self, pos: Position, value: CellValue) {
        let pos = self.wrap(pos);
        let idx = self.index(pos.x, pos.y);
        self.cells[idx] = value;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == CellValue::Empty
    }

    /// Number of cells holding `value`
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Reset every cell to empty, keeping the allocation
    pub fn clear(&mut self) {
        self.cells.fill(CellValue::Empty);
    }

    /// Export as a row-major `u8` grid using [`CellValue::as_u8`] codes.
    ///
    /// `out` is resized to `rows` rows of `cols` cells; existing row
    /// allocations are reused.
    pub fn write_u8_grid(&self, out: &mut Vec<Vec<u8>>) {
        let cols = self.cols as usize;
        out.resize_with(self.rows as usize, Vec::new);
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks(cols)) {
            row.clear();
            row.extend(chunk.iter().map(CellValue::as_u8));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(15, 15);
        assert_eq!(grid.len(), 225);
        assert_eq!(grid.count(CellValue::Empty), 225);
    }

    #[test]
    fn test_index_is_row_major_by_cols() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(3, 0), 3);
        assert_eq!(grid.index(0, 1), 4);
        assert_eq!(grid.index(3, 2), 11);
    }

    #[test]
    fn test_get_and_set_wrap() {
        let mut grid = Grid::new(5, 4);
        grid.set(Position::new(-1, 0), CellValue::Food);
        assert_eq!(grid.get(Position::new(4, 0)), CellValue::Food);
        assert_eq!(grid.get(Position::new(9, 4)), CellValue::Food);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut grid = Grid::new(3, 3);
        grid.set(Position::new(1, 1), CellValue::SnakeHead);
        grid.clear();
        assert_eq!(grid.count(CellValue::Empty), 9);
    }

    #[test]
    fn test_write_u8_grid() {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(2, 1), CellValue::SnakeBody);
        grid.set(Position::new(0, 0), CellValue::Food);

        let mut out = vec![vec![9; 7]; 5];
        grid.write_u8_grid(&mut out);
        assert_eq!(out, vec![vec![1, 0, 0], vec![0, 0, 101]]);
    }

    #[test]
    #[should_panic]
    fn test_zero_sized_grid_panics() {
        let _ = Grid::new(0, 15);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn set_is_visible_at_every_congruent_position(
                cols in 1u16..40,
                rows in 1u16..40,
                x in -1000i32..1000,
                y in -1000i32..1000,
                kx in -3i32..3,
                ky in -3i32..3,
            ) {
                let mut grid = Grid::new(cols, rows);
                grid.set(Position::new(x, y), CellValue::Food);

                let alias = Position::new(x + kx * cols as i32, y + ky * rows as i32);
                prop_assert_eq!(grid.get(alias), CellValue::Food);
                prop_assert_eq!(grid.count(CellValue::Food), 1);
            }
        }
    }
}
