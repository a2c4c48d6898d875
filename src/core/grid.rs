//! Grid module - manages the game grid
//!
//! The grid is a 15x20 cell store where each cell is empty or holds the kind
//! of a locked piece. Uses a flat array for cache locality and
//! zero-allocation row operations.
//! Coordinates: (x, y) with x ranging 0..14 (left to right), y ranging 0..19
//! (top to bottom). Pieces spawn at (7, 0) and may extend above y = 0.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The game grid - 15 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::is_valid_cell(x, y) {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// True iff (x, y) lies within the grid bounds
    #[inline(always)]
    pub fn is_valid_cell(x: i8, y: i8) -> bool {
        x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8
    }

    /// Get cell at position (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and holds a locked cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision predicate over a piece's absolute cell positions.
    ///
    /// A piece collides iff any cell fell below the floor (y >= height), or
    /// any in-bounds cell overlaps a locked cell. Cells past a side wall or
    /// above the ceiling do not collide by themselves; full bounds are only
    /// enforced by [`Grid::is_valid_pos`] when committing a move.
    pub fn collides(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().any(|&(x, y)| {
            if y >= GRID_HEIGHT as i8 {
                return true;
            }
            self.is_occupied(x, y)
        })
    }

    /// Full validity check for a target position: every cell in bounds and
    /// no collision. Horizontal shifts and rotations commit only when this
    /// holds; gravity and hard drop use [`Grid::collides`] alone.
    pub fn is_valid_pos(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().all(|&(x, y)| Self::is_valid_cell(x, y)) && !self.collides(cells)
    }

    /// Lock ("burn") a piece's absolute cells into the grid.
    ///
    /// Out-of-bounds cells are silently skipped; a piece resting at the top
    /// of the grid legitimately has cells above y = 0.
    pub fn burn(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Check if a row contains no empty cell
    pub fn is_row_filled(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a row is entirely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_none())
    }

    /// Reset every filled row to all-empty in place, without shifting.
    /// Returns the cleared row indices (top to bottom).
    ///
    /// Rows emptied here are removed by the separate [`Grid::collapse`]
    /// pass; the two run back to back once per logic tick.
    pub fn clear_filled(&mut self) -> ArrayVec<usize, { GRID_HEIGHT as usize }> {
        let mut cleared = ArrayVec::new();
        let width = GRID_WIDTH as usize;

        for y in 0..GRID_HEIGHT as usize {
            if self.is_row_filled(y) {
                let start = y * width;
                for cell in &mut self.cells[start..start + width] {
                    *cell = None;
                }
                cleared.push(y);
            }
        }

        cleared
    }

    /// Remove fully-empty rows and compact the rest downward.
    ///
    /// Surviving rows keep their relative order and settle against the
    /// floor; fresh empty rows fill the top. The row count stays exactly
    /// the grid height. Uses a two-pointer scan with `copy_within`, no
    /// allocation.
    pub fn collapse(&mut self) {
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_empty(read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                let dst = write_y * width;
                self.cells.copy_within(src..src + width, dst);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill an entire row with the given cell (test setup helper)
    #[cfg(test)]
    pub fn fill_row(&mut self, y: usize, cell: Cell) {
        let start = y * GRID_WIDTH as usize;
        for c in &mut self.cells[start..start + GRID_WIDTH as usize] {
            *c = cell;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(14, 0), Some(14));
        assert_eq!(Grid::index(0, 1), Some(15));
        assert_eq!(Grid::index(14, 19), Some(299));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(15, 0), None);
        assert_eq!(Grid::index(0, 20), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();

        assert!(grid.set(5, 10, Some(PieceKind::T)));
        assert_eq!(grid.get(5, 10), Some(Some(PieceKind::T)));

        assert!(grid.set(5, 10, None));
        assert_eq!(grid.get(5, 10), Some(None));

        assert!(!grid.set(-1, 0, Some(PieceKind::I)));
        assert!(!grid.set(0, 20, Some(PieceKind::I)));
    }

    #[test]
    fn test_collides_below_floor_regardless_of_contents() {
        let grid = Grid::new();
        assert!(grid.collides(&[(5, 20)]));
        assert!(grid.collides(&[(5, 19), (5, 20)]));
        assert!(grid.collides(&[(-3, 25)]));
    }

    #[test]
    fn test_out_of_bounds_sideways_is_not_a_collision() {
        let grid = Grid::new();
        assert!(!grid.collides(&[(-1, 5)]));
        assert!(!grid.collides(&[(15, 5)]));
        assert!(!grid.collides(&[(5, -2)]));
    }

    #[test]
    fn test_collides_with_locked_cell() {
        let mut grid = Grid::new();
        grid.set(5, 10, Some(PieceKind::O));
        assert!(grid.collides(&[(5, 10)]));
        assert!(!grid.collides(&[(5, 9)]));
    }

    #[test]
    fn test_valid_pos_requires_bounds_and_no_collision() {
        let mut grid = Grid::new();
        assert!(grid.is_valid_pos(&[(0, 0), (14, 19)]));
        assert!(!grid.is_valid_pos(&[(-1, 0)]));
        assert!(!grid.is_valid_pos(&[(0, -1)]));

        grid.set(3, 3, Some(PieceKind::S));
        assert!(!grid.is_valid_pos(&[(3, 3)]));
    }

    #[test]
    fn test_burn_skips_out_of_bounds() {
        let mut grid = Grid::new();
        grid.burn(&[(7, 0), (7, -1), (7, -2), (7, 1)], PieceKind::I);

        assert_eq!(grid.get(7, 0), Some(Some(PieceKind::I)));
        assert_eq!(grid.get(7, 1), Some(Some(PieceKind::I)));
        // Cells above the ceiling were ignored; no other cell was touched.
        assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_clear_filled_resets_rows_in_place() {
        let mut grid = Grid::new();
        grid.fill_row(19, Some(PieceKind::L));
        grid.fill_row(17, Some(PieceKind::J));
        grid.set(0, 18, Some(PieceKind::T));

        let cleared = grid.clear_filled();
        assert_eq!(cleared.as_slice(), &[17, 19]);

        // Cleared rows are empty but nothing has shifted yet.
        assert!(grid.is_row_empty(17));
        assert!(grid.is_row_empty(19));
        assert_eq!(grid.get(0, 18), Some(Some(PieceKind::T)));
    }

    #[test]
    fn test_collapse_compacts_non_empty_rows_to_bottom() {
        let mut grid = Grid::new();
        grid.set(0, 16, Some(PieceKind::I));
        grid.set(1, 18, Some(PieceKind::T));

        grid.collapse();

        // Relative order preserved, rows settled against the floor.
        assert_eq!(grid.get(0, 18), Some(Some(PieceKind::I)));
        assert_eq!(grid.get(1, 19), Some(Some(PieceKind::T)));
        assert!(grid.is_row_empty(16));
        assert!(grid.is_row_empty(17));
    }

    #[test]
    fn test_collapse_on_collapsed_grid_is_noop() {
        let mut grid = Grid::new();
        grid.set(2, 18, Some(PieceKind::Z));
        grid.set(3, 19, Some(PieceKind::Z));
        grid.collapse();

        let before = grid.clone();
        assert!(grid.clear_filled().is_empty());
        grid.collapse();
        assert_eq!(grid, before);
    }
}
