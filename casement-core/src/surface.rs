//! Character-grid display surface
//!
//! Screen memory as a flat array of internal codes, `SCREEN_COLS` cells per
//! row. Row base offsets are computed once so every render operation is a
//! single `base(row) + col` lookup.

use crate::config::{SCREEN_COLS, SCREEN_ROWS};

const CELLS: usize = SCREEN_COLS * SCREEN_ROWS;

/// Fixed-size character framebuffer
#[derive(Clone)]
pub struct Surface {
    /// Internal codes, row-major
    cells: [u8; CELLS],
    /// Offset of the first cell of each row
    row_base: [usize; SCREEN_ROWS],
    /// Hardware cursor (col, row)
    cursor: (u8, u8),
    /// One bit per row written since the last `take_dirty`
    dirty: u32,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Create a blank surface
    pub fn new() -> Self {
        let mut row_base = [0; SCREEN_ROWS];
        for (row, base) in row_base.iter_mut().enumerate() {
            *base = row * SCREEN_COLS;
        }
        Self {
            cells: [0; CELLS],
            row_base,
            cursor: (0, 0),
            dirty: Self::ALL_ROWS,
        }
    }

    const ALL_ROWS: u32 = (1 << SCREEN_ROWS) - 1;

    /// Number of columns
    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    /// Fill every cell with one internal code
    pub fn fill(&mut self, code: u8) {
        self.cells.fill(code);
        self.dirty = Self::ALL_ROWS;
    }

    /// Internal code at (col, row), `None` off the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<u8> {
        if col < SCREEN_COLS && row < SCREEN_ROWS {
            Some(self.cells[self.row_base[row] + col])
        } else {
            None
        }
    }

    /// All cells of one row
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        let base = *self.row_base.get(row)?;
        Some(&self.cells[base..base + SCREEN_COLS])
    }

    /// Whole screen, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copy `codes` onto the grid starting at (col, row)
    ///
    /// Cells that would fall past the right edge or below the last row are
    /// dropped. Returns the number of cells written.
    pub fn write(&mut self, col: usize, row: usize, codes: &[u8]) -> usize {
        if row >= SCREEN_ROWS || col >= SCREEN_COLS {
            return 0;
        }
        let len = codes.len().min(SCREEN_COLS - col);
        let start = self.row_base[row] + col;
        self.cells[start..start + len].copy_from_slice(&codes[..len]);
        if len > 0 {
            self.dirty |= 1 << row;
        }
        len
    }

    /// Copy cells starting at (col, row) into `out`
    ///
    /// Returns the number of cells copied, clipped like `write`.
    pub fn read(&self, col: usize, row: usize, out: &mut [u8]) -> usize {
        if row >= SCREEN_ROWS || col >= SCREEN_COLS {
            return 0;
        }
        let len = out.len().min(SCREEN_COLS - col);
        let start = self.row_base[row] + col;
        out[..len].copy_from_slice(&self.cells[start..start + len]);
        len
    }

    /// Move the hardware cursor
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor = (col, row);
    }

    /// Hardware cursor (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Rows written since the last `take_dirty`, as a bitmask
    pub fn dirty_rows(&self) -> u32 {
        self.dirty
    }

    /// Return and clear the dirty mask
    pub fn take_dirty(&mut self) -> u32 {
        core::mem::take(&mut self.dirty)
    }

    /// Force a full redraw on the next present
    pub fn mark_all_dirty(&mut self) {
        self.dirty = Self::ALL_ROWS;
    }
}
