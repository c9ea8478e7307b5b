//! Host-side screen capture
//!
//! A `DisplayBackend` that keeps what it was sent as text: each row as
//! display codes with the inverse bit stripped, plus a per-row inverse
//! mask. Useful for logging a frame or asserting on rendered output.

use casement_codes::{display_of, INVERSE_BIT};
use casement_core::config::{SCREEN_COLS, SCREEN_ROWS};
use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Captured character screen
#[derive(Clone)]
pub struct Screen {
    /// Row text as display codes
    lines: [String<SCREEN_COLS>; SCREEN_ROWS],
    /// Inverse cells, bit n for column n
    inverse: [u64; SCREEN_ROWS],
    cursor: (u8, u8),
    flushes: u32,
    ready: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            inverse: [0; SCREEN_ROWS],
            cursor: (0, 0),
            flushes: 0,
            ready: true,
        }
    }

    /// Simulate a display that is not (or no longer) ready
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Text of a row
    pub fn text(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Whether the cell at (col, row) is inverted
    pub fn is_inverse(&self, col: usize, row: usize) -> bool {
        col < SCREEN_COLS && self.inverse.get(row).is_some_and(|m| m & (1 << col) != 0)
    }

    /// First run of inverted cells on a row, as (start_col, end_col)
    pub fn highlight(&self, row: usize) -> Option<(u8, u8)> {
        let mask = *self.inverse.get(row)?;
        if mask == 0 {
            return None;
        }
        let start = mask.trailing_zeros();
        let end = start + (mask >> start).trailing_ones();
        Some((start as u8, end as u8))
    }

    /// Cursor position last sent
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Number of flushes received
    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

impl DisplayBackend for Screen {
    fn draw_row(&mut self, row: u8, cells: &[u8]) -> Result<(), DisplayError> {
        let row = row as usize;
        if row >= SCREEN_ROWS || cells.len() > SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let line = &mut self.lines[row];
        line.clear();
        let mut mask = 0u64;
        for (col, &code) in cells.iter().enumerate() {
            if code & INVERSE_BIT != 0 {
                mask |= 1 << col;
            }
            let glyph = display_of(code & !INVERSE_BIT);
            // Row is at most SCREEN_COLS chars
            let _ = line.push(char::from(glyph));
        }
        self.inverse[row] = mask;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.cursor = (col, row);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes = self.flushes.wrapping_add(1);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
