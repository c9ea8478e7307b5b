//! Display backend trait
//!
//! Defines the interface a character-grid display has to offer.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Row or column outside the display
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Rows arrive as internal screen codes, one byte per cell, with the
/// inverse-video bit set on inverted cells.
pub trait DisplayBackend {
    /// Replace one row of the display
    ///
    /// - `row`: Row number (0-based)
    /// - `cells`: Internal codes, starting at column 0
    fn draw_row(&mut self, row: u8, cells: &[u8]) -> Result<(), DisplayError>;

    /// Move the visible cursor
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
