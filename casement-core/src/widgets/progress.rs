//! Progress bar: twenty cells, one filled per 5%

use casement_codes::glyphs::{INVERSE_SPACE, SPACE};

use crate::wm::{Column, WindowError, WindowHandle, WindowManager};

/// Cells in a full bar
pub const BAR_CELLS: usize = 20;

#[derive(Debug, Clone)]
pub struct ProgressBar {
    window: WindowHandle,
    x: u8,
    y: u8,
}

impl ProgressBar {
    pub fn new(window: WindowHandle, x: u8, y: u8) -> Self {
        Self { window, x, y }
    }

    /// Draw the bar at `percent` complete, capped at 100
    pub fn display(&self, wm: &mut WindowManager, percent: u8) -> Result<(), WindowError> {
        let filled = usize::from(percent.min(100)) / 5;
        let mut bar = [SPACE; BAR_CELLS];
        bar[..filled].fill(INVERSE_SPACE);
        wm.print(self.window, Column::At(self.x), self.y, false, &bar)
    }
}
