//! Surface presenter
//!
//! Copies the rows of a `Surface` that were written since the last frame to
//! a backend, then the cursor, then flushes. Dirty bits are only cleared
//! once the whole frame went through, so a failed frame is retried in full.

use casement_core::Surface;

use crate::backend::{DisplayBackend, DisplayError};

/// Pushes surface changes to a display
#[derive(Debug, Default)]
pub struct Presenter {
    /// Frames presented successfully
    frames: u32,
}

impl Presenter {
    pub const fn new() -> Self {
        Self { frames: 0 }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Present one frame
    ///
    /// Returns the number of rows sent. Rows below the backend's last row
    /// are skipped.
    pub fn present<B: DisplayBackend>(
        &mut self,
        surface: &mut Surface,
        backend: &mut B,
    ) -> Result<usize, DisplayError> {
        if !backend.is_ready() {
            #[cfg(feature = "defmt")]
            defmt::warn!("present: display not ready");
            return Err(DisplayError::NotInitialized);
        }

        let dirty = surface.dirty_rows();
        let (_, rows) = backend.dimensions();
        let rows = usize::from(rows).min(surface.rows());

        let mut sent = 0;
        for row in (0..rows).filter(|row| dirty & (1 << row) != 0) {
            if let Some(cells) = surface.row(row) {
                backend.draw_row(row as u8, cells)?;
                sent += 1;
            }
        }

        let (col, row) = surface.cursor();
        backend.set_cursor(col, row)?;
        backend.flush()?;

        surface.take_dirty();
        self.frames = self.frames.wrapping_add(1);

        #[cfg(feature = "defmt")]
        defmt::trace!("present: frame {} sent {} rows", self.frames, sent);

        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use casement_codes::internal_of;

    #[test]
    fn test_first_frame_sends_every_row() {
        let mut surface = Surface::new();
        let mut screen = Screen::new();
        let mut presenter = Presenter::new();

        assert_eq!(presenter.present(&mut surface, &mut screen), Ok(24));
        assert_eq!(surface.dirty_rows(), 0);
        assert_eq!(presenter.frames(), 1);
    }

    #[test]
    fn test_only_dirty_rows_sent() {
        let mut surface = Surface::new();
        let mut screen = Screen::new();
        let mut presenter = Presenter::new();
        presenter.present(&mut surface, &mut screen).unwrap();

        surface.write(3, 5, &[internal_of(b'H'), internal_of(b'i')]);
        surface.set_cursor(5, 5);
        assert_eq!(presenter.present(&mut surface, &mut screen), Ok(1));
        assert_eq!(screen.text(5).map(|t| &t[3..5]), Some("Hi"));
        assert_eq!(screen.cursor(), (5, 5));

        assert_eq!(presenter.present(&mut surface, &mut screen), Ok(0));
    }

    #[test]
    fn test_not_ready_keeps_dirty() {
        let mut surface = Surface::new();
        let mut screen = Screen::new();
        screen.set_ready(false);
        let mut presenter = Presenter::new();

        assert_eq!(
            presenter.present(&mut surface, &mut screen),
            Err(DisplayError::NotInitialized)
        );
        assert_ne!(surface.dirty_rows(), 0);
        assert_eq!(presenter.frames(), 0);
    }
}
