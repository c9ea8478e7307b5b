//! Check box
//!
//! Draws `[X]` or `[ ]`. The label is the caller's to print.

use casement_codes::KeyCode;

use super::{exit_key, Outcome};
use crate::input::InputSource;
use crate::wm::{Column, WindowError, WindowHandle, WindowManager};

/// Two-state toggle
#[derive(Debug, Clone)]
pub struct Checkbox {
    window: WindowHandle,
    x: u8,
    y: u8,
    checked: bool,
}

impl Checkbox {
    pub fn new(window: WindowHandle, x: u8, y: u8, checked: bool) -> Self {
        Self {
            window,
            x,
            y,
            checked,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Draw the box and its current mark
    pub fn display(&self, wm: &mut WindowManager) -> Result<(), WindowError> {
        wm.print(self.window, Column::At(self.x), self.y, false, b"[ ]")?;
        self.mark(wm, false)
    }

    /// Toggle with Space or X until Enter, Tab or Escape
    ///
    /// Tab keeps the toggled value. Escape puts the initial value back.
    pub fn edit<I: InputSource>(
        &mut self,
        wm: &mut WindowManager,
        input: &mut I,
    ) -> Result<Outcome<bool>, WindowError> {
        let initial = self.checked;
        wm.print(self.window, Column::At(self.x), self.y, false, b"[ ]")?;

        let outcome = loop {
            self.mark(wm, true)?;

            let key = input.next_key();
            if matches!(key, KeyCode::SPACE | KeyCode::KEY_X | KeyCode::KEY_X_SHIFT) {
                self.checked = !self.checked;
            }
            match exit_key(key) {
                Some(Outcome::Committed(())) => break Outcome::Committed(self.checked),
                Some(Outcome::Cancelled) => {
                    self.checked = initial;
                    break Outcome::Cancelled;
                }
                Some(Outcome::TabExit) => break Outcome::TabExit,
                None => {}
            }
        };

        self.mark(wm, false)?;
        Ok(outcome)
    }

    fn mark(&self, wm: &mut WindowManager, inverse: bool) -> Result<(), WindowError> {
        let glyph: &[u8] = if self.checked { b"X" } else { b" " };
        wm.print(
            self.window,
            Column::At(self.x.saturating_add(1)),
            self.y,
            inverse,
            glyph,
        )
    }
}
