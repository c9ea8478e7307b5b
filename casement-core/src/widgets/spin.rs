//! Numeric spinner
//!
//! A right-aligned three-digit value stepped with the arrow keys. Values
//! clamp at the bounds; there is no wrap.

use core::fmt::Write;

use casement_codes::Arrow;
use heapless::String;

use super::{exit_key, Outcome};
use crate::config::SPIN_MAX;
use crate::input::InputSource;
use crate::wm::{Column, WindowError, WindowHandle, WindowManager};

/// Bounded integer field
#[derive(Debug, Clone)]
pub struct Spinner {
    window: WindowHandle,
    x: u8,
    y: u8,
    low: u8,
    high: u8,
    value: u8,
}

impl Spinner {
    /// Create a spinner over `low..=high`
    ///
    /// `high` is capped at `SPIN_MAX`, `low` at `high`, and `value` is
    /// clamped into the range.
    pub fn new(window: WindowHandle, x: u8, y: u8, low: u8, high: u8, value: u8) -> Self {
        let high = high.min(SPIN_MAX);
        let low = low.min(high);
        Self {
            window,
            x,
            y,
            low,
            high,
            value: value.clamp(low, high),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn bounds(&self) -> (u8, u8) {
        (self.low, self.high)
    }

    /// Draw the current value
    pub fn display(&self, wm: &mut WindowManager) -> Result<(), WindowError> {
        self.render(wm, false)
    }

    /// Step the value until Enter, Tab or Escape
    ///
    /// Left and down decrement, right and up increment.
    pub fn edit<I: InputSource>(
        &mut self,
        wm: &mut WindowManager,
        input: &mut I,
    ) -> Result<Outcome<u8>, WindowError> {
        let initial = self.value;

        let outcome = loop {
            self.render(wm, true)?;

            let key = input.next_key();
            match key.arrow() {
                Some(Arrow::Left | Arrow::Down) => self.step_down(),
                Some(Arrow::Right | Arrow::Up) => self.step_up(),
                None => {}
            }
            match exit_key(key) {
                Some(Outcome::Committed(())) => break Outcome::Committed(self.value),
                Some(Outcome::Cancelled) => {
                    self.value = initial;
                    break Outcome::Cancelled;
                }
                Some(Outcome::TabExit) => break Outcome::TabExit,
                None => {}
            }
        };

        self.render(wm, false)?;
        Ok(outcome)
    }

    fn step_down(&mut self) {
        self.value = self.value.saturating_sub(1).max(self.low);
    }

    fn step_up(&mut self) {
        self.value = self.value.saturating_add(1).min(self.high);
    }

    fn render(&self, wm: &mut WindowManager, inverse: bool) -> Result<(), WindowError> {
        let mut text: String<4> = String::new();
        // Three digits always fit
        let _ = write!(text, "{:>3}", self.value);
        wm.print(self.window, Column::At(self.x), self.y, inverse, text.as_bytes())
    }
}
