//! Button bar
//!
//! A row of labels, one of them highlighted. Labels carry their own
//! decoration, e.g. `"[ Ok ]"`, and are drawn edge to edge.

use super::{advance, commit_item, exit_key, Nav, Outcome};
use crate::input::InputSource;
use crate::wm::{Column, WindowError, WindowHandle, WindowManager};

/// Horizontal row of push buttons
#[derive(Debug, Clone)]
pub struct ButtonBar<'a> {
    window: WindowHandle,
    x: u8,
    y: u8,
    labels: &'a [&'a [u8]],
    selected: usize,
}

impl<'a> ButtonBar<'a> {
    /// Create a bar at window position (x, y) with `selected` highlighted
    pub fn new(window: WindowHandle, x: u8, y: u8, labels: &'a [&'a [u8]], selected: usize) -> Self {
        Self {
            window,
            x,
            y,
            labels,
            selected: selected.min(labels.len().saturating_sub(1)),
        }
    }

    /// Index of the highlighted button
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Draw every button unhighlighted
    pub fn display(&self, wm: &mut WindowManager) -> Result<(), WindowError> {
        self.render(wm, None)
    }

    /// Let the user pick a button
    ///
    /// Arrows move the highlight, wrapping at both ends. Enter commits the
    /// highlighted index.
    pub fn edit<I: InputSource>(
        &mut self,
        wm: &mut WindowManager,
        input: &mut I,
    ) -> Result<Outcome<usize>, WindowError> {
        loop {
            self.render(wm, Some(self.selected))?;

            let key = input.next_key();
            if let Some(nav) = Nav::from_key(key) {
                self.selected = nav.wrap(self.selected, self.labels.len());
            }
            match exit_key(key) {
                Some(Outcome::Committed(())) => {
                    return Ok(commit_item(self.selected, self.labels.len()));
                }
                Some(Outcome::Cancelled) => return Ok(Outcome::Cancelled),
                Some(Outcome::TabExit) => return Ok(Outcome::TabExit),
                None => {}
            }
        }
    }

    fn render(&self, wm: &mut WindowManager, highlight: Option<usize>) -> Result<(), WindowError> {
        let mut x = self.x;
        for (i, label) in self.labels.iter().enumerate() {
            wm.print(self.window, Column::At(x), self.y, highlight == Some(i), label)?;
            x = advance(x, label.len(), 0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManagerConfig;
    use crate::input::ScriptedInput;
    use crate::wm::Rect;
    use casement_codes::{internal_of, KeyCode, INVERSE_BIT};

    const LABELS: [&[u8]; 3] = [b"[A]", b"[B]", b"[C]"];

    fn setup() -> (WindowManager, WindowHandle) {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let win = wm.open(Rect::new(0, 0, 20, 3), false, true).unwrap();
        (wm, win)
    }

    #[test]
    fn test_display_draws_plain() {
        let (mut wm, win) = setup();
        let bar = ButtonBar::new(win, 1, 1, &LABELS, 0);
        bar.display(&mut wm).unwrap();
        assert_eq!(wm.surface().cell(2, 1), Some(internal_of(b'A')));
        assert_eq!(wm.surface().cell(5, 1), Some(internal_of(b'B')));
    }

    #[test]
    fn test_left_wraps_to_last() {
        let (mut wm, win) = setup();
        let mut bar = ButtonBar::new(win, 1, 1, &LABELS, 0);
        let mut input = ScriptedInput::<4>::new(&[KeyCode::LEFT, KeyCode::ENTER]);
        assert_eq!(bar.edit(&mut wm, &mut input), Ok(Outcome::Committed(2)));
        // Last button left highlighted
        assert_eq!(wm.surface().cell(8, 1), Some(internal_of(b'C') | INVERSE_BIT));
    }

    #[test]
    fn test_right_wraps_to_first() {
        let (mut wm, win) = setup();
        let mut bar = ButtonBar::new(win, 1, 1, &LABELS, 2);
        let mut input = ScriptedInput::<4>::new(&[KeyCode::RIGHT, KeyCode::ENTER]);
        assert_eq!(bar.edit(&mut wm, &mut input), Ok(Outcome::Committed(0)));
    }

    #[test]
    fn test_escape_and_tab() {
        let (mut wm, win) = setup();
        let mut bar = ButtonBar::new(win, 1, 1, &LABELS, 0);
        let mut input = ScriptedInput::<2>::new(&[KeyCode::ESC]);
        assert_eq!(bar.edit(&mut wm, &mut input), Ok(Outcome::Cancelled));

        let mut input = ScriptedInput::<2>::new(&[KeyCode::DOWN, KeyCode::TAB]);
        assert_eq!(bar.edit(&mut wm, &mut input), Ok(Outcome::TabExit));
        assert_eq!(bar.selected(), 1);
    }

    #[test]
    fn test_closed_window() {
        let (mut wm, win) = setup();
        wm.close(win).unwrap();
        let bar = ButtonBar::new(win, 1, 1, &LABELS, 0);
        assert_eq!(bar.display(&mut wm), Err(WindowError::NotOpen));
    }

    #[test]
    fn test_overlong_label_clipped() {
        let (mut wm, win) = setup();
        let long = [b'x'; 256];
        let labels: [&[u8]; 2] = [&long, b"[B]"];
        let bar = ButtonBar::new(win, 1, 1, &labels, 0);
        assert_eq!(bar.display(&mut wm), Ok(()));
        assert_eq!(wm.surface().cell(18, 1), Some(internal_of(b'x')));
    }

    #[test]
    fn test_empty_bar_cancels() {
        let (mut wm, win) = setup();
        let mut bar = ButtonBar::new(win, 1, 1, &[], 0);
        let mut input = ScriptedInput::<1>::new(&[KeyCode::ENTER]);
        assert_eq!(bar.edit(&mut wm, &mut input), Ok(Outcome::Cancelled));
    }
}
