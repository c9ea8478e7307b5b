//! Radio button group
//!
//! Each item is drawn as `>o Label`: a pointer cell that follows the
//! cursor while editing, a ball or hollow circle for the chosen item, a
//! gap, then the label.

use casement_codes::glyphs::{BALL, HOLLOW, POINTER, SPACE};
use casement_codes::KeyCode;

use super::{advance, commit_item, exit_key, Layout, Nav, Outcome};
use crate::input::InputSource;
use crate::wm::{Column, CursorTarget, WindowError, WindowHandle, WindowManager};

/// One-of-many selection
#[derive(Debug, Clone)]
pub struct RadioGroup<'a> {
    window: WindowHandle,
    x: u8,
    y: u8,
    layout: Layout,
    labels: &'a [&'a [u8]],
    /// Chosen item
    selected: usize,
    /// Item under the pointer while editing
    cursor: usize,
}

impl<'a> RadioGroup<'a> {
    pub fn new(
        window: WindowHandle,
        x: u8,
        y: u8,
        layout: Layout,
        labels: &'a [&'a [u8]],
        selected: usize,
    ) -> Self {
        let selected = selected.min(labels.len().saturating_sub(1));
        Self {
            window,
            x,
            y,
            layout,
            labels,
            selected,
            cursor: selected,
        }
    }

    /// Chosen item
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Draw the group without the pointer
    pub fn display(&self, wm: &mut WindowManager) -> Result<(), WindowError> {
        self.render(wm, false)
    }

    /// Move the pointer with the arrows, wrapping at both ends
    ///
    /// Space chooses the item under the pointer and keeps editing. Enter
    /// and Tab choose it and leave; Escape restores the initial choice.
    pub fn edit<I: InputSource>(
        &mut self,
        wm: &mut WindowManager,
        input: &mut I,
    ) -> Result<Outcome<usize>, WindowError> {
        let initial = self.selected;
        self.cursor = self.selected;

        let outcome = loop {
            self.render(wm, true)?;
            if let Some(outcome) = self.handle(input.next_key(), initial) {
                break outcome;
            }
        };

        self.render(wm, false)?;
        Ok(outcome)
    }

    /// Apply one key; returns the outcome once the key ends editing
    fn handle(&mut self, key: KeyCode, initial: usize) -> Option<Outcome<usize>> {
        if let Some(nav) = Nav::from_key(key) {
            self.cursor = nav.wrap(self.cursor, self.labels.len());
        } else if key == KeyCode::SPACE {
            self.selected = self.cursor;
        }
        match exit_key(key)? {
            Outcome::Committed(()) => {
                self.selected = self.cursor;
                Some(commit_item(self.selected, self.labels.len()))
            }
            Outcome::TabExit => {
                self.selected = self.cursor;
                Some(Outcome::TabExit)
            }
            Outcome::Cancelled => {
                self.selected = initial;
                Some(Outcome::Cancelled)
            }
        }
    }

    fn render(&self, wm: &mut WindowManager, pointer: bool) -> Result<(), WindowError> {
        let (mut xp, mut yp) = (self.x, self.y);
        for (i, label) in self.labels.iter().enumerate() {
            wm.position(CursorTarget::Window(self.window), xp, yp)?;
            wm.put(
                self.window,
                if pointer && i == self.cursor { POINTER } else { SPACE },
            )?;
            wm.put(self.window, if i == self.selected { BALL } else { HOLLOW })?;
            wm.print(self.window, Column::At(xp.saturating_add(3)), yp, false, label)?;

            match self.layout {
                Layout::Horizontal => xp = advance(xp, label.len(), 4),
                Layout::Vertical => yp = yp.saturating_add(1),
            }
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
    use casement_codes::internal_of;

    const LABELS: [&[u8]; 3] = [b"One", b"Two", b"Six"];

    fn setup() -> (WindowManager, WindowHandle) {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let win = wm.open(Rect::new(0, 0, 30, 6), false, true).unwrap();
        (wm, win)
    }

    #[test]
    fn test_vertical_display() {
        let (mut wm, win) = setup();
        RadioGroup::new(win, 1, 1, Layout::Vertical, &LABELS, 1)
            .display(&mut wm)
            .unwrap();
        let s = wm.surface();
        assert_eq!(s.cell(1, 1), Some(internal_of(SPACE)));
        assert_eq!(s.cell(2, 1), Some(internal_of(HOLLOW)));
        assert_eq!(s.cell(2, 2), Some(internal_of(BALL)));
        assert_eq!(s.cell(4, 2), Some(internal_of(b'T')));
        assert_eq!(s.cell(2, 3), Some(internal_of(HOLLOW)));
    }

    #[test]
    fn test_horizontal_spacing() {
        let (mut wm, win) = setup();
        RadioGroup::new(win, 1, 1, Layout::Horizontal, &LABELS, 0)
            .display(&mut wm)
            .unwrap();
        // Second item starts after "..One" plus four cells
        assert_eq!(wm.surface().cell(9, 1), Some(internal_of(HOLLOW)));
        assert_eq!(wm.surface().cell(11, 1), Some(internal_of(b'T')));
    }

    #[test]
    fn test_up_wraps_to_last() {
        let (mut wm, win) = setup();
        let mut radio = RadioGroup::new(win, 1, 1, Layout::Vertical, &LABELS, 0);
        let mut input = ScriptedInput::<4>::new(&[KeyCode::UP, KeyCode::ENTER]);
        assert_eq!(radio.edit(&mut wm, &mut input), Ok(Outcome::Committed(2)));
        assert_eq!(radio.selected(), 2);
        // Pointer cleared after editing
        assert_eq!(wm.surface().cell(1, 3), Some(internal_of(SPACE)));
    }

    #[test]
    fn test_down_wraps_to_first() {
        let (mut wm, win) = setup();
        let mut radio = RadioGroup::new(win, 1, 1, Layout::Vertical, &LABELS, 2);
        let mut input = ScriptedInput::<4>::new(&[KeyCode::DOWN, KeyCode::ENTER]);
        assert_eq!(radio.edit(&mut wm, &mut input), Ok(Outcome::Committed(0)));
    }

    #[test]
    fn test_space_commits_without_leaving() {
        let (mut wm, win) = setup();
        let mut radio = RadioGroup::new(win, 1, 1, Layout::Vertical, &LABELS, 0);
        assert_eq!(radio.handle(KeyCode::DOWN, 0), None);
        assert_eq!(radio.handle(KeyCode::SPACE, 0), None);
        assert_eq!(radio.selected(), 1);
        assert_eq!(radio.handle(KeyCode::DOWN, 0), None);
        assert_eq!(radio.selected(), 1);

        radio.render(&mut wm, true).unwrap();
        let s = wm.surface();
        assert_eq!(s.cell(2, 1), Some(internal_of(HOLLOW)));
        assert_eq!(s.cell(2, 2), Some(internal_of(BALL)));
        assert_eq!(s.cell(2, 3), Some(internal_of(HOLLOW)));
        assert_eq!(s.cell(1, 3), Some(internal_of(POINTER)));
    }

    #[test]
    fn test_escape_undoes_space() {
        let (mut wm, win) = setup();
        let mut radio = RadioGroup::new(win, 1, 1, Layout::Vertical, &LABELS, 0);
        let mut input = ScriptedInput::<4>::new(&[KeyCode::DOWN, KeyCode::SPACE, KeyCode::DOWN]);
        // Script runs out and Escape restores the initial choice
        assert_eq!(radio.edit(&mut wm, &mut input), Ok(Outcome::Cancelled));
        assert_eq!(radio.selected(), 0);
        assert_eq!(wm.surface().cell(2, 1), Some(internal_of(BALL)));
    }

    #[test]
    fn test_overlong_horizontal_label() {
        let (mut wm, win) = setup();
        let long = [b'a'; 300];
        let labels: [&[u8]; 2] = [&long, b"b"];
        let radio = RadioGroup::new(win, 1, 1, Layout::Horizontal, &labels, 0);
        assert_eq!(radio.display(&mut wm), Ok(()));
        // Clipped at the right frame
        assert_eq!(wm.surface().cell(28, 1), Some(internal_of(b'a')));
    }

    #[test]
    fn test_empty_group_cancels() {
        let (mut wm, win) = setup();
        let mut radio = RadioGroup::new(win, 1, 1, Layout::Vertical, &[], 0);
        let mut input = ScriptedInput::<2>::new(&[KeyCode::DOWN, KeyCode::ENTER]);
        assert_eq!(radio.edit(&mut wm, &mut input), Ok(Outcome::Cancelled));
    }
}
