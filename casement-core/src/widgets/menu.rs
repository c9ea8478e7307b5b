//! Menus
//!
//! A vertical menu puts one item per row; a horizontal one runs the items
//! along a single row, edge to edge, like a menu bar. The highlight wraps
//! at both ends.

use super::{advance, commit_item, exit_key, Layout, Nav, Outcome};
use crate::input::InputSource;
use crate::wm::{Column, WindowError, WindowHandle, WindowManager};

/// Pick-one menu
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    window: WindowHandle,
    x: u8,
    y: u8,
    layout: Layout,
    items: &'a [&'a [u8]],
    selected: usize,
    /// Leave the chosen item highlighted after editing
    keep_highlight: bool,
}

impl<'a> Menu<'a> {
    pub fn new(
        window: WindowHandle,
        x: u8,
        y: u8,
        layout: Layout,
        items: &'a [&'a [u8]],
        selected: usize,
    ) -> Self {
        Self {
            window,
            x,
            y,
            layout,
            items,
            selected: selected.min(items.len().saturating_sub(1)),
            keep_highlight: false,
        }
    }

    /// Keep the highlight on the last selection once `edit` returns
    pub fn keep_highlight(mut self, keep: bool) -> Self {
        self.keep_highlight = keep;
        self
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Draw every item plain
    pub fn display(&self, wm: &mut WindowManager) -> Result<(), WindowError> {
        self.render(wm, None)
    }

    /// Move the highlight until Enter, Tab or Escape
    pub fn edit<I: InputSource>(
        &mut self,
        wm: &mut WindowManager,
        input: &mut I,
    ) -> Result<Outcome<usize>, WindowError> {
        let outcome = loop {
            self.render(wm, Some(self.selected))?;

            let key = input.next_key();
            if let Some(nav) = Nav::from_key(key) {
                self.selected = nav.wrap(self.selected, self.items.len());
            }
            match exit_key(key) {
                Some(Outcome::Committed(())) => break commit_item(self.selected, self.items.len()),
                Some(Outcome::Cancelled) => break Outcome::Cancelled,
                Some(Outcome::TabExit) => break Outcome::TabExit,
                None => {}
            }
        };

        if !self.keep_highlight {
            self.render(wm, None)?;
        }
        Ok(outcome)
    }

    fn render(&self, wm: &mut WindowManager, highlight: Option<usize>) -> Result<(), WindowError> {
        let (mut xp, mut yp) = (self.x, self.y);
        for (i, item) in self.items.iter().enumerate() {
            wm.print(self.window, Column::At(xp), yp, highlight == Some(i), item)?;
            match self.layout {
                Layout::Horizontal => xp = advance(xp, item.len(), 0),
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
    use casement_codes::{internal_of, KeyCode, INVERSE_BIT};

    const ITEMS: [&[u8]; 3] = [b" File ", b" Edit ", b" Quit "];

    fn setup() -> (WindowManager, WindowHandle) {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let win = wm.open(Rect::new(0, 0, 24, 5), false, true).unwrap();
        (wm, win)
    }

    #[test]
    fn test_vertical_wraps() {
        let (mut wm, win) = setup();
        let mut menu = Menu::new(win, 1, 1, Layout::Vertical, &ITEMS, 0);
        let mut input = ScriptedInput::<4>::new(&[KeyCode::UP, KeyCode::ENTER]);
        assert_eq!(menu.edit(&mut wm, &mut input), Ok(Outcome::Committed(2)));

        let mut input = ScriptedInput::<4>::new(&[KeyCode::DOWN, KeyCode::ENTER]);
        assert_eq!(menu.edit(&mut wm, &mut input), Ok(Outcome::Committed(0)));
    }

    #[test]
    fn test_highlight_cleared_by_default() {
        let (mut wm, win) = setup();
        let mut menu = Menu::new(win, 1, 1, Layout::Vertical, &ITEMS, 1);
        let mut input = ScriptedInput::<2>::new(&[KeyCode::ENTER]);
        menu.edit(&mut wm, &mut input).unwrap();
        assert_eq!(wm.surface().cell(2, 2), Some(internal_of(b'E')));
    }

    #[test]
    fn test_keep_highlight() {
        let (mut wm, win) = setup();
        let mut menu = Menu::new(win, 1, 1, Layout::Vertical, &ITEMS, 1).keep_highlight(true);
        let mut input = ScriptedInput::<2>::new(&[KeyCode::ENTER]);
        menu.edit(&mut wm, &mut input).unwrap();
        assert_eq!(wm.surface().cell(2, 2), Some(internal_of(b'E') | INVERSE_BIT));
    }

    #[test]
    fn test_horizontal_bar() {
        let (mut wm, win) = setup();
        let mut menu = Menu::new(win, 1, 1, Layout::Horizontal, &ITEMS, 0).keep_highlight(true);
        let mut input = ScriptedInput::<4>::new(&[KeyCode::RIGHT, KeyCode::TAB]);
        assert_eq!(menu.edit(&mut wm, &mut input), Ok(Outcome::TabExit));
        assert_eq!(menu.selected(), 1);

        let s = wm.surface();
        assert_eq!(s.cell(2, 1), Some(internal_of(b'F')));
        assert_eq!(s.cell(8, 1), Some(internal_of(b'E') | INVERSE_BIT));
    }

    #[test]
    fn test_escape() {
        let (mut wm, win) = setup();
        let mut menu = Menu::new(win, 1, 1, Layout::Vertical, &ITEMS, 0);
        let mut input = ScriptedInput::<1>::new(&[]);
        assert_eq!(menu.edit(&mut wm, &mut input), Ok(Outcome::Cancelled));
    }

    #[test]
    fn test_overlong_horizontal_item() {
        let (mut wm, win) = setup();
        let long = [b'm'; 260];
        let items: [&[u8]; 2] = [&long, b" Quit "];
        let menu = Menu::new(win, 1, 1, Layout::Horizontal, &items, 0);
        assert_eq!(menu.display(&mut wm), Ok(()));
        assert_eq!(wm.surface().cell(22, 1), Some(internal_of(b'm')));
    }

    #[test]
    fn test_empty_menu_cancels() {
        let (mut wm, win) = setup();
        let mut menu = Menu::new(win, 1, 1, Layout::Vertical, &[], 0);
        let mut input = ScriptedInput::<1>::new(&[KeyCode::ENTER]);
        assert_eq!(menu.edit(&mut wm, &mut input), Ok(Outcome::Cancelled));
    }
}
