//! Scrollable list
//!
//! Shows `page` items starting at `top`. The highlight moves within the
//! page and the page scrolls only when the highlight would leave it.
//! Movement clamps at both ends of the list; it never wraps.

use casement_codes::KeyCode;

use super::{advance, commit_item, exit_key, Nav, Outcome};
use crate::config::MAX_LINE_LEN;
use crate::input::InputSource;
use crate::wm::{Column, WindowError, WindowHandle, WindowManager};

/// Paged item list
#[derive(Debug, Clone)]
pub struct ListBox<'a> {
    window: WindowHandle,
    x: u8,
    y: u8,
    items: &'a [&'a [u8]],
    page: usize,
    /// Index of the first visible item
    top: usize,
    /// Index of the highlighted item
    selected: usize,
}

impl<'a> ListBox<'a> {
    /// List showing `page` rows with item `start` highlighted and visible
    pub fn new(
        window: WindowHandle,
        x: u8,
        y: u8,
        items: &'a [&'a [u8]],
        page: usize,
        start: usize,
    ) -> Self {
        let mut list = Self {
            window,
            x,
            y,
            items,
            page: page.max(1),
            top: 0,
            selected: 0,
        };
        list.select(start);
        list
    }

    /// Highlighted item index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// First visible item index
    pub fn top(&self) -> usize {
        self.top
    }

    /// Highlight item `index` and scroll it into view
    pub fn select(&mut self, index: usize) {
        let count = self.items.len();
        self.selected = index.min(count.saturating_sub(1));
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + self.page {
            self.top = self.selected + 1 - self.page;
        }
        self.top = self.top.min(self.max_top());
    }

    /// Draw the visible page without highlight
    pub fn display(&self, wm: &mut WindowManager) -> Result<(), WindowError> {
        self.render(wm, None)
    }

    /// Browse the list until Enter, Tab or Escape
    ///
    /// Ctrl-Shift-S and Ctrl-Shift-E jump to the first and last item.
    /// Enter commits the highlighted item's index.
    pub fn edit<I: InputSource>(
        &mut self,
        wm: &mut WindowManager,
        input: &mut I,
    ) -> Result<Outcome<usize>, WindowError> {
        loop {
            self.render(wm, Some(self.selected))?;

            let key = input.next_key();
            match Nav::from_key(key) {
                Some(Nav::Next) => self.step_down(),
                Some(Nav::Prev) => self.step_up(),
                None if key == KeyCode::LINE_START => {
                    self.top = 0;
                    self.selected = 0;
                }
                None if key == KeyCode::LINE_END => {
                    self.top = self.max_top();
                    self.selected = self.items.len().saturating_sub(1);
                }
                None => {}
            }
            match exit_key(key) {
                Some(Outcome::Committed(())) => {
                    return Ok(commit_item(self.selected, self.items.len()));
                }
                Some(Outcome::Cancelled) => return Ok(Outcome::Cancelled),
                Some(Outcome::TabExit) => return Ok(Outcome::TabExit),
                None => {}
            }
        }
    }

    fn max_top(&self) -> usize {
        self.items.len().saturating_sub(self.page)
    }

    fn step_down(&mut self) {
        if self.selected + 1 >= self.items.len() {
            return;
        }
        self.selected += 1;
        if self.selected >= self.top + self.page {
            self.top += 1;
        }
    }

    fn step_up(&mut self) {
        if self.selected == 0 {
            return;
        }
        self.selected -= 1;
        if self.selected < self.top {
            self.top = self.selected;
        }
    }

    fn render(&self, wm: &mut WindowManager, highlight: Option<usize>) -> Result<(), WindowError> {
        // Pad every row to the widest item so scrolling leaves no residue
        let widest = self
            .items
            .iter()
            .map(|item| item.len())
            .max()
            .unwrap_or(0)
            .min(MAX_LINE_LEN);

        let end = (self.top + self.page).min(self.items.len());
        for (row, index) in (self.top..end).enumerate() {
            let item = self.items[index];
            let len = item.len().min(widest);
            let mut line = [b' '; MAX_LINE_LEN];
            line[..len].copy_from_slice(&item[..len]);

            wm.print(
                self.window,
                Column::At(self.x),
                advance(self.y, row, 0),
                highlight == Some(index),
                &line[..widest],
            )?;
        }
        Ok(())
    }
}
