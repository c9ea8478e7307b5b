//! Single-line text editor
//!
//! `LineEditor` is the pure state machine: a fixed-length buffer, an edit
//! cursor and a viewport origin. `TextInput` draws it through the window
//! manager and feeds it keys.
//!
//! The buffer length never changes. Typing overwrites the cell under the
//! cursor and moves right; deletes blank cells rather than shrinking.
//! After every key:
//!
//! - `cursor <= len - 1`
//! - `offset <= cursor < offset + width`

use casement_codes::{KeyCode, INVERSE_BIT};
use heapless::Vec;

use super::{CharClass, Outcome};
use crate::config::{MAX_INPUT_LEN, MAX_LINE_LEN};
use crate::input::InputSource;
use crate::wm::{Column, WindowError, WindowHandle, WindowManager};

/// Result of feeding one key to a `LineEditor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditStep {
    /// Keep editing
    Continue,
    /// Enter: keep the buffer
    Commit,
    /// Escape: drop the edits
    Cancel,
    /// Tab: drop the edits and move on
    Tab,
}

/// Fixed-length edit buffer with cursor and viewport
#[derive(Debug, Clone)]
pub struct LineEditor {
    buf: Vec<u8, MAX_INPUT_LEN>,
    cursor: usize,
    offset: usize,
    width: usize,
    class: CharClass,
}

impl LineEditor {
    /// Start editing a copy of `text` shown `width` cells wide
    ///
    /// Only the first `MAX_INPUT_LEN` bytes are taken.
    pub fn new(text: &[u8], width: usize, class: CharClass) -> Self {
        let len = text.len().min(MAX_INPUT_LEN);
        let mut buf = Vec::new();
        // Cannot fail, len is within capacity
        let _ = buf.extend_from_slice(&text[..len]);
        Self {
            buf,
            cursor: 0,
            offset: 0,
            width: width.max(1),
            class,
        }
    }

    /// Working buffer
    pub fn text(&self) -> &[u8] {
        &self.buf
    }

    /// Edit position within the buffer
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Buffer index of the first visible cell
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The slice currently on screen
    pub fn visible(&self) -> &[u8] {
        let end = (self.offset + self.width).min(self.buf.len());
        &self.buf[self.offset.min(end)..end]
    }

    /// Apply one key
    pub fn apply(&mut self, key: KeyCode) -> EditStep {
        if key.is_enter() {
            return EditStep::Commit;
        }
        if key.is_escape() {
            return EditStep::Cancel;
        }
        if key.is_tab() {
            return EditStep::Tab;
        }

        let len = self.buf.len();
        if len == 0 {
            return EditStep::Continue;
        }

        match key {
            KeyCode::RIGHT => self.cursor += 1,
            KeyCode::LEFT => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::LINE_START => self.cursor = 0,
            KeyCode::LINE_END => self.cursor = len - 1,
            KeyCode::DELETE => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buf[self.cursor] = b' ';
                }
            }
            KeyCode::DELETE_SHIFT => self.buf.fill(b' '),
            KeyCode::DELETE_CTRL => {
                self.buf.copy_within(self.cursor + 1..len, self.cursor);
                self.buf[len - 1] = b' ';
            }
            // Blanks the cell under the cursor; nothing shifts
            KeyCode::INSERT => self.buf[self.cursor] = b' ',
            _ => {
                if let Some(c) = key
                    .to_display()
                    .filter(|c| (1..=191).contains(c))
                    .and_then(|c| self.class.admit(c))
                {
                    self.buf[self.cursor] = c;
                    self.cursor += 1;
                }
            }
        }

        self.settle();
        EditStep::Continue
    }

    /// Clamp the cursor into the buffer and scroll it into view
    fn settle(&mut self) {
        self.cursor = self.cursor.min(self.buf.len().saturating_sub(1));
        self.offset = if self.cursor >= self.width {
            self.cursor - self.width + 1
        } else {
            0
        };
    }
}

/// Text field bound to a window position
#[derive(Debug, Clone)]
pub struct TextInput {
    window: WindowHandle,
    x: u8,
    y: u8,
    width: u8,
    class: CharClass,
}

impl TextInput {
    pub fn new(window: WindowHandle, x: u8, y: u8, width: u8, class: CharClass) -> Self {
        Self {
            window,
            x,
            y,
            width: width.clamp(1, MAX_LINE_LEN as u8),
            class,
        }
    }

    /// Draw the start of `text`
    pub fn display(&self, wm: &mut WindowManager, text: &[u8]) -> Result<(), WindowError> {
        let end = text.len().min(self.width as usize);
        wm.print(self.window, Column::At(self.x), self.y, false, &text[..end])
    }

    /// Edit `text` in place
    ///
    /// The field is drawn inverted with the cursor cell plain. Enter writes
    /// the edits back; Escape and Tab leave `text` untouched.
    pub fn edit<I: InputSource>(
        &self,
        wm: &mut WindowManager,
        input: &mut I,
        text: &mut [u8],
    ) -> Result<Outcome<()>, WindowError> {
        let mut editor = LineEditor::new(text, self.width as usize, self.class);

        let outcome = loop {
            self.render(wm, &editor)?;

            match editor.apply(input.next_key()) {
                EditStep::Continue => {}
                EditStep::Commit => {
                    let len = editor.text().len();
                    text[..len].copy_from_slice(editor.text());
                    break Outcome::Committed(());
                }
                EditStep::Cancel => break Outcome::Cancelled,
                EditStep::Tab => break Outcome::TabExit,
            }
        };

        self.display(wm, text)?;
        Ok(outcome)
    }

    fn render(&self, wm: &mut WindowManager, editor: &LineEditor) -> Result<(), WindowError> {
        let visible = editor.visible();
        let mut line = [0u8; MAX_LINE_LEN];
        let line = &mut line[..visible.len()];
        line.copy_from_slice(visible);

        if !line.is_empty() {
            let at = (editor.cursor() - editor.offset()).min(line.len() - 1);
            line[at] ^= INVERSE_BIT;
        }
        wm.print(self.window, Column::At(self.x), self.y, true, line)
    }
}
