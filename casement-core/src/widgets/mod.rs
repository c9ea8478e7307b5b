//! Interactive widgets
//!
//! Every widget draws through the window manager and reads keys from an
//! `InputSource`. Each one has two entry points:
//!
//! - `display` renders the current state once and returns without reading
//!   input
//! - `edit` loops render → read one key → update until Enter, Escape or
//!   Tab ends it
//!
//! Enter commits, Escape cancels and Tab leaves the widget so the caller
//! can move focus.

pub mod button;
pub mod check;
pub mod editor;
pub mod filter;
pub mod list;
pub mod menu;
pub mod progress;
pub mod radio;
pub mod spin;

pub use button::ButtonBar;
pub use check::Checkbox;
pub use editor::{EditStep, LineEditor, TextInput};
pub use filter::CharClass;
pub use list::ListBox;
pub use menu::Menu;
pub use progress::ProgressBar;
pub use radio::RadioGroup;
pub use spin::Spinner;

use casement_codes::{Arrow, KeyCode};

/// How an edit loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome<T> {
    /// Enter pressed; carries the accepted value
    Committed(T),
    /// Escape pressed
    Cancelled,
    /// Tab pressed
    TabExit,
}

impl<T> Outcome<T> {
    /// Committed value, if any
    pub fn committed(self) -> Option<T> {
        match self {
            Outcome::Committed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn is_tab(&self) -> bool {
        matches!(self, Outcome::TabExit)
    }
}

/// Item placement of multi-item widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layout {
    /// Items side by side on one row
    Horizontal,
    /// One item per row
    #[default]
    Vertical,
}

/// Selection move requested by a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nav {
    Prev,
    Next,
}

impl Nav {
    /// Left and up step back, right and down step forward
    pub(crate) fn from_key(key: KeyCode) -> Option<Self> {
        match key.arrow()? {
            Arrow::Left | Arrow::Up => Some(Nav::Prev),
            Arrow::Right | Arrow::Down => Some(Nav::Next),
        }
    }

    /// Apply to `index` in `0..count`, wrapping at both ends
    pub(crate) fn wrap(self, index: usize, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        match self {
            Nav::Prev if index == 0 => count - 1,
            Nav::Prev => index - 1,
            Nav::Next if index + 1 >= count => 0,
            Nav::Next => index + 1,
        }
    }
}

/// Terminating key of an edit loop
pub(crate) fn exit_key(key: KeyCode) -> Option<Outcome<()>> {
    if key.is_enter() {
        Some(Outcome::Committed(()))
    } else if key.is_escape() {
        Some(Outcome::Cancelled)
    } else if key.is_tab() {
        Some(Outcome::TabExit)
    } else {
        None
    }
}

/// Enter on item `index` of `count`; an empty list has nothing to commit
pub(crate) fn commit_item(index: usize, count: usize) -> Outcome<usize> {
    if count == 0 {
        Outcome::Cancelled
    } else {
        Outcome::Committed(index)
    }
}

/// Step a coordinate past `len` cells and a `gap`, saturating at `u8::MAX`
pub(crate) fn advance(pos: u8, len: usize, gap: u8) -> u8 {
    let len = u8::try_from(len).unwrap_or(u8::MAX);
    pos.saturating_add(len).saturating_add(gap)
}
