//! Stock dialogs
//!
//! Small modal windows built from the manager and the widgets. Each one
//! opens its own window and closes it again before returning, so it can be
//! used on top of whatever the caller has open.

use casement_codes::KeyCode;

use crate::config::SCREEN_COLS;
use crate::input::InputSource;
use crate::widgets::{ButtonBar, Outcome};
use crate::wm::{Align, Column, Edge, Rect, WindowError, WindowHandle, WindowManager};

/// Widest message a dialog frame can hold
const MAX_MESSAGE: usize = SCREEN_COLS - 2;

/// Title shown on an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertKind {
    Alert,
    Info,
    Warning,
    Error,
}

impl AlertKind {
    fn title(self) -> &'static [u8] {
        match self {
            AlertKind::Alert => b" Alert! ",
            AlertKind::Info => b" Info ",
            AlertKind::Warning => b" Warning! ",
            AlertKind::Error => b" Error! ",
        }
    }
}

/// Answer chosen in a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Answer {
    Yes,
    No,
}

/// Rect of a centred dialog holding `len` message cells, at least `min`
fn centered(len: usize, min: usize, y: u8, h: u8) -> Rect {
    let w = len.clamp(min, MAX_MESSAGE);
    Rect::new(((MAX_MESSAGE - w) / 2) as u8, y, w as u8 + 2, h)
}

/// Show a message with an OK marker and wait for any key
pub fn alert<I: InputSource>(
    wm: &mut WindowManager,
    input: &mut I,
    kind: AlertKind,
    message: &[u8],
) -> Result<(), WindowError> {
    let win = wm.open(centered(message.len(), 12, 10, 5), false, true)?;

    let shown = draw_alert(wm, win, kind, message);
    if shown.is_ok() {
        input.next_key();
    }
    wm.close(win)?;
    shown
}

fn draw_alert(
    wm: &mut WindowManager,
    win: WindowHandle,
    kind: AlertKind,
    message: &[u8],
) -> Result<(), WindowError> {
    wm.ornament(win, Edge::Top, Align::Center, kind.title())?;
    wm.print(win, Column::Center, 1, false, message)?;
    wm.print(win, Column::Center, 3, true, b" OK ")
}

/// Ask the user to confirm `message` with Yes / No buttons
///
/// The window is closed before returning, whatever the outcome.
pub fn confirm<I: InputSource>(
    wm: &mut WindowManager,
    input: &mut I,
    message: &[u8],
) -> Result<Outcome<Answer>, WindowError> {
    let rect = centered(message.len(), 14, 8, 8);
    let win = wm.open(rect, false, true)?;

    let chosen = ask(wm, input, win, rect, message);
    wm.close(win)?;

    Ok(match chosen? {
        Outcome::Committed(0) => Outcome::Committed(Answer::Yes),
        Outcome::Committed(_) => Outcome::Committed(Answer::No),
        Outcome::Cancelled => Outcome::Cancelled,
        Outcome::TabExit => Outcome::TabExit,
    })
}

fn ask<I: InputSource>(
    wm: &mut WindowManager,
    input: &mut I,
    win: WindowHandle,
    rect: Rect,
    message: &[u8],
) -> Result<Outcome<usize>, WindowError> {
    const BUTTONS: [&[u8]; 2] = [b"[ Yes ]", b"[ No ]"];

    wm.ornament(win, Edge::Top, Align::Center, b" Confirm ")?;
    wm.print(win, Column::Center, 2, false, message)?;
    wm.print(win, Column::At(1), 4, false, b"Are you sure?")?;
    // Buttons end against the right frame
    let x = rect.w.saturating_sub(14);
    ButtonBar::new(win, x, 6, &BUTTONS, 0).edit(wm, input)
}

/// A presized one-line status box
///
/// Opened over the middle of the screen; close it before closing anything
/// opened earlier.
#[derive(Debug)]
pub struct StatusWindow {
    window: WindowHandle,
}

impl StatusWindow {
    /// Open the box and show `message`, cut to 28 cells
    pub fn open(wm: &mut WindowManager, message: &[u8]) -> Result<Self, WindowError> {
        let window = wm.open(Rect::new(5, 10, 30, 3), false, true)?;
        let status = Self { window };
        if let Err(e) = status.update(wm, message) {
            wm.close(window)?;
            return Err(e);
        }
        Ok(status)
    }

    /// Replace the message
    pub fn update(&self, wm: &mut WindowManager, message: &[u8]) -> Result<(), WindowError> {
        wm.clear(self.window)?;
        wm.print(self.window, Column::Center, 1, false, message)
    }

    pub fn handle(&self) -> WindowHandle {
        self.window
    }

    /// Close the box, restoring what it covered
    pub fn close(self, wm: &mut WindowManager) -> Result<(), WindowError> {
        wm.close(self.window)
    }
}

/// Block until Y or N is pressed
///
/// Either case counts. Escape answers no so a closed input never hangs.
pub fn wait_yes_no<I: InputSource>(input: &mut I) -> bool {
    loop {
        match input.next_key() {
            KeyCode::KEY_Y | KeyCode::KEY_Y_SHIFT => return true,
            KeyCode::KEY_N | KeyCode::KEY_N_SHIFT | KeyCode::ESC => return false,
            _ => {}
        }
    }
}

/// `wait_yes_no`, then write the answer as `Y` or `N` at the cursor
pub fn wait_yes_no_echo<I: InputSource>(
    wm: &mut WindowManager,
    window: WindowHandle,
    input: &mut I,
) -> Result<bool, WindowError> {
    let yes = wait_yes_no(input);
    wm.put(window, if yes { b'Y' } else { b'N' })?;
    Ok(yes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManagerConfig;
    use crate::input::ScriptedInput;
    use crate::wm::CursorTarget;
    use casement_codes::{internal_of, INVERSE_BIT};

    #[test]
    fn test_alert_restores_screen() {
        let mut wm = WindowManager::new(ManagerConfig::default());
        wm.background(b'.');
        let before = wm.surface().clone();

        let mut input = ScriptedInput::<2>::new(&[KeyCode::SPACE]);
        alert(&mut wm, &mut input, AlertKind::Info, b"Saved").unwrap();

        assert_eq!(input.remaining(), 0);
        assert_eq!(wm.surface().cells(), before.cells());
        assert_eq!(wm.open_count(), 0);
    }

    #[test]
    fn test_alert_geometry() {
        assert_eq!(centered(5, 12, 10, 5), Rect::new(13, 10, 14, 5));
        assert_eq!(centered(60, 12, 10, 5), Rect::new(0, 10, 40, 5));
    }

    #[test]
    fn test_confirm_yes() {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let mut input = ScriptedInput::<2>::new(&[KeyCode::ENTER]);
        assert_eq!(
            confirm(&mut wm, &mut input, b"Delete file?"),
            Ok(Outcome::Committed(Answer::Yes))
        );
        assert_eq!(wm.open_count(), 0);
    }

    #[test]
    fn test_confirm_no_and_escape() {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let mut input = ScriptedInput::<2>::new(&[KeyCode::RIGHT, KeyCode::ENTER]);
        assert_eq!(
            confirm(&mut wm, &mut input, b"Quit?"),
            Ok(Outcome::Committed(Answer::No))
        );

        let mut input = ScriptedInput::<1>::new(&[]);
        assert_eq!(confirm(&mut wm, &mut input, b"Quit?"), Ok(Outcome::Cancelled));
        assert_eq!(wm.store_used(), 0);
    }

    #[test]
    fn test_confirm_when_table_full() {
        let mut wm = WindowManager::new(ManagerConfig::default());
        for _ in 0..crate::config::MAX_WINDOWS {
            wm.open(Rect::new(0, 0, 2, 2), false, false).unwrap();
        }
        let mut input = ScriptedInput::<1>::new(&[]);
        assert_eq!(
            confirm(&mut wm, &mut input, b"Quit?"),
            Err(WindowError::NoFreeSlot)
        );
    }

    #[test]
    fn test_status_window() {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let status = StatusWindow::open(&mut wm, b"Working").unwrap();
        // "Working" centred in a 30-wide box at x=5
        assert_eq!(wm.surface().cell(16, 11), Some(internal_of(b'W')));

        status.update(&mut wm, b"Done").unwrap();
        assert_eq!(wm.surface().cell(16, 11), Some(internal_of(b' ')));
        assert_eq!(wm.surface().cell(18, 11), Some(internal_of(b'D')));

        status.close(&mut wm).unwrap();
        assert_eq!(wm.open_count(), 0);
    }

    #[test]
    fn test_alert_ok_marker_inverse() {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let win = wm.open(centered(5, 12, 10, 5), false, true).unwrap();
        draw_alert(&mut wm, win, AlertKind::Error, b"Oops!").unwrap();
        // " OK " centred in the 14-wide window at x=13
        assert_eq!(wm.surface().cell(19, 13), Some(internal_of(b'O') | INVERSE_BIT));
    }

    #[test]
    fn test_wait_yes_no() {
        let mut input = ScriptedInput::<4>::new(&[KeyCode::SPACE, KeyCode::KEY_Y_SHIFT]);
        assert!(wait_yes_no(&mut input));
        let mut input = ScriptedInput::<4>::new(&[KeyCode::ENTER, KeyCode::KEY_N]);
        assert!(!wait_yes_no(&mut input));
        let mut input = ScriptedInput::<1>::new(&[]);
        assert!(!wait_yes_no(&mut input));
    }

    #[test]
    fn test_wait_yes_no_echo() {
        let mut wm = WindowManager::new(ManagerConfig::default());
        let win = wm.open(Rect::new(2, 2, 20, 3), false, true).unwrap();
        wm.print(win, Column::At(1), 1, false, b"Quit?").unwrap();
        wm.position(CursorTarget::Window(win), 7, 1).unwrap();

        let mut input = ScriptedInput::<2>::new(&[KeyCode::KEY_Y]);
        assert_eq!(wait_yes_no_echo(&mut wm, win, &mut input), Ok(true));
        assert_eq!(wm.surface().cell(9, 3), Some(internal_of(b'Y')));

        let mut input = ScriptedInput::<1>::new(&[]);
        assert_eq!(wait_yes_no_echo(&mut wm, win, &mut input), Ok(false));
        assert_eq!(wm.surface().cell(10, 3), Some(internal_of(b'N')));
    }
}
