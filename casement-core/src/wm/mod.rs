//! Region display manager
//!
//! Windows are rectangular regions of the surface. Opening one saves the
//! cells it covers into the backing store and draws its frame; closing it
//! puts the saved cells back. All drawing goes through the manager so a
//! window's inverse and border flags are applied consistently.

pub mod manager;
pub mod store;

pub use manager::{WindowManager, WindowRecord};
pub use store::{BackingStore, Claim};

/// Success status code
pub const STATUS_OK: u8 = 0;
/// No free window handle
pub const STATUS_NONE_FREE: u8 = 100;
/// Window handle not open
pub const STATUS_NOT_OPEN: u8 = 101;
/// Window handle already in use
pub const STATUS_ALREADY_USED: u8 = 102;

/// Window manager errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowError {
    /// Every handle in the table is in use
    NoFreeSlot,
    /// Handle is out of range, closed, or from an earlier open
    NotOpen,
    /// Backing store has too few bytes left for the region
    OutOfStore,
    /// Close addressed to a window that is not the newest open one
    OutOfOrder,
    /// Region is empty or extends past the screen
    OutOfBounds,
}

impl WindowError {
    /// Numeric status code for callers that track plain codes
    pub fn status_code(self) -> u8 {
        match self {
            WindowError::NoFreeSlot | WindowError::OutOfStore => STATUS_NONE_FREE,
            WindowError::NotOpen => STATUS_NOT_OPEN,
            WindowError::OutOfOrder | WindowError::OutOfBounds => STATUS_ALREADY_USED,
        }
    }
}

/// Opaque reference to an open window
///
/// The generation changes every time a slot is closed, so a handle kept
/// past its window's close is reported as `NotOpen` instead of addressing
/// whichever window reused the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowHandle {
    index: u8,
    generation: u16,
}

impl WindowHandle {
    pub(crate) const fn new(index: u8, generation: u16) -> Self {
        Self { index, generation }
    }

    /// Slot index in the handle table
    pub const fn index(self) -> u8 {
        self.index
    }

    pub(crate) const fn generation(self) -> u16 {
        self.generation
    }
}

/// Slot state reported by `WindowManager::status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowStatus {
    InUse,
    Free,
}

/// Screen region in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

impl Rect {
    pub const fn new(x: u8, y: u8, w: u8, h: u8) -> Self {
        Self { x, y, w, h }
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.w as usize * self.h as usize
    }
}

/// Where `position` places the virtual cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorTarget {
    /// Absolute screen coordinates
    Screen,
    /// Coordinates relative to a window's origin
    Window(WindowHandle),
}

/// Column argument of `print`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Column {
    /// Window-relative column
    At(u8),
    /// Centered across the window width
    Center,
}

/// Border row an ornament sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Top,
    Bottom,
}

/// Horizontal anchor of an ornament
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    Left,
    Right,
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WindowError::NoFreeSlot.status_code(), STATUS_NONE_FREE);
        assert_eq!(WindowError::NotOpen.status_code(), STATUS_NOT_OPEN);
    }

    #[test]
    fn test_rect_area() {
        assert_eq!(Rect::new(0, 0, 10, 3).area(), 30);
    }
}
