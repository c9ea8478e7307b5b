//! Glyph constants
//!
//! Frame glyphs are internal codes because the window manager writes them
//! straight into screen memory. Everything a caller places inside text is a
//! display code.

/// Internal-code frame glyphs
pub mod frame {
    /// Blank cell
    pub const BLANK: u8 = 0;
    /// Horizontal bar
    pub const HBAR: u8 = 82;
    /// Vertical bar
    pub const VBAR: u8 = 124;
    /// Top-left corner
    pub const TOP_LEFT: u8 = 81;
    /// Top-right corner
    pub const TOP_RIGHT: u8 = 69;
    /// Bottom-left corner
    pub const BOTTOM_LEFT: u8 = 90;
    /// Bottom-right corner
    pub const BOTTOM_RIGHT: u8 = 67;
    /// Left edge joining a divider
    pub const TEE_LEFT: u8 = 65;
    /// Right edge joining a divider
    pub const TEE_RIGHT: u8 = 68;
}

/// Space
pub const SPACE: u8 = 32;
/// Left bookend of an ornament (vertical bar with right stub)
pub const BOOKEND_LEFT: u8 = 4;
/// Right bookend of an ornament (vertical bar with left stub)
pub const BOOKEND_RIGHT: u8 = 1;
/// Filled circle, selected radio button
pub const BALL: u8 = 20;
/// Hollow circle, unselected radio button
pub const HOLLOW: u8 = b'o';
/// Inverse right arrow, radio cursor pointer
pub const POINTER: u8 = 159;
/// Inverse space, progress bar cell
pub const INVERSE_SPACE: u8 = 160;
/// Cursor arrow glyphs, kept out of typed text
pub const ARROW_DOWN: u8 = 29;
pub const ARROW_LEFT: u8 = 30;
pub const ARROW_RIGHT: u8 = 31;
