//! Platform constants and manager configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Screen width in character cells
pub const SCREEN_COLS: usize = 40;

/// Screen height in character cells
pub const SCREEN_ROWS: usize = 24;

/// Window handle table capacity
pub const MAX_WINDOWS: usize = 11;

/// Backing store capacity in bytes
///
/// Enough to save a full-screen window plus a handful of dialogs.
pub const STORE_SIZE: usize = 2068;

/// Largest value a spinner may hold
pub const SPIN_MAX: u8 = 250;

/// Longest string the text input can edit
pub const MAX_INPUT_LEN: usize = 128;

/// Longest line any render operation writes
pub const MAX_LINE_LEN: usize = SCREEN_COLS;

/// How the backing store treats a close that is not the newest window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloseOrder {
    /// Only the most recently opened window may be closed
    #[default]
    Lifo,
    /// Any window may be closed; the store cursor still moves back by the
    /// closed window's size, so later opens can overwrite saved content
    /// of windows that remain open
    Unchecked,
}

/// Window manager configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ManagerConfig {
    /// Close ordering policy
    pub close_order: CloseOrder,
    /// Display-code glyph the screen is filled with at initialization
    pub background: u8,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            close_order: CloseOrder::Lifo,
            background: b' ',
        }
    }
}

/// Configuration encode/decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Stored bytes are not a valid configuration
    Deserialize,
    /// Output buffer too small
    BufferTooSmall,
}

#[cfg(feature = "serde")]
impl ManagerConfig {
    /// Decode a configuration from postcard bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }

    /// Encode this configuration as postcard bytes into `buffer`
    pub fn to_slice<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buffer).map_err(|_| ConfigError::BufferTooSmall)
    }
}
