//! Window manager and modal widgets for a character-grid display
//!
//! This crate contains everything above the raw key and glyph codes:
//!
//! - Display surface (the character framebuffer)
//! - Region display manager with save/restore backing store
//! - Input source trait and a scripted source for tests
//! - Widgets: buttons, check box, radio group, spinner, list, menu, text
//!   input, progress bar
//! - Stock dialogs built from the widgets
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dialogs;
pub mod input;
pub mod surface;
pub mod widgets;
pub mod wm;

pub use input::{InputSource, ScriptedInput};
pub use surface::Surface;
pub use widgets::Outcome;
pub use wm::{WindowError, WindowHandle, WindowManager};
