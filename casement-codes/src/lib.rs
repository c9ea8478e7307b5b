//! Key codes and screen encoding for the Casement window manager
//!
//! Everything in this crate is a pure byte transform. Two encodings of the
//! same character set are involved:
//!
//! ```text
//! ┌──────────────┐  to_internal   ┌───────────────┐
//! │ display code │ ─────────────► │ internal code │ ──► screen memory
//! │ (text, keys) │ ◄───────────── │ (glyph index) │
//! └──────────────┘   to_display   └───────────────┘
//! ```
//!
//! Bit 7 of either encoding selects inverse video.
//!
//! Keyboard events arrive as raw key codes; `KeyCode::to_display` maps them
//! to display codes for the text widgets.

#![no_std]
#![deny(unsafe_code)]

pub mod encoding;
pub mod glyphs;
pub mod keys;

pub use encoding::{display_of, internal_of, invert, to_display, to_internal, INVERSE_BIT};
pub use keys::{Arrow, KeyCode};
