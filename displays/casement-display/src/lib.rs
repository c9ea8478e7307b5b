//! Presentation layer for the Casement window manager
//!
//! This crate provides:
//! - `DisplayBackend` trait for whatever shows the character grid (a
//!   character-mode controller, a serial terminal, a bitmap renderer)
//! - `Presenter`, which pushes the rows of a `Surface` that changed since
//!   the last frame
//! - `Screen`, a host-side backend that keeps the presented grid as text
//!   with inverse spans, for logs and tests
//!
//! # Architecture
//!
//! The window manager only ever writes internal codes into its `Surface`.
//! A backend receives whole rows of those codes and is responsible for
//! turning them into pixels, escape sequences or whatever its hardware
//! needs.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod presenter;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use presenter::Presenter;
pub use screen::Screen;
