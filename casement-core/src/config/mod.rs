//! Configuration types
//!
//! Platform constants and the window manager configuration, which can be
//! stored as postcard binary data when the `serde` feature is enabled.

pub mod types;

pub use types::*;
