//! Infrastructure layer providing system integrations.
//!
//! This module contains the clipboard bridge and logging setup.

pub mod clipboard;
pub mod logging;

pub use clipboard::*;
pub use logging::*;
