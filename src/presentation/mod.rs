//! Presentation layer handling the terminal UI and user input.
//!
//! This module renders the calculator with ratatui and turns keypad presses
//! (mouse clicks or the selected button) into calculator actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
