//! Application layer managing state and workflows.
//!
//! This module sits between the calculator core and the terminal front end:
//! it owns the session's calculator state, the keypad model, configuration
//! and the headless batch replay.

pub mod state;
pub mod keypad;
pub mod config;
pub mod batch;

pub use state::*;
pub use keypad::*;
pub use config::*;
pub use batch::*;
