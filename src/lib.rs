//! TCALC - Terminal Calculator Library
//!
//! The core of a basic four-function calculator: a pure state reducer, an
//! evaluator and an operand formatter, plus the terminal front end that
//! drives them.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
