//! The on-screen keypad.
//!
//! The keypad is a fixed grid of cells. A button that is two cells wide
//! simply occupies two adjacent cells with the same label, which keeps
//! hit-testing and rendering on the same geometry.

use crate::domain::{Action, Operation};

pub const KEYPAD_ROWS: usize = 5;
pub const KEYPAD_COLS: usize = 4;

pub const KEYPAD_LAYOUT: [[&str; KEYPAD_COLS]; KEYPAD_ROWS] = [
    ["AC", "AC", "DEL", "÷"],
    ["1", "2", "3", "*"],
    ["4", "5", "6", "+"],
    ["7", "8", "9", "-"],
    [".", "0", "=", "="],
];

/// A direction to move the keypad selection in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A button as drawn on screen: its label, first cell and width in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub row: usize,
    pub col: usize,
    pub span: usize,
}

/// Returns the label of the button covering the given cell.
pub fn label_at(row: usize, col: usize) -> Option<&'static str> {
    KEYPAD_LAYOUT.get(row).and_then(|cells| cells.get(col)).copied()
}

/// Maps a button label to the action it dispatches.
///
/// # Examples
///
/// ```
/// use tcalc::application::button_action;
/// use tcalc::domain::{Action, Operation};
///
/// assert_eq!(button_action("AC"), Some(Action::Clear));
/// assert_eq!(button_action("÷"), Some(Action::choose_operation(Operation::Divide)));
/// assert_eq!(button_action("7"), Some(Action::add_digit('7').unwrap()));
/// assert_eq!(button_action("%"), None);
/// ```
pub fn button_action(label: &str) -> Option<Action> {
    match label {
        "AC" => Some(Action::Clear),
        "DEL" => Some(Action::DeleteDigit),
        "=" => Some(Action::Evaluate),
        _ => {
            if let Ok(operation) = Operation::from_symbol(label) {
                return Some(Action::choose_operation(operation));
            }
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Action::add_digit(c).ok(),
                _ => None,
            }
        }
    }
}

/// Returns the action of the button covering the given cell.
pub fn action_at(row: usize, col: usize) -> Option<Action> {
    label_at(row, col).and_then(button_action)
}

/// Collapses the cell grid into buttons, merging adjacent equal labels.
pub fn buttons() -> Vec<KeypadButton> {
    let mut buttons = Vec::new();
    for (row, cells) in KEYPAD_LAYOUT.iter().enumerate() {
        let mut col = 0;
        while col < KEYPAD_COLS {
            let label = cells[col];
            let span = cells[col..].iter().take_while(|c| **c == label).count();
            buttons.push(KeypadButton { label, row, col, span });
            col += span;
        }
    }
    buttons
}

/// Moves a selected cell one button in `direction`, staying on the grid.
///
/// The result always points at the first cell of a button, so moving right
/// from `AC` lands on `DEL` rather than on the other half of `AC`.
pub fn move_selection(selected: (usize, usize), direction: Direction) -> (usize, usize) {
    let (row, col) = anchor(selected);
    let label = KEYPAD_LAYOUT[row][col];

    let target = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(KEYPAD_ROWS - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => {
            let mut next = col;
            while next < KEYPAD_COLS && KEYPAD_LAYOUT[row][next] == label {
                next += 1;
            }
            (row, next.min(KEYPAD_COLS - 1))
        }
    };

    anchor(target)
}

/// Returns the first cell of the button covering `cell`.
pub fn anchor((row, col): (usize, usize)) -> (usize, usize) {
    let row = row.min(KEYPAD_ROWS - 1);
    let mut col = col.min(KEYPAD_COLS - 1);
    let label = KEYPAD_LAYOUT[row][col];
    while col > 0 && KEYPAD_LAYOUT[row][col - 1] == label {
        col -= 1;
    }
    (row, col)
}
