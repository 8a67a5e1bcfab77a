//! Application state for the terminal calculator.
//!
//! [`App`] owns the single [`CalculatorState`] of the session and the bits
//! of UI state around it (keypad selection, help popup, status line).

use ratatui::layout::Rect;
use tracing::{debug, trace};

use super::keypad::{self, Direction};
use crate::domain::{format_operand, format_previous, reduce, Action, CalculatorState};
use crate::infrastructure::ClipboardError;

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Keypad is active
    Normal,
    /// Help popup is displayed
    Help,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use tcalc::application::App;
/// use tcalc::domain::Action;
///
/// let mut app = App::default();
/// app.dispatch(Action::add_digit('4').unwrap());
/// app.dispatch(Action::add_digit('2').unwrap());
/// assert_eq!(app.current_display(), "42");
/// ```
#[derive(Debug)]
pub struct App {
    /// The calculator core state, replaced on every dispatch
    pub calculator: CalculatorState,
    /// Selected keypad cell (row, col), always the first cell of a button
    pub selected: (usize, usize),
    /// Current application mode
    pub mode: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Screen area the keypad was last drawn into, used for mouse hit-testing
    pub keypad_area: Option<Rect>,
    /// Set when the user asked to leave
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            calculator: CalculatorState::default(),
            selected: (1, 0),
            mode: AppMode::Normal,
            help_scroll: 0,
            status_message: None,
            keypad_area: None,
            should_quit: false,
        }
    }
}

impl App {
    /// Feeds one action into the calculator core.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(self.calculator.clone(), action);
        if next == self.calculator {
            trace!(action = action.type_name(), "action absorbed");
        } else {
            debug!(action = action.type_name(), state = ?next, "state changed");
        }
        self.calculator = next;
    }

    /// Presses the currently selected keypad button.
    pub fn press_selected(&mut self) {
        let (row, col) = self.selected;
        self.press_cell(row, col);
    }

    /// Selects and presses the button covering a keypad cell.
    pub fn press_cell(&mut self, row: usize, col: usize) {
        let Some(action) = keypad::action_at(row, col) else {
            return;
        };
        self.selected = keypad::anchor((row, col));
        self.status_message = None;
        self.dispatch(action);
    }

    pub fn move_selection(&mut self, direction: Direction) {
        self.selected = keypad::move_selection(self.selected, direction);
    }

    /// Label of the selected keypad button.
    pub fn selected_label(&self) -> &'static str {
        let (row, col) = self.selected;
        keypad::label_at(row, col).unwrap_or_default()
    }

    /// The formatted current operand, or an empty string when absent.
    pub fn current_display(&self) -> String {
        format_operand(self.calculator.current_operand.as_deref()).unwrap_or_default()
    }

    /// The formatted previous operand followed by the pending operator.
    pub fn previous_display(&self) -> String {
        format_previous(&self.calculator)
    }

    /// Raw text copied to the clipboard: the current operand as stored.
    pub fn clipboard_text(&self) -> Option<&str> {
        self.calculator
            .current_operand
            .as_deref()
            .filter(|operand| !operand.is_empty())
    }

    /// Records the outcome of copying `text` in the status line.
    pub fn set_copy_result(&mut self, text: &str, result: Result<(), ClipboardError>) {
        self.status_message = Some(match result {
            Ok(()) => format!("Copied {}", text),
            Err(error) => format!("Copy failed: {}", error),
        });
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn hide_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn scroll_help_up(&mut self, lines: usize) {
        self.help_scroll = self.help_scroll.saturating_sub(lines);
    }

    pub fn scroll_help_down(&mut self, lines: usize) {
        self.help_scroll = self.help_scroll.saturating_add(lines);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operation;

    fn press(app: &mut App, label: &str) {
        let (row, col) = keypad::buttons()
            .into_iter()
            .find(|b| b.label == label)
            .map(|b| (b.row, b.col))
            .unwrap();
        app.press_cell(row, col);
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.calculator, CalculatorState::default());
        assert_eq!(app.selected, (1, 0));
        assert_eq!(app.selected_label(), "1");
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.status_message.is_none());
        assert!(app.keypad_area.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.current_display(), "");
        assert_eq!(app.previous_display(), "");
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let mut app = App::default();
        app.dispatch(Action::add_digit('9').unwrap());
        app.dispatch(Action::choose_operation(Operation::Subtract));
        assert_eq!(app.calculator.previous_operand.as_deref(), Some("9"));
        assert_eq!(app.previous_display(), "9 -");
        assert_eq!(app.current_display(), "");
    }

    #[test]
    fn test_pressing_buttons_runs_calculation() {
        let mut app = App::default();
        for label in ["1", "2", "0", "0", "*", "3", "="] {
            press(&mut app, label);
        }
        assert_eq!(app.calculator.current_operand.as_deref(), Some("3600"));
        assert_eq!(app.current_display(), "3,600");
        assert_eq!(app.selected_label(), "=");
    }

    #[test]
    fn test_press_wide_button_second_cell() {
        let mut app = App::default();
        press(&mut app, "5");
        app.press_cell(0, 1);
        assert_eq!(app.calculator.current_operand.as_deref(), Some("0"));
        assert_eq!(app.selected, (0, 0));
    }

    #[test]
    fn test_press_selected_after_moving() {
        let mut app = App::default();
        app.move_selection(Direction::Right);
        app.press_selected();
        assert_eq!(app.calculator.current_operand.as_deref(), Some("2"));
    }

    #[test]
    fn test_press_clears_status_message() {
        let mut app = App::default();
        app.set_copy_result("12", Err(ClipboardError::Unavailable("no display".to_string())));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Copy failed: Failed to access clipboard: no display")
        );
        press(&mut app, "7");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_copy_result_messages() {
        let mut app = App::default();
        app.set_copy_result("1234.", Ok(()));
        assert_eq!(app.status_message.as_deref(), Some("Copied 1234."));

        app.set_copy_result("1234.", Err(ClipboardError::Write("denied".to_string())));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Copy failed: Failed to copy to clipboard: denied")
        );
    }

    #[test]
    fn test_clipboard_text_uses_raw_operand() {
        let mut app = App::default();
        assert_eq!(app.clipboard_text(), None);
        for label in ["1", "2", "3", "4", "."] {
            press(&mut app, label);
        }
        assert_eq!(app.clipboard_text(), Some("1234."));
        assert_eq!(app.current_display(), "1,234.");
    }

    #[test]
    fn test_help_mode_toggle() {
        let mut app = App::default();
        app.show_help();
        app.scroll_help_down(3);
        app.scroll_help_up(5);
        assert_eq!(app.mode, AppMode::Help);
        assert_eq!(app.help_scroll, 0);
        app.hide_help();
        assert_eq!(app.mode, AppMode::Normal);
    }
}
