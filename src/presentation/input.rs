use crate::application::{App, AppMode, Direction};
use crate::infrastructure::ClipboardService;
use crate::presentation::keypad_cell_at;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.quit();
            return;
        }

        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// Handles a mouse event; a left click on a keypad button presses it.
    pub fn handle_mouse_event(app: &mut App, event: MouseEvent) {
        if app.mode != AppMode::Normal {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            let Some(area) = app.keypad_area else {
                return;
            };
            if let Some((row, col)) = keypad_cell_at(area, event.column, event.row) {
                app.press_cell(row, col);
            }
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => app.move_selection(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => app.move_selection(Direction::Right),
            KeyCode::Enter | KeyCode::Char(' ') => app.press_selected(),
            KeyCode::Char('y') => Self::copy_current(app),
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help_down(1),
            KeyCode::PageUp => app.scroll_help_up(5),
            KeyCode::PageDown => app.scroll_help_down(5),
            KeyCode::Home => app.help_scroll = 0,
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.hide_help()
            }
            _ => {}
        }
    }

    fn copy_current(app: &mut App) {
        match app.clipboard_text().map(str::to_string) {
            Some(text) => {
                let result = ClipboardService::copy(&text);
                app.set_copy_result(&text, result);
            }
            None => app.status_message = Some("Nothing to copy".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn key(app: &mut App, code: KeyCode) {
        InputHandler::handle_key_event(app, code, KeyModifiers::NONE);
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        InputHandler::handle_mouse_event(app, event);
    }

    #[test]
    fn test_digit_keys_are_not_mapped() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('5'));
        key(&mut app, KeyCode::Char('+'));
        assert!(app.calculator.current_operand.is_none());
        assert!(app.calculator.operation.is_none());
    }

    #[test]
    fn test_navigate_and_press() {
        let mut app = App::default();
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.calculator.current_operand.as_deref(), Some("23"));

        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.previous_display(), "23 *");
    }

    #[test]
    fn test_vim_keys_move_selection() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('j'));
        key(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selected, (2, 1));
        key(&mut app, KeyCode::Char('k'));
        key(&mut app, KeyCode::Char('h'));
        assert_eq!(app.selected, (1, 0));
    }

    #[test]
    fn test_mouse_click_presses_button() {
        let mut app = App::default();
        app.keypad_area = Some(Rect::new(0, 0, 22, 12));
        // inner area starts at (1, 1); cells are 5 wide and 2 tall
        click(&mut app, 7, 3);
        assert_eq!(app.calculator.current_operand.as_deref(), Some("2"));
        assert_eq!(app.selected, (1, 1));

        click(&mut app, 18, 5);
        click(&mut app, 2, 4);
        click(&mut app, 20, 10);
        assert_eq!(app.calculator.current_operand.as_deref(), Some("3"));
        assert!(app.calculator.overwrite);
    }

    #[test]
    fn test_mouse_click_outside_keypad_ignored() {
        let mut app = App::default();
        app.keypad_area = Some(Rect::new(0, 0, 22, 12));
        click(&mut app, 40, 40);
        assert_eq!(app.calculator, Default::default());

        let mut unrendered = App::default();
        click(&mut unrendered, 7, 3);
        assert!(unrendered.calculator.current_operand.is_none());
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);

        key(&mut app, KeyCode::PageDown);
        key(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 4);
        key(&mut app, KeyCode::Home);
        assert_eq!(app.help_scroll, 0);

        key(&mut app, KeyCode::Enter);
        assert!(app.calculator.current_operand.is_none());

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        app.show_help();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_copy_with_empty_display() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('y'));
        assert_eq!(app.status_message.as_deref(), Some("Nothing to copy"));
    }
}
