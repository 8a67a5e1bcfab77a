use crate::application::{self, App, AppMode, KEYPAD_COLS, KEYPAD_ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 40;

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let area = centered_column(f.area(), MAX_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(KEYPAD_ROWS as u16 + 2),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_display(f, app, chunks[1]);
    render_keypad(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header =
        Paragraph::new("tcalc - Terminal Calculator").style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_display(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(app.previous_display()).style(Style::default().fg(Color::Gray)),
        Line::from(app.current_display())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ];
    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(display, area);
}

fn render_keypad(f: &mut Frame, app: &mut App, area: Rect) {
    app.keypad_area = Some(area);

    let block = Block::default().borders(Borders::ALL).title("Keypad");
    let inner = block.inner(area);
    f.render_widget(block, area);

    for button in application::buttons() {
        let Some(rect) = button_rect(inner, button.row, button.col, button.span) else {
            continue;
        };

        let style = if (button.row, button.col) == app.selected {
            Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD)
        } else if button.label.chars().all(|c| c.is_ascii_digit() || c == '.') {
            Style::default()
        } else {
            Style::default().fg(Color::Yellow)
        };

        let widget = Paragraph::new(button.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(if rect.height >= 3 {
                Block::default().borders(Borders::ALL)
            } else {
                Block::default()
            });
        f.render_widget(widget, rect);
    }
}

/// Screen rectangle of a button inside the keypad's inner area.
fn button_rect(inner: Rect, row: usize, col: usize, span: usize) -> Option<Rect> {
    let cell_width = inner.width / KEYPAD_COLS as u16;
    let cell_height = inner.height / KEYPAD_ROWS as u16;
    if cell_width == 0 || cell_height == 0 {
        return None;
    }

    Some(Rect {
        x: inner.x + col as u16 * cell_width,
        y: inner.y + row as u16 * cell_height,
        width: cell_width * span as u16,
        height: cell_height,
    })
}

/// Maps a terminal position to the keypad cell drawn there, if any.
///
/// `area` is the full keypad area including its border, as recorded in
/// [`App::keypad_area`].
pub fn keypad_cell_at(area: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let cell_width = inner.width / KEYPAD_COLS as u16;
    let cell_height = inner.height / KEYPAD_ROWS as u16;
    if cell_width == 0 || cell_height == 0 || !inner.contains(Position::new(column, row)) {
        return None;
    }

    let col = ((column - inner.x) / cell_width) as usize;
    let row = ((row - inner.y) / cell_height) as usize;
    (row < KEYPAD_ROWS && col < KEYPAD_COLS).then_some((row, col))
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => app.status_message.clone().unwrap_or_else(|| {
            "←↑↓→: select | Enter: press | y: copy | ?: help | q: quit".to_string()
        }),
        AppMode::Help => "↑↓/jk: scroll | Esc/q/?: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("tcalc Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"TCALC KEYPAD REFERENCE

=== BUTTONS ===
0-9 .       Append to the current number (one decimal point at most)
+ - * ÷     Choose the operator; a pending pair is evaluated first
=           Evaluate the pending expression
AC          Clear everything (display shows 0)
DEL         Remove the last digit, or discard a just-computed result

=== EVALUATION ===
Expressions are evaluated strictly left to right:
5 + 3 * 2 = 16, not 11.
Dividing by zero shows Infinity (or NaN for 0 ÷ 0).
Typing a digit right after = starts a new number.

=== CONTROLS ===
Mouse click     Press a button
Arrow keys/hjkl Move the selection
Enter/Space     Press the selected button
y               Copy the current number to the clipboard
? or F1         Show this help
q/Esc/Ctrl+C    Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll one line
Page Up/Down    Scroll five lines
Home            Jump to top
Esc/F1/?/q      Close this help window"#;
