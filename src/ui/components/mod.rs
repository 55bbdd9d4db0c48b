pub mod form;
pub mod result;
pub mod status_bar;

use crate::app::{AppState, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Form or result
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    match (state.mode, &state.result) {
        (Mode::Result, Some(page)) => result::render(f, state, page, chunks[0]),
        _ => form::render(f, state, chunks[0]),
    }

    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    gopass Help

    Form:
      Tab / ↓               Next field
      Shift+Tab / ↑         Previous field
      ←/→ Home/End          Move cursor
      Backspace             Delete character
      Space                 Toggle special characters
      Enter                 Generate password
      Esc                   Quit

    Result:
      c or y                Copy password to clipboard
      e or Esc              Back to the form
      ?                     Toggle help
      q                     Quit

    Ctrl+C quits from anywhere.
    "#;

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
