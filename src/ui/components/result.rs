use crate::app::{AppState, ResultPage};
use crate::copy::{COPIED_MESSAGE, FAILED_MESSAGE};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, state: &AppState, page: &ResultPage, area: Rect) {
    let theme = &state.theme;

    // The active selection is drawn like a highlighted browser selection.
    let password_style = if page.is_password_selected() {
        Style::default().fg(theme.selection_fg).bg(theme.selection_bg)
    } else {
        Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD)
    };

    let button_style = match page.button_label() {
        COPIED_MESSAGE => Style::default().fg(theme.success),
        FAILED_MESSAGE => Style::default().fg(theme.failure),
        _ => Style::default().fg(theme.focused),
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(page.password().to_string(), password_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[ {} ]", page.button_label()), button_style),
            Span::styled("  (c)", Style::default().fg(theme.placeholder)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Your password for {} ", page.domain()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.background));
    f.render_widget(paragraph, area);
}
