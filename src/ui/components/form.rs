use crate::app::{AppState, FormField, Mode};
use crate::utils::unicode::{display_width, mask};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LABEL_WIDTH: usize = 26;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let form = &state.form;
    let theme = &state.theme;
    let mut lines = Vec::with_capacity(FormField::ALL.len() * 2);
    let mut cursor = None;

    for (row, field) in FormField::ALL.iter().enumerate() {
        let is_focused = *field == form.focused && state.mode == Mode::Form;
        let label_style = if is_focused {
            Style::default().fg(theme.focused).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        let label = format!("{:<width$}", format!("{field}:"), width = LABEL_WIDTH);

        let value_span = match form.value(*field) {
            Some(value) => {
                let shown = if field.is_masked() {
                    mask(value)
                } else {
                    value.to_string()
                };

                if is_focused {
                    let before = &value[..form.cursor_pos.min(value.len())];
                    let before = if field.is_masked() { mask(before) } else { before.to_string() };
                    cursor = Some((LABEL_WIDTH + display_width(&before), row * 2));
                }

                if shown.is_empty() && *field == FormField::PasswordLength {
                    Span::styled(
                        format!("{} (default)", form.default_length()),
                        Style::default().fg(theme.placeholder),
                    )
                } else {
                    Span::styled(shown, Style::default().fg(theme.foreground))
                }
            }
            None => {
                let mark = if form.special_characters { "[x]" } else { "[ ]" };
                Span::styled(mark, Style::default().fg(theme.foreground))
            }
        };

        lines.push(Line::from(vec![Span::styled(label, label_style), value_span]));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Generate password ");
    let inner = block.inner(area);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.background));
    f.render_widget(paragraph, area);

    if let Some((x, y)) = cursor {
        let x = inner.x.saturating_add(x as u16);
        let y = inner.y.saturating_add(y as u16);
        if x < inner.right() && y < inner.bottom() {
            f.set_cursor_position((x, y));
        }
    }
}
