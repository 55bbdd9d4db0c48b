use crate::app::{AppState, Mode};
use crate::utils::unicode::display_width;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let left_content = match state.status_text() {
        Some(message) => format!(" {} | {}", state.mode, message),
        None => match (&state.result, state.mode) {
            (Some(page), Mode::Result) => format!(" {} | {}", state.mode, page.domain()),
            _ => format!(" {}", state.mode),
        },
    };

    let nav_hint = match state.mode {
        Mode::Form => "Tab next  Enter generate  Esc quit",
        Mode::Result => "c copy  e edit  ? help  q quit",
    };
    let version_text = format!("v{VERSION}");

    let used = display_width(&left_content) + display_width(nav_hint) + display_width(&version_text) + 3;
    let padding = (area.width as usize).saturating_sub(used);

    let style = if state.status_message.is_some() {
        base_style.add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));

    f.render_widget(status, area);
}
