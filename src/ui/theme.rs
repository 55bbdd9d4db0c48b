use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub focused: Color,
    pub placeholder: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub success: Color,
    pub failure: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            focused: Color::Cyan,
            placeholder: Color::DarkGray,
            selection_fg: Color::Black,
            selection_bg: Color::LightBlue,
            success: Color::Green,
            failure: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            focused: Color::Cyan,
            placeholder: Color::DarkGray,
            selection_fg: Color::Black,
            selection_bg: Color::Gray,
            success: Color::Green,
            failure: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            focused: Color::Blue,
            placeholder: Color::Gray,
            selection_fg: Color::White,
            selection_bg: Color::Blue,
            success: Color::Green,
            failure: Color::Red,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
