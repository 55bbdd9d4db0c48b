use super::form::Form;
use super::mode::Mode;
use super::result_page::ResultPage;
use crate::clipboard::CopyCommand;
use crate::config::Config;
use crate::copy::CopyOutcome;
use crate::generator::{WEAK_PASSWORD_LENGTH, generate_password};
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

pub struct AppState {
    pub form: Form,
    pub mode: Mode,
    pub result: Option<ResultPage>,
    pub clipboard: Box<dyn CopyCommand>,
    pub theme: Theme,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(config: &Config, clipboard: Box<dyn CopyCommand>) -> Self {
        Self {
            form: Form::new(config.password_length, config.special_characters),
            mode: Mode::Form,
            result: None,
            clipboard,
            theme: Theme::from_config(config),
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, shown_at)) = &self.status_message {
            if shown_at.elapsed() >= STATUS_MESSAGE_TIMEOUT {
                self.status_message = None;
            }
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Generates a password from the form and shows it on a fresh result page.
    pub fn generate(&mut self) {
        let settings = match self.form.parse() {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to parse form");
                self.set_status_message(format!("Failed to parse form parameters: {e}"));
                return;
            }
        };

        let password = match generate_password(&settings) {
            Ok(password) => password,
            Err(e) => {
                warn!(error = %e, domain = %settings.domain, "Failed to generate password");
                self.set_status_message(format!("Failed to generate your password: {e}"));
                return;
            }
        };

        match ResultPage::new(&settings.domain, &password) {
            Ok(page) => {
                info!(
                    domain = %settings.domain,
                    length = settings.password_length,
                    special_characters = settings.add_special_characters,
                    "Generated password"
                );
                self.result = Some(page);
                self.mode = Mode::Result;
                if settings.is_weak() {
                    self.set_status_message(format!(
                        "Passwords shorter than {WEAK_PASSWORD_LENGTH} characters are a security risk"
                    ));
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to build result page");
                self.set_status_message(format!("Failed to show your password: {e}"));
            }
        }
    }

    /// Runs the copy action on the current result page, if any.
    pub fn copy_password(&mut self) -> Option<CopyOutcome> {
        let page = self.result.as_mut()?;
        Some(page.copy(self.clipboard.as_mut()))
    }

    pub fn back_to_form(&mut self) {
        self.mode = Mode::Form;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::copy::{COPIED_MESSAGE, FAILED_MESSAGE};

    fn state_with(clipboard: MemoryClipboard) -> AppState {
        let mut state = AppState::new(&Config::default(), Box::new(clipboard));
        state.form.master_phrase = "secret".to_string();
        state.form.confirm_master_phrase = "secret".to_string();
        state.form.domain = "localhost".to_string();
        state
    }

    #[test]
    fn test_generate_shows_result() {
        let mut state = state_with(MemoryClipboard::new());
        state.generate();

        assert_eq!(state.mode, Mode::Result);
        let result = state.result.as_ref().unwrap();
        assert_eq!(result.password(), "B8MYkTQT`~]'");
        assert_eq!(result.domain(), "localhost");
        assert!(state.status_text().is_none());
    }

    #[test]
    fn test_generate_reports_form_errors() {
        let mut state = state_with(MemoryClipboard::new());
        state.form.confirm_master_phrase = "other".to_string();
        state.generate();

        assert_eq!(state.mode, Mode::Form);
        assert!(state.result.is_none());
        assert!(state.status_text().unwrap().contains("Passwords differ"));
    }

    #[test]
    fn test_generate_reports_generator_errors() {
        let mut state = state_with(MemoryClipboard::new());
        state.form.domain.clear();
        state.generate();

        assert_eq!(state.mode, Mode::Form);
        assert!(state.status_text().unwrap().contains("Empty domain"));
    }

    #[test]
    fn test_weak_password_warns() {
        let mut state = state_with(MemoryClipboard::new());
        state.form.password_length = "6".to_string();
        state.generate();

        assert_eq!(state.mode, Mode::Result);
        assert!(state.status_text().unwrap().contains("security risk"));
    }

    #[test]
    fn test_copy_without_result_does_nothing() {
        let mut state = state_with(MemoryClipboard::new());
        assert_eq!(state.copy_password(), None);
    }

    #[test]
    fn test_copy_password_updates_button() {
        let mut state = state_with(MemoryClipboard::new());
        state.generate();

        assert_eq!(state.copy_password(), Some(CopyOutcome::Copied));
        assert_eq!(state.result.as_ref().unwrap().button_label(), COPIED_MESSAGE);
    }

    #[test]
    fn test_failed_copy_keeps_password_selected() {
        let mut state = state_with(MemoryClipboard::failing("no display"));
        state.generate();

        let outcome = state.copy_password().unwrap();
        assert!(!outcome.is_copied());

        let result = state.result.as_ref().unwrap();
        assert_eq!(result.button_label(), FAILED_MESSAGE);
        assert!(result.is_password_selected());
    }

    #[test]
    fn test_regenerate_resets_button() {
        let mut state = state_with(MemoryClipboard::new());
        state.generate();
        state.copy_password();

        state.back_to_form();
        state.form.domain = "google.com".to_string();
        state.generate();

        let result = state.result.as_ref().unwrap();
        assert_eq!(result.password(), "ODejwny3!&^#");
        assert_eq!(result.button_label(), "Copy to clipboard");
    }
}
