use crate::generator::Settings;
use crate::utils::unicode::{next_char_boundary, prev_char_boundary};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Passwords differ")]
    PassphrasesDiffer,
    #[error("Invalid password length '{0}'")]
    InvalidLength(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    MasterPhrase,
    ConfirmMasterPhrase,
    Domain,
    AdditionalInfo,
    PasswordLength,
    SpecialCharacters,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::MasterPhrase,
        FormField::ConfirmMasterPhrase,
        FormField::Domain,
        FormField::AdditionalInfo,
        FormField::PasswordLength,
        FormField::SpecialCharacters,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_masked(self) -> bool {
        matches!(self, FormField::MasterPhrase | FormField::ConfirmMasterPhrase)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::MasterPhrase => "Master password",
            FormField::ConfirmMasterPhrase => "Confirm master password",
            FormField::Domain => "Domain",
            FormField::AdditionalInfo => "Additional info",
            FormField::PasswordLength => "Password length",
            FormField::SpecialCharacters => "Special characters",
        };
        write!(f, "{label}")
    }
}

/// Inputs of the password form. Text cursor positions are byte offsets.
#[derive(Debug, Clone)]
pub struct Form {
    pub master_phrase: String,
    pub confirm_master_phrase: String,
    pub domain: String,
    pub additional_info: String,
    pub password_length: String,
    pub special_characters: bool,
    pub focused: FormField,
    pub cursor_pos: usize,
    default_length: usize,
}

impl Form {
    pub fn new(default_length: usize, special_characters: bool) -> Self {
        Self {
            master_phrase: String::new(),
            confirm_master_phrase: String::new(),
            domain: String::new(),
            additional_info: String::new(),
            password_length: String::new(),
            special_characters,
            focused: FormField::MasterPhrase,
            cursor_pos: 0,
            default_length,
        }
    }

    pub fn default_length(&self) -> usize {
        self.default_length
    }

    pub fn value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::MasterPhrase => Some(self.master_phrase.as_str()),
            FormField::ConfirmMasterPhrase => Some(self.confirm_master_phrase.as_str()),
            FormField::Domain => Some(self.domain.as_str()),
            FormField::AdditionalInfo => Some(self.additional_info.as_str()),
            FormField::PasswordLength => Some(self.password_length.as_str()),
            FormField::SpecialCharacters => None,
        }
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::MasterPhrase => Some(&mut self.master_phrase),
            FormField::ConfirmMasterPhrase => Some(&mut self.confirm_master_phrase),
            FormField::Domain => Some(&mut self.domain),
            FormField::AdditionalInfo => Some(&mut self.additional_info),
            FormField::PasswordLength => Some(&mut self.password_length),
            FormField::SpecialCharacters => None,
        }
    }

    fn focus(&mut self, field: FormField) {
        self.focused = field;
        self.cursor_pos = self.value(field).map(str::len).unwrap_or(0);
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focused.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus(self.focused.prev());
    }

    pub fn insert_char(&mut self, c: char) {
        if self.focused == FormField::SpecialCharacters {
            if c == ' ' {
                self.toggle_special_characters();
            }
            return;
        }
        if self.focused == FormField::PasswordLength && !c.is_ascii_digit() {
            return;
        }

        let pos = self.cursor_pos;
        if let Some(value) = self.focused_value_mut() {
            value.insert(pos, c);
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn backspace(&mut self) {
        let pos = self.cursor_pos;
        if pos == 0 {
            return;
        }
        if let Some(value) = self.focused_value_mut() {
            let prev = prev_char_boundary(value, pos);
            value.replace_range(prev..pos, "");
            self.cursor_pos = prev;
        }
    }

    pub fn move_left(&mut self) {
        let pos = self.cursor_pos;
        if let Some(prev) = self.value(self.focused).map(|v| prev_char_boundary(v, pos)) {
            self.cursor_pos = prev;
        }
    }

    pub fn move_right(&mut self) {
        let pos = self.cursor_pos;
        if let Some(next) = self.value(self.focused).map(|v| next_char_boundary(v, pos)) {
            self.cursor_pos = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.value(self.focused).map(str::len).unwrap_or(0);
    }

    pub fn toggle_special_characters(&mut self) {
        self.special_characters = !self.special_characters;
    }

    /// Builds generator settings. An empty length keeps the default.
    pub fn parse(&self) -> Result<Settings, FormError> {
        if self.master_phrase != self.confirm_master_phrase {
            return Err(FormError::PassphrasesDiffer);
        }

        let length = self.password_length.trim();
        let password_length = if length.is_empty() {
            self.default_length
        } else {
            length
                .parse()
                .map_err(|_| FormError::InvalidLength(length.to_string()))?
        };

        Ok(Settings {
            master_phrase: self.master_phrase.clone(),
            domain: self.domain.clone(),
            additional_info: self.additional_info.clone(),
            password_length,
            add_special_characters: self.special_characters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_str(form: &mut Form, s: &str) {
        for c in s.chars() {
            form.insert_char(c);
        }
    }

    fn filled_form() -> Form {
        let mut form = Form::new(12, true);
        type_str(&mut form, "secret");
        form.focus_next();
        type_str(&mut form, "secret");
        form.focus_next();
        type_str(&mut form, "localhost");
        form
    }

    #[test]
    fn test_parse_defaults() {
        let settings = filled_form().parse().unwrap();
        assert_eq!(settings.master_phrase, "secret");
        assert_eq!(settings.domain, "localhost");
        assert_eq!(settings.additional_info, "");
        assert_eq!(settings.password_length, 12);
        assert!(settings.add_special_characters);
    }

    #[test]
    fn test_domain_whitespace_is_kept() {
        let mut form = filled_form();
        form.domain = " localhost ".to_string();

        let settings = form.parse().unwrap();
        assert_eq!(settings.domain, " localhost ");
    }

    #[test]
    fn test_parse_passphrases_differ() {
        let mut form = filled_form();
        form.focus_prev();
        assert_eq!(form.focused, FormField::ConfirmMasterPhrase);
        form.insert_char('!');

        assert_eq!(form.parse(), Err(FormError::PassphrasesDiffer));
    }

    #[test]
    fn test_length_field_accepts_digits_only() {
        let mut form = filled_form();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused, FormField::PasswordLength);

        type_str(&mut form, "2a0");
        assert_eq!(form.password_length, "20");
        assert_eq!(form.parse().unwrap().password_length, 20);
    }

    #[test]
    fn test_parse_invalid_length() {
        let mut form = filled_form();
        form.password_length = "99999999999999999999999".to_string();
        assert!(matches!(form.parse(), Err(FormError::InvalidLength(_))));
    }

    #[test]
    fn test_space_toggles_special_characters() {
        let mut form = filled_form();
        form.focus_prev();
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focused, FormField::SpecialCharacters);

        form.insert_char(' ');
        assert!(!form.special_characters);
        form.insert_char('x');
        assert!(!form.special_characters);
    }

    #[test]
    fn test_editing_multibyte_input() {
        let mut form = Form::new(12, true);
        form.focused = FormField::Domain;
        type_str(&mut form, "bær");

        form.move_left();
        form.backspace();
        assert_eq!(form.domain, "br");

        form.move_home();
        form.insert_char('x');
        assert_eq!(form.domain, "xbr");

        form.move_end();
        assert_eq!(form.cursor_pos, 3);
    }

    #[test]
    fn test_focus_wraps_around() {
        assert_eq!(FormField::SpecialCharacters.next(), FormField::MasterPhrase);
        assert_eq!(FormField::MasterPhrase.prev(), FormField::SpecialCharacters);
    }
}
