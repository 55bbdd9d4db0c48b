use super::mode::Mode;
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return;
    }

    match state.mode {
        Mode::Form => handle_form_mode(key, state),
        Mode::Result => handle_result_mode(key, state),
    }
}

fn handle_form_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Enter => {
            state.generate();
        }
        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        // BackTab is sent when Shift+Tab is pressed
        KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(),
        KeyCode::Backspace => state.form.backspace(),
        KeyCode::Left => state.form.move_left(),
        KeyCode::Right => state.form.move_right(),
        KeyCode::Home => state.form.move_home(),
        KeyCode::End => state.form.move_end(),
        KeyCode::Char(c) => state.form.insert_char(c),
        _ => {}
    }
}

fn handle_result_mode(key: KeyEvent, state: &mut AppState) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::NONE) | (KeyCode::Char('y'), KeyModifiers::NONE) => {
            state.copy_password();
        }
        (KeyCode::Char('e'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            state.back_to_form();
        }
        (KeyCode::Char('?'), _) => {
            state.show_help = true;
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            state.should_quit = true;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::copy::COPIED_MESSAGE;

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state);
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn new_state() -> AppState {
        AppState::new(&Config::default(), Box::new(MemoryClipboard::new()))
    }

    #[test]
    fn test_fill_form_generate_and_copy() {
        let mut state = new_state();
        type_str(&mut state, "secret");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "secret");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "localhost");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.mode, Mode::Result);

        press(&mut state, KeyCode::Char('c'));
        let result = state.result.as_ref().unwrap();
        assert_eq!(result.button_label(), COPIED_MESSAGE);
    }

    #[test]
    fn test_result_mode_back_to_form() {
        let mut state = new_state();
        state.mode = Mode::Result;
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.mode, Mode::Form);
    }

    #[test]
    fn test_q_types_in_form_but_quits_in_result() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.form.master_phrase, "q");

        state.mode = Mode::Result;
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = new_state();
        handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state,
        );
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut state = new_state();
        state.mode = Mode::Result;
        press(&mut state, KeyCode::Char('?'));
        assert!(state.show_help);

        press(&mut state, KeyCode::Char('c'));
        assert!(state.show_help);

        press(&mut state, KeyCode::Esc);
        assert!(!state.show_help);
        assert_eq!(state.mode, Mode::Result);
    }
}
