//! Login screen reducer.
//!
//! Translates key events into field edits and screen-level actions.
//! The top-level reducer owns navigation and effect emission.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::LoginScreen;

/// Actions the login screen can request from the top-level reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    /// Submit the current credentials. Always available: the login
    /// button is never disabled, the provider reports bad input.
    Submit,
    /// Navigate to the registration screen.
    OpenRegister,
    Quit,
}

pub fn handle_key(login: &mut LoginScreen, key: KeyEvent) -> LoginAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return LoginAction::Quit,
        KeyCode::Char('c') if ctrl => return LoginAction::Quit,
        KeyCode::Char('r') if ctrl => return LoginAction::OpenRegister,
        KeyCode::Char('t') if ctrl => {
            login.password_visible = !login.password_visible;
            return LoginAction::None;
        }
        KeyCode::Enter => return LoginAction::Submit,
        KeyCode::Tab | KeyCode::Down => {
            login.focus = login.focus.next();
            return LoginAction::None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            login.focus = login.focus.previous();
            return LoginAction::None;
        }
        _ => {}
    }

    let field = login.focused_field_mut();
    match key.code {
        KeyCode::Char('a') if ctrl => field.move_home(),
        KeyCode::Char('e') if ctrl => field.move_end(),
        KeyCode::Char('u') if ctrl => field.kill_to_start(),
        KeyCode::Char(ch) if !ctrl => field.insert_char(ch),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
    LoginAction::None
}

/// Inserts pasted text into the focused field, stripped to one line.
pub fn handle_paste(login: &mut LoginScreen, text: &str) {
    let line = text.lines().next().unwrap_or("");
    login.focused_field_mut().insert_str(line);
}
