//! Registration screen reducer.
//!
//! Translates key events into field edits and screen-level actions.
//! Submission is only requested when the form is valid; the top-level
//! reducer additionally guards against an in-flight request.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{RegisterField, RegisterScreen};

/// Actions the registration screen can request from the top-level reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    None,
    /// Submit the profile. Only emitted when every field predicate holds.
    Submit,
    /// Back to the login screen.
    Back,
    Quit,
}

pub fn handle_key(register: &mut RegisterScreen, key: KeyEvent) -> RegisterAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return RegisterAction::Back,
        KeyCode::Char('c') if ctrl => return RegisterAction::Quit,
        KeyCode::Char('t') if ctrl => {
            match register.focus {
                RegisterField::Password => register.password_visible = !register.password_visible,
                RegisterField::RepeatPassword => {
                    register.repeat_visible = !register.repeat_visible;
                }
                _ => {}
            }
            return RegisterAction::None;
        }
        KeyCode::Enter => {
            // The register button stays disabled until the form is valid.
            if register.validity().form_valid() {
                return RegisterAction::Submit;
            }
            return RegisterAction::None;
        }
        KeyCode::Tab | KeyCode::Down => {
            register.focus = register.focus.next();
            return RegisterAction::None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            register.focus = register.focus.previous();
            return RegisterAction::None;
        }
        _ => {}
    }

    let field = register.focused_field_mut();
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
    RegisterAction::None
}

/// Inserts pasted text into the focused field, stripped to one line.
pub fn handle_paste(register: &mut RegisterScreen, text: &str) {
    let line = text.lines().next().unwrap_or("");
    register.focused_field_mut().insert_str(line);
}
