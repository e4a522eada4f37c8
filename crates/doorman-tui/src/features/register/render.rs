//! Registration screen view.
//!
//! Field labels turn red once a field is non-blank and invalid, matching
//! the keystroke-recomputed validity; untouched fields stay neutral. The
//! register button renders dimmed until the whole form is valid.

use ratatui::Frame;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::{RegisterField, RegisterScreen};
use crate::render::{
    calculate_card_area, error_line, field_cursor_position, field_line, hint_line, render_card,
    submit_line,
};
use crate::state::AppState;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 15;

/// Row offset of the first field inside the card body.
const FIRST_FIELD_ROW: u16 = 1;

pub fn render_register(frame: &mut Frame, register: &RegisterScreen, app: &AppState) {
    let card = calculate_card_area(frame.area(), CARD_WIDTH, CARD_HEIGHT);
    let inner = render_card(frame, card, "Register");

    let validity = register.validity();
    let in_flight = app
        .tasks
        .create_account
        .is_running()
        .then_some(app.spinner_frame);

    // A field shows its error mark only once it is non-blank and invalid.
    let touched_invalid = |value: &str, valid: bool| !value.trim().is_empty() && !valid;

    let rows = [
        (
            "Email",
            register.email.display(false),
            RegisterField::Email,
            touched_invalid(register.email.value(), validity.email),
        ),
        (
            "Password",
            register.password.display(!register.password_visible),
            RegisterField::Password,
            touched_invalid(register.password.value(), validity.password),
        ),
        (
            "Repeat",
            register.repeat_password.display(!register.repeat_visible),
            RegisterField::RepeatPassword,
            touched_invalid(register.repeat_password.value(), validity.passwords_match),
        ),
        (
            "Name",
            register.first_name.display(false),
            RegisterField::FirstName,
            touched_invalid(register.first_name.value(), validity.first_name),
        ),
        (
            "Last name",
            register.last_name.display(false),
            RegisterField::LastName,
            touched_invalid(register.last_name.value(), validity.last_name),
        ),
        (
            "Age",
            register.age.display(false),
            RegisterField::Age,
            touched_invalid(register.age.value(), validity.age),
        ),
    ];

    let mut lines = vec![Line::from("")];
    for (label, value, field, invalid) in &rows {
        lines.push(field_line(label, value.clone(), register.focus == *field, *invalid));
    }
    lines.push(Line::from(""));
    lines.push(error_line(register.error.as_deref()));
    lines.push(Line::from(""));
    lines.push(submit_line("Register", validity.form_valid(), in_flight));
    lines.push(Line::from(""));
    lines.push(hint_line("Enter register · Ctrl+T show password · Esc back to login"));

    frame.render_widget(Paragraph::new(lines), inner);

    let focus_idx = rows
        .iter()
        .position(|(_, _, field, _)| register.focus == *field)
        .unwrap_or(0) as u16;
    let col = match register.focus {
        RegisterField::Email => register.email.cursor_column(false),
        RegisterField::Password => register.password.cursor_column(!register.password_visible),
        RegisterField::RepeatPassword => {
            register.repeat_password.cursor_column(!register.repeat_visible)
        }
        RegisterField::FirstName => register.first_name.cursor_column(false),
        RegisterField::LastName => register.last_name.cursor_column(false),
        RegisterField::Age => register.age.cursor_column(false),
    };
    frame.set_cursor_position(field_cursor_position(inner, FIRST_FIELD_ROW + focus_idx, col));
}
