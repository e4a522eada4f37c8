//! Login screen view.

use ratatui::Frame;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::{LoginField, LoginScreen};
use crate::render::{
    calculate_card_area, error_line, field_cursor_position, field_line, hint_line, render_card,
    submit_line,
};
use crate::state::AppState;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 12;

/// Row offsets inside the card body.
const EMAIL_ROW: u16 = 1;
const PASSWORD_ROW: u16 = 3;

pub fn render_login(frame: &mut Frame, login: &LoginScreen, app: &AppState) {
    let card = calculate_card_area(frame.area(), CARD_WIDTH, CARD_HEIGHT);
    let inner = render_card(frame, card, "Sign in");

    let in_flight = app
        .tasks
        .sign_in
        .is_running()
        .then_some(app.spinner_frame);

    let lines = vec![
        Line::from(""),
        field_line(
            "Email",
            login.email.display(false),
            login.focus == LoginField::Email,
            false,
        ),
        Line::from(""),
        field_line(
            "Password",
            login.password.display(!login.password_visible),
            login.focus == LoginField::Password,
            false,
        ),
        Line::from(""),
        error_line(login.error.as_deref()),
        Line::from(""),
        submit_line("Login", true, in_flight),
        Line::from(""),
        hint_line("Enter login · Ctrl+R new user · Ctrl+T show password · Esc quit"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);

    let (row, col) = match login.focus {
        LoginField::Email => (EMAIL_ROW, login.email.cursor_column(false)),
        LoginField::Password => (
            PASSWORD_ROW,
            login.password.cursor_column(!login.password_visible),
        ),
    };
    frame.set_cursor_position(field_cursor_position(inner, row, col));
}
