//! Menu screen view.

use ratatui::Frame;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::MenuScreen;
use crate::render::{calculate_card_area, hint_line, render_card};

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 8;

pub fn render_menu(frame: &mut Frame, menu: &MenuScreen) {
    let card = calculate_card_area(frame.area(), CARD_WIDTH, CARD_HEIGHT);
    let inner = render_card(frame, card, "Menu");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome!",
            Style::default().fg(Color::Green),
        )),
        Line::from(format!("  Signed in as {}", menu.email)),
        Line::from(""),
        hint_line("q quit"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
