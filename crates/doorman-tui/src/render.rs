//! Pure view/render functions for the TUI.
//!
//! This module contains the screen dispatch and the shared card helpers.
//! Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear};

use crate::features::{login, menu, register};
use crate::state::{AppState, Screen};

/// Spinner frames for the in-flight submission indicator.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Columns reserved for a field label (including the focus marker).
pub const FIELD_LABEL_WIDTH: usize = 10;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    match &app.screen {
        Screen::Login(login) => login::render_login(frame, login, app),
        Screen::Register(reg) => register::render_register(frame, reg, app),
        Screen::Menu(menu) => menu::render_menu(frame, menu),
    }
}

/// Calculates the area for a centered card.
pub fn calculate_card_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the card container (clears background, draws border and
/// title) and returns the inner content area.
pub fn render_card(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// Builds one form-field line: focus marker, padded label, value.
pub fn field_line(label: &str, value: String, focused: bool, invalid: bool) -> Line<'static> {
    let marker = if focused { "› " } else { "  " };
    let label_style = if invalid {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!("{marker}{label:<width$}", width = FIELD_LABEL_WIDTH),
            label_style,
        ),
        Span::raw(value),
    ])
}

/// Terminal cursor position for the focused field on row `row` of `inner`.
pub fn field_cursor_position(inner: Rect, row: u16, value_col: u16) -> (u16, u16) {
    let x = inner.x + 2 + FIELD_LABEL_WIDTH as u16 + value_col;
    (x.min(inner.x + inner.width.saturating_sub(1)), inner.y + row)
}

/// Builds the inline error line (blank when there is no error).
pub fn error_line(error: Option<&str>) -> Line<'static> {
    match error {
        Some(message) => Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    }
}

/// Builds the dark-gray key-hint footer line.
pub fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Builds the submit row: a button plus an optional spinner while a
/// submission is in flight.
pub fn submit_line(label: &str, enabled: bool, in_flight: Option<usize>) -> Line<'static> {
    let button_style = if enabled {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(format!("[ {label} ]"), button_style),
    ];
    if let Some(frame_idx) = in_flight {
        let glyph = SPINNER_FRAMES[frame_idx % SPINNER_FRAMES.len()];
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{glyph} Working..."),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}
