//! Main layout and frame composition.

use ratatui::{prelude::*, widgets::Paragraph};

use super::{form, history, result, status};
use crate::tui::app::App;

/// Draw the entire application UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Main layout: header, form/result row, history, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(5), // Form | result
            Constraint::Min(5),    // History table
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    // Header
    draw_header(frame, main_chunks[0], app);

    // Body: input form | last result
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    form::draw(frame, body_chunks[0], app);
    result::draw(frame, body_chunks[1], app);

    // History table
    history::draw(frame, main_chunks[2], app);

    // Status bar
    status::draw(frame, main_chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let today_text = app.today.format("%Y-%m-%d").to_string();
    let title = "Age Calculator";

    // Calculate padding for right-alignment
    let padding =
        area.width.saturating_sub(title.len() as u16 + today_text.len() as u16 + 2)
            as usize;

    let line = Line::from(vec![
        Span::styled(format!(" {title}"), Style::default().fg(Color::Cyan).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(today_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
