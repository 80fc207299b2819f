//! Birth-date input form rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let border_color =
        if app.calculator.error().is_some() { Color::Red } else { Color::DarkGray };

    let block = Block::default()
        .title(" Birth date (YYYY-MM-DD) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(app.input_buffer.as_str()), rows[0]);

    if let Some(err) = app.calculator.error() {
        let msg = Paragraph::new(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(msg, rows[1]);
    }

    // Keep the cursor at the end of the input
    frame.set_cursor_position((rows[0].x + app.input_buffer.len() as u16, rows[0].y));
}
