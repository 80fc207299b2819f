//! Status bar rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let left_text = " [Enter] calculate  [Esc] quit";

    let right_text = match app.calculator.history().len() {
        0 => "Ready".to_string(),
        n => format!("{n} in history"),
    };

    let left = Span::styled(left_text, Style::default().fg(Color::DarkGray));
    let right = Span::styled(right_text.clone(), Style::default().fg(Color::DarkGray));

    // Calculate padding for right-alignment
    let padding =
        area.width.saturating_sub(left_text.len() as u16 + right_text.len() as u16 + 2)
            as usize;

    let line = Line::from(vec![left, Span::raw(" ".repeat(padding)), right]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
