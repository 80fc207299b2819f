//! Last calculation result panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Calculated age ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(age) = app.calculator.last_result() else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "(no calculation yet)",
                Style::default().fg(Color::DarkGray).italic(),
            )),
            inner,
        );
        return;
    };

    let mut lines = Vec::new();
    if let Some(birth) = app.calculator.birth_date() {
        lines.push(Line::from(vec![
            Span::styled("Date of birth: ", Style::default().fg(Color::DarkGray)),
            Span::styled(birth.format("%Y-%m-%d").to_string(), Style::default().bold()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        age.to_string(),
        Style::default().fg(Color::Green).bold(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
