//! History table rendering: previous calculations in insertion order.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Previous calculations ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let entries = app.calculator.history();

    // Empty state
    if entries.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "(no calculations yet)",
                Style::default().fg(Color::DarkGray).italic(),
            )),
            inner,
        );
        return;
    }

    let header = Row::new([Cell::from("INPUT"), Cell::from("CALCULATED AGE")])
        .style(Style::default().fg(Color::Cyan).bold());

    let rows = entries
        .iter()
        .map(|e| Row::new([Cell::from(e.input.as_str()), Cell::from(e.age.as_str())]));

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(20)])
        .header(header)
        .block(block);

    frame.render_widget(table, area);
}
