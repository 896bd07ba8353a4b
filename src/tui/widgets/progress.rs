use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::TOTAL_CHAPTERS;
use crate::plan::DailySummary;
use crate::tui::theme;
use crate::utils::format::format_percent;

pub fn render(frame: &mut Frame, area: Rect, summary: &DailySummary) {
    let block = Block::default()
        .title(Span::styled(" Progress ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(theme::gauge())
        .ratio(summary.bar_ratio())
        .label(Span::styled(
            format!("{} / {}", summary.chapters_read.min(TOTAL_CHAPTERS), TOTAL_CHAPTERS),
            theme::bold(),
        ));
    frame.render_widget(gauge, rows[0]);

    let text = Paragraph::new(Span::styled(
        format!("  Overall progress: {}", format_percent(summary.progress)),
        theme::dim(),
    ));
    frame.render_widget(text, rows[1]);
}
