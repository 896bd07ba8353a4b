use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::plan::is_sunday;
use crate::tui::theme;
use crate::utils::format::format_date;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    selected: NaiveDate,
    today: NaiveDate,
    date_format: &str,
) {
    let title_line = Line::from(vec![
        Span::styled("  평삼주오  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("pyeongsam", theme::gold()),
        Span::styled("  ·  3 chapters on weekdays, 5 on Sundays", theme::dim()),
    ]);

    let date_style = if is_sunday(selected) {
        theme::sunday()
    } else {
        theme::bold()
    };
    let mut date_spans = vec![Span::styled(format_date(selected, date_format), date_style)];
    if selected == today {
        date_spans.push(Span::styled("  ·  today", theme::green()));
    }

    let text = vec![title_line, Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
