use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::plan::{chapters_for_day, is_sunday};
use crate::tui::theme;
use crate::utils::dates::week_of;

pub fn render(frame: &mut Frame, area: Rect, selected: NaiveDate, today: NaiveDate) {
    let block = Block::default()
        .title(Span::styled(" Week ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut day_spans = Vec::new();
    let mut rate_spans = Vec::new();
    for day in week_of(selected) {
        let mut style = if is_sunday(day) {
            theme::sunday()
        } else {
            theme::dim()
        };
        if day == today {
            style = style.fg(theme::GREEN);
        }
        if day == selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let label = format!(" {} {:>2} ", &day.weekday().to_string()[..2], day.day());
        day_spans.push(Span::styled(label, style));
        day_spans.push(Span::raw(" "));

        rate_spans.push(Span::styled(
            format!("  {}ch  ", chapters_for_day(day)),
            theme::dim(),
        ));
        rate_spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(vec![Line::from(day_spans), Line::from(rate_spans)])
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
