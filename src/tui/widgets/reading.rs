use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::plan::DailySummary;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, summary: &DailySummary, check_mark: &str) {
    let title = if summary.is_sunday {
        " Today's Reading · Sunday "
    } else {
        " Today's Reading "
    };
    let block = Block::default()
        .title(Span::styled(title, theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Chapters read:  ", theme::dim()),
            Span::styled(summary.chapters_read.to_string(), theme::bold()),
        ]),
        Line::from(""),
    ];

    if summary.is_complete() {
        lines.push(Line::from(Span::styled(
            "  Congratulations! You have finished this year's reading.",
            theme::green().add_modifier(Modifier::BOLD),
        )));
    } else {
        let item_style = if summary.is_sunday {
            theme::sunday()
        } else {
            theme::bold()
        };
        for reading in &summary.readings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", check_mark), theme::green()),
                Span::styled(reading.to_string(), item_style),
            ]));
        }
        if summary.finishes_plan() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Plan finishes with this reading.",
                theme::green(),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
