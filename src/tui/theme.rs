use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(20, 18, 24);
pub const SURFACE: Color = Color::Rgb(30, 27, 36);
pub const BORDER: Color = Color::Rgb(60, 54, 72);
pub const TEXT: Color = Color::Rgb(232, 224, 210);
pub const TEXT_DIM: Color = Color::Rgb(128, 120, 136);
pub const GOLD: Color = Color::Rgb(204, 168, 84);
pub const GREEN: Color = Color::Rgb(96, 164, 110);
pub const WINE: Color = Color::Rgb(176, 74, 92);
pub const RED: Color = Color::Rgb(196, 86, 70);
pub const GAUGE_EMPTY: Color = Color::Rgb(44, 40, 52);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

/// Sundays carry the heavier five-chapter reading.
pub fn sunday() -> Style {
    Style::default().fg(WINE).add_modifier(Modifier::BOLD)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn gauge() -> Style {
    Style::default().fg(GREEN).bg(GAUGE_EMPTY)
}
