use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    DefaultTerminal, Frame,
};

use crate::config::AppConfig;
use crate::plan::DailySummary;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{header, progress, reading, statusbar, week};
use crate::utils::dates::{parse_date, shift};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Reading,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    DateInput,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>, // shown in the date popup on bad input

    pub today: NaiveDate,
    pub selected: NaiveDate,
    pub summary: DailySummary,
}

impl App {
    pub fn new(config: AppConfig, selected: NaiveDate, today: NaiveDate) -> Self {
        App {
            view: View::Reading,
            config,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            today,
            selected,
            summary: DailySummary::for_date(selected),
        }
    }

    pub fn select(&mut self, date: NaiveDate) {
        if date != self.selected {
            self.selected = date;
            self.summary = DailySummary::for_date(date);
        }
    }

    fn move_by(&mut self, days: i64) {
        self.select(shift(self.selected, days));
    }

    /// Roll "today" over at midnight. A selection that was following today moves with it.
    pub fn tick(&mut self, now: NaiveDate) {
        if now != self.today {
            log::debug!("Date rolled over from {} to {}", self.today, now);
            let was_today = self.selected == self.today;
            self.today = now;
            if was_today {
                self.select(now);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals also report release and repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::DateInput => self.handle_date_input(key),
            InputMode::Normal => match self.view {
                View::Reading => self.handle_reading_key(key),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_reading_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_by(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(7),
            KeyCode::Char('t') => self.select(self.today),
            KeyCode::Char('g') | KeyCode::Enter => {
                self.input_mode = InputMode::DateInput;
                self.input_buffer = self.selected.format("%Y-%m-%d").to_string();
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Reading;
            }
            _ => {}
        }
    }

    fn handle_date_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter => match parse_date(&self.input_buffer, self.today) {
                Ok(date) => {
                    self.select(date);
                    self.input_mode = InputMode::Normal;
                    self.input_buffer.clear();
                    self.input_error = None;
                }
                Err(err) => {
                    self.input_error = Some(err.to_string());
                }
            },
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if c.is_ascii_alphanumeric() || c == '-' => {
                if self.input_buffer.len() < 10 {
                    self.input_buffer.push(c);
                }
                self.input_error = None;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_main(frame);

        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }

        if self.input_mode == InputMode::DateInput {
            self.draw_date_input(frame);
        }
    }

    fn draw_main(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let week_height = if self.config.tui.show_week_strip { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),           // header
                Constraint::Length(week_height), // week strip
                Constraint::Min(6),              // reading list
                Constraint::Length(4),           // progress
                Constraint::Length(1),           // status bar
            ])
            .split(area);

        header::render(
            frame,
            chunks[0],
            self.selected,
            self.today,
            &self.config.display.date_format,
        );
        if self.config.tui.show_week_strip {
            week::render(frame, chunks[1], self.selected, self.today);
        }
        reading::render(frame, chunks[2], &self.summary, &self.config.display.check_mark);
        progress::render(frame, chunks[3], &self.summary);
        statusbar::render(frame, chunks[4]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2)
                .max(12)
                .min(area.height.saturating_sub(area.height / 4)),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [← →] h l    ", "Previous / next day"),
            ("  [↑ ↓] k j    ", "Previous / next week"),
            ("  [t]          ", "Jump to today"),
            ("  [g] / Enter  ", "Go to a date"),
            ("  [?]          ", "Toggle help"),
            ("  [Esc] / q    ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, action) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::gold()),
                Span::styled(action, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_date_input(&self, frame: &mut Frame) {
        let area = frame.area();
        let height = if self.input_error.is_some() { 7 } else { 5 };

        let y = (area.height / 2).saturating_sub(3);
        let popup_area = Rect {
            x: area.width / 4,
            y,
            width: area.width / 2,
            height: height.min(area.height.saturating_sub(y)),
        };

        frame.render_widget(Clear, popup_area);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Date: ", theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::gold()), // block cursor
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  YYYY-MM-DD or today/yesterday/tomorrow  ·  [Enter] go  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let border_style = if self.input_error.is_some() {
            theme::red()
        } else {
            theme::gold()
        };

        let block = Block::default()
            .title(Span::styled(" Go to Date ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme::surface());

        let paragraph = Paragraph::new(text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, selected: Option<NaiveDate>) -> Result<()> {
    let today = Local::now().date_naive();
    let tick_rate_ms = config.tui.tick_rate_ms;
    let mut app = App::new(config, selected.unwrap_or(today), today);

    log::info!("Starting TUI on {}", app.selected);
    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_rate_ms);

    let result = event_loop(&mut terminal, &mut app, &events);

    ratatui::restore();
    log::info!("TUI closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("Drawing frame")?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    return Ok(());
                }
            }
            Event::Resize => {}
            Event::Tick => {
                app.tick(Local::now().date_naive());
            }
        }
    }
}
