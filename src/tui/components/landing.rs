//! # Landing Page Component
//!
//! Intro shown once at startup: the banner with a spinner underneath. The
//! spinner reads "Loading..." for the first half of the intro and
//! "Initializing..." for the rest. Purely cosmetic, any key skips it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::time::Duration;

use crate::tui::component::Component;

pub const BANNER: [&str; 6] = [
    r" ___                      _                   ",
    r"|_ _|_ ____   _____ _ __ | |_ ___  _ __ _   _ ",
    r" | || '_ \ \ / / _ \ '_ \| __/ _ \| '__| | | |",
    r" | || | | \ V /  __/ | | | || (_) | |  | |_| |",
    r"|___|_| |_|\_/ \___|_| |_|\__\___/|_|   \__, |",
    r"                                        |___/ ",
];

const SPINNER: [&str; 3] = ["+", "x", "*"];

/// Banner lines styled the way every screen shows them.
pub fn banner_lines() -> Vec<Line<'static>> {
    BANNER
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Cyan))))
        .collect()
}

pub struct LandingPage {
    frame_index: usize,
    elapsed: Duration,
    total: Duration,
}

impl LandingPage {
    pub fn new(frame_index: usize, elapsed: Duration, total: Duration) -> Self {
        Self {
            frame_index,
            elapsed,
            total,
        }
    }

    fn status(&self) -> &'static str {
        if self.elapsed < self.total / 2 {
            "Loading..."
        } else {
            "Initializing..."
        }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER[self.frame_index % SPINNER.len()];
        let status = vec![
            Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    self.status(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let layout = Layout::vertical([
            Constraint::Length(BANNER.len() as u16),
            Constraint::Length(1), // Spacer
            Constraint::Length(status.len() as u16),
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(banner_lines()).alignment(Alignment::Center),
            layout[0],
        );
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), layout[2]);
    }
}
