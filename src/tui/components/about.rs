//! # About Panel
//!
//! Banner plus author and version. The author comes from `[about] author`
//! in the config file.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::landing::banner_lines;

pub struct AboutPanel<'a> {
    pub author: &'a str,
}

impl<'a> AboutPanel<'a> {
    pub fn new(author: &'a str) -> Self {
        Self { author }
    }
}

impl Component for AboutPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = banner_lines();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Created by ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.author),
        ]));
        lines.push(Line::from(Span::styled(
            format!("Stockroom v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
