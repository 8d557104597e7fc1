//! # StatusBar Component
//!
//! Bottom line. Shows the notice left by the last transition, colored by
//! severity, or the key help when there is nothing to report.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{Notice, Severity};
use crate::tui::component::Component;

const KEY_HELP: &str = "↑/↓ move · Enter select · Esc back · Ctrl+C exit";

pub struct StatusBar<'a> {
    pub notice: Option<&'a Notice>,
}

impl<'a> StatusBar<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(Color::Cyan),
        Severity::Success => Style::default().fg(Color::Green),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = match self.notice {
            Some(notice) => Line::from(Span::styled(
                notice.text.as_str(),
                severity_style(notice.severity),
            )),
            None => Line::from(Span::styled(KEY_HELP, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(notice: Option<&Notice>) -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| StatusBar::new(notice).render(f, f.area()))
            .unwrap();
        terminal
    }

    #[test]
    fn test_shows_key_help_without_notice() {
        let terminal = render(None);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Enter select"));
    }

    #[test]
    fn test_notice_is_colored_by_severity() {
        let notice = Notice {
            text: "Product name already exists.".to_string(),
            severity: Severity::Warning,
        };
        let terminal = render(Some(&notice));
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();

        assert!(text.contains("Product name already exists."));
        assert_eq!(buffer[(0, 0)].fg, Color::Yellow);
    }
}
