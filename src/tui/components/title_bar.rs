//! # TitleBar Component
//!
//! Top line showing where the user is and how many products exist.
//!
//! Purely presentational: every field is a prop set by the parent each frame.
//!
//! ```text
//! Stockroom | Inventory List | 2 products
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Title of the current screen (e.g., "Add Product")
    pub screen_title: &'static str,
    pub product_count: usize,
}

impl TitleBar {
    pub fn new(screen_title: &'static str, product_count: usize) -> Self {
        Self {
            screen_title,
            product_count,
        }
    }

    fn count_text(&self) -> String {
        match self.product_count {
            1 => "1 product".to_string(),
            n => format!("{n} products"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let line = Line::from(vec![
            Span::styled(
                "Stockroom",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::raw(self.screen_title),
            separator,
            Span::styled(self.count_text(), Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_screen_and_count() {
        let text = render_to_string(&mut TitleBar::new("Inventory List", 2));
        assert!(text.contains("Stockroom"));
        assert!(text.contains("Inventory List"));
        assert!(text.contains("2 products"));
    }

    #[test]
    fn test_title_bar_singular_count() {
        let text = render_to_string(&mut TitleBar::new("Add Product", 1));
        assert!(text.contains("1 product "));
    }

    #[test]
    fn test_title_bar_props_are_mutable() {
        let mut title_bar = TitleBar::new("Inventory Menu", 0);

        // Simulate updating props when app state changes
        title_bar.screen_title = "Remove Product";
        title_bar.product_count = 3;

        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Remove Product"));
        assert!(text.contains("3 products"));
    }
}
