//! # Inventory Table
//!
//! Renders the collection as a table with a grand total footer. Also used
//! with a single product (and no footer) to show the target of an edit or
//! removal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Cell, Paragraph, Row, Table};
use rust_decimal::Decimal;
use unicode_width::UnicodeWidthChar;

use crate::core::product::{Product, format_amount};
use crate::tui::component::Component;

const COLUMNS: [&str; 5] = ["Id", "Name", "Quantity", "Unit Price", "Total"];

pub struct InventoryTable<'a> {
    pub title: &'a str,
    pub products: &'a [Product],
    /// `None` hides the footer row.
    pub grand_total: Option<Decimal>,
}

impl<'a> InventoryTable<'a> {
    pub fn new(title: &'a str, products: &'a [Product], grand_total: Option<Decimal>) -> Self {
        Self {
            title,
            products,
            grand_total,
        }
    }

    fn widths() -> [Constraint; 5] {
        [
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(14),
        ]
    }
}

impl Component for InventoryTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title));

        if self.products.is_empty() && self.grand_total.is_some() {
            let empty = Paragraph::new(vec![
                Line::from("No products yet. Choose \"Add Product\" to create one."),
                Line::from(""),
                Line::from(format!("Grand Total: {}", format_amount(Decimal::ZERO))),
            ])
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Name column gets whatever the fixed columns leave over
        let name_width = area.width.saturating_sub(2 + 6 + 12 + 12 + 14 + 4) as usize;

        let header = Row::new(COLUMNS.iter().map(|c| right_aligned_unless_text(c)))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows = self.products.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.id().to_string()),
                Cell::from(truncate_to_width(p.name(), name_width)),
                Cell::from(Text::from(p.quantity().normalize().to_string()).alignment(Alignment::Right)),
                Cell::from(Text::from(format_amount(p.unit_price())).alignment(Alignment::Right)),
                Cell::from(Text::from(format_amount(p.total())).alignment(Alignment::Right)),
            ])
        });

        let mut table = Table::new(rows, Self::widths()).header(header).block(block);

        if let Some(total) = self.grand_total {
            let footer = Row::new(vec![
                Cell::from(""),
                Cell::from("Grand Total"),
                Cell::from(""),
                Cell::from(""),
                Cell::from(Text::from(format_amount(total)).alignment(Alignment::Right)),
            ])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .top_margin(1);
            table = table.footer(footer);
        }

        frame.render_widget(table, area);
    }
}

fn right_aligned_unless_text(column: &'static str) -> Cell<'static> {
    match column {
        "Id" | "Name" => Cell::from(column),
        _ => Cell::from(Text::from(column).alignment(Alignment::Right)),
    }
}

/// Truncate to `max_width` display columns, adding "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_products;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use rust_decimal_macros::dec;

    fn render_to_string(table: &mut InventoryTable, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| table.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_rows_and_grand_total() {
        let products = sample_products();
        let mut table = InventoryTable::new("Inventory", &products, Some(dec!(40)));
        let text = render_to_string(&mut table, 80, 10);

        assert!(text.contains("Pen"));
        assert!(text.contains("Cup"));
        assert!(text.contains("25.00"));
        assert!(text.contains("Grand Total"));
        assert!(text.contains("40.00"));
    }

    #[test]
    fn test_empty_inventory_shows_zero_total() {
        let mut table = InventoryTable::new("Inventory", &[], Some(Decimal::ZERO));
        let text = render_to_string(&mut table, 80, 6);
        assert!(text.contains("No products yet"));
        assert!(text.contains("0.00"));
    }

    #[test]
    fn test_single_row_without_footer() {
        let products = sample_products();
        let mut table = InventoryTable::new("Target", &products[..1], None);
        let text = render_to_string(&mut table, 80, 6);
        assert!(text.contains("Pen"));
        assert!(!text.contains("Grand Total"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Pen", 10), "Pen");
        assert_eq!(truncate_to_width("Fountain Pen", 8), "Fount...");
        assert_eq!(truncate_to_width("Fountain Pen", 2), "..");
        // Wide characters count double
        assert_eq!(truncate_to_width("文房具セット", 7), "文房...");
    }
}
