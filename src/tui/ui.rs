use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::landing::banner_lines;
use crate::tui::components::{AboutPanel, InventoryTable, LandingPage, StatusBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::widgets::Paragraph;
use std::slice;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, frame_index: usize) {
    if let Some(intro) = &tui.intro {
        LandingPage::new(frame_index, intro.elapsed, intro.total).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(tui.prompt.height()), Length(1)]);
    let [title_area, body_area, prompt_area, status_area] = layout.areas(frame.area());

    TitleBar::new(app.screen.title(), app.products.len()).render(frame, title_area);
    draw_body(frame, body_area, app, &tui.author);
    tui.prompt.render(frame, prompt_area);
    StatusBar::new(app.notice.as_ref()).render(frame, status_area);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App, author: &str) {
    match &app.screen {
        Screen::MainMenu | Screen::ConfirmExit => draw_banner(frame, area),
        Screen::InventoryList(_) | Screen::AddProduct(_) => {
            let listing = app.listing();
            InventoryTable::new("Inventory", listing.products, Some(listing.grand_total))
                .render(frame, area);
        }
        Screen::EditProduct { target, .. } | Screen::RemoveProduct { target, .. } => {
            let [card_area] = Layout::vertical([Constraint::Length(6)]).areas(area);
            InventoryTable::new(app.screen.title(), slice::from_ref(target), None)
                .render(frame, card_area);
        }
        Screen::About => AboutPanel::new(author).render(frame, area),
    }
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let lines = banner_lines();
    let [banner_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), banner_area);
}
