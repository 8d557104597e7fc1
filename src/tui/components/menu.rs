//! # Menu Component
//!
//! Renders a `Prompt::Choice`: a titled list of options with a highlighted
//! selection. Up/Down wrap around at both ends, number keys jump straight to
//! an option, Enter picks the highlighted one.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState` for as long as the prompt is active
//! - `Menu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::prompt::Choice;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for an active menu.
pub struct MenuState {
    pub title: &'static str,
    pub options: &'static [Choice],
    pub selected: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new(title: &'static str, options: &'static [Choice]) -> Self {
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title,
            options,
            selected: 0,
            list_state,
        }
    }

    /// Rows needed to show every option plus the border.
    pub fn height(&self) -> u16 {
        self.options.len() as u16 + 2
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

/// Events emitted by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select(Choice),
    Dismiss,
}

impl EventHandler for MenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        if self.options.is_empty() {
            return None;
        }
        let last = self.options.len() - 1;
        match event {
            TuiEvent::Escape => Some(MenuEvent::Dismiss),
            TuiEvent::CursorUp => {
                let index = if self.selected == 0 { last } else { self.selected - 1 };
                self.select(index);
                None
            }
            TuiEvent::CursorDown => {
                let index = if self.selected >= last { 0 } else { self.selected + 1 };
                self.select(index);
                None
            }
            TuiEvent::Home => {
                self.select(0);
                None
            }
            TuiEvent::End => {
                self.select(last);
                None
            }
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)? as usize;
                let choice = *self.options.get(index.checked_sub(1)?)?;
                self.select(index - 1);
                Some(MenuEvent::Select(choice))
            }
            TuiEvent::Submit => self.options.get(self.selected).copied().map(MenuEvent::Select),
            _ => None,
        }
    }
}

/// Transient render wrapper for a menu.
pub struct Menu<'a> {
    state: &'a mut MenuState,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a mut MenuState) -> Self {
        Self { state }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.state.title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC | Modifier::UNDERLINED),
            ))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let style = if i == self.state.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if i == self.state.selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(choice.label(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::MAIN_MENU;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_down_wraps_to_top() {
        let mut menu = MenuState::new("Inventory Menu", MAIN_MENU);
        for _ in 0..MAIN_MENU.len() {
            menu.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_up_wraps_to_bottom() {
        let mut menu = MenuState::new("Inventory Menu", MAIN_MENU);
        menu.handle_event(&TuiEvent::CursorUp);
        assert_eq!(menu.selected, MAIN_MENU.len() - 1);
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit),
            Some(MenuEvent::Select(Choice::Exit))
        );
    }

    #[test]
    fn test_number_shortcut_selects() {
        let mut menu = MenuState::new("Inventory Menu", MAIN_MENU);
        assert_eq!(
            menu.handle_event(&TuiEvent::InputChar('3')),
            Some(MenuEvent::Select(Choice::About))
        );
        assert_eq!(menu.selected, 2);
    }

    #[test]
    fn test_out_of_range_shortcut_is_ignored() {
        let mut menu = MenuState::new("Inventory Menu", MAIN_MENU);
        assert_eq!(menu.handle_event(&TuiEvent::InputChar('0')), None);
        assert_eq!(menu.handle_event(&TuiEvent::InputChar('9')), None);
        assert_eq!(menu.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_escape_dismisses() {
        let mut menu = MenuState::new("Inventory Menu", MAIN_MENU);
        assert_eq!(menu.handle_event(&TuiEvent::Escape), Some(MenuEvent::Dismiss));
    }

    #[test]
    fn test_render_lists_options() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MenuState::new("Inventory Menu", MAIN_MENU);

        terminal
            .draw(|f| Menu::new(&mut state).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Inventory Menu"));
        assert!(text.contains("Inventory List"));
        assert!(text.contains("Exit"));
    }
}
