//! # Confirm Dialog
//!
//! Renders a `Prompt::Confirm` as a question with Yes/No buttons. `y`/`n`
//! answer directly; Left/Right move the highlight, which starts on the
//! prompt's default; Enter takes the highlighted answer; Esc cancels.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CONFIRM_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    Answer(bool),
    Cancel,
}

pub struct ConfirmState {
    pub message: String,
    pub default_yes: bool,
    /// Currently highlighted answer
    pub yes_selected: bool,
}

impl ConfirmState {
    pub fn new(message: impl Into<String>, default_yes: bool) -> Self {
        Self {
            message: message.into(),
            default_yes,
            yes_selected: default_yes,
        }
    }
}

impl EventHandler for ConfirmState {
    type Event = ConfirmEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ConfirmEvent> {
        match event {
            TuiEvent::InputChar('y' | 'Y') => Some(ConfirmEvent::Answer(true)),
            TuiEvent::InputChar('n' | 'N') => Some(ConfirmEvent::Answer(false)),
            TuiEvent::Submit => Some(ConfirmEvent::Answer(self.yes_selected)),
            TuiEvent::Escape => Some(ConfirmEvent::Cancel),
            TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::CursorUp | TuiEvent::CursorDown => {
                self.yes_selected = !self.yes_selected;
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for a confirmation.
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmState) -> Self {
        Self { state }
    }
}

impl Component for ConfirmDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = |label: &'static str, active: bool| {
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(label, style)
        };
        let keys = if self.state.default_yes { "[Y/n]" } else { "[y/N]" };

        let lines = vec![
            Line::from(vec![
                Span::raw(self.state.message.as_str()),
                Span::styled(format!(" {keys}"), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                button(" Yes ", self.state.yes_selected),
                Span::raw("   "),
                button(" No ", !self.state.yes_selected),
            ])
            .alignment(Alignment::Center),
        ];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
