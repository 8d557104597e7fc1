//! # InputBox Component
//!
//! Renders a `Prompt::Text`: one line of editable text with the field label
//! as the title and the field's constraint as a red hint underneath.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. The label and hint are props
//! taken from the prompt. A prefilled value (used while editing a product)
//! starts with the cursor at the end.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Borders above and below the single text line.
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// User backed out (Esc)
    Cancel,
    ContentChanged,
}

pub struct InputBox {
    /// Field label (Prop)
    pub label: &'static str,
    /// Constraint shown under the field (Prop)
    pub hint: &'static str,
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`
    cursor: usize,
}

impl InputBox {
    pub fn new(label: &'static str, hint: &'static str, initial: Option<&str>) -> Self {
        let buffer = initial.unwrap_or_default().to_string();
        Self {
            label,
            hint,
            cursor: buffer.len(),
            buffer,
        }
    }

    /// Display columns between the start of the buffer and the cursor.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.label))
            .title_bottom(Line::styled(format!(" {} ", self.hint), Style::default().fg(Color::Red)));

        // Scroll horizontally so the cursor stays inside the box
        let inner_width = area.width.saturating_sub(2);
        let column = self.cursor_column();
        let scroll = column.saturating_sub(inner_width.saturating_sub(1));

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, scroll))
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        frame.set_cursor_position((area.x + 1 + column - scroll, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(InputEvent::Cancel),
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: keep only the first pasted line
                let line = text.lines().next().unwrap_or_default();
                self.buffer.insert_str(self.cursor, line);
                self.cursor += line.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                let prev = prev_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                let next = next_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(self.cursor..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor)?;
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor)?;
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> Option<usize> {
    s[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> Option<usize> {
    s[pos..].chars().next().map(|c| pos + c.len_utf8())
}
