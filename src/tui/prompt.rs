//! # Prompt Widget
//!
//! Bridges a core `Prompt` to the component that asks it, and that
//! component's answer back to a core `Action`.
//!
//! ```text
//! Prompt::Choice  → MenuState    → MenuEvent    → Action::Select / Cancel
//! Prompt::Text    → InputBox     → InputEvent   → Action::Submit / Cancel
//! Prompt::Confirm → ConfirmState → ConfirmEvent → Action::Confirm / Cancel
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::prompt::Prompt;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{
    CONFIRM_HEIGHT, ConfirmDialog, ConfirmEvent, ConfirmState, INPUT_HEIGHT, InputBox, InputEvent,
    Menu, MenuEvent, MenuState,
};
use crate::tui::event::TuiEvent;

pub enum PromptWidget {
    Menu(MenuState),
    Input(InputBox),
    Confirm(ConfirmState),
}

impl PromptWidget {
    pub fn from_prompt(prompt: &Prompt) -> Self {
        match prompt {
            Prompt::Choice { title, options } => PromptWidget::Menu(MenuState::new(*title, *options)),
            Prompt::Text {
                label,
                hint,
                initial,
            } => PromptWidget::Input(InputBox::new(*label, *hint, initial.as_deref())),
            Prompt::Confirm {
                message,
                default_yes,
            } => PromptWidget::Confirm(ConfirmState::new(message.clone(), *default_yes)),
        }
    }

    /// Rows this widget wants at the bottom of the screen.
    pub fn height(&self) -> u16 {
        match self {
            PromptWidget::Menu(menu) => menu.height(),
            PromptWidget::Input(_) => INPUT_HEIGHT,
            PromptWidget::Confirm(_) => CONFIRM_HEIGHT,
        }
    }

    /// Feeds a key to the active component; returns the action once it has
    /// an answer.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match self {
            PromptWidget::Menu(menu) => match menu.handle_event(event)? {
                MenuEvent::Select(choice) => Some(Action::Select(choice)),
                MenuEvent::Dismiss => Some(Action::Cancel),
            },
            PromptWidget::Input(input) => match input.handle_event(event)? {
                InputEvent::Submit(text) => Some(Action::Submit(text)),
                InputEvent::Cancel => Some(Action::Cancel),
                InputEvent::ContentChanged => None,
            },
            PromptWidget::Confirm(confirm) => match confirm.handle_event(event)? {
                ConfirmEvent::Answer(yes) => Some(Action::Confirm(yes)),
                ConfirmEvent::Cancel => Some(Action::Cancel),
            },
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            PromptWidget::Menu(menu) => Menu::new(menu).render(frame, area),
            PromptWidget::Input(input) => input.render(frame, area),
            PromptWidget::Confirm(confirm) => ConfirmDialog::new(confirm).render(frame, area),
        }
    }
}
