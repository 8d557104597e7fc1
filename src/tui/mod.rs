//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Prompt Sync
//!
//! The core says what it wants to ask through `App::prompt()`. After every
//! update the loop compares that with the prompt currently on screen and
//! only builds a fresh widget when they differ. A validation failure that
//! re-asks the same field therefore keeps what the user typed.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (intro spinner): draws every ~80ms.
//! - **Idle** (menus, forms): sleeps up to 500ms, only redraws on events
//!   or terminal resize.

mod component;
mod components;
mod event;
mod prompt;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::prompt::Prompt;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::prompt::PromptWidget;

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// Progress of the startup intro.
#[derive(Debug, Clone, Copy)]
pub struct Intro {
    pub elapsed: Duration,
    pub total: Duration,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Component asking the current question
    pub prompt: PromptWidget,
    /// The question `prompt` was built from
    pub active: Prompt,
    /// `Some` while the intro is showing
    pub intro: Option<Intro>,
    pub author: String,
}

impl TuiState {
    pub fn new(app: &App, intro: Option<Intro>, author: String) -> Self {
        let active = app.prompt();
        Self {
            prompt: PromptWidget::from_prompt(&active),
            active,
            intro,
            author,
        }
    }

    /// Rebuilds the prompt widget if the core now asks something else.
    pub fn sync_prompt(&mut self, app: &App) {
        let wanted = app.prompt();
        if wanted != self.active {
            debug!("Prompt changed: {:?}", wanted);
            self.prompt = PromptWidget::from_prompt(&wanted);
            self.active = wanted;
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, config));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let intro = config.show_intro.then_some(Intro {
        elapsed: Duration::ZERO,
        total: config.intro_duration,
    });
    let mut tui = TuiState::new(&app, intro, config.author);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if let Some(intro) = tui.intro.as_mut() {
            intro.elapsed = start_time.elapsed();
            if intro.elapsed >= intro.total {
                debug!("Intro finished");
                tui.intro = None;
                terminal.clear()?;
            }
            needs_redraw = true;
        }
        let animating = tui.intro.is_some();

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_millis() / ANIMATION_TICK.as_millis()) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything already queued before drawing
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Any key skips the intro, Ctrl+C included
            if tui.intro.take().is_some() {
                debug!("Intro skipped");
                terminal.clear()?;
                continue;
            }

            let action = match event {
                TuiEvent::ForceQuit => Some(Action::RequestExit),
                other => tui.prompt.handle_event(&other),
            };
            let Some(action) = action else {
                continue;
            };

            match update(&mut app, action) {
                Effect::Quit => {
                    info!("Stockroom shutting down");
                    return Ok(());
                }
                Effect::ScreenChanged => terminal.clear()?,
                Effect::None => {}
            }
            tui.sync_prompt(&app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::Choice;

    #[test]
    fn test_sync_prompt_rebuilds_on_new_question() {
        let mut app = App::new();
        let mut tui = TuiState::new(&app, None, String::new());
        assert!(matches!(tui.prompt, PromptWidget::Menu(_)));

        update(&mut app, Action::Select(Choice::AddProduct));
        tui.sync_prompt(&app);
        assert!(matches!(tui.prompt, PromptWidget::Input(_)));
    }

    #[test]
    fn test_sync_prompt_keeps_typed_text_on_reprompt() {
        let mut app = App::new();
        update(&mut app, Action::Select(Choice::AddProduct));
        let mut tui = TuiState::new(&app, None, String::new());

        // Type a blank name: rejected, same field asked again
        tui.prompt.handle_event(&TuiEvent::InputChar(' '));
        update(&mut app, Action::Submit(" ".to_string()));
        assert!(app.notice.is_some());
        tui.sync_prompt(&app);

        let PromptWidget::Input(input) = &tui.prompt else {
            panic!("expected a text prompt");
        };
        assert_eq!(input.buffer, " ");
    }
}
