//! TUI application main module
//!
//! Owns the terminal and runs the event loop.

use crate::i18n::Language;
use crate::nav::Route;
use crate::restaurant::RestaurantRecord;
use crate::tui::event::{EventPoll, TuiEvent, disable_mouse, enable_mouse};
use crate::tui::state::AppState;
use crate::tui::ui::render;
use ratatui::DefaultTerminal;
use std::time::Instant;
use tracing::info;

/// TUI application
#[derive(Debug)]
pub struct TuiApp {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
}

impl TuiApp {
    /// Take over the terminal and build the initial state
    pub fn new(
        records: Vec<RestaurantRecord>,
        language: Language,
        start: Route,
    ) -> std::io::Result<Self> {
        let terminal = ratatui::init();
        if let Err(e) = enable_mouse() {
            ratatui::restore();
            return Err(e);
        }
        let width = terminal.size().map(|s| s.width).unwrap_or_default();
        let mut state = AppState::new(records, language, width);
        if start != state.route {
            state.navigate(start);
        }

        Ok(Self {
            terminal,
            event_poll: EventPoll::default(),
            state,
        })
    }

    /// Run until the user quits, then give the terminal back
    pub fn run(&mut self) -> std::io::Result<()> {
        let result = self.event_loop();
        // Restore even when the loop failed
        let mouse = disable_mouse();
        ratatui::restore();
        result.and(mouse)
    }

    fn event_loop(&mut self) -> std::io::Result<()> {
        info!(language = %self.state.language, "Interactive browser started");
        render(&mut self.terminal, &mut self.state, Instant::now())?;

        loop {
            let event = self.event_poll.next()?;
            let now = Instant::now();
            match event {
                // Keep redrawing while a menu fades in or out
                TuiEvent::None => {
                    if self.state.nav.is_animating(now) {
                        render(&mut self.terminal, &mut self.state, now)?;
                    }
                }
                event => {
                    if self.state.handle_event(event, now) {
                        break;
                    }
                    render(&mut self.terminal, &mut self.state, now)?;
                }
            }
        }

        info!("Interactive browser closed");
        Ok(())
    }
}
