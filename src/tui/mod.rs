//! Ratatui terminal UI module
//!
//! Interactive browser for the restaurant directory.

pub mod app;
pub mod components;
pub mod display;
pub mod event;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use display::{print_list, should_run_interactive};
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, FilterChip, Focus, ListPageState, SelectionState};
pub use theme::{Theme, theme};
pub use ui::render;
