//! TUI state module

pub mod app;
pub mod list;
pub mod selection;

pub use app::{AppState, Focus, Hit, HitMap};
pub use list::{FilterChip, ListPageState};
pub use selection::{Selectable, SelectionState};
