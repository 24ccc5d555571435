//! Jantarada - restaurant directory
//!
//! This library provides the pieces of the Jantarada restaurant directory:
//! - Fetching the restaurant list from Airtable into a local snapshot
//! - Filtering by delivery, staff picks, offerings and places
//! - Rendering list items with pt-PT/en-GB content
//! - Navigation menus with dropdown state machines
//! - An interactive terminal browser built on Ratatui

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en-GB");

pub mod airtable;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod nav;
pub mod render;
pub mod restaurant;
pub mod snapshot;
pub mod tui;

pub use airtable::{AirtableSource, RestaurantSource, StaticSource};
pub use cli::{Cli, Command};
pub use config::{AirtableConfig, Config, ConfigError};
pub use content::{ContentBundle, content};
pub use error::{Error, Result};
pub use filter::FilterState;
pub use i18n::{Language, detect_language, init_locale};
pub use nav::{Breakpoint, Dropdown, MenuEvent, MenuState, NavBar, Route};
pub use render::{ListItemView, normalize_url, render_list};
pub use restaurant::RestaurantRecord;
pub use snapshot::Snapshot;
pub use tui::{TuiApp, should_run_interactive};
