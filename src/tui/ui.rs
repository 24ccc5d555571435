//! UI rendering module
//!
//! Draws the navigation bar, the current page and any open menu, recording
//! clickable regions as it goes.

use crate::nav::Route;
use crate::tui::components::{page_layout, render_hint};
use crate::tui::screens;
use crate::tui::state::{AppState, Focus};
use ratatui::{DefaultTerminal, Frame};
use rust_i18n::t;
use std::time::Instant;

/// Draw one frame
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState, now: Instant) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, state, now))?;
    Ok(())
}

/// Draw the whole interface into a frame
pub fn draw(frame: &mut Frame, state: &mut AppState, now: Instant) {
    state.hits.clear();
    let [nav, body, footer] = page_layout(frame.area());

    let controls = screens::nav::draw_bar(frame, nav, state);

    match state.route {
        Route::List => screens::list::draw(frame, body, state),
        Route::About => screens::about::draw(frame, body, state),
        route => screens::page::draw(frame, body, state, route),
    }

    render_hint(&hint(state), frame, footer);

    // Menus go last so they sit above the page and win hit tests
    screens::nav::draw_menus(frame, &controls, state, now);
}

fn hint(state: &AppState) -> String {
    let locale = state.language.tag();
    let sections = state.route == Route::List && state.list.has_records();
    let hint = if state.nav.open_dropdown().is_some() {
        t!("hint_nav_open", locale = locale)
    } else {
        match state.focus {
            Focus::Nav if sections => t!("hint_nav", locale = locale),
            Focus::Nav => t!("hint_page", locale = locale),
            Focus::Filters => t!("hint_filters", locale = locale),
            Focus::Results => t!("hint_results", locale = locale),
        }
    };
    hint.to_string()
}
