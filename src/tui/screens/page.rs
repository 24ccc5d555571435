//! Pages without a terminal rendering

use crate::nav::Route;
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};
use rust_i18n::t;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, route: Route) {
    let message = t!(
        "page_unavailable",
        locale = state.language.tag(),
        path = route.path()
    );
    let text = Text::from(vec![
        Line::styled(route.title(&state.content().nav), theme().title()),
        Line::styled(route.path(), theme().hint()),
        Line::default(),
        Line::styled(message.to_string(), theme().hint()),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
