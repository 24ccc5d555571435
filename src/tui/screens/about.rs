//! About page rendering

use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};

/// Readable column width for body copy
const MAX_WIDTH: u16 = 72;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let about = &state.content().about;

    let mut lines = vec![Line::styled(about.title, theme().title()), Line::default()];
    for paragraph in about.paragraphs {
        lines.push(Line::styled(*paragraph, theme().normal()));
        lines.push(Line::default());
    }

    let column = Rect {
        width: area.width.min(MAX_WIDTH),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        column,
    );
}
