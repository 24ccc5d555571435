//! Common UI components module
//!
//! Layout and text helpers shared by the screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::theme;

/// Page layout: navigation bar, body, key hints
pub fn page_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Render bottom hint text
pub fn render_hint(hint: &str, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme().hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// Padded label span, e.g. ` Food `
pub fn pill(label: &str, style: Style) -> Span<'static> {
    Span::styled(format!(" {label} "), style)
}

/// Display width of a padded label
pub fn pill_width(label: &str) -> u16 {
    u16::try_from(label.width() + 2).unwrap_or(u16::MAX)
}

/// Truncate by display width, avoiding UTF-8 boundary issues
pub fn truncate_value(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    let mut current_width = 0;
    let mut output = String::new();

    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        output.push(ch);
        current_width += ch_width;
    }

    output.push_str("...");
    output
}

/// Wrap by display width, breaking between words where possible
pub fn wrap_lines(value: &str, max_width: usize, style: Style) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![Line::from(String::new())];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in value.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() { word_width } else { word_width + 1 };
        if current_width + needed > max_width && !current.is_empty() {
            lines.push(Line::styled(std::mem::take(&mut current), style));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        if word_width > max_width {
            let truncated = truncate_value(word, max_width);
            current_width += truncated.width();
            current.push_str(&truncated);
        } else {
            current.push_str(word);
            current_width += word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::styled(current, style));
    }

    lines
}
