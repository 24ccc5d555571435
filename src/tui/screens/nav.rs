//! Navigation bar and dropdown rendering

use crate::nav::{Align, Dropdown, NavControl, Target};
use crate::tui::components::{pill, pill_width};
use crate::tui::state::{AppState, Hit};
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Dropdown width, matching the site's fixed menu width
const MENU_WIDTH: u16 = 24;

const LOGO: &str = "◆";

fn control_text(control: &NavControl) -> String {
    match control {
        NavControl::Dropdown(d) if d.is_open() => format!("{} ▴", d.label),
        NavControl::Dropdown(d) => format!("{} ▾", d.label),
        NavControl::Link(l) => l.label.to_string(),
    }
}

/// Draw the bar; returns the area of each control, indexed like the bar
pub fn draw_bar(frame: &mut Frame, area: Rect, state: &mut AppState) -> Vec<Rect> {
    let row = Rect { height: 1, ..area };
    let mut spans = Vec::new();
    let mut rects = Vec::new();

    let logo = format!("{LOGO} {}", state.nav.site_name);
    let logo_style = if state.nav_focused(0) {
        theme().selected()
    } else {
        theme().title()
    };
    let logo_width = pill_width(&logo);
    state.hits.push(
        Rect { width: logo_width.min(row.width), ..row },
        Hit::Nav(Target::Logo),
    );
    spans.push(pill(&logo, logo_style));
    spans.push(Span::raw("  "));
    let mut x = row.x + logo_width + 2;

    let left = state.nav.left().len();
    for (i, control) in state.nav.left().iter().enumerate() {
        let text = control_text(control);
        let width = pill_width(&text);
        let rect = Rect::new(x, row.y, width, 1).intersection(row);
        rects.push(rect);
        spans.push(pill(&text, control_style(state, i)));
        spans.push(Span::raw(" "));
        x += width + 1;
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), row);

    // Right-hand controls, flush with the right edge
    let right_texts: Vec<String> = state.nav.right().iter().map(control_text).collect();
    let right_width: u16 = right_texts.iter().map(|t| pill_width(t)).sum();
    let mut x = row.right().saturating_sub(right_width).max(x);
    for (offset, text) in right_texts.iter().enumerate() {
        let index = left + offset;
        let width = pill_width(text);
        let rect = Rect::new(x, row.y, width, 1).intersection(row);
        frame.render_widget(
            Paragraph::new(Line::from(pill(text, control_style(state, index)))),
            rect,
        );
        rects.push(rect);
        x += width;
    }

    for (i, rect) in rects.iter().enumerate() {
        state.hits.push(*rect, Hit::Nav(Target::Control(i)));
    }

    if area.height > 1 {
        let rule = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new("─".repeat(rule.width as usize)).style(theme().border()),
            rule,
        );
    }

    rects
}

fn control_style(state: &AppState, index: usize) -> ratatui::style::Style {
    if state.nav_focused(index + 1) {
        theme().selected()
    } else {
        theme().normal()
    }
}

/// Draw every dropdown that is open or still fading out
///
/// Only open dropdowns register their items as clickable.
pub fn draw_menus(frame: &mut Frame, controls: &[Rect], state: &mut AppState, now: Instant) {
    let bounds = frame.area();
    for (index, label_rect) in controls.iter().enumerate() {
        let Some(dropdown) = state.nav.dropdown(index) else {
            continue;
        };
        if !dropdown.presence().is_visible(now) {
            continue;
        }

        let visibility = dropdown.presence().progress(now);
        let area = menu_area(dropdown, *label_rect, visibility, bounds);
        if area.is_empty() {
            continue;
        }

        let highlighted = (dropdown.is_open() && state.nav_focused(index + 1))
            .then_some(state.item_cursor);
        let items: Vec<ListItem> = dropdown
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let pad = (MENU_WIDTH as usize)
                    .saturating_sub(item.label.width() + 5)
                    .max(1);
                let line = format!(" {}{}⟶", item.label, " ".repeat(pad));
                let style = if highlighted == Some(i) {
                    theme().selected()
                } else {
                    theme().menu(visibility)
                };
                ListItem::new(line).style(style)
            })
            .collect();

        frame.render_widget(Clear, area);
        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(theme().border()),
            ),
            area,
        );

        if dropdown.is_open() {
            for item in 0..dropdown.items.len() {
                let row = area.y + 1 + item as u16;
                if row >= area.bottom().saturating_sub(1) {
                    break;
                }
                state.hits.push(
                    Rect::new(area.x + 1, row, area.width.saturating_sub(2), 1),
                    Hit::Nav(Target::Item { control: index, item }),
                );
            }
        }
    }
}

/// Menu rectangle under its label; slides down one row as it appears
fn menu_area(dropdown: &Dropdown, label: Rect, visibility: f32, bounds: Rect) -> Rect {
    let slide = u16::from(visibility >= 0.5);
    let height = dropdown.items.len() as u16 + 2;
    let x = match dropdown.align {
        Align::Left => label.x,
        Align::Right => label.right().saturating_sub(MENU_WIDTH),
    };
    Rect::new(x, label.bottom() + slide, MENU_WIDTH, height).intersection(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavLink;
    use crate::nav::Route;

    fn menu(align: Align) -> Dropdown {
        Dropdown::new(
            "Restaurants",
            vec![
                NavLink::new(Route::Map, "Map view"),
                NavLink::new(Route::List, "List view"),
            ],
        )
        .aligned(align)
    }

    #[test]
    fn test_menu_area_alignment() {
        let bounds = Rect::new(0, 0, 100, 40);
        let label = Rect::new(70, 0, 20, 1);

        let left = menu_area(&menu(Align::Left), label, 1.0, bounds);
        assert_eq!(left, Rect::new(70, 2, 24, 4));

        let right = menu_area(&menu(Align::Right), label, 1.0, bounds);
        assert_eq!(right.right(), label.right());
    }

    #[test]
    fn test_menu_area_slides_in() {
        let bounds = Rect::new(0, 0, 100, 40);
        let label = Rect::new(10, 0, 16, 1);
        assert_eq!(menu_area(&menu(Align::Left), label, 0.2, bounds).y, 1);
        assert_eq!(menu_area(&menu(Align::Left), label, 0.8, bounds).y, 2);
    }

    #[test]
    fn test_menu_area_clipped() {
        let bounds = Rect::new(0, 0, 30, 3);
        let label = Rect::new(20, 0, 10, 1);
        let area = menu_area(&menu(Align::Left), label, 1.0, bounds);
        assert!(area.right() <= 30);
        assert!(area.bottom() <= 3);
    }

    #[test]
    fn test_control_text_marks_dropdowns() {
        let mut dropdown = menu(Align::Left);
        assert_eq!(control_text(&NavControl::Dropdown(dropdown.clone())), "Restaurants ▾");
        dropdown.handle(crate::nav::MenuEvent::ActivateLabel, Instant::now());
        assert_eq!(control_text(&NavControl::Dropdown(dropdown)), "Restaurants ▴");
        assert_eq!(
            control_text(&NavControl::Link(NavLink::new(Route::About, "About"))),
            "About"
        );
    }
}
