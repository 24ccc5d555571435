//! Restaurant list page rendering

use crate::content::ListContent;
use crate::render::ListItemView;
use crate::tui::components::{pill, pill_width, truncate_value, wrap_lines};
use crate::tui::state::{AppState, FilterChip, Focus, Hit, Selectable};
use crate::tui::theme::{HIGHLIGHT_SYMBOL, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, Paragraph, Wrap},
};
use rust_i18n::t;
use unicode_width::UnicodeWidthStr;

/// One placed element of the filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    x: u16,
    y: u16,
    text: String,
    /// Chip index, `None` for a group caption
    chip: Option<usize>,
}

fn chip_text(chip: FilterChip, state: &AppState, content: &ListContent) -> String {
    let label = chip.label(content);
    if chip.is_checked(&state.list.filter) {
        format!("✓ {label}")
    } else {
        label.to_string()
    }
}

/// Group chips under their captions: offerings, places, then the two flags
fn chip_groups(state: &AppState, content: &ListContent) -> Vec<(Option<&'static str>, Vec<(usize, String)>)> {
    let mut offers = Vec::new();
    let mut places = Vec::new();
    let mut flags = Vec::new();
    for (i, chip) in state.list.chips.iter().enumerate() {
        let entry = (i, chip_text(*chip, state, content));
        match chip {
            FilterChip::Offer(_) => offers.push(entry),
            FilterChip::Place(_) => places.push(entry),
            FilterChip::Delivery | FilterChip::StaffPick => flags.push(entry),
        }
    }
    vec![
        (Some(content.offers_label), offers),
        (Some(content.places_label), places),
        (None, flags),
    ]
}

/// Place groups left to right, each on fresh rows, wrapping at `width`
fn layout_chips(
    groups: &[(Option<&'static str>, Vec<(usize, String)>)],
    width: u16,
) -> (Vec<Cell>, u16) {
    let mut cells = Vec::new();
    let mut y = 0u16;
    for (caption, chips) in groups {
        let mut x = 0u16;
        let mut place = |text: String, chip: Option<usize>, cell_width: u16| {
            if x > 0 && x.saturating_add(cell_width) > width {
                x = 0;
                y += 1;
            }
            cells.push(Cell { x, y, text, chip });
            x = x.saturating_add(cell_width).saturating_add(1);
        };
        if let Some(caption) = caption {
            let text = format!("{caption}:");
            let caption_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            place(text, None, caption_width);
        }
        for (index, text) in chips {
            place(text.clone(), Some(*index), pill_width(text));
        }
        y += 1;
    }
    (cells, y)
}

/// Draw the list page into the body area
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let content = &state.content().list;
    let lang = state.language.tag();

    if !state.list.has_records() {
        let [title_area, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);
        render_title(frame, title_area, content.title);
        frame.render_widget(
            Paragraph::new(t!("list_loading", locale = lang).to_string())
                .style(theme().warning())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
        return;
    }

    let groups = chip_groups(state, content);
    let (cells, chip_rows) = layout_chips(&groups, area.width);

    let [title_area, chips_area, count_area, results_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(chip_rows),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(area);

    render_title(frame, title_area, content.title);
    draw_chips(frame, chips_area, state, &cells);

    let count = t!(
        "list_count",
        locale = lang,
        shown = state.list.items().len(),
        total = state.list.total()
    );
    frame.render_widget(
        Paragraph::new(Line::styled(count.to_string(), theme().hint())),
        Rect { y: count_area.y + 1, height: 1, ..count_area }.intersection(count_area),
    );

    if state.list.items().is_empty() {
        frame.render_widget(
            Paragraph::new(t!("list_no_matches", locale = lang).to_string())
                .style(theme().warning())
                .alignment(Alignment::Center),
            results_area,
        );
        return;
    }

    let text_width = usize::from(results_area.width).saturating_sub(HIGHLIGHT_SYMBOL.width() + 1);
    let items: Vec<ListItem> = state
        .list
        .items()
        .iter()
        .map(|item| ListItem::new(card(item, text_width)))
        .collect();

    let highlight = if state.focus == Focus::Results {
        Style::new().add_modifier(Modifier::REVERSED)
    } else {
        Style::new()
    };
    let results = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(results, results_area, &mut state.list.results.list_state);
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    frame.render_widget(
        Paragraph::new(Line::styled(title.to_string(), theme().title())),
        area,
    );
}

fn draw_chips(frame: &mut Frame, area: Rect, state: &mut AppState, cells: &[Cell]) {
    let focused = (state.focus == Focus::Filters)
        .then(|| state.list.chip_cursor.selected())
        .flatten();

    for cell in cells {
        let Some(y) = area.y.checked_add(cell.y).filter(|y| *y < area.bottom()) else {
            continue;
        };
        let x = area.x.saturating_add(cell.x);
        let (span, width) = match cell.chip {
            None => (
                Span::styled(cell.text.clone(), theme().hint()),
                u16::try_from(cell.text.width()).unwrap_or(u16::MAX),
            ),
            Some(index) => {
                let checked = state
                    .list
                    .chips
                    .get(index)
                    .is_some_and(|c| c.is_checked(&state.list.filter));
                let style = if focused == Some(index) {
                    theme().selected()
                } else if checked {
                    theme().chip_on()
                } else {
                    theme().chip_off()
                };
                (pill(&cell.text, style), pill_width(&cell.text))
            }
        };
        let rect = Rect::new(x, y, width, 1).intersection(area);
        if rect.is_empty() {
            continue;
        }
        frame.render_widget(Paragraph::new(Line::from(span)), rect);
        if let Some(index) = cell.chip {
            state.hits.push(rect, Hit::Chip(index));
        }
    }
}

/// Multi-line entry for one restaurant
fn card(item: &ListItemView, width: usize) -> Text<'static> {
    let mut lines = Vec::new();

    let mut heading = vec![Span::styled(
        truncate_value(item.name.as_deref().unwrap_or_default(), width),
        theme().title(),
    )];
    for badge in [item.delivery_badge, item.staff_pick_badge].into_iter().flatten() {
        heading.push(Span::raw(" "));
        heading.push(pill(badge, theme().badge()));
    }
    lines.push(Line::from(heading));

    for detail in [&item.address, &item.phone].into_iter().flatten() {
        lines.push(Line::styled(truncate_value(detail, width), theme().hint()));
    }
    if let Some(description) = &item.description {
        lines.extend(wrap_lines(description, width, theme().normal()));
    }

    let offers: Vec<Span> = item
        .visible_offers()
        .flat_map(|label| [pill(label, theme().badge()), Span::raw(" ")])
        .collect();
    if !offers.is_empty() {
        lines.push(Line::from(offers));
    }

    if let Some(cta) = &item.call_to_action {
        lines.push(Line::from(vec![
            Span::styled(format!("→ {}", cta.label), theme().chip_off()),
            Span::raw("  "),
            Span::styled(
                truncate_value(&cta.href, width.saturating_sub(cta.label.width() + 4)),
                theme().hint().add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    lines.push(Line::default());
    Text::from(lines)
}
