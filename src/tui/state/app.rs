//! Application state

use crate::content::{ContentBundle, content};
use crate::i18n::Language;
use crate::nav::{Breakpoint, NavBar, NavControl, Route, Target};
use crate::restaurant::RestaurantRecord;
use crate::tui::event::TuiEvent;
use crate::tui::state::list::ListPageState;
use crate::tui::state::selection::Selectable;
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tracing::{debug, info};

/// Section receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Nav,
    Filters,
    Results,
}

/// Something clickable drawn in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Nav(Target),
    Chip(usize),
}

/// Clickable regions recorded while drawing
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, hit: Hit) {
        self.regions.push((area, hit));
    }

    /// Topmost region at a position; later regions are drawn above earlier ones
    pub fn at(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, hit)| *hit)
    }
}

/// Whole interface state
#[derive(Debug)]
pub struct AppState {
    pub language: Language,
    pub route: Route,
    pub focus: Focus,
    pub breakpoint: Breakpoint,
    pub nav: NavBar,
    /// Focused nav position: 0 is the logo, then one per control
    pub nav_cursor: usize,
    /// Highlighted item in the open dropdown
    pub item_cursor: usize,
    pub list: ListPageState,
    pub hits: HitMap,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(records: Vec<RestaurantRecord>, language: Language, width: u16) -> Self {
        let bundle = content(language);
        let breakpoint = Breakpoint::from_width(width);
        let mut state = Self {
            language,
            route: Route::List,
            focus: Focus::Nav,
            breakpoint,
            nav: NavBar::new(&bundle.nav, breakpoint),
            nav_cursor: 0,
            item_cursor: 0,
            list: ListPageState::new(records, &bundle.list),
            hits: HitMap::default(),
            should_exit: false,
        };
        state.navigate(Route::List);
        state
    }

    pub fn content(&self) -> &'static ContentBundle {
        content(self.language)
    }

    /// Sections reachable with Tab on the current page
    fn focus_order(&self) -> &'static [Focus] {
        match self.route {
            Route::List if self.list.has_records() => &[Focus::Nav, Focus::Filters, Focus::Results],
            _ => &[Focus::Nav],
        }
    }

    fn cycle_focus(&mut self, forward: bool, now: Instant) {
        self.nav.dismiss(now);
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Switch between pt-PT and en-GB, keeping filters and page
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        let bundle = self.content();
        self.nav = NavBar::new(&bundle.nav, self.breakpoint);
        self.list.refresh(&bundle.list);
        info!(language = %self.language, "Language changed");
    }

    /// Track terminal width; rebuilds the nav bar when the layout class changes
    pub fn resize(&mut self, width: u16) {
        let breakpoint = Breakpoint::from_width(width);
        if breakpoint != self.breakpoint {
            self.breakpoint = breakpoint;
            self.nav = NavBar::new(&self.content().nav, breakpoint);
            self.nav_cursor = self.nav_cursor.min(self.nav.controls().len());
            debug!(?breakpoint, "Breakpoint changed");
        }
    }

    /// Go to a page
    pub fn navigate(&mut self, route: Route) {
        info!(path = route.path(), "Navigate");
        self.route = route;
        self.focus = if route == Route::List && self.list.has_records() {
            Focus::Filters
        } else {
            Focus::Nav
        };
    }

    fn nav_target(&self) -> Target {
        match self.nav_cursor {
            0 => Target::Logo,
            n => Target::Control(n - 1),
        }
    }

    fn activate(&mut self, target: Target, now: Instant) {
        if let Some(route) = self.nav.activate(target, now) {
            self.navigate(route);
        }
        if self.nav.open_dropdown().is_some() {
            self.item_cursor = 0;
        }
    }

    /// Apply one input event; returns true when the app should exit
    pub fn handle_event(&mut self, event: TuiEvent, now: Instant) -> bool {
        match event {
            TuiEvent::CtrlC | TuiEvent::Char('q') => {
                self.should_exit = true;
                return true;
            }
            TuiEvent::Char('L') | TuiEvent::Char('l') => self.toggle_language(),
            TuiEvent::Tab => self.cycle_focus(true, now),
            TuiEvent::BackTab => self.cycle_focus(false, now),
            TuiEvent::Resize(width, _) => self.resize(width),
            TuiEvent::Click(column, row) => self.click(column, row, now),
            event => match self.focus {
                Focus::Nav => self.handle_nav(event, now),
                Focus::Filters => self.handle_filters(event),
                Focus::Results => self.handle_results(event),
            },
        }
        false
    }

    fn handle_nav(&mut self, event: TuiEvent, now: Instant) {
        if let Some(open) = self.nav.open_dropdown() {
            let item_count = self.nav.dropdown(open).map_or(1, |d| d.items.len().max(1));
            match event {
                TuiEvent::Up => self.item_cursor = (self.item_cursor + item_count - 1) % item_count,
                TuiEvent::Down => self.item_cursor = (self.item_cursor + 1) % item_count,
                TuiEvent::Enter => self.activate(
                    Target::Item {
                        control: open,
                        item: self.item_cursor,
                    },
                    now,
                ),
                TuiEvent::Escape => self.nav.dismiss(now),
                TuiEvent::Left | TuiEvent::Right => {
                    self.nav.dismiss(now);
                    self.move_nav_cursor(event == TuiEvent::Right);
                }
                _ => {}
            }
            return;
        }

        match event {
            TuiEvent::Left => self.move_nav_cursor(false),
            TuiEvent::Right => self.move_nav_cursor(true),
            TuiEvent::Enter | TuiEvent::Down | TuiEvent::Char(' ') => {
                self.activate(self.nav_target(), now)
            }
            _ => {}
        }
    }

    fn move_nav_cursor(&mut self, forward: bool) {
        let positions = self.nav.controls().len() + 1;
        self.nav_cursor = if forward {
            (self.nav_cursor + 1) % positions
        } else {
            (self.nav_cursor + positions - 1) % positions
        };
    }

    fn handle_filters(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Left | TuiEvent::Up => self.list.chip_cursor.prev(),
            TuiEvent::Right | TuiEvent::Down => self.list.chip_cursor.next(),
            TuiEvent::Enter | TuiEvent::Char(' ') => {
                let index = self.list.chip_cursor.selected_or_default();
                let content = self.content();
                self.list.toggle_chip(index, &content.list);
            }
            TuiEvent::Escape => self.focus = Focus::Nav,
            _ => {}
        }
    }

    fn handle_results(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Up => self.list.results.prev(),
            TuiEvent::Down => self.list.results.next(),
            TuiEvent::Home => Selectable::select(&mut self.list.results, 0),
            TuiEvent::End => self.list.results.select_last(),
            TuiEvent::Escape => self.focus = Focus::Filters,
            _ => {}
        }
    }

    /// Mouse activation; the capture layer takes it while a menu is open
    fn click(&mut self, column: u16, row: u16, now: Instant) {
        let hit = self.hits.at(column, row);
        if self.nav.open_dropdown().is_some() {
            let target = match hit {
                Some(Hit::Nav(target)) => target,
                _ => Target::Elsewhere,
            };
            self.activate(target, now);
            return;
        }

        match hit {
            Some(Hit::Nav(target)) => {
                self.focus = Focus::Nav;
                self.nav_cursor = match target {
                    Target::Control(i) => i + 1,
                    _ => 0,
                };
                self.activate(target, now);
            }
            Some(Hit::Chip(index)) => {
                self.focus = Focus::Filters;
                let content = self.content();
                self.list.toggle_chip(index, &content.list);
            }
            None => {}
        }
    }

    /// Whether the nav control at position `index` (0 = logo) has focus
    pub fn nav_focused(&self, index: usize) -> bool {
        self.focus == Focus::Nav && self.nav_cursor == index
    }

    /// Label of the control under the nav cursor
    pub fn focused_label(&self) -> Option<&'static str> {
        self.nav_cursor
            .checked_sub(1)
            .and_then(|i| self.nav.controls().get(i))
            .map(NavControl::label)
    }
}
