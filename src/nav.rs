//! Navigation bar and dropdown menus
//!
//! A [`Dropdown`] is a two-state machine, closed or open. Activating its
//! label toggles it; selecting an item closes it and yields the item's route;
//! any other activation while it is open lands on a full-screen capture
//! layer and only closes it.
//!
//! The enter/exit animation is tracked separately by [`Presence`] and never
//! holds back a state change. A closing menu keeps being drawn until its exit
//! transition ends but no longer accepts input.

use crate::content::NavContent;
use std::time::{Duration, Instant};
use tracing::debug;

/// Length of the enter and exit transitions
pub const TRANSITION: Duration = Duration::from_millis(200);

/// Minimum terminal width for the wide navigation layout
pub const WIDE_MIN_COLUMNS: u16 = 80;

/// Pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Map,
    List,
    About,
    Resources,
    Submit,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Map => "/map",
            Route::List => "/list",
            Route::About => "/about",
            Route::Resources => "/resources",
            Route::Submit => "/submit",
        }
    }

    /// Localized page title
    pub fn title(self, content: &NavContent) -> &'static str {
        match self {
            Route::Home => content.site_name,
            Route::Map => content.map,
            Route::List => content.list,
            Route::About => content.about,
            Route::Resources => content.resources,
            Route::Submit => content.submit,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [
            Route::Home,
            Route::Map,
            Route::List,
            Route::About,
            Route::Resources,
            Route::Submit,
        ]
        .into_iter()
        .find(|r| r.path() == path)
    }
}

/// Layout class derived from the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    pub fn from_width(columns: u16) -> Self {
        if columns >= WIDE_MIN_COLUMNS {
            Breakpoint::Wide
        } else {
            Breakpoint::Narrow
        }
    }
}

/// Menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input to a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The label control was activated
    ActivateLabel,
    /// An item was selected
    SelectItem(usize),
    /// Activation anywhere outside the menu
    Outside,
}

/// Which side of the label the menu opens towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

impl NavLink {
    pub fn new(route: Route, label: &'static str) -> Self {
        Self { route, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Entering,
    Exiting,
}

/// Cosmetic show/hide transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    phase: Option<(Phase, Instant)>,
}

impl Presence {
    /// Reversing mid-way continues from the current visibility
    fn enter(&mut self, now: Instant) {
        let shown = self.progress(now);
        self.phase = Some((Phase::Entering, backdate(now, shown)));
    }

    fn exit(&mut self, now: Instant) {
        let shown = self.progress(now);
        self.phase = Some((Phase::Exiting, backdate(now, 1.0 - shown)));
    }

    /// Visibility in `0.0..=1.0`; 1.0 is fully shown
    pub fn progress(&self, now: Instant) -> f32 {
        let Some((phase, since)) = self.phase else {
            return 0.0;
        };
        let t = (now.saturating_duration_since(since).as_secs_f32() / TRANSITION.as_secs_f32())
            .min(1.0);
        match phase {
            Phase::Entering => t,
            Phase::Exiting => 1.0 - t,
        }
    }

    /// Whether anything should be drawn at `now`
    pub fn is_visible(&self, now: Instant) -> bool {
        match self.phase {
            Some((Phase::Entering, _)) => true,
            Some((Phase::Exiting, _)) => self.progress(now) > 0.0,
            None => false,
        }
    }

    /// Whether a transition is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.phase {
            Some((_, since)) => now.saturating_duration_since(since) < TRANSITION,
            None => false,
        }
    }
}

/// Start instant of a transition that is already `elapsed` (a fraction) done at `now`
fn backdate(now: Instant, elapsed: f32) -> Instant {
    now.checked_sub(TRANSITION.mul_f32(elapsed.clamp(0.0, 1.0)))
        .unwrap_or(now)
}

/// Dropdown menu with a label and a list of links
#[derive(Debug, Clone)]
pub struct Dropdown {
    pub label: &'static str,
    pub items: Vec<NavLink>,
    pub align: Align,
    state: MenuState,
    presence: Presence,
}

impl Dropdown {
    pub fn new(label: &'static str, items: Vec<NavLink>) -> Self {
        Self {
            label,
            items,
            align: Align::Left,
            state: MenuState::Closed,
            presence: Presence::default(),
        }
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    /// Apply an event; returns the route to navigate to, if any
    pub fn handle(&mut self, event: MenuEvent, now: Instant) -> Option<Route> {
        match (self.state, event) {
            (MenuState::Closed, MenuEvent::ActivateLabel) => {
                self.open(now);
                None
            }
            (MenuState::Open, MenuEvent::ActivateLabel | MenuEvent::Outside) => {
                self.close(now);
                None
            }
            (MenuState::Open, MenuEvent::SelectItem(index)) => {
                let route = self.items.get(index).map(|item| item.route)?;
                self.close(now);
                debug!(menu = self.label, path = route.path(), "Menu item selected");
                Some(route)
            }
            // Items are not reachable and outside clicks do nothing while closed
            (MenuState::Closed, MenuEvent::SelectItem(_) | MenuEvent::Outside) => None,
        }
    }

    fn open(&mut self, now: Instant) {
        self.state = MenuState::Open;
        self.presence.enter(now);
    }

    fn close(&mut self, now: Instant) {
        self.state = MenuState::Closed;
        self.presence.exit(now);
    }
}

/// One control in the navigation bar
#[derive(Debug, Clone)]
pub enum NavControl {
    Dropdown(Dropdown),
    Link(NavLink),
}

impl NavControl {
    pub fn label(&self) -> &'static str {
        match self {
            NavControl::Dropdown(d) => d.label,
            NavControl::Link(l) => l.label,
        }
    }
}

/// Where an activation landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Label of control `n` (dropdown label or plain link)
    Control(usize),
    /// Item `item` of dropdown `control`
    Item { control: usize, item: usize },
    /// The site logo
    Logo,
    /// Anywhere else
    Elsewhere,
}

/// The navigation bar
///
/// `left` holds the controls next to the logo, `right` the controls at the
/// far edge. Control indices run across `left` then `right`.
#[derive(Debug, Clone)]
pub struct NavBar {
    pub site_name: &'static str,
    controls: Vec<NavControl>,
    left_count: usize,
}

impl NavBar {
    /// Build the bar for a language and breakpoint
    pub fn new(content: &NavContent, breakpoint: Breakpoint) -> Self {
        let mut left = vec![NavControl::Dropdown(Dropdown::new(
            content.restaurants,
            vec![
                NavLink::new(Route::Map, content.map),
                NavLink::new(Route::List, content.list),
            ],
        ))];
        let right = match breakpoint {
            Breakpoint::Wide => {
                left.push(NavControl::Link(NavLink::new(Route::About, content.about)));
                NavControl::Dropdown(
                    Dropdown::new(
                        content.for_restaurants,
                        vec![
                            NavLink::new(Route::Resources, content.resources),
                            NavLink::new(Route::Submit, content.submit),
                        ],
                    )
                    .aligned(Align::Right),
                )
            }
            Breakpoint::Narrow => NavControl::Link(NavLink::new(Route::Submit, content.submit)),
        };

        let left_count = left.len();
        let mut controls = left;
        controls.push(right);
        Self {
            site_name: content.site_name,
            controls,
            left_count,
        }
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    pub fn left(&self) -> &[NavControl] {
        &self.controls[..self.left_count]
    }

    pub fn right(&self) -> &[NavControl] {
        &self.controls[self.left_count..]
    }

    pub fn dropdown(&self, index: usize) -> Option<&Dropdown> {
        match self.controls.get(index) {
            Some(NavControl::Dropdown(d)) => Some(d),
            _ => None,
        }
    }

    /// Index of the open dropdown, if any
    pub fn open_dropdown(&self) -> Option<usize> {
        self.controls
            .iter()
            .position(|c| matches!(c, NavControl::Dropdown(d) if d.is_open()))
    }

    /// Whether any menu is still transitioning at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.controls.iter().any(|c| match c {
            NavControl::Dropdown(d) => d.presence().is_animating(now),
            NavControl::Link(_) => false,
        })
    }

    /// Route an activation; returns the page to navigate to, if any
    ///
    /// While a dropdown is open its capture layer sits above every other
    /// control, so anything but one of its own items or its label only
    /// closes it.
    pub fn activate(&mut self, target: Target, now: Instant) -> Option<Route> {
        if let Some(open) = self.open_dropdown() {
            let event = match target {
                Target::Item { control, item } if control == open => MenuEvent::SelectItem(item),
                Target::Control(control) if control == open => MenuEvent::ActivateLabel,
                _ => MenuEvent::Outside,
            };
            return match self.controls.get_mut(open) {
                Some(NavControl::Dropdown(d)) => d.handle(event, now),
                _ => None,
            };
        }

        match target {
            Target::Logo => Some(Route::Home),
            Target::Control(index) => match self.controls.get_mut(index)? {
                NavControl::Dropdown(d) => d.handle(MenuEvent::ActivateLabel, now),
                NavControl::Link(link) => Some(link.route),
            },
            Target::Item { .. } | Target::Elsewhere => None,
        }
    }

    /// Close any open dropdown, as an outside activation would
    pub fn dismiss(&mut self, now: Instant) {
        let _ = self.activate(Target::Elsewhere, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::content;
    use crate::i18n::Language;

    fn restaurants_menu() -> Dropdown {
        Dropdown::new(
            "Restaurants",
            vec![
                NavLink::new(Route::Map, "Map view"),
                NavLink::new(Route::List, "List view"),
            ],
        )
    }

    #[test]
    fn test_menu_sequence() {
        let now = Instant::now();
        let mut menu = restaurants_menu();
        assert_eq!(menu.state(), MenuState::Closed);

        assert_eq!(menu.handle(MenuEvent::ActivateLabel, now), None);
        assert!(menu.is_open());

        assert_eq!(menu.handle(MenuEvent::Outside, now), None);
        assert!(!menu.is_open());

        assert_eq!(menu.handle(MenuEvent::ActivateLabel, now), None);
        assert!(menu.is_open());

        let mut navigations = Vec::new();
        navigations.extend(menu.handle(MenuEvent::SelectItem(1), now));
        assert!(!menu.is_open());
        assert_eq!(navigations, [Route::List]);
    }

    #[test]
    fn test_label_toggles() {
        let now = Instant::now();
        let mut menu = restaurants_menu();
        menu.handle(MenuEvent::ActivateLabel, now);
        menu.handle(MenuEvent::ActivateLabel, now);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_closed_menu_ignores_items_and_outside() {
        let now = Instant::now();
        let mut menu = restaurants_menu();
        assert_eq!(menu.handle(MenuEvent::SelectItem(0), now), None);
        assert_eq!(menu.handle(MenuEvent::Outside, now), None);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_out_of_range_item_keeps_menu_open() {
        let now = Instant::now();
        let mut menu = restaurants_menu();
        menu.handle(MenuEvent::ActivateLabel, now);
        assert_eq!(menu.handle(MenuEvent::SelectItem(9), now), None);
        assert!(menu.is_open());
    }

    #[test]
    fn test_presence_does_not_gate_state() {
        let start = Instant::now();
        let mut menu = restaurants_menu();

        menu.handle(MenuEvent::ActivateLabel, start);
        assert!(menu.is_open());
        assert_eq!(menu.presence().progress(start), 0.0);
        assert!(menu.presence().is_visible(start));

        // Closing mid-transition takes effect immediately
        let mid = start + TRANSITION / 2;
        menu.handle(MenuEvent::Outside, mid);
        assert!(!menu.is_open());
        assert!(menu.presence().is_visible(mid));
        assert!(menu.presence().is_animating(mid));

        let done = mid + TRANSITION;
        assert!(!menu.presence().is_visible(done));
        assert!(!menu.presence().is_animating(done));
    }

    #[test]
    fn test_early_close_fades_from_current_visibility() {
        let start = Instant::now();
        let mut menu = restaurants_menu();
        menu.handle(MenuEvent::ActivateLabel, start);

        let quarter = start + TRANSITION / 4;
        menu.handle(MenuEvent::Outside, quarter);
        let shown = menu.presence().progress(quarter);
        assert!(shown > 0.2 && shown < 0.3, "jumped to {shown}");

        // Fades out over the remaining quarter, not a full transition
        assert!(!menu.presence().is_visible(quarter + TRANSITION / 2));
        assert!(!menu.presence().is_animating(quarter + TRANSITION / 2));
    }

    #[test]
    fn test_reopen_while_closing_continues_from_current_visibility() {
        let start = Instant::now();
        let mut menu = restaurants_menu();
        menu.handle(MenuEvent::ActivateLabel, start);

        let closing = start + TRANSITION * 2;
        menu.handle(MenuEvent::Outside, closing);
        let reopen = closing + TRANSITION / 4;
        menu.handle(MenuEvent::ActivateLabel, reopen);

        let shown = menu.presence().progress(reopen);
        assert!(shown > 0.7 && shown < 0.8, "jumped to {shown}");
        assert_eq!(menu.presence().progress(reopen + TRANSITION / 2), 1.0);
    }

    #[test]
    fn test_presence_enter_progress() {
        let start = Instant::now();
        let mut menu = restaurants_menu();
        menu.handle(MenuEvent::ActivateLabel, start);

        let half = menu.presence().progress(start + TRANSITION / 2);
        assert!(half > 0.4 && half < 0.6);
        assert_eq!(menu.presence().progress(start + TRANSITION * 3), 1.0);
    }

    #[test]
    fn test_wide_bar_layout() {
        let bar = NavBar::new(&content(Language::English).nav, Breakpoint::Wide);
        let labels: Vec<_> = bar.controls().iter().map(NavControl::label).collect();
        assert_eq!(labels, ["Restaurants", "About", "For restaurants"]);
        assert_eq!(bar.left().len(), 2);
        assert_eq!(bar.dropdown(2).map(|d| d.align), Some(Align::Right));
    }

    #[test]
    fn test_narrow_bar_layout() {
        let bar = NavBar::new(&content(Language::Portuguese).nav, Breakpoint::Narrow);
        let labels: Vec<_> = bar.controls().iter().map(NavControl::label).collect();
        assert_eq!(labels, ["Restaurantes", "Submeter"]);
        assert!(matches!(&bar.right()[0], NavControl::Link(l) if l.route == Route::Submit));
    }

    #[test]
    fn test_capture_layer_consumes_other_controls() {
        let now = Instant::now();
        let mut bar = NavBar::new(&content(Language::English).nav, Breakpoint::Wide);

        assert_eq!(bar.activate(Target::Control(0), now), None);
        assert_eq!(bar.open_dropdown(), Some(0));

        // Clicking the About link while a menu is open only closes the menu
        assert_eq!(bar.activate(Target::Control(1), now), None);
        assert_eq!(bar.open_dropdown(), None);

        assert_eq!(bar.activate(Target::Control(1), now), Some(Route::About));
    }

    #[test]
    fn test_item_selection_navigates_once() {
        let now = Instant::now();
        let mut bar = NavBar::new(&content(Language::English).nav, Breakpoint::Wide);

        bar.activate(Target::Control(2), now);
        let first = bar.activate(Target::Item { control: 2, item: 1 }, now);
        let second = bar.activate(Target::Item { control: 2, item: 1 }, now);
        assert_eq!(first, Some(Route::Submit));
        assert_eq!(second, None);
        assert_eq!(bar.open_dropdown(), None);
    }

    #[test]
    fn test_dismiss_and_logo() {
        let now = Instant::now();
        let mut bar = NavBar::new(&content(Language::English).nav, Breakpoint::Wide);
        bar.activate(Target::Control(0), now);
        bar.dismiss(now);
        assert_eq!(bar.open_dropdown(), None);
        assert_eq!(bar.activate(Target::Logo, now), Some(Route::Home));
    }

    #[test]
    fn test_breakpoint_and_routes() {
        assert_eq!(Breakpoint::from_width(79), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Wide);
        assert_eq!(Route::from_path("/list"), Some(Route::List));
        assert_eq!(Route::from_path("/nope"), None);
        assert_eq!(Route::Resources.path(), "/resources");
        assert_eq!(Route::Map.title(&content(Language::Portuguese).nav), "Mapa");
        assert_eq!(Route::Home.title(&content(Language::English).nav), "Jantarada");
    }
}
