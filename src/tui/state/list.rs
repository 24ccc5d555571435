//! List page state

use crate::content::ListContent;
use crate::filter::FilterState;
use crate::render::{ListItemView, render_list};
use crate::restaurant::{OFFER_TAGS, PLACE_TAGS, RestaurantRecord};
use crate::tui::state::selection::{Selectable, SelectionState};
use tracing::debug;

/// One toggle in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChip {
    Offer(&'static str),
    Place(&'static str),
    Delivery,
    StaffPick,
}

impl FilterChip {
    /// All chips in display order
    pub fn all() -> Vec<FilterChip> {
        OFFER_TAGS
            .into_iter()
            .map(FilterChip::Offer)
            .chain(PLACE_TAGS.into_iter().map(FilterChip::Place))
            .chain([FilterChip::Delivery, FilterChip::StaffPick])
            .collect()
    }

    pub fn label(self, content: &ListContent) -> &'static str {
        match self {
            FilterChip::Offer(tag) | FilterChip::Place(tag) => content.offer_label(tag),
            FilterChip::Delivery => content.delivery,
            FilterChip::StaffPick => content.staff_pick,
        }
    }

    pub fn is_checked(self, filter: &FilterState) -> bool {
        match self {
            FilterChip::Offer(tag) | FilterChip::Place(tag) => filter.is_selected(tag),
            FilterChip::Delivery => filter.delivery_only(),
            FilterChip::StaffPick => filter.staff_pick_only(),
        }
    }

    pub fn toggle(self, filter: &mut FilterState) {
        match self {
            FilterChip::Offer(tag) | FilterChip::Place(tag) => filter.toggle_tag(tag),
            FilterChip::Delivery => filter.toggle_delivery(),
            FilterChip::StaffPick => filter.toggle_staff_pick(),
        }
    }
}

/// Records, filter selections and the rendered result of the two
#[derive(Debug)]
pub struct ListPageState {
    records: Vec<RestaurantRecord>,
    pub filter: FilterState,
    pub chips: Vec<FilterChip>,
    pub chip_cursor: SelectionState,
    pub results: SelectionState,
    items: Vec<ListItemView>,
}

impl ListPageState {
    pub fn new(records: Vec<RestaurantRecord>, content: &ListContent) -> Self {
        let chips = FilterChip::all();
        let mut state = Self {
            records,
            filter: FilterState::new(),
            chip_cursor: SelectionState::with_count(chips.len()),
            chips,
            results: SelectionState::default(),
            items: Vec::new(),
        };
        state.refresh(content);
        state
    }

    /// Whether any records were loaded at all
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn items(&self) -> &[ListItemView] {
        &self.items
    }

    pub fn focused_chip(&self) -> Option<FilterChip> {
        self.chip_cursor.selected().and_then(|i| self.chips.get(i).copied())
    }

    /// Toggle a chip and recompute the visible list
    pub fn toggle_chip(&mut self, index: usize, content: &ListContent) {
        if let Some(chip) = self.chips.get(index).copied() {
            chip.toggle(&mut self.filter);
            Selectable::select(&mut self.chip_cursor, index);
            self.refresh(content);
        }
    }

    /// Re-run the filter pipeline and renderer
    pub fn refresh(&mut self, content: &ListContent) {
        self.items = render_list(&self.records, &self.filter, content);
        self.results.resize(self.items.len());
        debug!(
            visible = self.items.len(),
            total = self.records.len(),
            filtered = !self.filter.is_empty(),
            filter = ?self.filter,
            "List refreshed"
        );
    }
}
