//! List filtering
//!
//! [`FilterState`] holds the user's selections. [`apply`] runs the records
//! through four stages in order, each a stable filter over the previous
//! stage's output:
//!
//! 1. displayability (name, description and url present)
//! 2. delivery, when `delivery_only` is set
//! 3. staff pick, when `staff_pick_only` is set
//! 4. tags, when any are selected: a record must offer every selected tag
//!
//! Offering and place tags share one selection set and are matched the same
//! way, so selecting "Food" and "Porto" keeps only records carrying both.

use crate::restaurant::RestaurantRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Active filter selections for the list page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    delivery_only: bool,
    staff_pick_only: bool,
    selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection in one go, as the `list` command does
    pub fn with_selection<I, S>(delivery_only: bool, staff_pick_only: bool, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            delivery_only,
            staff_pick_only,
            selected_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn delivery_only(&self) -> bool {
        self.delivery_only
    }

    pub fn staff_pick_only(&self) -> bool {
        self.staff_pick_only
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    pub fn toggle_delivery(&mut self) {
        self.delivery_only = !self.delivery_only;
    }

    pub fn toggle_staff_pick(&mut self) {
        self.staff_pick_only = !self.staff_pick_only;
    }

    /// Add `tag` if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// True when every stage after displayability passes everything
    pub fn is_empty(&self) -> bool {
        !self.delivery_only && !self.staff_pick_only && self.selected_tags.is_empty()
    }

    fn matches_delivery(&self, record: &RestaurantRecord) -> bool {
        !self.delivery_only || record.delivery
    }

    fn matches_staff_pick(&self, record: &RestaurantRecord) -> bool {
        !self.staff_pick_only || record.staff_pick
    }

    fn matches_tags(&self, record: &RestaurantRecord) -> bool {
        self.selected_tags.iter().all(|tag| record.offers(tag))
    }
}

/// Displayable records matching `state`, in their original order
pub fn apply<'a>(records: &'a [RestaurantRecord], state: &FilterState) -> Vec<&'a RestaurantRecord> {
    records
        .iter()
        .filter(|r| r.is_displayable())
        .filter(|r| state.matches_delivery(r))
        .filter(|r| state.matches_staff_pick(r))
        .filter(|r| state.matches_tags(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, offerings: &[&str]) -> RestaurantRecord {
        RestaurantRecord {
            offerings: offerings.iter().map(|s| s.to_string()).collect(),
            ..RestaurantRecord::new(name, "d", &format!("{}.com", name.to_lowercase()))
        }
    }

    fn names(records: Vec<&RestaurantRecord>) -> Vec<&str> {
        records.into_iter().filter_map(|r| r.name()).collect()
    }

    #[test]
    fn test_empty_state_keeps_displayable_in_order() {
        let mut hidden = record("Hidden", &[]);
        hidden.description = Some(String::new());
        let records = vec![record("C", &[]), hidden, record("A", &[]), record("B", &[])];

        assert!(FilterState::new().is_empty());
        assert_eq!(names(apply(&records, &FilterState::new())), ["C", "A", "B"]);
    }

    #[test]
    fn test_delivery_only() {
        let mut a = record("A", &["Food"]);
        a.delivery = true;
        let b = record("B", &["Wine"]);
        let records = vec![a, b];

        let mut state = FilterState::new();
        state.toggle_delivery();
        assert_eq!(names(apply(&records, &state)), ["A"]);
    }

    #[test]
    fn test_staff_pick_only() {
        let a = record("A", &[]);
        let mut b = record("B", &[]);
        b.staff_pick = true;
        let records = vec![a, b];

        let mut state = FilterState::new();
        state.toggle_staff_pick();
        assert_eq!(names(apply(&records, &state)), ["B"]);
    }

    #[test]
    fn test_tags_are_conjunctive() {
        let records = vec![record("A", &["Food"])];

        let mut state = FilterState::new();
        state.toggle_tag("Food");
        assert_eq!(names(apply(&records, &state)), ["A"]);

        state.toggle_tag("Wine");
        assert!(apply(&records, &state).is_empty());
    }

    #[test]
    fn test_offer_and_place_tags_share_the_set() {
        let records = vec![
            record("A", &["Food", "Porto"]),
            record("B", &["Food", "Lisboa"]),
            record("C", &["Porto"]),
        ];

        let mut state = FilterState::new();
        state.toggle_tag("Food");
        state.toggle_tag("Porto");
        assert_eq!(names(apply(&records, &state)), ["A"]);
    }

    #[test]
    fn test_missing_offerings_excluded_when_tags_selected() {
        let bare = RestaurantRecord::new("Bare", "d", "bare.pt");
        let records = vec![bare];

        assert_eq!(apply(&records, &FilterState::new()).len(), 1);

        let mut state = FilterState::new();
        state.toggle_tag("Beer");
        assert!(apply(&records, &state).is_empty());
    }

    #[test]
    fn test_undisplayable_excluded_regardless_of_filters() {
        let mut r = record("A", &["Food"]);
        r.delivery = true;
        r.staff_pick = true;
        r.description = Some(String::new());
        let records = vec![r];

        let mut state = FilterState::new();
        state.toggle_delivery();
        state.toggle_staff_pick();
        state.toggle_tag("Food");
        assert!(apply(&records, &state).is_empty());
        assert!(apply(&records, &FilterState::new()).is_empty());
    }

    #[test]
    fn test_toggles_are_involutions() {
        let original = FilterState::new();
        let mut state = original.clone();

        state.toggle_tag("Porto");
        assert!(state.is_selected("Porto"));
        state.toggle_tag("Porto");
        assert_eq!(state, original);

        state.toggle_delivery();
        state.toggle_delivery();
        state.toggle_staff_pick();
        state.toggle_staff_pick();
        assert_eq!(state, original);
    }

    #[test]
    fn test_with_selection_dedups_tags() {
        let state = FilterState::with_selection(true, false, ["Food", "Porto", "Food"]);
        assert!(state.delivery_only());
        assert!(!state.staff_pick_only());
        assert_eq!(state.selected_tags().len(), 2);

        let mut toggled = FilterState::new();
        toggled.toggle_delivery();
        toggled.toggle_tag("Porto");
        toggled.toggle_tag("Food");
        assert_eq!(state, toggled);
    }
}
