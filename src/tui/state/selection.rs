//! Shared list selection state

use ratatui::widgets::ListState;

/// Common behaviour for selectable lists
pub trait Selectable {
    /// Total number of options
    fn count(&self) -> usize;
    /// List state
    fn list_state(&self) -> &ListState;
    /// Mutable list state
    fn list_state_mut(&mut self) -> &mut ListState;

    /// Select the next option, wrapping around
    fn next(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        if let Some(i) = self.list_state().selected() {
            self.list_state_mut().select(Some((i + 1) % count));
        }
    }

    /// Select the previous option, wrapping around
    fn prev(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        if let Some(i) = self.list_state().selected() {
            let prev = if i == 0 {
                count.saturating_sub(1)
            } else {
                i - 1
            };
            self.list_state_mut().select(Some(prev));
        }
    }

    /// Select by index
    fn select(&mut self, index: usize) {
        let count = self.count();
        if count == 0 {
            self.list_state_mut().select(None);
            return;
        }
        self.list_state_mut().select(Some(index % count));
    }

    /// Current index, 0 when nothing is selected
    fn selected_or_default(&self) -> usize {
        self.list_state().selected().unwrap_or(0)
    }

    /// Current index
    fn selected(&self) -> Option<usize> {
        self.list_state().selected()
    }
}

/// List selection state
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    /// Ratatui list state
    pub list_state: ListState,
    /// Total number of options
    pub count: usize,
}

impl SelectionState {
    /// Selection over `count` options, first one selected
    pub fn with_count(count: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select((count > 0).then_some(0));
        Self { list_state, count }
    }

    /// Change the number of options, keeping the index when still in range
    pub fn resize(&mut self, count: usize) {
        self.count = count;
        let index = self
            .list_state
            .selected()
            .map(|i| i.min(count.saturating_sub(1)))
            .unwrap_or(0);
        self.list_state.select((count > 0).then_some(index));
        if count == 0 {
            *self.list_state.offset_mut() = 0;
        }
    }

    /// Jump to the last option
    pub fn select_last(&mut self) {
        if self.count > 0 {
            self.list_state.select(Some(self.count - 1));
        }
    }
}

impl Selectable for SelectionState {
    fn count(&self) -> usize {
        self.count
    }

    fn list_state(&self) -> &ListState {
        &self.list_state
    }

    fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_navigation() {
        let mut state = SelectionState::with_count(3);
        state.prev();
        assert_eq!(state.selected(), Some(2));
        state.next();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_resize_clamps() {
        let mut state = SelectionState::with_count(5);
        state.select_last();
        state.resize(2);
        assert_eq!(state.selected(), Some(1));
        state.resize(0);
        assert_eq!(state.selected(), None);
        state.resize(4);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_selection_is_inert() {
        let mut state = SelectionState::with_count(0);
        state.next();
        state.prev();
        Selectable::select(&mut state, 3);
        assert_eq!(state.selected(), None);
        assert_eq!(state.selected_or_default(), 0);
    }
}
