//! Search, status filter and selection state shared by the record views

use crate::domain::{matching_indices, SearchQuery, Searchable, StatusFilter};

#[derive(Debug, Clone, Default)]
pub struct ListingState {
    pub query: String,
    pub status: StatusFilter,
    /// Position within the filtered list, not the underlying collection
    pub selected: usize,
}

impl ListingState {
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(self.query.clone(), self.status.clone())
    }

    /// Indices into `records` passing the current search and filter.
    pub fn visible<T: Searchable>(&self, records: &[T]) -> Vec<usize> {
        matching_indices(records, &self.search_query())
    }

    /// Index into `records` of the highlighted row, if any row is visible.
    pub fn selected_index<T: Searchable>(&self, records: &[T]) -> Option<usize> {
        self.visible(records).get(self.selected).copied()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.selected = 0;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.selected = 0;
    }

    pub fn cycle_status(&mut self, keys: &[&str]) {
        let next = self.status.cycle(keys);
        self.set_status(next);
    }

    /// Drops search text and status filter. Returns false if nothing was active.
    pub fn clear(&mut self) -> bool {
        let active = !self.query.is_empty() || !self.status.is_all();
        self.query.clear();
        self.status = StatusFilter::All;
        self.selected = 0;
        active
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || !self.status.is_all()
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn top(&mut self) {
        self.selected = 0;
    }

    pub fn bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Title suffix describing the active search/filter.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(format!("search: {}", self.query));
        }
        if let StatusFilter::Only(key) = &self.status {
            parts.push(format!("status: {key}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("  [{}]", parts.join(" · "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Roster;

    #[test]
    fn typing_resets_selection() {
        let mut state = ListingState {
            selected: 3,
            ..Default::default()
        };
        state.push_char('a');
        assert_eq!(state.selected, 0);
        assert_eq!(state.query, "a");
    }

    #[test]
    fn selected_index_maps_through_filter() {
        let roster = Roster::seeded();
        let mut state = ListingState::default();
        state.set_query("sharma");
        assert_eq!(state.selected_index(&roster.workers), Some(3));

        state.set_query("xyz");
        assert_eq!(state.selected_index(&roster.workers), None);
    }

    #[test]
    fn movement_stays_in_bounds() {
        let mut state = ListingState::default();
        state.up();
        assert_eq!(state.selected, 0);
        state.down(2);
        state.down(2);
        assert_eq!(state.selected, 1);
        state.bottom(5);
        assert_eq!(state.selected, 4);
        state.clamp(2);
        assert_eq!(state.selected, 1);
        state.clamp(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn clear_reports_whether_anything_was_active() {
        let mut state = ListingState::default();
        assert!(!state.clear());
        state.cycle_status(&["all", "paid"]);
        assert!(state.is_filtered());
        assert!(state.clear());
        assert!(!state.is_filtered());
    }

    #[test]
    fn summary_lists_active_parts() {
        let mut state = ListingState::default();
        assert_eq!(state.summary(), "");
        state.set_query("amit");
        state.set_status(StatusFilter::parse("Working"));
        assert_eq!(state.summary(), "  [search: amit · status: working]");
    }
}
