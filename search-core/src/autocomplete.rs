//! Suggestion list state behind a location input.

use crate::geo::{GeoRecord, LocationIndex};

/// Committing a suggestion stores its display label, nothing else.
pub fn select(record: &GeoRecord) -> String {
    record.display_label.clone()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Up,
    Down,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Autocomplete {
    suggestions: Vec<GeoRecord>,
    open: bool,
    highlighted: usize,
}

impl Autocomplete {
    pub fn suggestions(&self) -> &[GeoRecord] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Re-runs the query for the new input value. Dropping back under the
    /// length threshold clears and closes the list.
    pub fn on_input(&mut self, index: &LocationIndex, value: &str) {
        self.suggestions = index.query(value).into_iter().cloned().collect();
        self.open = !self.suggestions.is_empty();
        self.highlighted = 0;
    }

    pub fn on_focus(&mut self) {
        self.open = !self.suggestions.is_empty();
    }

    pub fn on_blur(&mut self) {
        self.open = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = 0;
    }

    pub fn move_highlight(&mut self, direction: Highlight) {
        if !self.is_open() {
            return;
        }
        let last = self.suggestions.len().saturating_sub(1);
        self.highlighted = match direction {
            Highlight::Down => (self.highlighted + 1).min(last),
            Highlight::Up => self.highlighted.saturating_sub(1),
        };
    }

    /// Commits the suggestion at `position` and closes the list.
    pub fn choose(&mut self, position: usize) -> Option<String> {
        let label = self.suggestions.get(position).map(select)?;
        self.suggestions.clear();
        self.close();
        Some(label)
    }

    pub fn choose_highlighted(&mut self) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        self.choose(self.highlighted)
    }
}
