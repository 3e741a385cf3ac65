//! Suggestion list state
//!
//! Owns the current candidate set, whether the dropdown is open and which row
//! is highlighted.

use super::viewport::ListViewport;
use crate::candidate::{Candidate, ItemKey};

#[derive(Debug, Clone)]
pub struct SuggestionList {
    open: bool,
    items: Vec<Candidate>,
    /// Highlighted row (None = no highlight)
    active: Option<usize>,
    viewport: ListViewport,
}

impl SuggestionList {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            open: false,
            items: Vec::new(),
            active: None,
            viewport: ListViewport::new(visible_rows),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &[Candidate] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&Candidate> {
        self.active.and_then(|i| self.items.get(i))
    }

    /// Row key of the highlighted item
    pub fn active_key(&self) -> Option<ItemKey> {
        self.active
            .and_then(|i| self.items.get(i).map(|item| item.key(i)))
    }

    /// Position of the item with `key` in the current set
    pub fn position_of(&self, key: &ItemKey) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .position(|(i, item)| item.key(i) == *key)
    }

    pub fn viewport(&self) -> &ListViewport {
        &self.viewport
    }

    /// Replace the whole set with the result of one completed fetch
    ///
    /// Opens the dropdown when there is anything to show.
    pub fn replace(&mut self, items: Vec<Candidate>) {
        self.open = !items.is_empty();
        self.items = items;
        self.active = None;
        self.viewport.reset();
    }

    /// Drop every item and close
    pub fn clear(&mut self) {
        self.open = false;
        self.items.clear();
        self.active = None;
        self.viewport.reset();
    }

    /// Reopen over the retained items; no-op when there are none
    pub fn reopen(&mut self) -> bool {
        if self.items.is_empty() || self.open {
            return false;
        }
        self.open = true;
        true
    }

    /// Close, keeping items and highlight for a later reopen
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Highlight the next row (no wrap)
    pub fn move_next(&mut self) -> bool {
        if !self.open {
            return false;
        }

        let next = match self.active {
            None if !self.items.is_empty() => 0,
            Some(current) if current + 1 < self.items.len() => current + 1,
            _ => return false,
        };

        self.active = Some(next);
        self.viewport.ensure_visible(next);
        true
    }

    /// Highlight the previous row (no wrap, never back to no highlight)
    pub fn move_previous(&mut self) -> bool {
        if !self.open {
            return false;
        }

        match self.active {
            Some(current) if current > 0 => {
                self.active = Some(current - 1);
                self.viewport.ensure_visible(current - 1);
                true
            }
            _ => false,
        }
    }

    /// Highlight the row under the pointer
    ///
    /// Pointer highlights do not scroll; the row is already on screen.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.items.len() || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
