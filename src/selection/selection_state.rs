//! Committed selection and its host binding
//!
//! The host observes internal commits and clears through registered
//! observers, and writes the value directly with `set_external`. External
//! writes are never echoed back to observers.

use std::fmt;

use crate::candidate::Candidate;

/// Callback invoked with the new bound value
pub type SelectionObserver = Box<dyn FnMut(Option<&Candidate>)>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct SelectionHolder {
    selected: Option<Candidate>,
    observers: Vec<(ObserverId, SelectionObserver)>,
    next_observer_id: u64,
}

impl SelectionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Candidate> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn subscribe(&mut self, observer: SelectionObserver) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Set the selection from user interaction and notify observers
    pub fn commit(&mut self, candidate: Candidate) {
        self.selected = Some(candidate);
        self.notify();
    }

    /// Remove the selection from user interaction
    ///
    /// Observers are notified only if something was selected.
    pub fn clear(&mut self) -> bool {
        if self.selected.take().is_none() {
            return false;
        }
        self.notify();
        true
    }

    /// Write the bound value from the host without notifying
    pub fn set_external(&mut self, value: Option<Candidate>) {
        self.selected = value;
    }

    fn notify(&mut self) {
        let selected = self.selected.as_ref();
        for (_, observer) in self.observers.iter_mut() {
            observer(selected);
        }
    }
}

impl fmt::Debug for SelectionHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionHolder")
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "selection_state_tests.rs"]
mod selection_state_tests;
