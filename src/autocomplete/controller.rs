//! Search-and-selection controller
//!
//! Drives one autocomplete control: debounced search triggers, the single
//! live lookup, the suggestion list and the committed selection. Every
//! transition happens on a host call; time is passed in explicitly.

use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::candidate::{Candidate, ItemKey};
use crate::config::AutocompleteConfig;
use crate::focus::FocusState;
use crate::input::{Debouncer, InputState};
use crate::lookup::{FetchCoordinator, FetchEvent, LookupService};
use crate::selection::{ObserverId, SelectionHolder, SelectionObserver};
use crate::suggestions::{ListViewport, SuggestionList};

/// Where the control is in its search cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No selection, empty query
    Idle,
    /// Waiting for typing to pause
    Typing,
    /// Lookup in flight
    Searching,
    /// Last lookup found nothing, or the dropdown was dismissed
    Closed,
    /// Suggestions on screen
    Open,
    /// A candidate is committed; input is locked
    Selected,
}

pub struct Autocomplete {
    input: InputState,
    debouncer: Debouncer,
    fetch: FetchCoordinator,
    list: SuggestionList,
    selection: SelectionHolder,
    focus: FocusState,
}

impl Autocomplete {
    pub fn new(
        service: Arc<dyn LookupService>,
        runtime: Handle,
        config: &AutocompleteConfig,
    ) -> Self {
        Self {
            input: InputState::new(),
            debouncer: Debouncer::new(config.debounce_ms),
            fetch: FetchCoordinator::new(service, runtime, config.results_field.clone()),
            list: SuggestionList::new(usize::from(config.visible_rows)),
            selection: SelectionHolder::new(),
            focus: FocusState::new(config.blur_grace_ms),
        }
    }

    // ---------------------------------------------------------------------
    // Input tracking
    // ---------------------------------------------------------------------

    /// Replace the query text
    ///
    /// The text updates immediately. A non-empty query (re)starts the quiet
    /// period; an empty one clears and closes the list right away and never
    /// reaches the network.
    pub fn on_text_changed(&mut self, text: &str, now: Instant) {
        if self.input.is_locked() {
            log::debug!("Ignoring text change while a selection is committed");
            return;
        }
        self.input.set_text(text);
        self.query_changed(now);
    }

    /// React to a query edit already applied to `input`
    pub(super) fn query_changed(&mut self, now: Instant) {
        if self.input.is_empty() {
            self.debouncer.cancel();
            self.fetch.cancel();
            self.list.clear();
        } else {
            self.debouncer.schedule(now);
        }
    }

    pub(super) fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Query length in chars
    pub fn query_len(&self) -> usize {
        self.input.len()
    }

    /// Display column of the caret, for the rendering layer
    pub fn caret_column(&self) -> usize {
        self.input.caret_column()
    }

    /// Recompute horizontal scroll for an input `viewport_width` columns wide
    pub fn update_input_scroll(&mut self, viewport_width: usize) {
        self.input.calculate_scroll_offset(viewport_width);
    }

    pub fn is_locked(&self) -> bool {
        self.input.is_locked()
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    // ---------------------------------------------------------------------
    // Timers and fetch results
    // ---------------------------------------------------------------------

    /// Advance timers to `now` and apply any lookup result that has arrived
    ///
    /// Returns true if visible state may have changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.debouncer.fire(now) {
            let query = self.input.query().to_string();
            self.search(&query);
            changed = true;
        }

        if self.focus.take_due_close(now) {
            self.list.close();
            changed = true;
        }

        while let Some(event) = self.fetch.try_next_event() {
            self.apply_fetch_event(event);
            changed = true;
        }

        changed
    }

    /// Wait for the live lookup and apply its result
    ///
    /// Returns false when nothing was in flight or the lookup ended with
    /// nothing to apply.
    pub async fn wait_for_fetch(&mut self) -> bool {
        match self.fetch.next_event().await {
            Some(event) => {
                self.apply_fetch_event(event);
                true
            }
            None => false,
        }
    }

    /// Look up `query` now, superseding any live lookup
    ///
    /// Empty queries are ignored.
    pub fn search(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.fetch.search(query);
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    /// Number of lookups issued so far
    pub fn requests_issued(&self) -> u64 {
        self.fetch.requests_issued()
    }

    fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Loaded(candidates) => {
                self.list.replace(candidates);
                // Kept for a later refocus, but not shown without focus
                if !self.has_focus_or_grace() {
                    self.list.close();
                }
            }
            FetchEvent::Failed(e) => {
                log::error!("Lookup for {:?} failed: {}", self.input.query(), e);
                self.list.clear();
            }
        }
    }

    // ---------------------------------------------------------------------
    // Suggestion list
    // ---------------------------------------------------------------------

    /// Whether the dropdown should be drawn
    pub fn is_dropdown_visible(&self) -> bool {
        self.list.is_open() && !self.selection.is_selected() && self.has_focus_or_grace()
    }

    /// Focused, or blurred with the close still inside its grace period
    fn has_focus_or_grace(&self) -> bool {
        self.focus.is_focused() || self.focus.is_close_pending()
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.list
    }

    pub fn items(&self) -> &[Candidate] {
        self.list.items()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.list.active_index()
    }

    pub fn active_key(&self) -> Option<ItemKey> {
        self.list.active_key()
    }

    pub fn viewport(&self) -> &ListViewport {
        self.list.viewport()
    }

    pub fn move_next(&mut self) -> bool {
        self.is_dropdown_visible() && self.list.move_next()
    }

    pub fn move_previous(&mut self) -> bool {
        self.is_dropdown_visible() && self.list.move_previous()
    }

    /// Pointer entered the row at `index`
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        self.is_dropdown_visible() && self.list.hover(index)
    }

    /// Pointer pressed the row at `index`
    pub fn pointer_down(&mut self, index: usize) -> bool {
        if !self.is_dropdown_visible() {
            return false;
        }
        match self.list.items().get(index) {
            Some(candidate) => {
                let candidate = candidate.clone();
                self.commit(candidate);
                true
            }
            None => false,
        }
    }

    pub fn close_dropdown(&mut self) {
        self.list.close();
    }

    // ---------------------------------------------------------------------
    // Focus
    // ---------------------------------------------------------------------

    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// Input gained focus; reopens retained suggestions for the current query
    pub fn on_focus(&mut self) {
        self.focus.focus();
        if !self.selection.is_selected() && !self.input.is_empty() {
            self.list.reopen();
        }
    }

    /// Input lost focus; the dropdown closes after the grace period
    pub fn on_blur(&mut self, now: Instant) {
        self.focus.blur(now);
    }

    /// Escape: close the dropdown, drop focus and the pending search
    pub fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.list.close();
        self.focus.blur_immediately();
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn selection(&self) -> Option<&Candidate> {
        self.selection.get()
    }

    /// Register a host observer for commits and clears
    pub fn subscribe(&mut self, observer: SelectionObserver) -> ObserverId {
        self.selection.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.selection.unsubscribe(id)
    }

    /// Commit `candidate`, ending the search cycle
    pub fn commit(&mut self, candidate: Candidate) {
        log::debug!("Committing {:?}", candidate.name);
        self.lock_on_selection();
        self.selection.commit(candidate);
    }

    /// Commit the highlighted row, if the dropdown is open and has one
    pub fn commit_active(&mut self) -> bool {
        if !self.is_dropdown_visible() {
            return false;
        }
        match self.list.active_item() {
            Some(candidate) => {
                let candidate = candidate.clone();
                self.commit(candidate);
                true
            }
            None => false,
        }
    }

    /// Remove the token, re-enable typing and focus the input
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.input.set_locked(false);
        self.focus.focus();
    }

    /// Host write to the bound value
    ///
    /// Mirrors commit or clear without notifying observers; clearing this way
    /// does not move focus.
    pub fn set_selection(&mut self, value: Option<Candidate>) {
        match value {
            Some(candidate) => {
                self.lock_on_selection();
                self.selection.set_external(Some(candidate));
            }
            None => {
                self.selection.set_external(None);
                self.input.set_locked(false);
            }
        }
    }

    fn lock_on_selection(&mut self) {
        self.debouncer.cancel();
        self.fetch.cancel();
        self.focus.cancel_pending_close();
        self.input.clear();
        self.input.set_locked(true);
        self.list.clear();
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        if self.selection.is_selected() {
            Phase::Selected
        } else if self.debouncer.is_pending() {
            Phase::Typing
        } else if self.fetch.is_loading() {
            Phase::Searching
        } else if self.list.is_open() {
            Phase::Open
        } else if self.input.is_empty() {
            Phase::Idle
        } else {
            Phase::Closed
        }
    }

    /// Release timers and the live lookup
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
        self.focus.cancel_pending_close();
        self.fetch.cancel();
    }
}

impl Drop for Autocomplete {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
