//! Keyboard and pointer handling
//!
//! Maps crossterm events onto controller operations. Navigation keys belong
//! to the control; everything else is line editing on the query.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::Autocomplete;
use crate::render::AutocompleteLayout;

impl Autocomplete {
    /// Handle a key press
    ///
    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Down => {
                self.move_next();
                true
            }
            KeyCode::Up => {
                self.move_previous();
                true
            }
            KeyCode::Enter => self.commit_active(),
            KeyCode::Esc => {
                self.dismiss();
                true
            }
            _ if self.is_locked() => self.handle_locked_key(key),
            _ => self.handle_edit_key(key, now),
        }
    }

    /// While a token is shown only Backspace/Delete do anything: remove it
    fn handle_locked_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace | KeyCode::Delete => {
                self.clear_selection();
                true
            }
            _ => false,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let is_edit_key = match key.code {
            KeyCode::Char(_) => key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT,
            KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => true,
            _ => false,
        };
        if !is_edit_key {
            return false;
        }

        // Typing into the input implies it has focus
        if !self.is_focused() {
            self.on_focus();
        }

        if self.input_mut().apply_key(key) {
            self.query_changed(now);
        }
        true
    }

    /// Handle a mouse event against the last rendered layout
    ///
    /// Returns true if the event touched the control.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &AutocompleteLayout, now: Instant) -> bool {
        match mouse.kind {
            MouseEventKind::Moved => match layout.item_at(mouse.column, mouse.row) {
                Some(index) => self.pointer_enter(index),
                None => false,
            },
            MouseEventKind::Down(MouseButton::Left) => self.mouse_down(mouse, layout, now),
            _ => false,
        }
    }

    fn mouse_down(&mut self, mouse: MouseEvent, layout: &AutocompleteLayout, now: Instant) -> bool {
        if let Some(index) = layout.item_at(mouse.column, mouse.row) {
            return self.pointer_down(index);
        }

        if layout.is_on_clear_button(mouse.column, mouse.row) {
            self.clear_selection();
            return true;
        }

        if layout.is_on_input(mouse.column, mouse.row) {
            self.on_focus();
            return true;
        }

        if self.is_focused() {
            self.on_blur(now);
        }
        false
    }
}

#[cfg(test)]
#[path = "autocomplete_events_tests.rs"]
mod autocomplete_events_tests;
