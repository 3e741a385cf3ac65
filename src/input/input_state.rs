use crossterm::event::KeyEvent;
use tui_textarea::TextArea;
use unicode_width::UnicodeWidthChar;

/// Query text, caret and horizontal scroll of the single-line input
///
/// Editing goes through a one-line `TextArea`. Caret and scroll are measured
/// in display columns so wide characters keep the terminal cursor aligned
/// with the rendered text.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    textarea: TextArea<'static>,
    /// First display column shown in the input viewport
    pub scroll_offset: usize,
    locked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Query length in chars
    pub fn len(&self) -> usize {
        self.query().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.query().is_empty()
    }

    /// Caret position as a char index into the query
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Locked while a selection is committed
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Replace the whole text, caret at the end
    ///
    /// Line breaks become spaces; the input holds a single line.
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        let line = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(line);
    }

    pub fn clear(&mut self) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.scroll_offset = 0;
    }

    /// Apply an editing key; returns true if the text changed
    pub fn apply_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Display width of the text before the caret
    pub fn caret_column(&self) -> usize {
        self.query()
            .chars()
            .take(self.cursor())
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Display width of the whole query
    pub fn display_width(&self) -> usize {
        self.query().chars().map(|c| c.width().unwrap_or(0)).sum()
    }

    /// Keep the caret inside a viewport of `viewport_width` columns
    ///
    /// Scrolls only as far as needed, and pulls the text back when it no
    /// longer fills the viewport.
    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let caret = self.caret_column();
        let text_width = self.display_width();

        let mut new_scroll = self.scroll_offset;

        if caret < new_scroll {
            new_scroll = caret;
        } else if caret >= new_scroll + viewport_width {
            new_scroll = caret + 1 - viewport_width;
        }

        if text_width < new_scroll + viewport_width {
            let min_scroll = text_width.saturating_sub(viewport_width);
            let max_scroll_for_caret = caret.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_caret));
        }

        self.scroll_offset = new_scroll;
    }

    /// The slice of the query visible from `scroll_offset`
    pub fn visible_text(&self, viewport_width: usize) -> String {
        let mut column = 0;
        let mut visible = String::new();
        for ch in self.query().chars() {
            let width = ch.width().unwrap_or(0);
            if column >= self.scroll_offset && column + width <= self.scroll_offset + viewport_width
            {
                visible.push(ch);
            }
            column += width;
        }
        visible
    }

    /// Caret column relative to the viewport
    pub fn visible_caret_column(&self) -> usize {
        self.caret_column().saturating_sub(self.scroll_offset)
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
