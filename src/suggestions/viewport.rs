use std::ops::Range;

/// Window of dropdown rows currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListViewport {
    pub offset: usize,
    pub rows: usize,
}

impl ListViewport {
    pub fn new(rows: usize) -> Self {
        Self { offset: 0, rows }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll the least amount that puts `index` on screen
    pub fn ensure_visible(&mut self, index: usize) {
        if self.rows == 0 {
            return;
        }

        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.rows {
            self.offset = index + 1 - self.rows;
        }
    }

    /// Item indices on screen for a list of `len` items
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + self.rows).min(len);
        start..end
    }

    /// Item index under viewport row `row`, if any
    pub fn index_at_row(&self, row: usize, len: usize) -> Option<usize> {
        if row >= self.rows {
            return None;
        }
        let index = self.offset + row;
        (index < len).then_some(index)
    }
}
