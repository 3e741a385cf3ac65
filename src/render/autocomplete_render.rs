//! Autocomplete rendering
//!
//! Draws the input (or the committed token) and, when visible, the dropdown
//! underneath it. Returns the layout needed to map mouse positions back to
//! rows.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::autocomplete::Autocomplete;
use crate::widgets::popup;

const INPUT_HEIGHT: u16 = 3;
const DROPDOWN_BORDER_HEIGHT: u16 = 2;
const CLEAR_BUTTON: &str = "×";

/// Screen regions produced by the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutocompleteLayout {
    /// Whole input box, border included
    pub input: Rect,
    /// Row area of the dropdown, border excluded
    pub dropdown: Option<Rect>,
    /// The token's clear button
    pub clear_button: Option<Rect>,
    /// Index of the first row on screen
    pub offset: usize,
    pub item_count: usize,
}

impl AutocompleteLayout {
    /// Suggestion index under a screen cell
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.dropdown?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.offset + usize::from(row - area.y);
        (index < self.item_count).then_some(index)
    }

    pub fn is_on_clear_button(&self, column: u16, row: u16) -> bool {
        self.clear_button
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    pub fn is_on_input(&self, column: u16, row: u16) -> bool {
        self.input.contains(Position::new(column, row))
    }
}

/// Render the control at the top of `area`
pub fn render_autocomplete(frame: &mut Frame, area: Rect, ac: &mut Autocomplete) -> AutocompleteLayout {
    let input_area = Rect {
        height: INPUT_HEIGHT.min(area.height),
        ..area
    };
    let mut layout = AutocompleteLayout {
        input: input_area,
        ..AutocompleteLayout::default()
    };

    render_input(frame, input_area, ac, &mut layout);

    if ac.is_dropdown_visible() {
        render_dropdown(frame, area, ac, &mut layout);
    }

    layout
}

fn render_input(frame: &mut Frame, input_area: Rect, ac: &mut Autocomplete, layout: &mut AutocompleteLayout) {
    let title = if ac.is_loading() {
        " Search (loading…) "
    } else {
        " Search "
    };
    let border_color = if ac.is_focused() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let inner = popup::inset_rect(input_area, 1, 1);

    if let Some(selected) = ac.selection() {
        let token = format!(" {} ", selected.name);
        let token_width = u16::try_from(token.width()).unwrap_or(u16::MAX);
        let line = Line::from(vec![
            Span::styled(
                token,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(CLEAR_BUTTON, Style::default().fg(Color::Red)),
        ]);

        let clear_x = inner.x.saturating_add(token_width).saturating_add(1);
        if inner.height > 0 && clear_x < inner.x.saturating_add(inner.width) {
            layout.clear_button = Some(Rect {
                x: clear_x,
                y: inner.y,
                width: 1,
                height: 1,
            });
        }

        frame.render_widget(Paragraph::new(line).block(block), input_area);
        return;
    }

    let width = usize::from(inner.width);
    ac.update_input_scroll(width);
    let text = ac.input().visible_text(width);
    frame.render_widget(Paragraph::new(text).block(block), input_area);

    if ac.is_focused() && inner.width > 0 && inner.height > 0 {
        let caret = ac.input().visible_caret_column().min(width.saturating_sub(1)) as u16;
        frame.set_cursor_position(Position::new(inner.x + caret, inner.y));
    }
}

fn render_dropdown(frame: &mut Frame, area: Rect, ac: &Autocomplete, layout: &mut AutocompleteLayout) {
    let items = ac.items();
    let viewport = ac.viewport();
    let range = viewport.visible_range(items.len());
    if range.is_empty() {
        return;
    }

    let height = range.len() as u16 + DROPDOWN_BORDER_HEIGHT;
    let popup_area = popup::popup_below_anchor(layout.input, area, height, 0);
    if popup_area.height <= DROPDOWN_BORDER_HEIGHT {
        return;
    }

    let active = ac
        .active_key()
        .and_then(|key| ac.suggestions().position_of(&key));
    let list_items: Vec<ListItem> = range
        .clone()
        .map(|i| {
            let candidate = &items[i];
            let style = if active == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!(" {}", candidate.name), style)))
        })
        .collect();

    let title = if items.len() > range.len() {
        format!(" {}-{} of {} ", range.start + 1, range.end, items.len())
    } else {
        String::new()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    popup::clear_area(frame, popup_area);
    frame.render_widget(List::new(list_items).block(block), popup_area);

    layout.dropdown = Some(popup::inset_rect(popup_area, 1, 1));
    layout.offset = range.start;
    layout.item_count = items.len();
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
