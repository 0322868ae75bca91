// src/ui/widgets/completion.rs - Completion popup list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::surface::CompletionPopup;

/// Popup state: backing model, prefix filter, highlighted row and anchor.
///
/// Filtering is a case-insensitive prefix match over the model.
pub struct CompletionList {
    model: Vec<String>,
    prefix: String,
    filtered: Vec<usize>,
    selected_index: Option<usize>,
    visible: bool,
    pub anchor: Rect,
    pub max_visible: usize,
    pub scroll_offset: usize,
}

impl Default for CompletionList {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionList {
    pub fn new() -> Self {
        Self {
            model: Vec::new(),
            prefix: String::new(),
            filtered: Vec::new(),
            selected_index: None,
            visible: false,
            anchor: Rect::default(),
            max_visible: 10,
            scroll_offset: 0,
        }
    }

    /// Candidates matching the current prefix, in model order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|&i| self.model[i].as_str())
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    fn refilter(&mut self) {
        let prefix = self.prefix.to_lowercase();
        self.filtered = self
            .model
            .iter()
            .enumerate()
            .filter(|(_, item)| item.to_lowercase().starts_with(&prefix))
            .map(|(i, _)| i)
            .collect();
        self.selected_index = if self.filtered.is_empty() {
            None
        } else {
            Some(
                self.selected_index
                    .unwrap_or(0)
                    .min(self.filtered.len() - 1),
            )
        };
        if self.filtered.is_empty() {
            self.visible = false;
        }
        self.update_scroll();
    }

    fn update_scroll(&mut self) {
        let Some(selected) = self.selected_index else {
            self.scroll_offset = 0;
            return;
        };
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + self.max_visible {
            self.scroll_offset = selected.saturating_sub(self.max_visible - 1);
        }
    }

    /// Where to draw the popup: just below the anchor inside `area`,
    /// flipped above when there is no room underneath. The result always
    /// lies within `area`.
    pub fn calculate_position(&self, area: Rect) -> Rect {
        let width = (self.size_hint_width() + self.scrollbar_width() + 2).min(area.width);
        let height = (self.filtered.len().min(self.max_visible) as u16 + 2).min(area.height);
        let right = area.x.saturating_add(area.width);
        let bottom = area.y.saturating_add(area.height);

        let cursor_x = area.x.saturating_add(self.anchor.x);
        let cursor_y = area.y.saturating_add(self.anchor.y);

        let mut y = cursor_y.saturating_add(self.anchor.height);
        if y.saturating_add(height) > bottom {
            y = cursor_y.saturating_sub(height);
        }

        Rect {
            x: cursor_x.min(right - width).max(area.x),
            y: y.min(bottom - height).max(area.y),
            width,
            height,
        }
    }
}

impl CompletionPopup for CompletionList {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_model(&mut self, candidates: Vec<String>) {
        self.model = candidates;
        self.selected_index = None;
        self.scroll_offset = 0;
        self.refilter();
    }

    fn model(&self) -> &[String] {
        &self.model
    }

    fn completion_prefix(&self) -> &str {
        &self.prefix
    }

    fn set_completion_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
        self.refilter();
    }

    fn current_row(&self) -> Option<usize> {
        self.selected_index
    }

    fn set_current_row(&mut self, row: usize) {
        if !self.filtered.is_empty() {
            self.selected_index = Some(row.min(self.filtered.len() - 1));
            self.update_scroll();
        }
    }

    fn select_next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let next = self.selected_index.map_or(0, |i| (i + 1) % self.filtered.len());
        self.selected_index = Some(next);
        self.update_scroll();
    }

    fn select_prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let prev = match self.selected_index {
            Some(0) | None => self.filtered.len() - 1,
            Some(i) => i - 1,
        };
        self.selected_index = Some(prev);
        self.update_scroll();
    }

    fn current_completion(&self) -> Option<&str> {
        self.selected_index
            .and_then(|row| self.filtered.get(row))
            .map(|&i| self.model[i].as_str())
    }

    fn size_hint_width(&self) -> u16 {
        self.filtered_items()
            .map(|item| item.width())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }

    fn scrollbar_width(&self) -> u16 {
        1
    }

    fn complete(&mut self, anchor: Rect) {
        self.anchor = anchor;
        self.visible = !self.filtered.is_empty();
        if self.visible && self.selected_index.is_none() {
            self.selected_index = Some(0);
        }
        self.update_scroll();
    }
}

impl Widget for &CompletionList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || self.filtered.is_empty() {
            return;
        }

        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default().borders(Borders::ALL);
        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .filtered_items()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.max_visible)
            .map(|(row, label)| {
                let style = if Some(row) == self.selected_index {
                    Style::default().fg(Color::Black).bg(Color::White)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(label.to_string(), style))
            })
            .collect();

        Paragraph::new(lines).render(inner_area, buf);

        // Scroll marker in the right border when the list overflows
        if self.filtered.len() > self.max_visible && inner_area.height > 0 {
            let track = inner_area.height as usize;
            let pos = self.scroll_offset * track / self.filtered.len();
            let x = area.x + area.width.saturating_sub(1);
            let y = inner_area.y + pos.min(track - 1) as u16;
            buf.get_mut(x, y).set_char('█');
        }
    }
}
