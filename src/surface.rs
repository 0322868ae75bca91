// src/surface.rs - Capabilities the code widget needs from its host

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::motion::Position;

/// Font measurement in device units (terminal cells for the TUI host).
pub trait FontMetrics {
    /// Advance width of a single space in the current font.
    fn space_advance(&self) -> u16;
}

/// An editable text buffer with a cursor.
///
/// Implementations own the text and the cursor and keep the cursor inside
/// the buffer bounds.
pub trait TextSurface: FontMetrics {
    /// Base editing behaviour for a key: insertion, deletion, movement.
    fn apply_key(&mut self, key: &KeyEvent);

    fn cursor(&self) -> Position;

    fn line(&self, line_idx: usize) -> Option<String>;

    /// Current line from its start up to the cursor.
    fn line_before_cursor(&self) -> String;

    /// Identifier word touching the cursor; `.` and whitespace separate words.
    fn word_under_cursor(&self) -> String;

    fn move_to_end_of_word(&mut self);

    /// Insert plain text at the cursor, leaving the cursor after it.
    fn insert_text(&mut self, text: &str);

    /// Screen rectangle of the cursor, relative to the text area.
    fn cursor_rect(&self) -> Rect;

    fn set_font(&mut self, family: &str, size_pt: u16);

    fn set_tab_stop_width(&mut self, width: u16);
}

/// A popup list of completion candidates filtered by a prefix.
pub trait CompletionPopup {
    fn is_visible(&self) -> bool;

    fn hide(&mut self);

    /// Replace the backing candidate list wholesale.
    fn set_model(&mut self, candidates: Vec<String>);

    fn model(&self) -> &[String];

    fn completion_prefix(&self) -> &str;

    fn set_completion_prefix(&mut self, prefix: &str);

    /// Highlighted row in the filtered view.
    fn current_row(&self) -> Option<usize>;

    fn set_current_row(&mut self, row: usize);

    fn select_next(&mut self);

    fn select_prev(&mut self);

    /// Candidate at the highlighted row.
    fn current_completion(&self) -> Option<&str>;

    /// Width needed to show the widest filtered candidate.
    fn size_hint_width(&self) -> u16;

    fn scrollbar_width(&self) -> u16;

    /// Show or refresh the popup at `anchor`. Stays hidden when nothing
    /// matches the prefix.
    fn complete(&mut self, anchor: Rect);
}
