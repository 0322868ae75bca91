// src/text_area.rs - Rope-backed text surface for the terminal host

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, BufferError};
use crate::motion::{self, Position};
use crate::surface::{FontMetrics, TextSurface};
use crate::viewport::Viewport;

/// Multi-line text area: buffer, cursor and scroll state.
pub struct TextArea {
    pub buffer: Buffer,
    pub cursor: Position,
    /// Column the cursor returns to when moving vertically.
    pub desired_col: usize,
    pub viewport: Viewport,
    pub font_family: String,
    pub font_size_pt: u16,
    /// Tab stop in terminal cells.
    pub tab_width: u16,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self::with_buffer(Buffer::new())
    }

    pub fn with_buffer(buffer: Buffer) -> Self {
        Self {
            buffer,
            cursor: Position::default(),
            desired_col: 0,
            viewport: Viewport::new(20, 80),
            font_family: String::new(),
            font_size_pt: 0,
            tab_width: 8,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::with_buffer(Buffer::from_text(text))
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn open_file(&mut self, path: &str) -> Result<(), BufferError> {
        self.buffer.load_from_file(path)?;
        self.set_cursor(Position::default());
        Ok(())
    }

    pub fn save(&mut self) -> Result<(), BufferError> {
        match self.buffer.file_path.clone() {
            Some(path) => self.buffer.save_to_file(path),
            None => Err(BufferError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No file name",
            ))),
        }
    }

    /// Place the cursor, clamped to the buffer.
    pub fn set_cursor(&mut self, pos: Position) {
        let line = pos.line.min(self.buffer.line_count().saturating_sub(1));
        let col = pos.col.min(self.buffer.line_len(line));
        self.cursor = Position::new(line, col);
        self.desired_col = col;
        self.scroll_to_cursor();
    }

    /// Resize the visible window and scroll it back onto the cursor.
    pub fn resize_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport.resize(rows, cols);
        self.scroll_to_cursor();
    }

    /// Display cell of a char column, with tabs expanded to the next stop
    /// and wide graphemes taking two cells.
    pub fn display_col(&self, line: usize, col: usize) -> usize {
        let text = self.buffer.line(line).unwrap_or_default();
        let tab = self.tab_width.max(1) as usize;
        let mut cells = 0;
        for grapheme in text.chars().take(col).collect::<String>().graphemes(true) {
            if grapheme == "\t" {
                cells += tab - cells % tab;
            } else {
                cells += grapheme.width();
            }
        }
        cells
    }

    fn scroll_to_cursor(&mut self) {
        let display_col = self.display_col(self.cursor.line, self.cursor.col);
        self.viewport.scroll_to_cursor(self.cursor.line, display_col);
    }

    fn move_vertical(&mut self, line: usize) {
        let col = self.desired_col.min(self.buffer.line_len(line));
        self.cursor = Position::new(line, col);
        self.scroll_to_cursor();
    }

    fn insert_newline(&mut self) {
        if self
            .buffer
            .insert_char('\n', self.cursor.line, self.cursor.col)
            .is_ok()
        {
            self.set_cursor(Position::new(self.cursor.line + 1, 0));
        }
    }

    fn backspace(&mut self) {
        let Position { line, col } = self.cursor;
        if col == 0 && line == 0 {
            return;
        }
        let target = if col == 0 {
            Position::new(line - 1, self.buffer.line_len(line - 1))
        } else {
            Position::new(line, col - 1)
        };
        if self.buffer.delete_char(line, col).is_ok() {
            self.set_cursor(target);
        }
    }

    fn delete_forward(&mut self) {
        let Position { line, col } = self.cursor;
        let at_line_end = col >= self.buffer.line_len(line);
        if at_line_end && line + 1 >= self.buffer.line_count() {
            return;
        }
        let result = if at_line_end {
            self.buffer.delete_char(line + 1, 0)
        } else {
            self.buffer.delete_char(line, col + 1)
        };
        if result.is_ok() {
            self.set_cursor(Position::new(line, col));
        }
    }
}

impl FontMetrics for TextArea {
    /// Every glyph occupies one cell in a terminal.
    fn space_advance(&self) -> u16 {
        1
    }
}

impl TextSurface for TextArea {
    fn apply_key(&mut self, key: &KeyEvent) {
        let Position { line, col } = self.cursor;
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_text(&c.to_string());
            }
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Tab => self.insert_text("\t"),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                if col > 0 {
                    self.set_cursor(Position::new(line, col - 1));
                } else if line > 0 {
                    self.set_cursor(Position::new(line - 1, self.buffer.line_len(line - 1)));
                }
            }
            KeyCode::Right => {
                if col < self.buffer.line_len(line) {
                    self.set_cursor(Position::new(line, col + 1));
                } else if line + 1 < self.buffer.line_count() {
                    self.set_cursor(Position::new(line + 1, 0));
                }
            }
            KeyCode::Up => {
                if line > 0 {
                    self.move_vertical(line - 1);
                }
            }
            KeyCode::Down => {
                if line + 1 < self.buffer.line_count() {
                    self.move_vertical(line + 1);
                }
            }
            KeyCode::Home => self.set_cursor(Position::new(line, 0)),
            KeyCode::End => self.set_cursor(Position::new(line, self.buffer.line_len(line))),
            _ => {}
        }
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn line(&self, line_idx: usize) -> Option<String> {
        self.buffer.line(line_idx)
    }

    fn line_before_cursor(&self) -> String {
        self.buffer
            .line(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .take(self.cursor.col)
            .collect()
    }

    fn word_under_cursor(&self) -> String {
        let line = self.buffer.line(self.cursor.line).unwrap_or_default();
        motion::word_at(&line, self.cursor.col)
    }

    fn move_to_end_of_word(&mut self) {
        let line: Vec<char> = self
            .buffer
            .line(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let (_, end) = motion::word_bounds(&line, self.cursor.col);
        self.set_cursor(Position::new(self.cursor.line, end));
    }

    fn insert_text(&mut self, text: &str) {
        let Position { line, col } = self.cursor;
        if let Err(e) = self.buffer.insert_text(text, line, col) {
            log::warn!("Insert at {}:{} failed: {}", line, col, e);
            return;
        }
        // Text may span lines; land after its last char.
        let newlines = text.matches('\n').count();
        let target = if newlines == 0 {
            Position::new(line, col + text.chars().count())
        } else {
            let tail = text.rsplit('\n').next().unwrap_or_default();
            Position::new(line + newlines, tail.chars().count())
        };
        self.set_cursor(target);
    }

    fn cursor_rect(&self) -> Rect {
        let display_col = self.display_col(self.cursor.line, self.cursor.col);
        let x = display_col.saturating_sub(self.viewport.offset_col);
        let y = self.cursor.line.saturating_sub(self.viewport.offset_line);
        Rect {
            x: x.min(u16::MAX as usize) as u16,
            y: y.min(u16::MAX as usize) as u16,
            width: 1,
            height: 1,
        }
    }

    fn set_font(&mut self, family: &str, size_pt: u16) {
        self.font_family = family.to_string();
        self.font_size_pt = size_pt;
    }

    fn set_tab_stop_width(&mut self, width: u16) {
        self.tab_width = width.max(1);
        self.scroll_to_cursor();
    }
}
