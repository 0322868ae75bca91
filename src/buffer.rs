use ropey::Rope;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rope error: {0}")]
    Rope(#[from] ropey::Error),
}

/// Rope-backed text storage. Positions are (line, column) in chars.
pub struct Buffer {
    pub rope: Rope,
    pub file_path: Option<String>,
    pub modified: bool,
    pub version: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            file_path: None,
            modified: false,
            version: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::new()
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    fn char_index(&self, line: usize, col: usize) -> Result<usize, BufferError> {
        let line_start = self.rope.try_line_to_char(line)?;
        Ok(line_start + col.min(self.line_len(line)))
    }

    fn touch(&mut self) {
        self.modified = true;
        self.version += 1;
    }

    pub fn insert_char(&mut self, ch: char, line: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.char_index(line, col)?;
        self.rope.try_insert_char(char_idx, ch)?;
        self.touch();
        Ok(())
    }

    pub fn insert_text(&mut self, text: &str, line: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.char_index(line, col)?;
        self.rope.try_insert(char_idx, text)?;
        self.touch();
        Ok(())
    }

    /// Remove the character before (line, col). At column 0 this joins the
    /// line onto the previous one.
    pub fn delete_char(&mut self, line: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.char_index(line, col)?;
        if char_idx == 0 {
            return Ok(());
        }
        self.rope.try_remove(char_idx - 1..char_idx)?;
        self.touch();
        Ok(())
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx).to_string();
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        }
    }

    /// Length of a line in chars, excluding the line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let content = fs::read_to_string(path.as_ref())?;
        self.rope = Rope::from_str(&content);
        self.file_path = Some(path.as_ref().to_string_lossy().to_string());
        self.modified = false;
        self.version = 0;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        fs::write(path.as_ref(), self.rope.to_string())?;
        self.file_path = Some(path.as_ref().to_string_lossy().to_string());
        self.modified = false;
        Ok(())
    }
}
