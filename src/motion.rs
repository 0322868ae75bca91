// src/motion.rs - Positions and word boundaries within a line

/// A position in the buffer (line, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Character classes used for word selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Identifier characters: alphanumeric and underscore
    Identifier,
    /// Whitespace
    Whitespace,
    /// Anything else, including the `.` path separator
    Separator,
}

pub fn char_kind(c: char) -> WordKind {
    if c.is_alphanumeric() || c == '_' {
        WordKind::Identifier
    } else if c.is_whitespace() {
        WordKind::Whitespace
    } else {
        WordKind::Separator
    }
}

/// Char range `[start, end)` of the identifier word touching `col`.
///
/// The word ending at the cursor wins over one starting at it, so typing at
/// the end of `sp` selects `sp`. Returns an empty range at `col` when neither
/// neighbour is an identifier character.
pub fn word_bounds(line: &[char], col: usize) -> (usize, usize) {
    let col = col.min(line.len());
    let is_ident = |i: usize| char_kind(line[i]) == WordKind::Identifier;

    let anchor = if col > 0 && is_ident(col - 1) {
        col - 1
    } else if col < line.len() && is_ident(col) {
        col
    } else {
        return (col, col);
    };

    let mut start = anchor;
    while start > 0 && is_ident(start - 1) {
        start -= 1;
    }
    let mut end = anchor + 1;
    while end < line.len() && is_ident(end) {
        end += 1;
    }
    (start, end)
}

/// The identifier word touching `col` as a string.
pub fn word_at(line: &str, col: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = word_bounds(&chars, col);
    chars[start..end].iter().collect()
}

/// Number of leading tab characters of a line.
pub fn leading_tabs(line: &str) -> usize {
    line.chars().take_while(|&c| c == '\t').count()
}
