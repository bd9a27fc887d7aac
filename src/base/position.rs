//! Line/column positions for diagnostics.

use rowan::{TextRange, TextSize};
use std::fmt;

/// A zero-indexed line/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for LineCol {
    /// Renders one-indexed, the way editors show positions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// A line/column range in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: LineCol,
    pub end: LineCol,
}

impl Span {
    pub fn new(start: LineCol, end: LineCol) -> Self {
        Self { start, end }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: LineCol) -> bool {
        self.start <= position && position <= self.end
    }
}

/// Maps byte offsets to line/column positions.
///
/// Built once per source text; lookups are a binary search over line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// Offsets past the end of the text clamp to the last position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let col = offset - self.line_starts[line];
        LineCol::new(line as u32, col.into())
    }

    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.line_col(range.start()), self.line_col(range.end()))
    }

    /// Number of lines in the indexed text
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
