//! Source text positions and ranges.
//!
//! Every position in this crate uses the same convention end-to-end:
//! 0-indexed line, 0-indexed UTF-8 byte column, displayed 1-indexed.
//! Spans are closed-open: the start position is covered, the end
//! position is the first position *after* the covered text.

use std::fmt;

pub use text_size::TextSize;

/// A line and column position in source text.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
/// This is the same convention tree-sitter points use, so converted AST
/// nodes carry foreign-source positions without any translation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-8 bytes, not characters)
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Create from 1-indexed line and column (as displayed to users).
    #[inline]
    pub const fn from_one_indexed(line: u32, col: u32) -> Self {
        Self {
            line: line.saturating_sub(1),
            col: col.saturating_sub(1),
        }
    }

    /// Get 1-indexed line number (for display).
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    /// Get 1-indexed column number (for display).
    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col + 1
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// A closed-open range of source text, `[start, end)`.
///
/// A span covers the text from `start` up to but not including `end`.
/// The position exactly at `end` belongs to whatever token starts there,
/// which is what gives cursor lookups their "entering the next token"
/// behavior at boundaries.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: LineCol,
    pub end: LineCol,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: LineCol, end: LineCol) -> Self {
        Self { start, end }
    }

    /// A zero-width span at the top of a file.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            start: LineCol::new(0, 0),
            end: LineCol::new(0, 0),
        }
    }

    /// Check whether a position falls inside this span.
    ///
    /// Closed-open: `start` is inside, `end` is not.
    #[inline]
    pub fn contains(&self, pos: LineCol) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check whether `other` is fully contained in this span.
    ///
    /// Equal spans contain each other. This is the containment relation
    /// behind the tree invariant: every node's span is a sub-range of
    /// its parent's span.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check whether the span covers no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Index for converting between byte offsets and line/column positions.
///
/// Built from the original foreign source text; used to validate cursor
/// positions against the file and to recover positions from byte ranges
/// when a node's own position data is unusable.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);

        let line_start = self.line_starts[line];
        let col = offset - line_start;

        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    /// Convert a line/column position to a byte offset.
    ///
    /// Returns `None` when the line does not exist in the indexed text,
    /// which is how out-of-file cursor positions are detected.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line_start = self.line_starts.get(line_col.line as usize)?;
        Some(*line_start + TextSize::from(line_col.col))
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.line_starts.len()
    }

    /// Check if there are no lines (empty file).
    pub fn is_empty(&self) -> bool {
        self.line_starts.is_empty()
    }
}
