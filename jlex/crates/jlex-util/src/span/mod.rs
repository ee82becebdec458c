//! Span module - Source location tracking.
//!
//! Offsets in this module count characters, not bytes: advancing over `é`
//! moves the offset by one, exactly like advancing over `e`.
//!
//! # Examples
//!
//! ```
//! use jlex_util::span::{Position, Span};
//!
//! let mut pos = Position::START;
//! for ch in "ab\nc".chars() {
//!     pos.advance(ch);
//! }
//! assert_eq!((pos.offset, pos.line, pos.column), (4, 2, 2));
//!
//! let span = Span::new(0, 2, 1, 1);
//! assert_eq!(span.len(), 2);
//! ```

mod source_file;

pub use source_file::SourceFile;

use serde::Serialize;
use std::fmt;

/// A location in source text.
///
/// `line` and `column` are 1-based. The only way to move a position forward
/// is [`Position::advance`], which keeps the three fields consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Number of characters before this position
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// The position of the first character of any input
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Create a position from its raw parts
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Moves past `consumed`.
    ///
    /// The offset always grows by one. A newline starts the next line at
    /// column 1; any other character moves one column right.
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::Position;
    ///
    /// let mut pos = Position::START;
    /// pos.advance('x');
    /// assert_eq!(pos, Position::new(1, 1, 2));
    /// pos.advance('\n');
    /// assert_eq!(pos, Position::new(2, 2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self, consumed: char) {
        self.offset += 1;
        if consumed == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A half-open range of character offsets together with the line and column
/// of its first character.
///
/// # Examples
///
/// ```
/// use jlex_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert!(span.contains(15));
/// assert!(!span.contains(20));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start character offset in source
    pub start: usize,
    /// End character offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start character offset
    /// * `end` - End character offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span that starts at `position` and covers `len` characters
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::{Position, Span};
    ///
    /// let span = Span::at(Position::new(4, 2, 3), 5);
    /// assert_eq!(span, Span::new(4, 9, 2, 3));
    /// ```
    #[inline]
    pub fn at(position: Position, len: usize) -> Self {
        Self {
            start: position.offset,
            end: position.offset + len,
            line: position.line,
            column: position.column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in characters
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a character offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
