//! Character cursor for traversing source code.
//!
//! The cursor walks a `&str` one `char` at a time and keeps a
//! [`Position`] in step with it, so the tokenizer never has to do its own
//! line or column arithmetic.

use jlex_util::Position;

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use jlex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int\nx");
/// assert_eq!(cursor.current_char(), Some('i'));
/// cursor.advance_by(4);
/// assert_eq!(cursor.current_char(), Some('x'));
/// assert_eq!(cursor.position().line, 2);
/// assert_eq!(cursor.position().column, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    byte_pos: usize,

    /// Character position of the next character to be read.
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_pos: 0,
            position: Position::START,
        }
    }

    /// Returns the current character, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// ```
    /// use jlex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(1), Some('b'));
    /// assert_eq!(cursor.peek_char(2), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Returns the unread part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.byte_pos..]
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.byte_pos >= self.source.len()
    }

    /// Returns the position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Consumes the current character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.byte_pos += ch.len_utf8();
        self.position.advance(ch);
        Some(ch)
    }

    /// Consumes up to `n` characters.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }
}
