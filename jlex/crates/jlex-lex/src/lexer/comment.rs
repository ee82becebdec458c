//! Comment lexing.
//!
//! Comments are kept as tokens. A line comment stops before its newline; a
//! block comment keeps everything up to and including `*/` and is
//! positioned at its opening `/`.

use super::core::Step;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles the `LINE_COMMENT` state.
    pub(super) fn lex_line_comment(&mut self, c: char) -> Step {
        if c == '\n' {
            self.emit(TokenKind::LineComment);
            return Step::Reprocess;
        }
        self.lexeme.push(c);
        Step::Consumed(1)
    }

    /// Handles the `BLOCK_COMMENT` state.
    ///
    /// Block comments do not nest. The comment closes on a `/` whose
    /// previous character is `*`, including the `*` of the opening `/*`,
    /// so `/*/` is a complete comment.
    pub(super) fn lex_block_comment(&mut self, c: char) -> Step {
        let closes = c == '/' && self.lexeme.ends_with('*');
        self.lexeme.push(c);
        if closes {
            self.emit(TokenKind::BlockComment);
        }
        Step::Consumed(1)
    }
}
