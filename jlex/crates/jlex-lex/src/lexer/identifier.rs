//! Identifier, keyword and annotation lexing.

use super::core::Step;
use crate::classify::{classify, is_identifier_letter};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles the `WORD` state.
    ///
    /// Accumulates identifier letters; the first other character ends the
    /// word, which is then classified as a keyword, identifier or
    /// annotation (a leading `@` was accepted by the `NONE` state).
    pub(super) fn lex_word(&mut self, c: char) -> Step {
        if is_identifier_letter(c) {
            self.lexeme.push(c);
            return Step::Consumed(1);
        }
        let kind = classify(&self.lexeme);
        self.emit(kind);
        Step::Reprocess
    }
}
