//! Operator lexing.
//!
//! Operators are matched greedily: the lexeme grows while it is still the
//! prefix of some operator (or of `->`, which classifies as a symbol).

use super::core::Step;
use crate::classify::{classify, is_operator_prefix};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles the `OPERATORS` state.
    pub(super) fn lex_operator(&mut self, c: char) -> Step {
        self.lexeme.push(c);
        if is_operator_prefix(&self.lexeme) {
            return Step::Consumed(1);
        }
        self.lexeme.pop();
        let kind = classify(&self.lexeme);
        self.emit(kind);
        Step::Reprocess
    }
}
