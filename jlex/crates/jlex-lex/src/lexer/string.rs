//! String and character literal lexing.
//!
//! Escape sequences are kept verbatim in the lexeme. A quote preceded by `\`
//! never closes a literal. A literal cut off by a newline or the end of
//! input becomes an UNKNOWN token with the partial text.

use jlex_util::DiagnosticCode;

use super::core::Step;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles the `STRING` and `CHAR` states.
    ///
    /// `quote` is the delimiter that closes the literal and `kind` the token
    /// kind emitted when it does. Only the character before the quote is
    /// looked at, so `'\\'` is still open after its last quote.
    pub(super) fn lex_quoted(&mut self, c: char, quote: char, kind: TokenKind) -> Step {
        if c == '\n' {
            let what = if kind == TokenKind::Char {
                "character"
            } else {
                "string"
            };
            self.emit_unknown(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                format!("unterminated {} literal", what),
            );
            return Step::Reprocess;
        }

        let closes = c == quote && !self.lexeme.ends_with('\\');
        self.lexeme.push(c);
        if closes {
            self.emit(kind);
        }
        Step::Consumed(1)
    }
}
