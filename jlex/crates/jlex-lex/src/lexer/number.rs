//! Number literal lexing.
//!
//! Only the shape of a literal is checked; values are never computed, so
//! overflow is not an error here.

use jlex_util::DiagnosticCode;

use super::core::Step;
use crate::number::{
    accepts_radix_prefix, is_digit, is_number_type_suffix, underscore_run, Radix,
};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes an underscore group if one starts at `c`.
    fn lex_underscores(&mut self, c: char, radix: Radix) -> Option<Step> {
        if c != '_' {
            return None;
        }
        let run = underscore_run(self.lexeme.chars().last(), self.cursor.remaining(), radix)?;
        self.lexeme.push_str(run);
        Some(Step::Consumed(run.chars().count()))
    }

    /// Handles the `NUMBER` state: decimal integers and floating point.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `1_000_000`, `42L`
    /// - Float: `3.14`, `.5`, `1.`, `6.02e23`, `1e-9`, `2.5f`, `10d`
    ///
    /// A sign is accepted only right after the exponent marker, and the
    /// marker itself only when a digit or sign follows. One dot is accepted
    /// anywhere in the literal, even after the exponent. `l`/`L` is a valid
    /// suffix only for integers.
    pub(super) fn lex_number(&mut self, c: char, next: Option<char>) -> Step {
        if let Some(step) = self.lex_underscores(c, Radix::Decimal) {
            return step;
        }

        let after_exponent_marker =
            self.number.has_exponent && self.lexeme.ends_with(['e', 'E']);

        if is_digit(c) || (after_exponent_marker && matches!(c, '+' | '-')) {
            self.lexeme.push(c);
            Step::Consumed(1)
        } else if c == '.' && !self.number.has_dot {
            self.number.has_dot = true;
            self.lexeme.push(c);
            Step::Consumed(1)
        } else if matches!(c, 'e' | 'E')
            && !self.number.has_exponent
            && next.is_some_and(|n| is_digit(n) || n == '+' || n == '-')
        {
            self.number.has_exponent = true;
            self.lexeme.push(c);
            Step::Consumed(1)
        } else {
            let supports_long = !self.number.has_dot && !self.number.has_exponent;
            let suffix = is_number_type_suffix(c, supports_long);
            if suffix {
                self.lexeme.push(c);
            }
            self.emit(TokenKind::Number);
            if suffix {
                Step::Consumed(1)
            } else {
                Step::Reprocess
            }
        }
    }

    /// Handles the `HEX` and `BINARY` states.
    ///
    /// The state is entered on the `0` of a `0x`/`0b` prefix. The prefix
    /// letter is declined only when a decimal digit outside the radix follows
    /// it; for `0b2` the `0` is emitted on its own and `b2` is lexed as an
    /// identifier. A literal with no digits after the prefix is UNKNOWN.
    pub(super) fn lex_radix_number(&mut self, c: char, next: Option<char>, radix: Radix) -> Step {
        let kind = match radix {
            Radix::Binary => TokenKind::BinaryNumber,
            Radix::Hex | Radix::Decimal => TokenKind::HexNumber,
        };

        if self.lexeme == "0" && matches!(c, 'x' | 'X' | 'b' | 'B') {
            if accepts_radix_prefix(next, radix) {
                self.lexeme.push(c);
                return Step::Consumed(1);
            }
            self.emit(kind);
            return Step::Reprocess;
        }

        if let Some(step) = self.lex_underscores(c, radix) {
            return step;
        }

        if radix.contains(c) {
            self.lexeme.push(c);
            return Step::Consumed(1);
        }

        let suffix = matches!(c, 'l' | 'L');
        if suffix {
            self.lexeme.push(c);
        }
        let min_len = if suffix { 4 } else { 3 };
        if self.lexeme.len() >= min_len {
            self.emit(kind);
        } else {
            let message = format!(
                "invalid numeric literal '{}': no digits after the prefix",
                self.lexeme
            );
            self.emit_unknown(DiagnosticCode::E_LEXER_INVALID_NUMBER, message);
        }
        if suffix {
            Step::Consumed(1)
        } else {
            Step::Reprocess
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, TokenKind};
    use jlex_util::{DiagnosticCode, Handler};

    fn lex(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    fn number(source: &str) {
        assert_eq!(
            lex(source),
            vec![(TokenKind::Number, source.into())],
            "{source} should be one NUMBER"
        );
    }

    #[test]
    fn test_integers() {
        number("0");
        number("42");
        number("1_000");
        number("1__000");
        number("007");
    }

    #[test]
    fn test_floats() {
        number("3.14");
        number(".5");
        number("1.");
        number("6.02e23");
        number("1e-9");
        number("1E+9");
        number("2.5e10");
    }

    #[test]
    fn test_suffixes() {
        number("42L");
        number("42l");
        number("2.5f");
        number("10d");
        number("1e3F");
        number("1_0D");
    }

    #[test]
    fn test_long_suffix_only_on_integers() {
        assert_eq!(
            lex("1.5L"),
            vec![
                (TokenKind::Number, "1.5".into()),
                (TokenKind::Identifier, "L".into()),
            ]
        );
        assert_eq!(
            lex("1e5L"),
            vec![
                (TokenKind::Number, "1e5".into()),
                (TokenKind::Identifier, "L".into()),
            ]
        );
    }

    #[test]
    fn test_trailing_underscores_rescan() {
        assert_eq!(
            lex("1__"),
            vec![
                (TokenKind::Number, "1".into()),
                (TokenKind::Identifier, "__".into()),
            ]
        );
        assert_eq!(
            lex("1_.5"),
            vec![
                (TokenKind::Number, "1".into()),
                (TokenKind::Keyword, "_".into()),
                (TokenKind::Number, ".5".into()),
            ]
        );
    }

    #[test]
    fn test_exponent_needs_digit_or_sign() {
        assert_eq!(
            lex("1e"),
            vec![
                (TokenKind::Number, "1".into()),
                (TokenKind::Identifier, "e".into()),
            ]
        );
        assert_eq!(
            lex("1ex"),
            vec![
                (TokenKind::Number, "1".into()),
                (TokenKind::Identifier, "ex".into()),
            ]
        );
    }

    #[test]
    fn test_sign_only_after_exponent() {
        assert_eq!(
            lex("1+2"),
            vec![
                (TokenKind::Number, "1".into()),
                (TokenKind::Operator, "+".into()),
                (TokenKind::Number, "2".into()),
            ]
        );
        assert_eq!(
            lex("1e+2+3"),
            vec![
                (TokenKind::Number, "1e+2".into()),
                (TokenKind::Operator, "+".into()),
                (TokenKind::Number, "3".into()),
            ]
        );
    }

    #[test]
    fn test_dot_after_exponent() {
        number("1e5.5");
        number("2E-3.");
        assert_eq!(
            lex("1e5.5.5"),
            vec![
                (TokenKind::Number, "1e5.5".into()),
                (TokenKind::Number, ".5".into()),
            ]
        );
    }

    #[test]
    fn test_single_dot() {
        assert_eq!(
            lex("1.2.3"),
            vec![
                (TokenKind::Number, "1.2".into()),
                (TokenKind::Number, ".3".into()),
            ]
        );
    }

    #[test]
    fn test_member_access_on_number() {
        assert_eq!(
            lex("1..x"),
            vec![
                (TokenKind::Number, "1.".into()),
                (TokenKind::Symbol, ".".into()),
                (TokenKind::Identifier, "x".into()),
            ]
        );
    }

    #[test]
    fn test_hex_literals() {
        assert_eq!(lex("0x1A3"), vec![(TokenKind::HexNumber, "0x1A3".into())]);
        assert_eq!(lex("0XFF_FF"), vec![(TokenKind::HexNumber, "0XFF_FF".into())]);
        assert_eq!(lex("0xCAFEL"), vec![(TokenKind::HexNumber, "0xCAFEL".into())]);
    }

    #[test]
    fn test_binary_literals() {
        assert_eq!(lex("0b1010"), vec![(TokenKind::BinaryNumber, "0b1010".into())]);
        assert_eq!(
            lex("0B1111_0000"),
            vec![(TokenKind::BinaryNumber, "0B1111_0000".into())]
        );
        assert_eq!(lex("0b1l"), vec![(TokenKind::BinaryNumber, "0b1l".into())]);
    }

    #[test]
    fn test_binary_with_non_binary_digit() {
        assert_eq!(
            lex("0b2"),
            vec![
                (TokenKind::BinaryNumber, "0".into()),
                (TokenKind::Identifier, "b2".into()),
            ]
        );
        assert_eq!(
            lex("0b12"),
            vec![
                (TokenKind::BinaryNumber, "0b1".into()),
                (TokenKind::Number, "2".into()),
            ]
        );
    }

    #[test]
    fn test_hex_followed_by_identifier_letter() {
        assert_eq!(
            lex("0xg"),
            vec![
                (TokenKind::Unknown, "0x".into()),
                (TokenKind::Identifier, "g".into()),
            ]
        );
        assert_eq!(
            lex("0b1z"),
            vec![
                (TokenKind::BinaryNumber, "0b1".into()),
                (TokenKind::Identifier, "z".into()),
            ]
        );
    }

    #[test]
    fn test_bare_prefix_is_unknown() {
        assert_eq!(lex("0x"), vec![(TokenKind::Unknown, "0x".into())]);
        assert_eq!(lex("0b"), vec![(TokenKind::Unknown, "0b".into())]);
        assert_eq!(
            lex("0x;"),
            vec![
                (TokenKind::Unknown, "0x".into()),
                (TokenKind::Symbol, ";".into()),
            ]
        );
        assert_eq!(lex("0xL"), vec![(TokenKind::Unknown, "0xL".into())]);
        assert_eq!(lex("0bl"), vec![(TokenKind::Unknown, "0bl".into())]);
    }

    #[test]
    fn test_bare_prefix_reports_invalid_number() {
        let handler = Handler::new();
        Lexer::new("int x = 0x;", &handler).tokenize();
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_INVALID_NUMBER));
        assert_eq!(diags[0].span.column, 9);
        assert!(!diags[0].helps.is_empty());
    }

    #[test]
    fn test_underscore_after_prefix_is_rejected() {
        assert_eq!(
            lex("0x_1"),
            vec![
                (TokenKind::Unknown, "0x".into()),
                (TokenKind::Identifier, "_1".into()),
            ]
        );
    }

    #[test]
    fn test_hex_trailing_underscore() {
        assert_eq!(
            lex("0xF_"),
            vec![
                (TokenKind::HexNumber, "0xF".into()),
                (TokenKind::Keyword, "_".into()),
            ]
        );
    }
}
