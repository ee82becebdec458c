//! Edge case tests for jlex-lex

use crate::{tokenize, Lexer, Token, TokenKind};
use jlex_util::{Handler, Position};

fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

fn one(kind: TokenKind, lexeme: &str) -> Vec<(TokenKind, String)> {
    vec![(kind, lexeme.to_string())]
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_whitespace_only() {
    assert_eq!(lex_all(" \n\t "), one(TokenKind::Whitespace, " \n\t "));
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(lex_all("x"), one(TokenKind::Identifier, "x"));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    assert_eq!(lex_all(&name), one(TokenKind::Identifier, &name));
}

#[test]
fn test_edge_case_sensitivity() {
    let t = lex_all("Class class");
    assert_eq!(t[0], (TokenKind::Identifier, "Class".into()));
    assert_eq!(t[2], (TokenKind::Keyword, "class".into()));
}

#[test]
fn test_edge_dollar() {
    assert_eq!(lex_all("$"), one(TokenKind::Identifier, "$"));
}

#[test]
fn test_edge_at() {
    assert_eq!(lex_all("@"), one(TokenKind::Symbol, "@"));
}

#[test]
fn test_edge_double_colon_vs_colon() {
    assert_eq!(lex_all("::"), one(TokenKind::Symbol, "::"));
    let t = lex_all(":::");
    assert_eq!(t[0], (TokenKind::Symbol, "::".into()));
    assert_eq!(t[1], (TokenKind::Symbol, ":".into()));
}

#[test]
fn test_edge_dot_not_followed_by_digit() {
    assert_eq!(lex_all("."), one(TokenKind::Symbol, "."));
    assert_eq!(lex_all("a.b")[1], (TokenKind::Symbol, ".".into()));
}

#[test]
fn test_edge_nested_delimiters() {
    let t = lex_all("((()))");
    assert_eq!(t.len(), 6);
    assert!(t.iter().all(|(kind, _)| *kind == TokenKind::Symbol));
}

#[test]
fn test_edge_lone_slash_at_end() {
    assert_eq!(lex_all("/"), one(TokenKind::Operator, "/"));
}

#[test]
fn test_edge_comment_markers_in_string() {
    assert_eq!(
        lex_all("\"/* not a comment */\""),
        one(TokenKind::String, "\"/* not a comment */\"")
    );
}

#[test]
fn test_edge_quote_in_comment() {
    assert_eq!(
        lex_all("// it's \"fine\""),
        one(TokenKind::LineComment, "// it's \"fine\"")
    );
}

#[test]
fn test_edge_zero_followed_by_x_ident() {
    let t = lex_all("0 x");
    assert_eq!(t[0], (TokenKind::Number, "0".into()));
    assert_eq!(t[2], (TokenKind::Identifier, "x".into()));
}

#[test]
fn test_edge_max_long() {
    assert_eq!(
        lex_all("9223372036854775807L"),
        one(TokenKind::Number, "9223372036854775807L")
    );
}

#[test]
fn test_edge_huge_number_is_not_validated() {
    let digits = "9".repeat(500);
    assert_eq!(lex_all(&digits), one(TokenKind::Number, &digits));
}

#[test]
fn test_edge_nul_character() {
    assert_eq!(lex_all("\0"), one(TokenKind::Unknown, "\0"));
}

#[test]
fn test_edge_unicode_whitespace() {
    let t = lex_all("a\u{00A0}\u{2003}b");
    assert_eq!(t[1], (TokenKind::Whitespace, "\u{00A0}\u{2003}".into()));
}

#[test]
fn test_edge_emoji_is_unknown() {
    let tokens = tokenize("x😀y");
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].lexeme, "😀");
    assert_eq!(tokens[2].position, Position::new(2, 1, 3));
}

#[test]
fn test_edge_trailing_newline_after_comment() {
    let t = lex_all("// c\n");
    assert_eq!(t[0], (TokenKind::LineComment, "// c".into()));
    assert_eq!(t[1], (TokenKind::Whitespace, "\n".into()));
}

#[test]
fn test_edge_empty_line_comment() {
    assert_eq!(lex_all("//"), one(TokenKind::LineComment, "//"));
}

#[test]
fn test_edge_backslash_at_end_of_string() {
    assert_eq!(lex_all("\"abc\\"), one(TokenKind::Unknown, "\"abc\\"));
}

// ==================== ERROR CASES ====================

#[test]
fn test_err_lone_characters() {
    let h = Handler::new();
    let tokens = Lexer::new("#`\\", &h).tokenize();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Unknown));
    assert_eq!(h.error_count(), 3);
}

#[test]
fn test_err_unterminated_string() {
    let h = Handler::new();
    let tokens = Lexer::new("\"unterminated", &h).tokenize();
    assert_eq!(
        tokens,
        vec![Token::new(TokenKind::Unknown, "\"unterminated", Position::START)]
    );
    assert!(h.has_errors());
}

#[test]
fn test_err_mixed_valid_invalid() {
    let h = Handler::new();
    let tokens = Lexer::new("int x = # 1;", &h).tokenize();
    assert_eq!(tokens.last().unwrap().lexeme, ";");
    assert_eq!(h.error_count(), 1);
}

#[test]
fn test_err_annotation_keyword() {
    let h = Handler::new();
    Lexer::new("@public", &h).tokenize();
    assert_eq!(h.diagnostics()[0].message, "invalid annotation '@public'");
}

#[test]
fn test_err_no_warnings_emitted() {
    let h = Handler::new();
    Lexer::new("# 0x \"a", &h).tokenize();
    assert_eq!(h.warning_count(), 0);
    assert_eq!(h.error_count(), 3);
}
