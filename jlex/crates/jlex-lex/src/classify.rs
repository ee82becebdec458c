//! Character and lexeme classification.
//!
//! Keyword, operator and symbol membership is backed by process-wide hash
//! sets built on first use and read-only afterwards.

use std::sync::LazyLock;

use jlex_util::FxHashSet;

use crate::token::TokenKind;

/// Java reserved words, the literal words, `@interface` and `_`.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "if",
    "finally",
    "float",
    "for",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "goto",
    "@interface",
    "true",
    "false",
    "null",
    "const",
    "strictfp",
    "_",
];

/// Every operator the tokenizer recognizes, `~=` included.
pub const OPERATORS: &[&str] = &[
    "!=", "=", "==", "<", ">", ">=", "<=", "~=", "/=", "*=", "+=", "-=", "-", "+", "*", "/", "!",
    "~", "^", "&", "^=", "|", "|=", "&=", "%", "%=", "&&", "||", "++", "--", "<<", ">>", "<<=",
    ">>=", ">>>", ">>>=",
];

/// Punctuation symbols.
pub const SYMBOLS: &[&str] = &[
    ";", "->", "{", "}", "[", "]", "(", ")", ",", "@", ".", "?", ":", "::",
];

const OPERATOR_STARTERS: &[char] = &[
    '=', '!', '<', '>', '+', '-', '*', '/', '&', '~', '|', '%', '^',
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static OPERATOR_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| OPERATORS.iter().copied().collect());

static SYMBOL_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| SYMBOLS.iter().copied().collect());

/// Every proper and improper prefix of an operator, plus `->`.
///
/// The operator state keeps accumulating only while the lexeme stays in
/// this set.
static OPERATOR_PREFIXES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    OPERATORS
        .iter()
        .copied()
        .chain(std::iter::once("->"))
        .flat_map(|op: &'static str| (1..=op.len()).map(move |end| &op[..end]))
        .collect()
});

/// Returns true if `s` is a keyword.
///
/// ```
/// use jlex_lex::classify::is_keyword;
///
/// assert!(is_keyword("class"));
/// assert!(is_keyword("@interface"));
/// assert!(!is_keyword("Class"));
/// ```
#[inline]
pub fn is_keyword(s: &str) -> bool {
    KEYWORD_SET.contains(s)
}

/// Returns true if `s` is an operator.
#[inline]
pub fn is_operator(s: &str) -> bool {
    OPERATOR_SET.contains(s)
}

/// Returns true if `s` is a symbol.
#[inline]
pub fn is_symbol(s: &str) -> bool {
    SYMBOL_SET.contains(s)
}

/// Returns true if `s` can still grow into an operator or `->`.
#[inline]
pub fn is_operator_prefix(s: &str) -> bool {
    OPERATOR_PREFIXES.contains(s)
}

/// Returns true if `ch` is one of the single-character symbols.
#[inline]
pub fn is_symbol_char(ch: char) -> bool {
    matches!(
        ch,
        ';' | '{' | '}' | '[' | ']' | '(' | ')' | ',' | '@' | '.' | '?' | ':'
    )
}

/// ASCII letter, digit, `_` or `$`.
#[inline]
pub fn is_identifier_letter(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// ASCII letter, `_` or `$`.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

/// Returns true if `s` is a syntactically valid identifier.
///
/// Keywords pass this check; [`classify`] tests for keywords first.
///
/// ```
/// use jlex_lex::classify::is_identifier;
///
/// assert!(is_identifier("$count_2"));
/// assert!(!is_identifier("2count"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_letter),
        _ => false,
    }
}

/// Returns true if `s` is non-empty and consists of whitespace only.
pub fn is_whitespace(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_whitespace)
}

/// Returns true if `ch` can begin an operator.
#[inline]
pub fn is_operator_start(ch: char) -> bool {
    OPERATOR_STARTERS.contains(&ch)
}

/// Classifies a complete lexeme.
///
/// Checks run in a fixed order: keyword, operator, identifier, whitespace,
/// symbol, then annotation for `@`-prefixed lexemes whose remainder is a
/// non-keyword identifier. Everything else is [`TokenKind::Unknown`].
///
/// ```
/// use jlex_lex::classify::classify;
/// use jlex_lex::TokenKind;
///
/// assert_eq!(classify("while"), TokenKind::Keyword);
/// assert_eq!(classify(">>="), TokenKind::Operator);
/// assert_eq!(classify("->"), TokenKind::Symbol);
/// assert_eq!(classify("@Override"), TokenKind::Annotation);
/// assert_eq!(classify("@123"), TokenKind::Unknown);
/// ```
pub fn classify(lexeme: &str) -> TokenKind {
    if is_keyword(lexeme) {
        TokenKind::Keyword
    } else if is_operator(lexeme) {
        TokenKind::Operator
    } else if is_identifier(lexeme) {
        TokenKind::Identifier
    } else if is_whitespace(lexeme) {
        TokenKind::Whitespace
    } else if is_symbol(lexeme) {
        TokenKind::Symbol
    } else if let Some(name) = lexeme.strip_prefix('@') {
        if is_keyword(name) || !is_identifier(name) {
            TokenKind::Unknown
        } else {
            TokenKind::Annotation
        }
    } else {
        TokenKind::Unknown
    }
}
