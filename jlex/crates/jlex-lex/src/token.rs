//! Token definitions.
//!
//! A [`Token`] is a classified fragment of source text: its [`TokenKind`],
//! the exact lexeme it covers (quotes and comment markers included) and the
//! position of its first character.

use std::fmt;

use jlex_util::{Position, Span};
use serde::Serialize;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Reserved word, literal word (`true`, `null`) or `@interface`
    Keyword,
    /// `// ...` up to, not including, the newline
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// Double-quoted string literal
    String,
    /// Single-quoted character literal
    Char,
    /// Identifier
    Identifier,
    /// `@Name` annotation
    Annotation,
    /// Decimal integer or floating-point literal
    Number,
    /// `0x` literal
    HexNumber,
    /// `0b` literal
    BinaryNumber,
    /// Arithmetic, relational, logical, bitwise or assignment operator
    Operator,
    /// Punctuation such as `;`, `->` or `::`
    Symbol,
    /// A run of whitespace
    Whitespace,
    /// Anything the tokenizer could not classify
    Unknown,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Keyword,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::Identifier,
        TokenKind::Annotation,
        TokenKind::Number,
        TokenKind::HexNumber,
        TokenKind::BinaryNumber,
        TokenKind::Operator,
        TokenKind::Symbol,
        TokenKind::Whitespace,
        TokenKind::Unknown,
    ];

    /// Returns the upper-case name of this kind, e.g. `HEX_NUMBER`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Annotation => "ANNOTATION",
            TokenKind::Number => "NUMBER",
            TokenKind::HexNumber => "HEX_NUMBER",
            TokenKind::BinaryNumber => "BINARY_NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned fragment of source text.
///
/// # Examples
///
/// ```
/// use jlex_lex::{Token, TokenKind};
/// use jlex_util::Position;
///
/// let token = Token::new(TokenKind::Keyword, "public", Position::START);
/// assert_eq!(token.to_string(), "KEYWORD 1:1 'public'");
/// assert_eq!(token.span().len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// The exact text consumed for this token
    pub lexeme: String,
    /// Position of the first character
    pub position: Position,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Returns the source span covered by this token.
    pub fn span(&self) -> Span {
        Span::at(self.position, self.len())
    }

    /// Returns the length of the lexeme in characters.
    pub fn len(&self) -> usize {
        self.lexeme.chars().count()
    }

    /// Returns true if the lexeme is empty.
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// Returns true for whitespace and comments.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.kind, self.position, self.lexeme)
    }
}

static_assertions::assert_impl_all!(Token: Send, Sync);
static_assertions::assert_impl_all!(TokenKind: Send, Sync, Copy);
