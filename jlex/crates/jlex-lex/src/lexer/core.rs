//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the driving loop, the
//! `NONE` state and token emission. The other states live in sibling
//! modules as further `impl Lexer` blocks.

use jlex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Position};

use crate::classify::{
    is_identifier_letter, is_identifier_start, is_operator_start, is_symbol_char,
};
use crate::cursor::Cursor;
use crate::number::{is_number_starter, Radix};
use crate::token::{Token, TokenKind};

/// What the lexer expects the token in progress to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum State {
    None,
    Word,
    LineComment,
    BlockComment,
    String,
    Char,
    Operators,
    Number,
    Hex,
    Binary,
}

/// Outcome of handing one character to a state handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Step {
    /// This many characters, starting at the current one, were consumed.
    Consumed(usize),
    /// The pending token was emitted; dispatch the same character again.
    Reprocess,
}

/// Flags for the decimal literal in progress.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct NumberInfo {
    pub(super) has_dot: bool,
    pub(super) has_exponent: bool,
}

/// Tokenizer for Java source text.
///
/// The lexer is a character-driven state machine. Each character is handed
/// to the handler of the current state, which either consumes it or emits
/// the pending token and asks for the character to be dispatched again from
/// the initial state. Malformed input never stops the scan: it becomes an
/// [`TokenKind::Unknown`] token plus one error on the [`Handler`].
///
/// # Examples
///
/// ```
/// use jlex_lex::{Lexer, TokenKind};
/// use jlex_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = Lexer::new("int x = #;", &handler).tokenize();
///
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens[6].kind, TokenKind::Unknown);
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    pub(super) state: State,

    /// Text of the token in progress.
    pub(super) lexeme: String,

    /// Position of the first character of the token in progress.
    token_start: Position,

    pub(super) number: NumberInfo,

    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            state: State::None,
            lexeme: String::new(),
            token_start: Position::START,
            number: NumberInfo::default(),
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source and returns its tokens in source order.
    ///
    /// Concatenating the lexemes of the result reproduces the source.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(c) = self.cursor.current_char() {
            let next = self.cursor.peek_char(1);
            if let Step::Consumed(n) = self.dispatch(c, next) {
                self.cursor.advance_by(n);
            }
        }
        self.finish();

        let unknown = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .count();
        tracing::debug!(
            tokens = self.tokens.len(),
            unknown,
            chars = self.cursor.position().offset,
            "tokenized source"
        );
        self.tokens
    }

    fn dispatch(&mut self, c: char, next: Option<char>) -> Step {
        match self.state {
            State::None => self.lex_start(c, next),
            State::Word => self.lex_word(c),
            State::LineComment => self.lex_line_comment(c),
            State::BlockComment => self.lex_block_comment(c),
            State::String => self.lex_quoted(c, '"', TokenKind::String),
            State::Char => self.lex_quoted(c, '\'', TokenKind::Char),
            State::Operators => self.lex_operator(c),
            State::Number => self.lex_number(c, next),
            State::Hex => self.lex_radix_number(c, next, Radix::Hex),
            State::Binary => self.lex_radix_number(c, next, Radix::Binary),
        }
    }

    /// Flushes the token still in progress at end of input.
    ///
    /// Every state except `BLOCK_COMMENT` finishes its token when it sees a
    /// newline, so a synthetic one is dispatched once. It is never part of
    /// any lexeme, and whatever the handler asks for next is ignored.
    fn finish(&mut self) {
        if self.state == State::None || self.lexeme.is_empty() {
            return;
        }
        if self.state == State::BlockComment {
            self.emit_unknown(
                DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
                "unterminated block comment",
            );
            return;
        }
        let _ = self.dispatch('\n', None);
        debug_assert_eq!(self.state, State::None);
    }

    /// Handles the `NONE` state: decides what the next token is.
    fn lex_start(&mut self, c: char, next: Option<char>) -> Step {
        self.token_start = self.cursor.position();
        match (c, next) {
            ('/', Some('/')) => self.begin(State::LineComment, c),
            ('/', Some('*')) => self.begin(State::BlockComment, c),
            ('"', _) => self.begin(State::String, c),
            ('\'', _) => self.begin(State::Char, c),
            ('0', Some('x' | 'X')) => self.begin(State::Hex, c),
            ('0', Some('b' | 'B')) => self.begin(State::Binary, c),
            ('@', Some(n)) if is_identifier_letter(n) => self.begin(State::Word, c),
            _ if is_number_starter(c, next) => {
                self.number = NumberInfo {
                    has_dot: c == '.',
                    has_exponent: false,
                };
                self.begin(State::Number, c)
            },
            _ if is_operator_start(c) => self.begin(State::Operators, c),
            (':', Some(':')) => {
                self.lexeme.push_str("::");
                self.emit(TokenKind::Symbol);
                Step::Consumed(2)
            },
            _ if is_symbol_char(c) => {
                self.lexeme.push(c);
                self.emit(TokenKind::Symbol);
                Step::Consumed(1)
            },
            _ if c.is_whitespace() => self.lex_whitespace(),
            _ if is_identifier_start(c) => self.begin(State::Word, c),
            _ => {
                self.lexeme.push(c);
                self.emit_unknown(
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("unexpected character '{}'", c.escape_debug()),
                );
                Step::Consumed(1)
            },
        }
    }

    /// Emits the whole whitespace run starting at the cursor as one token.
    fn lex_whitespace(&mut self) -> Step {
        let rest = self.cursor.remaining();
        let end = rest
            .find(|ch: char| !ch.is_whitespace())
            .unwrap_or(rest.len());
        let run = &rest[..end];
        self.lexeme.push_str(run);
        self.emit(TokenKind::Whitespace);
        Step::Consumed(run.chars().count())
    }

    /// Starts a multi-character token with `c` as its first character.
    fn begin(&mut self, state: State, c: char) -> Step {
        self.lexeme.push(c);
        self.state = state;
        Step::Consumed(1)
    }

    fn take_token(&mut self, kind: TokenKind) -> Token {
        self.state = State::None;
        Token::new(kind, std::mem::take(&mut self.lexeme), self.token_start)
    }

    /// Emits the pending lexeme as a `kind` token and returns to `NONE`.
    ///
    /// An [`TokenKind::Unknown`] kind here comes from classification, so it
    /// is reported as an unknown token or a bad annotation.
    pub(super) fn emit(&mut self, kind: TokenKind) {
        if kind == TokenKind::Unknown {
            let message = if self.lexeme.starts_with('@') {
                format!("invalid annotation '{}'", self.lexeme)
            } else {
                format!("unknown token '{}'", self.lexeme)
            };
            self.emit_unknown(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN, message);
            return;
        }
        let token = self.take_token(kind);
        self.tokens.push(token);
    }

    /// Emits the pending lexeme as an UNKNOWN token and reports why.
    pub(super) fn emit_unknown(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let token = self.take_token(TokenKind::Unknown);
        let mut diagnostic = DiagnosticBuilder::error(message)
            .code(code)
            .span(token.span());
        if let Some(help) = help_for(code) {
            diagnostic = diagnostic.help(help);
        }
        diagnostic.emit(self.handler);
        self.tokens.push(token);
    }
}

fn help_for(code: DiagnosticCode) -> Option<&'static str> {
    match code {
        DiagnosticCode::E_LEXER_UNTERMINATED_STRING => {
            Some("literals cannot span lines; close the literal before the line ends")
        },
        DiagnosticCode::E_LEXER_INVALID_NUMBER => {
            Some("a radix prefix must be followed by at least one digit")
        },
        DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT => Some("close the comment with `*/`"),
        _ => None,
    }
}
