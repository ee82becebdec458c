//! jlex-lex - Tokenizer for Java source text
//!
//! This crate turns raw Java source into a flat, ordered list of classified
//! tokens. Every character of the input ends up in exactly one token, so
//! concatenating the lexemes reproduces the source; whitespace and comments
//! are tokens too.
//!
//! # Example Usage
//!
//! ```
//! use jlex_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 0x1F;");
//! let kinds: Vec<TokenKind> = tokens
//!     .iter()
//!     .filter(|t| !t.is_trivia())
//!     .map(|t| t.kind)
//!     .collect();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::HexNumber,
//!         TokenKind::Symbol,
//!     ]
//! );
//! ```
//!
//! To see why a token came out UNKNOWN, run the [`Lexer`] with your own
//! [`Handler`](jlex_util::Handler):
//!
//! ```
//! use jlex_lex::Lexer;
//! use jlex_util::Handler;
//!
//! let handler = Handler::new();
//! Lexer::new("String s = \"open;", &handler).tokenize();
//! assert_eq!(handler.diagnostics()[0].code.unwrap().as_str(), "E1002");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - The state machine
//! - [`cursor`] - Character cursor with position tracking
//! - [`classify`] - Keyword, operator and symbol tables and predicates
//! - [`number`] - Numeric literal helpers
//!
//! # Token Categories
//!
//! - **Keywords**: Java reserved words, `true`, `false`, `null`,
//!   `@interface` and `_`
//! - **Identifiers**: `[a-zA-Z_$][a-zA-Z0-9_$]*`
//! - **Annotations**: `@` followed by a non-keyword identifier
//! - **Numbers**: `42`, `1_000L`, `3.14f`, `6.02e23`, `.5`
//! - **Hex / binary numbers**: `0xFF_FF`, `0b1010L`
//! - **Strings and chars**: `"a\"b"`, `'\n'`, escapes kept verbatim
//! - **Operators**: arithmetic, relational, logical, bitwise, shift and
//!   assignment forms, matched greedily
//! - **Symbols**: `; -> { } [ ] ( ) , @ . ? : ::`
//! - **Trivia**: whitespace runs, line comments, block comments
//! - **Unknown**: anything malformed; scanning always continues

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod number;
pub mod token;

#[cfg(test)]
mod edge_cases;

use jlex_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenizes `source`, discarding diagnostics.
///
/// Use [`Lexer`] directly to collect diagnostics for UNKNOWN tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    Lexer::new(source, &handler).tokenize()
}
