//! Diagnostic codes.
//!
//! A code is a prefix letter plus a number, rendered zero-padded to four
//! digits. Tokenizer errors occupy `E1001`..`E1999`.
//!
//! ```
//! use jlex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!((code.prefix, code.number), ("E", 1002));
//! assert_eq!(code.as_str(), "E1002");
//! assert_eq!(code.title(), Some("unterminated string or character literal"));
//! ```

use std::fmt;

/// Identifies what kind of problem a diagnostic describes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// `E` for errors, `W` for warnings
    pub prefix: &'static str,
    /// Number within the prefix
    pub number: u32,
}

impl DiagnosticCode {
    /// A `#` or other character that starts no token.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// A string or char literal cut off by a newline or end of input.
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// `0x`/`0b` with no digits after the prefix.
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// A word that classifies as nothing, such as `@1` or `@class`.
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::new("E", 1004);
    /// A block comment still open at end of input.
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);

    /// Every code the tokenizer reports, in numeric order.
    pub const LEXER: [Self; 5] = [
        Self::E_LEXER_UNEXPECTED_CHAR,
        Self::E_LEXER_UNTERMINATED_STRING,
        Self::E_LEXER_INVALID_NUMBER,
        Self::E_LEXER_UNKNOWN_TOKEN,
        Self::E_LEXER_UNTERMINATED_COMMENT,
    ];

    /// A code with the given prefix and number.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// The rendered code, e.g. `E1001`.
    pub fn as_str(&self) -> String {
        self.to_string()
    }

    /// Short description of a tokenizer code; `None` for other codes.
    pub fn title(&self) -> Option<&'static str> {
        let title = match *self {
            Self::E_LEXER_UNEXPECTED_CHAR => "unexpected character",
            Self::E_LEXER_UNTERMINATED_STRING => "unterminated string or character literal",
            Self::E_LEXER_INVALID_NUMBER => "invalid numeric literal",
            Self::E_LEXER_UNKNOWN_TOKEN => "unknown token",
            Self::E_LEXER_UNTERMINATED_COMMENT => "unterminated block comment",
            _ => return None,
        };
        Some(title)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}
