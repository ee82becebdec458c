//! Lexical diagnostics.
//!
//! The tokenizer never aborts; instead it reports problems to a [`Handler`]
//! while still producing a token for the offending text. Drivers decide what
//! to do with the collected diagnostics.
//!
//! # Examples
//!
//! ```
//! use jlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use jlex_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;
mod snippet;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// The offending text became an UNKNOWN token
    Error,
    /// Suspicious but well-formed input
    Warning,
    /// Extra context attached to another diagnostic
    Note,
    /// A suggested fix
    Help,
}

impl Level {
    /// Lower-case name used when rendering, e.g. `error`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported problem, located by the span of the token it concerns.
///
/// Usually built with [`DiagnosticBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Main message, without a trailing period
    pub message: String,
    /// Span of the offending token
    pub span: Span,
    /// Code identifying the kind of problem
    pub code: Option<DiagnosticCode>,
    /// Extra context lines
    pub notes: Vec<String>,
    /// Suggested fixes
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with no code, notes or helps.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        DiagnosticBuilder::new(level, message).span(span).build()
    }

    /// Whether this diagnostic counts as an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// The first rendered line, e.g. `error[E1002]: unterminated string literal`.
    pub fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }
}

/// Collects the diagnostics of one tokenizer run.
///
/// Reporting goes through a shared reference, so a lexer can hold
/// `&Handler` while the caller keeps reading counts. The `RefCell` makes a
/// handler `!Sync`: parallel drivers give every file its own.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// An empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Order of reporting is preserved.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// True if at least one error was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(Diagnostic::is_error)
    }

    /// Number of errors reported.
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Number of warnings reported.
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    /// Total number of diagnostics of any level.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// True if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// A copy of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Moves the reported diagnostics out, leaving the handler empty.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Forget everything reported so far.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
