//! Fluent construction of [`Diagnostic`]s.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Accumulates the parts of a diagnostic, then builds or emits it.
///
/// ```
/// use jlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use jlex_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 4, 1, 1))
///     .help("close the literal before the line ends")
///     .emit(&handler);
/// assert_eq!(handler.error_count(), 1);
/// ```
#[must_use = "a builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start a diagnostic of `level` with no span, code, notes or helps.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic {
                level,
                message: message.into(),
                span: Span::DUMMY,
                code: None,
                notes: Vec::new(),
                helps: Vec::new(),
            },
        }
    }

    /// Start an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Tag with `code`.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Locate at `span`.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Append a note line.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Append a help line.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finish without reporting.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish and report to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let diag = DiagnosticBuilder::error("unexpected character '#'").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.span, Span::DUMMY);
        assert_eq!(diag.code, None);
        assert!(diag.notes.is_empty() && diag.helps.is_empty());
    }

    #[test]
    fn test_all_parts() {
        let diag = DiagnosticBuilder::warning("odd")
            .code(DiagnosticCode::new("W", 1))
            .span(Span::new(1, 2, 1, 2))
            .note("first note")
            .note("second note")
            .help("a help")
            .build();
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.message, "odd");
        assert_eq!(diag.span, Span::new(1, 2, 1, 2));
        assert_eq!(diag.notes, ["first note", "second note"]);
        assert_eq!(diag.helps, ["a help"]);
    }

    #[test]
    fn test_emit_reports_to_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("invalid annotation '@1'")
            .code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
            .emit(&handler);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN));
    }
}
