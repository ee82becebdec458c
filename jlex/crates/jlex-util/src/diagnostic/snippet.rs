//! Source excerpts with a caret underline.

use std::fmt;

use crate::{SourceFile, Span};

/// One source line with a highlighted column range.
///
/// Renders as a gutter with the line number, the line itself, and a row of
/// `^` under the highlighted columns:
///
/// ```
/// use jlex_util::{SourceFile, SourceSnippet, Span};
///
/// let file = SourceFile::new("A.java", "int x = #;");
/// let snippet = SourceSnippet::from_span(&file, Span::new(8, 9, 1, 9)).unwrap();
/// assert_eq!(snippet.to_string(), "  1 | int x = #;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without its terminator
    pub line: String,
    /// 1-based line number
    pub line_number: usize,
    /// First highlighted column (1-based)
    pub start_column: usize,
    /// Column just past the highlight (1-based, exclusive)
    pub end_column: usize,
    /// Text printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// A snippet highlighting `start_column..end_column` of `line`.
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// The snippet for the first line of `span` in `file`.
    ///
    /// A span running past the end of its first line (a block comment, say)
    /// is cut at the line end. At least one column is always highlighted.
    /// Returns `None` if the span's line is not in the file.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line_number = span.line as usize;
        let text = file.line_at(line_number)?;
        let start = span.column as usize;
        let line_end = text.chars().count() + 1;
        let end = (start + span.len()).min(line_end).max(start + 1);
        Some(Self::new(text, line_number, start, end))
    }

    /// Attach a label printed after the carets.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn gutter_width(&self) -> usize {
        self.line_number.to_string().len().max(3)
    }
}

impl fmt::Display for SourceSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.gutter_width();
        writeln!(f, "{:>width$} | {}", self.line_number, self.line)?;
        write!(
            f,
            "{:>width$} | {}{}",
            "",
            " ".repeat(self.start_column.saturating_sub(1)),
            "^".repeat(self.end_column.saturating_sub(self.start_column).max(1)),
        )?;
        if let Some(label) = &self.label {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}
