//! Source files with line lookup for diagnostic rendering.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceError, SourceResult};

/// A named source text with precomputed line starts
///
/// # Examples
///
/// ```
/// use jlex_util::span::SourceFile;
///
/// let file = SourceFile::new("Main.java", "class Main {\n}\n");
/// assert_eq!(file.name(), "Main.java");
/// assert_eq!(file.line_at(1), Some("class Main {"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
    char_len: usize,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        let char_len = content.chars().count();
        Self {
            name: name.into(),
            content,
            line_starts,
            char_len,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens one more (empty) line, matching how
    /// positions count lines.
    ///
    /// ```
    /// use jlex_util::span::SourceFile;
    ///
    /// assert_eq!(SourceFile::new("A.java", "a\nb").line_count(), 2);
    /// assert_eq!(SourceFile::new("A.java", "a\nb\n").line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Like [`SourceFile::line_at`], but reports why the lookup failed
    pub fn checked_line(&self, line: usize) -> SourceResult<&str> {
        self.line_at(line).ok_or(SourceError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }

    /// Extract the text covered by a span
    ///
    /// Span offsets count characters.
    ///
    /// ```
    /// use jlex_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("A.java", "int x = 1;");
    /// assert_eq!(file.extract(Span::new(4, 5, 1, 5)).unwrap(), "x");
    /// ```
    pub fn extract(&self, span: Span) -> SourceResult<&str> {
        if span.start > span.end {
            return Err(SourceError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > self.char_len {
            return Err(SourceError::SpanOutOfBounds {
                file_len: self.char_len,
                span_start: span.start,
                span_end: span.end,
            });
        }
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end);
        Ok(&self.content[start..end])
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_offset)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
