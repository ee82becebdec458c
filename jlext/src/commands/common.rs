//! Common types and utilities for jlext commands.
//!
//! Both subcommands read files, tokenize them on a rayon pool and render
//! diagnostics the same way; that shared machinery lives here.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use jlex_lex::{Lexer, Token, TokenKind};
use jlex_util::{Diagnostic, Handler, SourceFile, SourceSnippet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{JlextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND line:col 'lexeme'` line per token
    #[default]
    Text,
    /// A JSON array of `{file, tokens}` objects
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

// ============================================================================
// Lexed Files
// ============================================================================

/// The result of tokenizing one input file.
#[derive(Debug)]
pub struct LexedFile {
    /// The file as read from disk
    pub source: SourceFile,
    /// Every token of the file, trivia included
    pub tokens: Vec<Token>,
    /// Diagnostics reported while tokenizing
    pub diagnostics: Vec<Diagnostic>,
}

impl LexedFile {
    /// Tokenize `content`, collecting diagnostics with a fresh handler.
    pub fn lex(name: impl Into<String>, content: impl Into<String>) -> Self {
        let source = SourceFile::new(name, content.into());
        let handler = Handler::new();
        let tokens = Lexer::new(source.content(), &handler).tokenize();
        Self {
            source,
            tokens,
            diagnostics: handler.take_diagnostics(),
        }
    }

    /// Read and tokenize the file at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JlextError::Validation(format!(
                "{} {}: {}",
                error_messages::UNREADABLE_FILE,
                path.display(),
                e
            ))
        })?;
        let lexed = Self::lex(path.display().to_string(), content);
        debug!(
            file = %path.display(),
            tokens = lexed.tokens.len(),
            diagnostics = lexed.diagnostics.len(),
            "lexed file"
        );
        Ok(lexed)
    }

    /// Number of UNKNOWN tokens in the file.
    pub fn unknown_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .count()
    }

    /// Render every diagnostic of this file, in source order.
    pub fn render_diagnostics(&self) -> String {
        self.diagnostics
            .iter()
            .map(|diag| render_diagnostic(&self.source, diag))
            .collect()
    }
}

/// Check that every input path exists and is a regular file.
pub fn validate_input_files(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Err(JlextError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }

    for path in files {
        if !path.exists() {
            return Err(JlextError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(JlextError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_FILE,
                path.display()
            )));
        }
    }

    Ok(())
}

/// Tokenize `files` on a pool of `jobs` threads.
///
/// Results keep the order of `files`. Each file gets its own [`Handler`],
/// since a handler cannot be shared between threads.
pub fn lex_files(files: &[PathBuf], jobs: u32) -> Result<Vec<LexedFile>> {
    if jobs == 0 {
        return Err(JlextError::Validation(
            error_messages::ZERO_JOBS.to_string(),
        ));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs as usize)
        .build()
        .map_err(|e| JlextError::Config(format!("Failed to start worker pool: {}", e)))?;

    pool.install(|| files.par_iter().map(|path| LexedFile::read(path)).collect())
}

// ============================================================================
// Diagnostic Rendering
// ============================================================================

/// Render one diagnostic against its source file.
///
/// ```text
/// error[E1002]: unterminated string literal
///   --> Main.java:3:20
///   3 |         String s = "open;
///     |                    ^^^^^^
///   = help: literals cannot span lines; close the literal before the line ends
/// ```
pub fn render_diagnostic(file: &SourceFile, diag: &Diagnostic) -> String {
    let mut out = format!("{}\n", diag.header());
    out.push_str(&format!(
        "  --> {}:{}:{}\n",
        file.name(),
        diag.span.line,
        diag.span.column
    ));

    if let Some(snippet) = SourceSnippet::from_span(file, diag.span) {
        out.push_str(&snippet.to_string());
        out.push('\n');
    }

    for note in &diag.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for help in &diag.helps {
        out.push_str(&format!("  = help: {}\n", help));
    }
    out
}

// ============================================================================
// Error Messages
// ============================================================================

/// Error message prefixes shared by the commands.
pub mod error_messages {
    /// No input files were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Input path exists but is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Input file could not be read as UTF-8 text.
    pub const UNREADABLE_FILE: &str = "Cannot read input file";

    /// The job count was zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// UNKNOWN tokens were found and `--deny-unknown` was given.
    pub const UNKNOWN_TOKENS: &str = "unknown token(s) found";

    /// `check` found diagnostics.
    pub const DIAGNOSTICS_FOUND: &str = "diagnostic(s) reported";
}
