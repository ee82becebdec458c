//! Tokenize command implementation.
//!
//! Prints the token stream of each input file, as text or JSON, and
//! renders any diagnostics with source snippets on stderr.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use jlex_lex::Token;
use serde::Serialize;
use tracing::info;

use super::common::{error_messages, lex_files, validate_input_files, LexedFile, OutputFormat};
use super::traits::{Command, CommandResult};
use crate::error::{JlextError, Result};

/// Arguments for the tokenize command, with configuration already applied.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Java source files to tokenize
    pub files: Vec<PathBuf>,
    /// Enable verbose output
    pub verbose: bool,
    /// Listing format
    pub format: OutputFormat,
    /// Leave whitespace and comments out of the listing
    pub skip_trivia: bool,
    /// Number of files tokenized in parallel
    pub jobs: u32,
    /// Write the listing here instead of stdout
    pub output: Option<PathBuf>,
    /// Fail when any file contains an UNKNOWN token
    pub deny_unknown: bool,
}

impl Default for TokenizeArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            verbose: false,
            format: OutputFormat::Text,
            skip_trivia: false,
            jobs: 1,
            output: None,
            deny_unknown: false,
        }
    }
}

/// JSON shape of one file's listing.
#[derive(Serialize)]
struct FileTokens<'a> {
    file: &'a str,
    tokens: Vec<&'a Token>,
}

/// Tokenize command executor.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    /// Tokens of `file` that belong in the listing.
    fn listed_tokens<'a>(&self, file: &'a LexedFile) -> Vec<&'a Token> {
        file.tokens
            .iter()
            .filter(|t| !(self.args.skip_trivia && t.is_trivia()))
            .collect()
    }

    /// Render the listing of all files in the requested format.
    fn render(&self, files: &[LexedFile]) -> Result<String> {
        match self.args.format {
            OutputFormat::Text => Ok(self.render_text(files)),
            OutputFormat::Json => self.render_json(files),
        }
    }

    fn render_text(&self, files: &[LexedFile]) -> String {
        let mut out = String::new();
        for file in files {
            if files.len() > 1 {
                out.push_str(&format!("==> {} <==\n", file.source.name()));
            }
            for token in self.listed_tokens(file) {
                out.push_str(&format!("{}\n", token));
            }
        }
        out
    }

    fn render_json(&self, files: &[LexedFile]) -> Result<String> {
        let listing: Vec<FileTokens<'_>> = files
            .iter()
            .map(|file| FileTokens {
                file: file.source.name(),
                tokens: self.listed_tokens(file),
            })
            .collect();
        let mut json = serde_json::to_string_pretty(&listing)?;
        json.push('\n');
        Ok(json)
    }

    fn write_listing(&self, listing: &str) -> Result<()> {
        match &self.args.output {
            Some(path) => {
                std::fs::write(path, listing)?;
                if self.args.verbose {
                    eprintln!("Wrote token listing to {}", path.display());
                }
            },
            None => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                lock.write_all(listing.as_bytes())?;
                lock.flush()?;
            },
        }
        Ok(())
    }

    /// Tokenize, print, and summarize.
    pub fn run(&self) -> Result<CommandResult> {
        validate_input_files(&self.args.files)?;
        let start = Instant::now();

        let files = lex_files(&self.args.files, self.args.jobs)?;
        let listing = self.render(&files)?;
        self.write_listing(&listing)?;

        for file in &files {
            eprint!("{}", file.render_diagnostics());
        }

        let result = summarize(&files, start);
        info!(
            files = result.files_processed,
            unknown = result.unknown_tokens,
            elapsed_ms = result.execution_time_ms,
            "{} finished",
            Self::name()
        );

        if self.args.deny_unknown && result.unknown_tokens > 0 {
            return Err(JlextError::Lexical(format!(
                "{} {}",
                result.unknown_tokens,
                error_messages::UNKNOWN_TOKENS
            )));
        }
        Ok(result)
    }
}

/// Collect per-file counts into a [`CommandResult`].
pub(crate) fn summarize(files: &[LexedFile], start: Instant) -> CommandResult {
    CommandResult::default()
        .with_files_processed(files.len())
        .with_files_with_errors(files.iter().filter(|f| !f.diagnostics.is_empty()).count())
        .with_diagnostics(files.iter().map(|f| f.diagnostics.len()).sum())
        .with_unknown_tokens(files.iter().map(LexedFile::unknown_count).sum())
        .with_execution_time_ms(start.elapsed().as_millis().try_into().unwrap_or(u64::MAX))
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

/// Convenience function to run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    TokenizeCommand::new(args).execute().map(|_| ())
}
