//! Check command implementation.
//!
//! Tokenizes files without printing tokens. Diagnostics go to stderr and a
//! one-line summary to stdout; any diagnostic makes the command fail.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use super::common::{error_messages, lex_files, validate_input_files};
use super::tokenize::summarize;
use super::traits::{Command, CommandResult};
use crate::error::{JlextError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Java source files to check
    pub files: Vec<PathBuf>,
    /// Enable verbose output
    pub verbose: bool,
    /// Number of files tokenized in parallel
    pub jobs: u32,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            verbose: false,
            jobs: 1,
        }
    }
}

/// Check command executor.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Tokenize every file and report, without failing on diagnostics.
    pub fn run(&self) -> Result<CommandResult> {
        validate_input_files(&self.args.files)?;
        let start = Instant::now();

        let files = lex_files(&self.args.files, self.args.jobs)?;
        for file in &files {
            if self.args.verbose {
                eprintln!(
                    "{}: {} token(s), {} diagnostic(s)",
                    file.source.name(),
                    file.tokens.len(),
                    file.diagnostics.len()
                );
            }
            eprint!("{}", file.render_diagnostics());
        }

        let result = summarize(&files, start);
        println!("{}", result.summary());
        info!(
            files = result.files_processed,
            diagnostics = result.diagnostics,
            elapsed_ms = result.execution_time_ms,
            "{} finished",
            Self::name()
        );
        Ok(result)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let result = self.run()?;
        if !result.is_clean() {
            return Err(JlextError::Lexical(format!(
                "{} {}",
                result.diagnostics,
                error_messages::DIAGNOSTICS_FOUND
            )));
        }
        Ok(result)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Convenience function to run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    CheckCommand::new(args).execute().map(|_| ())
}
